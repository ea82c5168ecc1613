pub mod action;
pub mod activity;
pub mod event;
pub mod summary;
