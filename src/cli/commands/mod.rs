pub mod clock;
pub mod config;
pub mod display;
pub mod export;
pub mod init;
pub mod log;
pub mod remove;
