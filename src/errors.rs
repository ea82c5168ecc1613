//! Unified application error type.
//! All modules (db, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use crate::core::validator::Rejections;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    /// A stored row could not be decoded (unknown activity/action ordinal,
    /// unreadable timestamp). Never a user error.
    #[error("Corrupt clock record: {0}")]
    CorruptRecord(String),

    // ---------------------------
    // Clock rules
    // ---------------------------
    #[error("{0}")]
    Rejected(#[from] Rejections),

    #[error("Position {position} is out of range (valid positions: 1..={count})")]
    IndexOutOfRange { position: usize, count: usize },

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration: {0}")]
    ConfigLoad(String),

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
