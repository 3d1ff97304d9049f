//! Unified application error type.
//! All modules (db, core, cli) return AppError to keep error handling
//! consistent; every variant is recoverable and terminates only the
//! requested operation, never the process.

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

    // ---------------------------
    // Ledger errors
    // ---------------------------
    #[error("{0} is already clocked in")]
    AlreadyOpen(String),

    #[error("You are not clocked in")]
    NotOpen,

    #[error("Could not find user '{0}' in the ledger")]
    UserNotFound(String),

    #[error("Invalid hour value '{0}'. Enter a number like +2.5 or -1.0")]
    InvalidAdjustment(String),

    #[error("Stored record has an unreadable timestamp: {0}")]
    MalformedRecord(String),

    // ---------------------------
    // Permission errors
    // ---------------------------
    #[error("You don't have permission to use '{0}'")]
    PermissionDenied(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
