//! Error handling module for the scant CLI.
//!
//! This module provides custom error types using `thiserror` for structured
//! error handling throughout the application.

use scanc_lex::LexError;
use thiserror::Error;

/// Main error type for the scant CLI application.
#[derive(Error, Debug)]
pub enum ScantError {
    /// Error when the configuration cannot be found or parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when an input file cannot be read.
    #[error("File operation failed: {0}")]
    FileOperation(String),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The scanner stopped on a fatal error.
    ///
    /// The diagnostic has already been printed by the time this reaches
    /// `main`.
    #[error("{0}")]
    Lex(#[from] LexError),
}

/// Result type alias using ScantError.
pub type Result<T> = std::result::Result<T, ScantError>;
