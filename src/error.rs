// src/error.rs

//! Unified error handling for the bot.

use std::fmt;

use thiserror::Error;

/// Result type alias for bot operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Paper API returned a non-2xx status or an undecodable body
    #[error("Fetch error for {context}: {message}")]
    Fetch { context: String, message: String },

    /// Posted-record file exists but cannot be parsed. The run is refused
    /// rather than risking a duplicate announcement.
    #[error("Corrupt posted record at {path}: {message}")]
    CorruptRecord { path: String, message: String },

    /// The configured venue list is empty
    #[error("no venues to select from")]
    NoVenues,

    /// Every fetched paper is invalid or already posted. Not an operational
    /// failure; the orchestrator treats it as a clean no-op run.
    #[error("no candidates to select from")]
    NoCandidates,

    /// Notifier delivery failed; the posted record is left untouched
    #[error("Post error: {0}")]
    Post(String),

    /// The message went out but the posted record could not be saved.
    /// Reported distinctly so an operator can reconcile the ledger by hand.
    #[error("posted but record not saved: {0}")]
    RecordNotSaved(String),
}

impl AppError {
    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a fetch error with context.
    pub fn fetch(context: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::Fetch {
            context: context.into(),
            message: message.to_string(),
        }
    }

    /// Create a corrupt-record error.
    pub fn corrupt_record(path: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::CorruptRecord {
            path: path.into(),
            message: message.to_string(),
        }
    }

    /// Create a post error.
    pub fn post(message: impl fmt::Display) -> Self {
        Self::Post(message.to_string())
    }
}
