//! Error types for loading and saving authored events.
//!
//! Condition evaluation never fails. Only reading persisted records and
//! (de)serializing them can produce an [`EventError`].

use thiserror::Error;

pub type Result<T> = std::result::Result<T, EventError>;

#[derive(Error, Debug)]
pub enum EventError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("binary encoding error: {0}")]
    Binary(#[from] bincode::Error),

    #[error("normalized time {0} is outside [0, 1]")]
    InvalidTime(f32),

    #[error("unknown skill action code: {0}")]
    UnknownCategory(u8),
}
