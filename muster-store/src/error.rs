//! Error types for store operations.

use thiserror::Error;

use crate::document::DecodeError;

/// Errors that can occur talking to the document store.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Store returned {status} for {url}")]
    Status { status: u16, url: String },

    #[error("Event not found: {0}")]
    EventNotFound(String),

    #[error("Record not found: {0}")]
    RecordNotFound(String),

    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),
}

/// Result type alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
