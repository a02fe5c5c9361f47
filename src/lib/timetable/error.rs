//! Error types for fetching, validating and mutating timetable resources.

use thiserror::Error;

/// The request never produced an HTTP response (host unreachable, timeout, ...).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Network error: {0}")]
pub struct TransportError(pub String);

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        TransportError(err.to_string())
    }
}

/// Why a list could not be loaded.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Non-2xx status, message is the server detail or the status text
    #[error("{message}")]
    Status { status: u16, message: String },

    /// 2xx status, but the body is not a JSON array
    #[error("Malformed response: {0}")]
    Malformed(String),
}

/// A form field failed its rule before anything was sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{field}: {reason}")]
pub struct ValidationError {
    pub field: String,
    pub reason: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn missing(field: impl Into<String>) -> Self {
        Self::new(field, "this field is required")
    }
}

/// Why a create or delete did not go through.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MutationError {
    #[error("Invalid input, {0}")]
    Validation(#[from] ValidationError),

    #[error("Error: {0}")]
    Transport(#[from] TransportError),

    #[error("Error: {message}")]
    Rejected { status: u16, message: String },
}

impl MutationError {
    /// Validation failures never reached the network.
    pub fn is_client_side(&self) -> bool {
        matches!(self, MutationError::Validation(_))
    }
}
