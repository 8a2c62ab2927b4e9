//! Shared error handling for the backend client.
//!
//! All remote failures collapse into a single generic failure per operation;
//! callers surface one notification and leave local state untouched. The
//! HTTP status is preserved in the message for the debug log only.

use std::fmt;

use crate::error::SlateError;

/// Error returned by the REST backend before conversion.
#[derive(Debug)]
pub struct ApiError {
    /// HTTP status code, if the server answered at all
    pub status: Option<reqwest::StatusCode>,
    /// Human-readable error message
    pub message: String,
}

impl ApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: None,
            message: message.into(),
        }
    }

    pub fn with_status(message: impl Into<String>, status: reqwest::StatusCode) -> Self {
        Self {
            status: Some(status),
            message: message.into(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            Some(status) => write!(f, "{} ({})", self.message, status),
            None => write!(f, "{}", self.message),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        Self {
            status: err.status(),
            message: err.to_string(),
        }
    }
}

impl From<ApiError> for SlateError {
    fn from(err: ApiError) -> Self {
        SlateError::Api(err.to_string())
    }
}
