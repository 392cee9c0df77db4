//! Client Error Types
//!
//! This module defines the error taxonomy shared by the transport client,
//! the session module and the application workflows.
//!
//! # Error Categories
//!
//! - `Transport` - network failure, HTTP failure or a malformed response
//! - `Timeout` - the fallback transport gave up waiting for the frame
//! - `Remote` - the endpoint answered `success: false`
//! - `Serialization` - a request could not be encoded
//! - `Validation` - a form or credential failed local constraints
//! - `Storage` - session storage could not be read or written
//!
//! # Usage
//!
//! ```rust
//! use receipt_manager::shared::error::ClientError;
//!
//! let error = ClientError::remote("Supplier already exists");
//! assert_eq!(error.to_string(), "Supplier already exists");
//! ```
//!
//! # Thread Safety
//!
//! All error types are `Send + Sync + Clone` so results can cross the
//! worker channel back to the UI thread.
use thiserror::Error;

/// Errors surfaced by client operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// Network error, non-success HTTP status or unreadable response
    #[error("Network error: {message}")]
    Transport {
        /// Human-readable error message
        message: String,
    },

    /// Fallback request exceeded its ceiling
    #[error("Request timeout")]
    Timeout,

    /// Rejection reported by the remote endpoint, shown verbatim
    #[error("{message}")]
    Remote {
        /// Server-supplied message
        message: String,
    },

    /// JSON serialization error
    #[error("Serialization error: {message}")]
    Serialization {
        /// Human-readable error message
        message: String,
    },

    /// Local validation error
    #[error("Validation error in field '{field}': {message}")]
    Validation {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },

    /// Session storage error
    #[error("Storage error: {message}")]
    Storage {
        /// Human-readable error message
        message: String,
    },
}

impl ClientError {
    /// Create a new transport error
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Create a new remote rejection
    pub fn remote(message: impl Into<String>) -> Self {
        Self::Remote {
            message: message.into(),
        }
    }

    /// Create a new serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a new storage error
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    /// True for failures that never reached a server decision
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. } | Self::Timeout)
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(format!("JSON error: {}", err))
    }
}
