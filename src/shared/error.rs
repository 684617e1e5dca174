//! Shared Error Types
//!
//! Errors that can be raised while interpreting request payloads, before any
//! server state is touched.
//!
//! # Usage
//!
//! ```rust
//! use todo_gate::shared::error::SharedError;
//!
//! let error = SharedError::validation("email", "Email and password are required");
//! ```
use thiserror::Error;

/// Shared error types
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// A required request field is missing or empty
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// The message meant for API clients, without the field prefix
    pub fn client_message(&self) -> &str {
        match self {
            Self::ValidationError { message, .. } => message,
        }
    }
}
