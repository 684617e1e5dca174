/**
 * Backend Error Types
 *
 * This module defines error types specific to the backend server.
 * These errors are used in HTTP handlers and can be converted to HTTP responses.
 *
 * # Error Categories
 *
 * - `ValidationError` (via `SharedError`) - missing login fields, 400
 * - `AuthError::IdentityNotFound` / `SecretMismatch` - bad credentials, 400
 * - `AuthError::MissingCredential` / `InvalidToken` - token gate, 401
 * - `HandlerError` - anything else a handler wants to report with a status
 *
 * An update against an unknown todo id is not an error: the store returns
 * `None` and the handler serializes it as `null`.
 */

use thiserror::Error;
use axum::http::StatusCode;
use crate::shared::SharedError;

/// Authentication and authorization failures
#[derive(Debug, Error)]
pub enum AuthError {
    /// No identity has the supplied email
    #[error("No user found!")]
    IdentityNotFound,

    /// The identity exists but the secret differs
    #[error("Invalid password")]
    SecretMismatch,

    /// No `Authorization` header on a protected request
    #[error("Authorization header is required")]
    MissingCredential,

    /// Bad signature, malformed value, wrong scheme or expired
    #[error("Invalid token")]
    InvalidToken,

    /// Signing a freshly issued token failed
    #[error("Failed to create token: {0}")]
    TokenCreation(#[from] jsonwebtoken::errors::Error),
}

impl AuthError {
    /// Get the HTTP status code for this error
    ///
    /// Login failures are 400 so the client can tell them apart from an
    /// expired session, which is 401.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::IdentityNotFound | Self::SecretMismatch => StatusCode::BAD_REQUEST,
            Self::MissingCredential | Self::InvalidToken => StatusCode::UNAUTHORIZED,
            Self::TokenCreation(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Backend-specific error types
///
/// This enum represents all possible errors that can occur in the backend.
/// Each variant can be converted to an HTTP response.
///
/// # Usage
///
/// ```rust
/// use todo_gate::backend::error::BackendError;
/// use axum::http::StatusCode;
///
/// let err = BackendError::handler(StatusCode::NOT_FOUND, "Not Found");
/// assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Handler error with an explicit status
    #[error("Handler error: {message}")]
    HandlerError {
        /// HTTP status code for this error
        status: StatusCode,
        /// Human-readable error message
        message: String,
    },

    /// Credential or token failure
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Request payload failed validation
    #[error(transparent)]
    SharedError(#[from] SharedError),
}

impl BackendError {
    /// Create a new handler error with a status code
    pub fn handler(status: StatusCode, message: impl Into<String>) -> Self {
        Self::HandlerError {
            status,
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `HandlerError` - Uses the status code from the error
    /// - `Auth` - See [`AuthError::status_code`]
    /// - `SharedError` - 400 Bad Request
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::HandlerError { status, .. } => *status,
            Self::Auth(err) => err.status_code(),
            Self::SharedError(SharedError::ValidationError { .. }) => StatusCode::BAD_REQUEST,
        }
    }

    /// Get the error message
    ///
    /// # Returns
    ///
    /// A human-readable error message
    pub fn message(&self) -> String {
        match self {
            Self::HandlerError { message, .. } => message.clone(),
            Self::Auth(err) => err.to_string(),
            Self::SharedError(err) => err.client_message().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handler_error() {
        let error = BackendError::handler(StatusCode::BAD_REQUEST, "Invalid request");
        match error {
            BackendError::HandlerError { status, message } => {
                assert_eq!(status, StatusCode::BAD_REQUEST);
                assert_eq!(message, "Invalid request");
            }
            _ => panic!("Expected HandlerError"),
        }
    }

    #[test]
    fn test_login_failures_are_bad_request() {
        let not_found: BackendError = AuthError::IdentityNotFound.into();
        assert_eq!(not_found.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(not_found.message(), "No user found!");

        let mismatch: BackendError = AuthError::SecretMismatch.into();
        assert_eq!(mismatch.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(mismatch.message(), "Invalid password");
    }

    #[test]
    fn test_gate_failures_are_unauthorized() {
        let missing: BackendError = AuthError::MissingCredential.into();
        assert_eq!(missing.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(missing.message(), "Authorization header is required");

        let invalid: BackendError = AuthError::InvalidToken.into();
        assert_eq!(invalid.status_code(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_from_shared_error() {
        let shared_error = SharedError::validation("email", "Email and password are required");
        let backend_error: BackendError = shared_error.into();

        assert_eq!(backend_error.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(backend_error.message(), "Email and password are required");
    }
}
