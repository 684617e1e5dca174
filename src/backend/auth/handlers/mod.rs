//! Authentication Handlers Module
//!
//! HTTP handlers for authentication endpoints.
//!
//! # Handlers
//!
//! - **`login`** - POST /api/login - check credentials, return a token

/// Request and response types
pub mod types;

/// Login handler
pub mod login;

// Re-export commonly used types
pub use types::{LoginRequest, LoginResponse};

// Re-export handlers
pub use login::login;
