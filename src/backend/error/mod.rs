//! Backend Error Module
//!
//! Error types for the backend server and their conversion to HTTP responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - AuthError and BackendError
//! └── conversion.rs - IntoResponse implementation
//! ```
//!
//! Every error renders as `{"error": "...", "status": <code>}`.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::{AuthError, BackendError};
