//! Shared Module
//!
//! Types that are shared between the server and clients of the todo API.
//! Everything here is plain data and serializes to the JSON the HTTP
//! surface speaks.

/// Todo item and request payloads
pub mod todo;

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use todo::{NewTodo, TodoItem, TodoPatch};
pub use error::SharedError;
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
