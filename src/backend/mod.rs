//! Backend Module
//!
//! All server-side code for todo-gate: an Axum HTTP server with token-gated
//! todo routes. Only compiled when the `ssr` feature is enabled.
//!
//! # Architecture
//!
//! - **`server`** - Server initialization, application state, configuration
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Identity store, JWT tokens, login handler
//! - **`extract`** - JSON body extractor with defaults and JSON errors
//! - **`middleware`** - Bearer-token gate
//! - **`todos`** - The todo store and its handlers
//! - **`error`** - Backend error types and HTTP conversion
//!
//! # Request Flow
//!
//! ```text
//! POST /api/login ──► IdentityStore::authenticate ──► token
//! /api/todos/*    ──► auth_middleware ──► TodoStore (write guard) ──► JSON
//! ```
//!
//! # State Management
//!
//! `AppState` holds the shared todo store (`Arc<RwLock<TodoStore>>`), the
//! identity store and the token keys. The last two are read-only after
//! startup.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Backend error types
pub mod error;

/// Authentication and token management
pub mod auth;

/// Request body extraction
pub mod extract;

/// Middleware for request processing
pub mod middleware;

/// Todo collection and handlers
pub mod todos;

/// Re-export commonly used types
pub use server::{create_app, AppState};
pub use error::{AuthError, BackendError};
pub use todos::TodoStore;
