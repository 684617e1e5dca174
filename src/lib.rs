//! todo-gate - Main Library
//!
//! todo-gate is a small task-tracking service: a token-gated HTTP API over a
//! single in-memory todo collection.
//!
//! # Overview
//!
//! - Credential verification against a seeded identity store
//! - Stateless 24h JWT access tokens
//! - Bearer-token gate in front of every todo operation
//! - Race-free list/create/update/delete over one shared collection
//!
//! # Module Structure
//!
//! - **`shared`** - Types shared by the server and any client
//!   - `TodoItem`, create/patch payloads
//!   - Application configuration
//!   - Validation errors
//!
//! - **`backend`** - Server-side code (only compiled with `ssr` feature)
//!   - Axum router, handlers and middleware
//!   - Identity store, token issuing and verification
//!   - The todo store
//!
//! # Feature Flags
//!
//! - **`ssr`** (default) - Enables the backend modules and the server binary
//!
//! # Usage
//!
//! ```rust,no_run
//! use todo_gate::backend::server::init::create_app;
//! use todo_gate::shared::AppConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::from_env()?;
//! let app = create_app(&config)?;
//! let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Thread Safety
//!
//! The todo collection is owned by a single `TodoStore` behind
//! `Arc<RwLock<>>`; every mutation runs inside one write guard.

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
#[cfg(feature = "ssr")]
pub mod backend;
