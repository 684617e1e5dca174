//! Middleware Module
//!
//! Request processing that runs before handlers.
//!
//! - **`auth`** - Bearer-token gate for the todo routes
//!
//! # Example
//!
//! ```rust,no_run
//! use axum::{middleware, Router};
//! use todo_gate::backend::middleware::auth_middleware;
//! use todo_gate::backend::server::AppState;
//!
//! # fn example(app_state: AppState, protected: Router<AppState>) -> Router<AppState> {
//! protected.route_layer(middleware::from_fn_with_state(app_state, auth_middleware))
//! # }
//! ```

pub mod auth;

pub use auth::{authorize, auth_middleware, AuthUser, AuthenticatedUser};
