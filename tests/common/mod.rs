//! Common test utilities and helpers
//!
//! - Test server construction over the real router
//! - Authentication helpers (login, foreign/expired tokens)
//! - Custom assertion macros

#![allow(dead_code)]

#[macro_use]
pub mod assertions;
pub mod auth_helpers;

pub use auth_helpers::*;

use axum_test::TestServer;
use todo_gate::backend::auth::{IdentityStore, TokenKeys};
use todo_gate::backend::routes::create_router;
use todo_gate::backend::server::AppState;
use todo_gate::backend::todos::TodoStore;

/// Secret used by every test server
pub const TEST_SECRET: &str = "integration-test-secret";

/// Server over the seeded store and the demo identity
pub fn test_server() -> TestServer {
    test_server_with_store(TodoStore::seeded())
}

pub fn test_server_with_store(store: TodoStore) -> TestServer {
    let state = AppState::new(store, IdentityStore::demo(), TokenKeys::new(TEST_SECRET));
    TestServer::new(create_router(state)).expect("Failed to start test server")
}
