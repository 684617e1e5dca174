//! Todo Module
//!
//! The shared todo collection and the handlers that expose it.
//!
//! ```text
//! todos/
//! ├── mod.rs       - Module exports
//! ├── store.rs     - TodoStore: list/create/update/delete
//! └── handlers.rs  - Axum handlers for /api/todos
//! ```

/// In-memory todo collection
pub mod store;

/// HTTP handlers
pub mod handlers;

pub use store::{SharedTodoStore, TodoStore};
pub use handlers::{create_todo, delete_todo, list_todos, update_todo};
