/**
 * Application State Management
 *
 * `AppState` is the central state container handed to the router. The
 * `FromRef` implementations let handlers and middleware extract only the
 * part they need.
 *
 * # Thread Safety
 *
 * - `Arc<RwLock<TodoStore>>`: readers share, each mutation holds the single
 *   write guard for its full find-and-write
 * - `Arc<IdentityStore>` and `Arc<TokenKeys>` are immutable after startup
 *
 * # Example
 *
 * ```rust
 * use axum::extract::State;
 * use todo_gate::backend::todos::SharedTodoStore;
 *
 * async fn handler(State(store): State<SharedTodoStore>) -> usize {
 *     store.read().await.len()
 * }
 * ```
 */

use axum::extract::FromRef;
use std::sync::Arc;

use crate::backend::auth::{IdentityStore, TokenKeys};
use crate::backend::todos::{SharedTodoStore, TodoStore};

/// Application state shared by every request handler
#[derive(Clone)]
pub struct AppState {
    /// The process-wide todo collection
    pub todos: SharedTodoStore,

    /// Identities allowed to log in
    pub identities: Arc<IdentityStore>,

    /// Token signing and verification keys
    pub tokens: Arc<TokenKeys>,
}

impl AppState {
    pub fn new(todos: TodoStore, identities: IdentityStore, tokens: TokenKeys) -> Self {
        Self {
            todos: todos.into_shared(),
            identities: Arc::new(identities),
            tokens: Arc::new(tokens),
        }
    }
}

impl FromRef<AppState> for SharedTodoStore {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.todos.clone()
    }
}

impl FromRef<AppState> for Arc<IdentityStore> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.identities.clone()
    }
}

impl FromRef<AppState> for Arc<TokenKeys> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.tokens.clone()
    }
}
