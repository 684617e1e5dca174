/**
 * API Route Handlers
 *
 * # Routes
 *
 * ## Authentication
 * - `POST /login` - exchange email and password for a token
 *
 * ## Todos (require `Authorization: Bearer <token>`)
 * - `GET /todos` - list
 * - `POST /todos` - create
 * - `PATCH /todos/{id}` - partial update
 * - `DELETE /todos/{id}` - delete
 *
 * The router built here is nested under `/api` by `create_router`.
 */

use axum::{
    middleware,
    routing::{get, patch, post},
    Router,
};
use crate::backend::auth::login;
use crate::backend::middleware::auth_middleware;
use crate::backend::server::state::AppState;
use crate::backend::todos::{create_todo, delete_todo, list_todos, update_todo};

/// Configure API routes
///
/// The auth middleware is attached with `route_layer`, so it only runs for
/// requests that matched a todo route; `/login` stays public.
pub fn configure_api_routes(app_state: &AppState) -> Router<AppState> {
    let todo_routes = Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route("/todos/{id}", patch(update_todo).delete(delete_todo))
        .route_layer(middleware::from_fn_with_state(
            app_state.clone(),
            auth_middleware,
        ));

    Router::new()
        .route("/login", post(login))
        .merge(todo_routes)
}
