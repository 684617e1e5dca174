//! Todo HTTP Handlers
//!
//! Thin wrappers around [`TodoStore`](super::store::TodoStore). Every route
//! here sits behind `auth_middleware`; the `AuthUser` extractor is only used
//! for logging who made the change.
//!
//! - `GET /api/todos` - 200, full collection
//! - `POST /api/todos` - 201, the created item (an empty body takes the defaults)
//! - `PATCH /api/todos/{id}` - 200, full collection, or `null` for an unknown id
//! - `DELETE /api/todos/{id}` - 200, full collection

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};

use crate::backend::extract::JsonBody;
use crate::backend::middleware::AuthUser;
use crate::backend::todos::store::SharedTodoStore;
use crate::shared::{NewTodo, TodoItem, TodoPatch};

pub async fn list_todos(State(store): State<SharedTodoStore>) -> Json<Vec<TodoItem>> {
    let store = store.read().await;
    Json(store.list().to_vec())
}

pub async fn create_todo(
    State(store): State<SharedTodoStore>,
    AuthUser(user): AuthUser,
    JsonBody(new): JsonBody<NewTodo>,
) -> (StatusCode, Json<TodoItem>) {
    let item = store.write().await.create(new);
    tracing::info!("{} created todo {}", user.email, item.id);

    (StatusCode::CREATED, Json(item))
}

pub async fn update_todo(
    State(store): State<SharedTodoStore>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
    JsonBody(patch): JsonBody<TodoPatch>,
) -> Json<Option<Vec<TodoItem>>> {
    let mut store = store.write().await;
    let items = store.update(&id, patch).map(<[TodoItem]>::to_vec);

    if items.is_none() {
        tracing::info!("{} tried to update unknown todo {}", user.email, id);
    }

    Json(items)
}

pub async fn delete_todo(
    State(store): State<SharedTodoStore>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
) -> Json<Vec<TodoItem>> {
    let mut store = store.write().await;
    let items = store.delete(&id).to_vec();
    tracing::info!("{} deleted todo {}", user.email, id);

    Json(items)
}
