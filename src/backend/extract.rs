/**
 * Request Body Extraction
 *
 * `JsonBody<T>` replaces `axum::Json` for request bodies:
 *
 * - an empty (or whitespace-only) body yields `T::default()`, whatever the
 *   Content-Type, so `POST /api/todos` with no body creates an "Untitled" item
 * - a body that is not valid JSON for `T` is a 400 validation error rendered
 *   in the usual `{"error", "status"}` format
 */

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

use crate::backend::error::BackendError;
use crate::shared::SharedError;

/// JSON request body with a default for an empty body
#[derive(Debug, Clone, Default)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request(request: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(request, state).await.map_err(|rejection| {
            tracing::warn!("Failed to read request body: {}", rejection.body_text());
            BackendError::handler(rejection.status(), rejection.body_text())
        })?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(JsonBody(T::default()));
        }

        serde_json::from_slice(&bytes).map(JsonBody).map_err(|e| {
            tracing::warn!("Rejected request body: {}", e);
            BackendError::from(SharedError::validation("body", format!("Invalid JSON body: {}", e)))
        })
    }
}
