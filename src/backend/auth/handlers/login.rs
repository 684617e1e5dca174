/**
 * Login Handler
 *
 * This module implements the authentication handler for POST /api/login.
 *
 * # Authentication Process
 *
 * 1. Reject the request if email or password is missing or empty
 * 2. Look up the identity by email
 * 3. Compare the password
 * 4. Sign a 24h token and return it with the identity's email and name
 *
 * # Status Codes
 *
 * - `201 Created` - login successful
 * - `400 Bad Request` - missing fields, malformed body, unknown email or wrong password
 */
use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
};

use crate::backend::auth::identities::IdentityStore;
use crate::backend::auth::sessions::TokenKeys;
use crate::backend::auth::handlers::types::{LoginRequest, LoginResponse};
use crate::backend::error::BackendError;
use crate::backend::extract::JsonBody;
use crate::shared::SharedError;

/// Login handler
///
/// # Example Request
///
/// ```http
/// POST /api/login HTTP/1.1
/// Content-Type: application/json
///
/// {
///   "email": "jane@example.com",
///   "password": "password123"
/// }
/// ```
///
/// # Example Response
///
/// ```json
/// {
///   "message": "login successful",
///   "data": {
///     "email": "jane@example.com",
///     "name": "Jane Doe",
///     "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9..."
///   }
/// }
/// ```
pub async fn login(
    State(identities): State<Arc<IdentityStore>>,
    State(keys): State<Arc<TokenKeys>>,
    JsonBody(request): JsonBody<LoginRequest>,
) -> Result<(StatusCode, Json<LoginResponse>), BackendError> {
    let (email, password) = match (request.email, request.password) {
        (Some(email), Some(password)) if !email.is_empty() && !password.is_empty() => {
            (email, password)
        }
        _ => {
            tracing::warn!("Login request with missing credentials");
            return Err(SharedError::validation("email", "Email and password are required").into());
        }
    };

    tracing::info!("Login request for: {}", email);

    let session = identities.authenticate(&email, &password, &keys)?;

    tracing::info!("User logged in successfully: {} ({})", session.name, session.email);

    Ok((
        StatusCode::CREATED,
        Json(LoginResponse {
            message: "login successful".to_string(),
            data: session,
        }),
    ))
}
