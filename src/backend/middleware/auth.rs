/**
 * Authentication Middleware
 *
 * Guards the todo routes. The bearer token from the Authorization header is
 * verified before the request reaches any handler; on success the token
 * subject is attached to the request for handlers to read.
 *
 * Every valid-token holder sees the same collection. There is no
 * per-resource ownership check.
 */

use std::sync::Arc;

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::Response,
};
use crate::backend::auth::sessions::TokenKeys;
use crate::backend::error::{AuthError, BackendError};

/// Authenticated user data extracted from the JWT token
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthenticatedUser {
    /// Token subject (the identity's email)
    pub email: String,
}

/// Validate an `Authorization` header value and return the token subject
///
/// - no header → `MissingCredential`
/// - anything other than `Bearer <token>`, a bad signature, or an expired
///   token → `InvalidToken`
pub fn authorize(header: Option<&str>, keys: &TokenKeys) -> Result<AuthenticatedUser, AuthError> {
    let header = header.ok_or_else(|| {
        tracing::warn!("Missing Authorization header");
        AuthError::MissingCredential
    })?;

    let token = header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or_else(|| {
            tracing::warn!("Invalid Authorization header format");
            AuthError::InvalidToken
        })?;

    let claims = keys.verify(token)?;

    Ok(AuthenticatedUser { email: claims.sub })
}

/// Authentication middleware
///
/// Returns 401 Unauthorized if the token is missing or invalid; the wrapped
/// handler is not called in that case.
pub async fn auth_middleware(
    State(keys): State<Arc<TokenKeys>>,
    mut request: Request,
    next: Next,
) -> Result<Response, BackendError> {
    let header = match request.headers().get(AUTHORIZATION) {
        Some(value) => Some(value.to_str().map_err(|_| {
            tracing::warn!("Authorization header is not valid ASCII");
            AuthError::InvalidToken
        })?),
        None => None,
    };

    let user = authorize(header, &keys)?;

    request.extensions_mut().insert(user);

    Ok(next.run(request).await)
}

/// Axum extractor for the authenticated user
///
/// Only usable on routes behind `auth_middleware`.
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                AuthError::MissingCredential
            })?;

        Ok(AuthUser(user))
    }
}
