/**
 * Authentication Handler Types
 *
 * Request and response bodies for `POST /api/login`.
 */

use serde::{Deserialize, Serialize};

use crate::backend::auth::identities::Session;

/// Login request
///
/// Both fields are optional on the wire so a missing field is reported as a
/// validation error rather than a body rejection.
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// Login response
#[derive(Serialize, Deserialize, Debug)]
pub struct LoginResponse {
    pub message: String,
    /// Email, display name and access token
    pub data: Session,
}
