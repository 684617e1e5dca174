//! Authentication test helpers
//!
//! Log in through the HTTP API, or mint tokens directly for cases the API
//! cannot produce (expired, signed with another secret).

use axum_test::TestServer;
use chrono::{Duration, Utc};
use todo_gate::backend::auth::TokenKeys;

use super::TEST_SECRET;

pub const DEMO_EMAIL: &str = "jane@example.com";
pub const DEMO_PASSWORD: &str = "password123";

/// Log in as the demo identity and return the token
pub async fn login_token(server: &TestServer) -> String {
    let response = server
        .post("/api/login")
        .json(&serde_json::json!({
            "email": DEMO_EMAIL,
            "password": DEMO_PASSWORD
        }))
        .await;

    let body: serde_json::Value = response.json();
    body["data"]["token"]
        .as_str()
        .expect("login response carries a token")
        .to_string()
}

/// Token that expired a minute ago
pub fn expired_token() -> String {
    TokenKeys::new(TEST_SECRET)
        .issue_at(DEMO_EMAIL, Utc::now() - Duration::hours(24) - Duration::minutes(1))
        .expect("Failed to generate test token")
}

/// Well-formed token signed with a secret the server does not know
pub fn foreign_token() -> String {
    TokenKeys::new("not-the-server-secret")
        .issue(DEMO_EMAIL)
        .expect("Failed to generate test token")
}

/// Create authorization header value
pub fn auth_header(token: &str) -> String {
    format!("Bearer {}", token)
}
