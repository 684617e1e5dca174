/**
 * Server Initialization
 *
 * Builds the application state from configuration and wires it into the
 * router.
 *
 * # Initialization Process
 *
 * 1. Load identities (file or demo identity)
 * 2. Derive token keys from the signing secret
 * 3. Seed the todo store
 * 4. Create the router
 */

use axum::Router;

use crate::backend::routes::router::create_router;
use crate::backend::server::config::{load_identities, load_token_keys};
use crate::backend::server::state::AppState;
use crate::backend::todos::TodoStore;
use crate::shared::{AppConfig, ConfigError};

/// Create and configure the Axum application
///
/// # Errors
///
/// Fails if the identities file is configured but cannot be read or parsed.
pub fn create_app(config: &AppConfig) -> Result<Router<()>, ConfigError> {
    tracing::info!("Initializing todo-gate backend server");

    let app_state = create_state(config)?;
    let app = create_router(app_state);

    tracing::info!("Router configured");
    Ok(app)
}

/// Build the application state without a router
pub fn create_state(config: &AppConfig) -> Result<AppState, ConfigError> {
    let identities = load_identities(config)?;
    let tokens = load_token_keys(config);
    let todos = TodoStore::seeded();

    tracing::info!("Todo store seeded with {} items", todos.len());

    Ok(AppState::new(todos, identities, tokens))
}
