/**
 * Server Configuration
 *
 * Loads `AppConfig` from the environment and turns it into the pieces the
 * server needs at startup: the identity store and the token keys.
 *
 * Unlike optional services, configuration problems here are fatal: a server
 * that cannot read its identities file should not start.
 */

use crate::backend::auth::{IdentityStore, TokenKeys};
use crate::shared::{AppConfig, ConfigError};

/// Read the process environment
///
/// `.env` is loaded by the binary before tracing starts, so it is already
/// merged into the environment here.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let config = AppConfig::from_env()?;
    tracing::info!(
        "Configuration loaded (environment: {}, port: {})",
        config.environment,
        config.port
    );
    Ok(config)
}

/// Identities from `identities_file`, or the demo identity when unset
pub fn load_identities(config: &AppConfig) -> Result<IdentityStore, ConfigError> {
    match &config.identities_file {
        Some(path) => {
            let store = IdentityStore::load(path)?;
            tracing::info!("Loaded {} identities from {}", store.len(), path.display());
            Ok(store)
        }
        None => {
            tracing::warn!("IDENTITIES_FILE not set. Seeding the demo identity.");
            Ok(IdentityStore::demo())
        }
    }
}

/// Token keys for the configured secret
///
/// Logs a warning when the placeholder secret is in use.
pub fn load_token_keys(config: &AppConfig) -> TokenKeys {
    if config.uses_default_secret() {
        tracing::warn!(
            "JWT_SECRET_KEY not set. Signing tokens with the insecure placeholder secret."
        );
    }
    TokenKeys::new(&config.jwt_secret)
}
