//! Application configuration module
//!
//! `AppConfig` is read from the process environment (after `.env` has been
//! loaded by the binary) or assembled with `AppConfigBuilder` in tests.
//!
//! | Variable          | Field             | Default          |
//! |-------------------|-------------------|------------------|
//! | `PORT`            | `port`            | `3000`           |
//! | `APP_ENV`         | `environment`     | `development`    |
//! | `JWT_SECRET_KEY`  | `jwt_secret`      | `JWT_SECRET_KEY` |
//! | `IDENTITIES_FILE` | `identities_file` | none             |

use std::path::PathBuf;
use thiserror::Error;

/// Placeholder signing secret used when `JWT_SECRET_KEY` is unset.
///
/// Tokens signed with it can be forged by anyone who reads this file.
pub const DEFAULT_JWT_SECRET: &str = "JWT_SECRET_KEY";

pub const DEFAULT_PORT: u16 = 3000;

pub const DEFAULT_ENVIRONMENT: &str = "development";

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// TCP port the server binds on all interfaces
    pub port: u16,
    /// Deployment environment name, informational only
    pub environment: String,
    /// Process-wide HMAC secret for access tokens
    pub jwt_secret: String,
    /// Optional TOML file with `[[identity]]` entries
    pub identities_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            environment: DEFAULT_ENVIRONMENT.to_string(),
            jwt_secret: DEFAULT_JWT_SECRET.to_string(),
            identities_file: None,
        }
    }
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Read configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut builder = Self::builder();

        if let Ok(port) = std::env::var("PORT") {
            let port = port
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(port.clone()))?;
            builder = builder.port(port);
        }
        if let Ok(environment) = std::env::var("APP_ENV") {
            builder = builder.environment(environment);
        }
        if let Ok(secret) = std::env::var("JWT_SECRET_KEY") {
            builder = builder.jwt_secret(secret);
        }
        if let Ok(path) = std::env::var("IDENTITIES_FILE") {
            builder = builder.identities_file(path);
        }

        builder.build()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.jwt_secret.is_empty() {
            return Err(ConfigError::MissingValue("JWT_SECRET_KEY"));
        }
        Ok(())
    }

    /// True when tokens are signed with the built-in placeholder secret
    pub fn uses_default_secret(&self) -> bool {
        self.jwt_secret == DEFAULT_JWT_SECRET
    }
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    port: Option<u16>,
    environment: Option<String>,
    jwt_secret: Option<String>,
    identities_file: Option<PathBuf>,
}

impl AppConfigBuilder {
    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    pub fn environment(mut self, environment: impl Into<String>) -> Self {
        self.environment = Some(environment.into());
        self
    }

    pub fn jwt_secret(mut self, secret: impl Into<String>) -> Self {
        self.jwt_secret = Some(secret.into());
        self
    }

    pub fn identities_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.identities_file = Some(path.into());
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let defaults = AppConfig::default();
        let config = AppConfig {
            port: self.port.unwrap_or(defaults.port),
            environment: self.environment.unwrap_or(defaults.environment),
            jwt_secret: self.jwt_secret.unwrap_or(defaults.jwt_secret),
            identities_file: self.identities_file,
        };
        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid port: {0}")]
    InvalidPort(String),
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid identities file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("identity field '{field}' is empty")]
    EmptyIdentityField { field: &'static str },
    #[error("duplicate identity: {0}")]
    DuplicateIdentity(String),
}
