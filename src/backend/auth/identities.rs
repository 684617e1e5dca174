/**
 * Identity Store
 *
 * The fixed set of identities allowed to log in. Identities are seeded once at
 * startup, either from a TOML file or from the built-in demo identity, and
 * never change while the process runs.
 *
 * Secrets are compared with plain string equality. They are not hashed.
 */

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::backend::auth::sessions::TokenKeys;
use crate::backend::error::AuthError;
use crate::shared::ConfigError;

/// A registered user credential record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Identity {
    pub email: String,
    pub name: String,
    pub secret: String,
}

impl Identity {
    pub fn new(email: impl Into<String>, name: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: name.into(),
            secret: secret.into(),
        }
    }
}

/// Result of a successful login
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Session {
    pub email: String,
    pub name: String,
    pub token: String,
}

#[derive(Deserialize)]
struct IdentitiesFile {
    #[serde(default)]
    identity: Vec<Identity>,
}

/// Known identities keyed by email
#[derive(Debug, Clone)]
pub struct IdentityStore {
    identities: Vec<Identity>,
}

impl IdentityStore {
    /// Build a store, rejecting empty fields and duplicate emails
    pub fn new(identities: Vec<Identity>) -> Result<Self, ConfigError> {
        {
            let mut seen = HashSet::new();
            for identity in &identities {
                if identity.email.is_empty() {
                    return Err(ConfigError::EmptyIdentityField { field: "email" });
                }
                if identity.secret.is_empty() {
                    return Err(ConfigError::EmptyIdentityField { field: "secret" });
                }
                if !seen.insert(identity.email.as_str()) {
                    return Err(ConfigError::DuplicateIdentity(identity.email.clone()));
                }
            }
        }
        Ok(Self { identities })
    }

    /// The single identity seeded when no identities file is configured
    pub fn demo() -> Self {
        Self {
            identities: vec![Identity::new("jane@example.com", "Jane Doe", "password123")],
        }
    }

    /// Parse `[[identity]]` tables from TOML text
    ///
    /// ```toml
    /// [[identity]]
    /// email = "jane@example.com"
    /// name = "Jane Doe"
    /// secret = "password123"
    /// ```
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let file: IdentitiesFile = toml::from_str(source)?;
        Self::new(file.identity)
    }

    /// Load identities from a TOML file on disk
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    pub fn len(&self) -> usize {
        self.identities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.identities.is_empty()
    }

    /// Exact-match lookup by email
    pub fn find(&self, email: &str) -> Option<&Identity> {
        self.identities.iter().find(|identity| identity.email == email)
    }

    /// Check an email/secret pair and issue an access token on success
    pub fn authenticate(
        &self,
        email: &str,
        secret: &str,
        keys: &TokenKeys,
    ) -> Result<Session, AuthError> {
        let identity = self.find(email).ok_or_else(|| {
            tracing::warn!("User not found: {}", email);
            AuthError::IdentityNotFound
        })?;

        if identity.secret != secret {
            tracing::warn!("Invalid password for user: {}", email);
            return Err(AuthError::SecretMismatch);
        }

        let token = keys.issue(&identity.email)?;

        Ok(Session {
            email: identity.email.clone(),
            name: identity.name.clone(),
            token,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::io::Write;

    fn keys() -> TokenKeys {
        TokenKeys::new("test-secret")
    }

    #[test]
    fn test_authenticate_success() {
        let store = IdentityStore::demo();
        let keys = keys();

        let session = store.authenticate("jane@example.com", "password123", &keys).unwrap();
        assert_eq!(session.email, "jane@example.com");
        assert_eq!(session.name, "Jane Doe");

        let claims = keys.verify(&session.token).unwrap();
        assert_eq!(claims.sub, "jane@example.com");
        assert_eq!(claims.exp - claims.iat, 24 * 60 * 60);
    }

    #[test]
    fn test_authenticate_unknown_email() {
        let result = IdentityStore::demo().authenticate("nobody@example.com", "password123", &keys());
        assert_matches!(result, Err(AuthError::IdentityNotFound));
    }

    #[test]
    fn test_authenticate_wrong_secret() {
        let result = IdentityStore::demo().authenticate("jane@example.com", "wrong", &keys());
        assert_matches!(result, Err(AuthError::SecretMismatch));
    }

    #[test]
    fn test_email_match_is_exact() {
        let result = IdentityStore::demo().authenticate("JANE@example.com", "password123", &keys());
        assert_matches!(result, Err(AuthError::IdentityNotFound));
    }

    #[test]
    fn test_from_toml_str() {
        let store = IdentityStore::from_toml_str(
            r#"
            [[identity]]
            email = "a@example.com"
            name = "A"
            secret = "one"

            [[identity]]
            email = "b@example.com"
            name = "B"
            secret = "two"
            "#,
        )
        .unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(store.find("b@example.com").map(|i| i.name.as_str()), Some("B"));
    }

    #[test]
    fn test_duplicate_email_rejected() {
        let result = IdentityStore::new(vec![
            Identity::new("a@example.com", "A", "one"),
            Identity::new("a@example.com", "A again", "two"),
        ]);
        assert_matches!(result, Err(ConfigError::DuplicateIdentity(email)) if email == "a@example.com");
    }

    #[test]
    fn test_empty_secret_rejected() {
        let result = IdentityStore::new(vec![Identity::new("a@example.com", "A", "")]);
        assert_matches!(result, Err(ConfigError::EmptyIdentityField { field: "secret" }));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[[identity]]\nemail = \"file@example.com\"\nname = \"File\"\nsecret = \"s\""
        )
        .unwrap();

        let store = IdentityStore::load(file.path()).unwrap();
        assert!(store.find("file@example.com").is_some());
    }

    #[test]
    fn test_load_missing_file() {
        let result = IdentityStore::load(Path::new("/nonexistent/identities.toml"));
        assert_matches!(result, Err(ConfigError::Io { .. }));
    }
}
