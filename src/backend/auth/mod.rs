//! Authentication Module
//!
//! Credential verification and access-token management.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── identities.rs   - Seeded identity store and credential check
//! ├── sessions.rs     - JWT token issuing and verification
//! └── handlers/       - HTTP handlers
//!     ├── mod.rs      - Handler exports
//!     ├── types.rs    - Request/response types
//!     └── login.rs    - Login handler
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Login**: client posts email and password → identity found and secret
//!    matches → 24h token returned
//! 2. **Protected call**: client sends `Authorization: Bearer <token>` → the
//!    auth middleware verifies it (see `backend::middleware::auth`)
//!
//! # Security
//!
//! - Tokens are stateless HS256 JWTs signed with `JWT_SECRET_KEY`
//! - Secrets are compared in plain text; there is no hashing
//! - A warning is logged at startup when the placeholder signing secret is used

/// Seeded identities and credential verification
pub mod identities;

/// JWT token management
pub mod sessions;

/// HTTP handlers
pub mod handlers;

// Re-export commonly used types and functions
pub use identities::{Identity, IdentityStore, Session};
pub use sessions::{Claims, TokenKeys, TOKEN_TTL_HOURS};
pub use handlers::login;
