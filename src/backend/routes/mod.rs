//! Route Configuration Module
//!
//! Configures all HTTP routes for the backend server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation
//! └── api_routes.rs   - /api endpoints
//! ```
//!
//! # Routes
//!
//! | Method | Path              | Auth   |
//! |--------|-------------------|--------|
//! | GET    | `/health`         | no     |
//! | POST   | `/api/login`      | no     |
//! | GET    | `/api/todos`      | Bearer |
//! | POST   | `/api/todos`      | Bearer |
//! | PATCH  | `/api/todos/{id}` | Bearer |
//! | DELETE | `/api/todos/{id}` | Bearer |

/// Main router creation
pub mod router;

/// API endpoint handlers
pub mod api_routes;

pub use router::create_router;
