// Public API - what other modules can use
pub use handlers::{login, validate_session};
pub use middleware::jwt_auth;
pub use service::SessionService;
pub use types::{LoginRequest, SessionClaims, SessionResponse};

// Internal modules
mod handlers;
mod middleware;
pub mod models;
pub mod repository;
pub mod service;
pub mod token;
mod types;
