use serde::{Deserialize, Serialize};

/// JWT claims carried by a session token
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionClaims {
    pub session_id: String,
    pub display_name: String,
    pub exp: usize, // Expiration timestamp (standard JWT claim)
    pub iat: usize, // Issued at timestamp (standard JWT claim)
}

/// Credentials posted to the login endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub name: String,
    pub password: String,
}

/// Response for a successful login
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct SessionResponse {
    pub session_id: String, // The JWT token
    pub display_name: String,
}
