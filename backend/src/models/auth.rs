use serde::{Deserialize, Serialize};

use super::user::UserRole;

/// Claims embedded in the session token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub id: i64,
    pub email: String,
    pub name: String,
    pub role: UserRole,
    pub exp: usize,
    pub iat: usize,
}

/// Extracted from the validated token — available via Axum extractors
#[derive(Debug, Clone, PartialEq)]
pub struct AuthenticatedUser {
    pub user_id: i64,
    pub email: String,
    pub name: String,
    pub role: UserRole,
}

impl From<Claims> for AuthenticatedUser {
    fn from(c: Claims) -> Self {
        Self {
            user_id: c.id,
            email: c.email,
            name: c.name,
            role: c.role,
        }
    }
}
