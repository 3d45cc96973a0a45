pub mod guard;
pub mod session;

pub use guard::{
    check_access, is_authorized, required_roles_for_path, AccessDecision, Principal, LOGIN_ROUTE,
    UNAUTHORIZED_ROUTE,
};
pub use session::{MemoryStorage, Session, SessionStorage};

use serde::{Deserialize, Serialize};

use crate::system::roles::Role;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub user: UserInfo,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: String,
    pub username: String,
    pub full_name: Option<String>,
    pub role: Role,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String, // user_id
    pub username: String,
    pub role: Role,
    pub exp: usize, // expiration timestamp
    pub iat: usize, // issued at
}

impl TokenClaims {
    /// A verified token is an authenticated principal.
    pub fn principal(&self) -> Principal {
        Principal::authenticated(self.role)
    }
}
