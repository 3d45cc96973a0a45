pub mod jwt;
pub mod middleware;
pub mod password;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Token creation failed: {0}")]
    TokenCreation(String),
    #[error("Token validation failed: {0}")]
    InvalidToken(String),
    #[error("Password hash error: {0}")]
    PasswordHash(String),
}
