use chrono::Utc;
use contracts::system::auth::TokenClaims;
use contracts::system::roles::Role;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use rand::Rng;

use super::AuthError;

/// Issues and validates HS256 access tokens.
#[derive(Clone)]
pub struct TokenIssuer {
    secret: String,
    lifetime_hours: i64,
}

impl TokenIssuer {
    pub fn new(secret: String, lifetime_hours: i64) -> Self {
        Self {
            secret,
            lifetime_hours,
        }
    }

    /// Uses the configured secret, or a random one that dies with the process.
    pub fn from_config(secret: Option<&str>, lifetime_hours: i64) -> Self {
        let secret = match secret {
            Some(s) if !s.trim().is_empty() => s.to_string(),
            _ => {
                tracing::warn!(
                    "auth.jwt_secret is not set; generated a random secret, tokens will not survive a restart"
                );
                generate_jwt_secret()
            }
        };
        Self::new(secret, lifetime_hours)
    }

    pub fn generate_access_token(
        &self,
        user_id: &str,
        username: &str,
        role: Role,
    ) -> Result<String, AuthError> {
        let now = Utc::now();
        let exp = chrono::Duration::try_hours(self.lifetime_hours)
            .and_then(|lifetime| now.checked_add_signed(lifetime))
            .ok_or_else(|| {
                AuthError::TokenCreation(format!(
                    "token lifetime of {} hours is out of range",
                    self.lifetime_hours
                ))
            })?
            .timestamp() as usize;
        let iat = now.timestamp() as usize;

        let claims = TokenClaims {
            sub: user_id.to_string(),
            username: username.to_string(),
            role,
            exp,
            iat,
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|e| AuthError::TokenCreation(e.to_string()))
    }

    pub fn validate_token(&self, token: &str) -> Result<TokenClaims, AuthError> {
        decode::<TokenClaims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::default(),
        )
        .map(|data| data.claims)
        .map_err(|e| AuthError::InvalidToken(e.to_string()))
    }
}

/// Generate a cryptographically secure JWT secret (256 bits)
fn generate_jwt_secret() -> String {
    use base64::{engine::general_purpose, Engine as _};
    let mut rng = rand::thread_rng();
    let random_bytes: Vec<u8> = (0..32).map(|_| rng.gen::<u8>()).collect();
    general_purpose::STANDARD.encode(&random_bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_roundtrip_keeps_role() {
        let issuer = TokenIssuer::new("test-secret".into(), 1);
        let token = issuer
            .generate_access_token("u-1", "alice", Role::FactoryManager)
            .unwrap();
        let claims = issuer.validate_token(&token).unwrap();
        assert_eq!(claims.sub, "u-1");
        assert_eq!(claims.username, "alice");
        assert_eq!(claims.role, Role::FactoryManager);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_foreign_secret_is_rejected() {
        let token = TokenIssuer::new("one".into(), 1)
            .generate_access_token("u-1", "alice", Role::Ceo)
            .unwrap();
        let err = TokenIssuer::new("two".into(), 1)
            .validate_token(&token)
            .unwrap_err();
        assert!(matches!(err, AuthError::InvalidToken(_)));
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let issuer = TokenIssuer::new("s".into(), -2);
        let token = issuer.generate_access_token("u", "u", Role::Admin).unwrap();
        assert!(issuer.validate_token(&token).is_err());
    }

    #[test]
    fn test_overflowing_lifetime_is_an_error() {
        let issuer = TokenIssuer::new("s".into(), 9_000_000_000_000_000);
        let err = issuer
            .generate_access_token("u", "u", Role::Admin)
            .unwrap_err();
        assert!(matches!(err, AuthError::TokenCreation(_)));
    }

    #[test]
    fn test_generated_secret_is_used_when_missing() {
        let a = TokenIssuer::from_config(None, 1);
        let b = TokenIssuer::from_config(Some("  "), 1);
        assert_eq!(a.secret.len(), 44);
        assert_ne!(a.secret, b.secret);
    }
}
