use axum::{
    body::Body,
    extract::{Request, State},
    http::{HeaderMap, StatusCode},
    middleware::Next,
    response::Response,
};
use contracts::system::auth::{check_access, AccessDecision, TokenClaims};
use contracts::system::roles::Role;

use super::jwt::TokenIssuer;
use crate::state::SharedState;

/// State for `require_roles`: the app plus the roles a route admits.
#[derive(Clone)]
pub struct RoleGate {
    pub app: SharedState,
    pub roles: &'static [Role],
}

impl RoleGate {
    pub fn new(app: SharedState, roles: &'static [Role]) -> Self {
        Self { app, roles }
    }
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
}

/// Runs the session guard against the request's bearer token.
///
/// 401 for a missing or invalid token, 403 for a role outside `required`.
pub fn authorize(
    tokens: &TokenIssuer,
    headers: &HeaderMap,
    required: Option<&[Role]>,
) -> Result<TokenClaims, StatusCode> {
    let claims = bearer_token(headers).and_then(|token| match tokens.validate_token(token) {
        Ok(claims) => Some(claims),
        Err(e) => {
            tracing::debug!("Rejected bearer token: {}", e);
            None
        }
    });
    let principal = claims.as_ref().map(TokenClaims::principal);

    match check_access(principal.as_ref(), required) {
        AccessDecision::Granted => claims.ok_or(StatusCode::UNAUTHORIZED),
        AccessDecision::Unauthenticated => Err(StatusCode::UNAUTHORIZED),
        AccessDecision::Forbidden => {
            tracing::warn!(
                "Access denied for '{}' with role {:?}",
                claims.as_ref().map(|c| c.username.as_str()).unwrap_or_default(),
                principal.map(|p| p.role)
            );
            Err(StatusCode::FORBIDDEN)
        }
    }
}

/// Middleware that requires valid JWT authentication
pub async fn require_auth(
    State(app): State<SharedState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, StatusCode> {
    let claims = authorize(&app.tokens, req.headers(), None)?;
    req.extensions_mut().insert(claims);
    Ok(next.run(req).await)
}

/// Middleware that requires one of the gate's roles
pub async fn require_roles(
    State(gate): State<RoleGate>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, StatusCode> {
    let claims = authorize(&gate.app.tokens, req.headers(), Some(gate.roles))?;
    req.extensions_mut().insert(claims);
    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with(token: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            "Authorization",
            HeaderValue::from_str(&format!("Bearer {token}")).unwrap(),
        );
        headers
    }

    #[test]
    fn test_missing_header_is_unauthorized() {
        let tokens = TokenIssuer::new("s".into(), 1);
        assert_eq!(
            authorize(&tokens, &HeaderMap::new(), None).unwrap_err(),
            StatusCode::UNAUTHORIZED
        );
    }

    #[test]
    fn test_garbage_token_is_unauthorized() {
        let tokens = TokenIssuer::new("s".into(), 1);
        assert_eq!(
            authorize(&tokens, &headers_with("nope"), Some(&[Role::Admin])).unwrap_err(),
            StatusCode::UNAUTHORIZED
        );
    }

    #[test]
    fn test_non_bearer_scheme_is_unauthorized() {
        let tokens = TokenIssuer::new("s".into(), 1);
        let token = tokens.generate_access_token("u", "u", Role::Ceo).unwrap();
        let mut headers = HeaderMap::new();
        headers.insert(
            "Authorization",
            HeaderValue::from_str(&format!("Basic {token}")).unwrap(),
        );
        assert_eq!(
            authorize(&tokens, &headers, None).unwrap_err(),
            StatusCode::UNAUTHORIZED
        );
    }

    #[test]
    fn test_role_gate() {
        let tokens = TokenIssuer::new("s".into(), 1);
        let ceo = tokens.generate_access_token("1", "boss", Role::Ceo).unwrap();
        let shop = tokens.generate_access_token("2", "shop", Role::ShopKeeper).unwrap();

        let claims = authorize(&tokens, &headers_with(&ceo), Some(&[Role::Ceo, Role::Admin])).unwrap();
        assert_eq!(claims.username, "boss");

        assert_eq!(
            authorize(&tokens, &headers_with(&shop), Some(&[Role::Ceo])).unwrap_err(),
            StatusCode::FORBIDDEN
        );
        assert!(authorize(&tokens, &headers_with(&shop), None).is_ok());
    }
}
