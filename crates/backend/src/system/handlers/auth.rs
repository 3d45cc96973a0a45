use axum::{
    extract::{Json, State},
    http::StatusCode,
    Extension,
};
use contracts::system::auth::{LoginRequest, LoginResponse, TokenClaims, UserInfo};

use crate::state::SharedState;

/// Login handler
pub async fn login(
    State(app): State<SharedState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, StatusCode> {
    if request.username.trim().is_empty() || request.password.is_empty() {
        return Err(StatusCode::BAD_REQUEST);
    }

    let user = app
        .users
        .verify_credentials(request.username.trim(), &request.password)
        .map_err(|e| {
            tracing::error!("Credential check failed for '{}': {}", request.username, e);
            StatusCode::INTERNAL_SERVER_ERROR
        })?
        .ok_or_else(|| {
            tracing::info!("Failed login for '{}'", request.username);
            StatusCode::UNAUTHORIZED
        })?;

    let access_token = app
        .tokens
        .generate_access_token(&user.info.id, &user.info.username, user.info.role)
        .map_err(|e| {
            tracing::error!("{}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        })?;

    tracing::info!(
        "User '{}' logged in as {}",
        user.info.username,
        user.info.role
    );

    Ok(Json(LoginResponse {
        access_token,
        user: user.info.clone(),
    }))
}

/// Current user. Claims are inserted by `require_auth`.
pub async fn current_user(
    State(app): State<SharedState>,
    Extension(claims): Extension<TokenClaims>,
) -> Result<Json<UserInfo>, StatusCode> {
    let user = app.users.get_by_id(&claims.sub).ok_or(StatusCode::NOT_FOUND)?;

    // A token minted before a role change in config is stale
    if user.info.role != claims.role {
        return Err(StatusCode::UNAUTHORIZED);
    }

    Ok(Json(user.info.clone()))
}
