use std::sync::Arc;

use crate::shared::config::Config;
use crate::system::auth::jwt::TokenIssuer;
use crate::system::users::UserDirectory;

/// Everything handlers need, immutable after startup.
pub struct AppState {
    pub config: Config,
    pub tokens: TokenIssuer,
    pub users: UserDirectory,
}

pub type SharedState = Arc<AppState>;

impl AppState {
    pub fn from_config(config: Config) -> anyhow::Result<SharedState> {
        let tokens = TokenIssuer::from_config(
            config.auth.jwt_secret.as_deref(),
            config.auth.access_token_lifetime_hours,
        );
        let users = UserDirectory::from_config(&config.users)?;
        tracing::info!("User directory loaded: {} users", users.len());

        Ok(Arc::new(Self {
            config,
            tokens,
            users,
        }))
    }
}
