use contracts::system::roles::Role;
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub users: Vec<UserConfig>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Собранный фронтенд (trunk dist), раздаётся как статика
    pub static_dir: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    pub jwt_secret: Option<String>,
    #[serde(default = "default_token_lifetime")]
    pub access_token_lifetime_hours: i64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct UserConfig {
    pub id: String,
    pub username: String,
    pub full_name: Option<String>,
    pub role: Role,
    pub password_hash: Option<String>,
    /// Только для разработки: хешируется при старте
    pub password: Option<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid listen address {0}")]
    InvalidAddress(String),
    #[error("User '{0}' has neither password nor password_hash")]
    MissingPassword(String),
    #[error("Duplicate username '{0}'")]
    DuplicateUser(String),
    #[error(
        "auth.access_token_lifetime_hours must be between 1 and {}, got {0}",
        MAX_TOKEN_LIFETIME_HOURS
    )]
    InvalidTokenLifetime(i64),
}

/// One year.
pub const MAX_TOKEN_LIFETIME_HOURS: i64 = 24 * 365;

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_token_lifetime() -> i64 {
    24
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: None,
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: None,
            access_token_lifetime_hours: default_token_lifetime(),
        }
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "127.0.0.1"
port = 3000

[auth]
access_token_lifetime_hours = 24

[[users]]
id = "u-ceo"
username = "ceo"
full_name = "Chief Executive"
role = "ceo"
password = "ceo"

[[users]]
id = "u-admin"
username = "admin"
full_name = "Administrator"
role = "admin"
password = "admin"

[[users]]
id = "u-accountant"
username = "accountant"
role = "accountant"
password = "accountant"

[[users]]
id = "u-factory"
username = "factory"
role = "factorymanager"
password = "factory"

[[users]]
id = "u-projects"
username = "projects"
role = "projectmanager"
password = "projects"

[[users]]
id = "u-store"
username = "store"
role = "storekeeper"
password = "store"

[[users]]
id = "u-shop"
username = "shop"
role = "shopkeeper"
password = "shop"
"#;

impl Config {
    pub fn listen_addr(&self) -> Result<SocketAddr, ConfigError> {
        let raw = format!("{}:{}", self.server.host, self.server.port);
        raw.parse().map_err(|_| ConfigError::InvalidAddress(raw))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.listen_addr()?;
        let lifetime = self.auth.access_token_lifetime_hours;
        if !(1..=MAX_TOKEN_LIFETIME_HOURS).contains(&lifetime) {
            return Err(ConfigError::InvalidTokenLifetime(lifetime));
        }
        let mut seen = std::collections::HashSet::new();
        for user in &self.users {
            if user.password.is_none() && user.password_hash.is_none() {
                return Err(ConfigError::MissingPassword(user.username.clone()));
            }
            if !seen.insert(user.username.as_str()) {
                return Err(ConfigError::DuplicateUser(user.username.clone()));
            }
        }
        Ok(())
    }
}

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                return load_from(&config_path);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    parse(DEFAULT_CONFIG)
}

pub fn load_from(path: &Path) -> anyhow::Result<Config> {
    let contents = std::fs::read_to_string(path)?;
    parse(&contents)
}

fn parse(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    config.validate()?;
    Ok(config)
}

/// Resolves the static directory relative to the executable directory
pub fn get_static_dir(config: &Config) -> Option<PathBuf> {
    let dir = Path::new(config.server.static_dir.as_deref()?);

    if dir.is_absolute() {
        return Some(dir.to_path_buf());
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            return Some(exe_dir.join(dir));
        }
    }

    Some(dir.to_path_buf())
}
