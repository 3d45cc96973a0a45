//! In-memory user directory built from `[[users]]` in config.toml.

use contracts::system::auth::UserInfo;

use crate::shared::config::{ConfigError, UserConfig};
use crate::system::auth::{password, AuthError};

#[derive(Debug, Clone)]
pub struct DirectoryUser {
    pub info: UserInfo,
    password_hash: String,
}

#[derive(Debug, Default)]
pub struct UserDirectory {
    users: Vec<DirectoryUser>,
}

impl UserDirectory {
    pub fn from_config(users: &[UserConfig]) -> anyhow::Result<Self> {
        let mut directory = Self::default();
        for user in users {
            let password_hash = match (&user.password_hash, &user.password) {
                (Some(hash), _) => hash.clone(),
                (None, Some(plain)) => {
                    tracing::warn!(
                        "User '{}' has a plaintext password in config, hashing at startup",
                        user.username
                    );
                    password::hash_password(plain)?
                }
                (None, None) => {
                    return Err(ConfigError::MissingPassword(user.username.clone()).into())
                }
            };

            directory.users.push(DirectoryUser {
                info: UserInfo {
                    id: user.id.clone(),
                    username: user.username.clone(),
                    full_name: user.full_name.clone(),
                    role: user.role,
                },
                password_hash,
            });
        }
        Ok(directory)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn get_by_id(&self, id: &str) -> Option<&DirectoryUser> {
        self.users.iter().find(|u| u.info.id == id)
    }

    pub fn list(&self) -> Vec<UserInfo> {
        self.users.iter().map(|u| u.info.clone()).collect()
    }

    /// `Ok(None)` for an unknown user or a wrong password.
    pub fn verify_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<&DirectoryUser>, AuthError> {
        let Some(user) = self.users.iter().find(|u| u.info.username == username) else {
            return Ok(None);
        };

        if password::verify_password(password, &user.password_hash)? {
            Ok(Some(user))
        } else {
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::system::roles::Role;

    fn user(id: &str, username: &str, role: Role, password: &str) -> UserConfig {
        UserConfig {
            id: id.to_string(),
            username: username.to_string(),
            full_name: None,
            role,
            password_hash: None,
            password: Some(password.to_string()),
        }
    }

    #[test]
    fn test_verify_credentials() {
        let directory = UserDirectory::from_config(&[
            user("1", "alice", Role::Accountant, "pw-a"),
            user("2", "bob", Role::ShopKeeper, "pw-b"),
        ])
        .unwrap();

        let alice = directory.verify_credentials("alice", "pw-a").unwrap().unwrap();
        assert_eq!(alice.info.role, Role::Accountant);
        assert!(directory.verify_credentials("alice", "pw-b").unwrap().is_none());
        assert!(directory.verify_credentials("carol", "pw-a").unwrap().is_none());
    }

    #[test]
    fn test_prehashed_password_is_used_as_is() {
        let hash = password::hash_password("pre").unwrap();
        let mut config = user("1", "alice", Role::Admin, "ignored");
        config.password_hash = Some(hash);
        let directory = UserDirectory::from_config(&[config]).unwrap();

        assert!(directory.verify_credentials("alice", "pre").unwrap().is_some());
        assert!(directory.verify_credentials("alice", "ignored").unwrap().is_none());
    }

    #[test]
    fn test_user_without_any_password_is_a_config_error() {
        let mut config = user("1", "ghost", Role::Admin, "x");
        config.password = None;
        let err = UserDirectory::from_config(&[config]).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::MissingPassword(name)) if name == "ghost"
        ));
    }

    #[test]
    fn test_lookup_and_list() {
        let directory =
            UserDirectory::from_config(&[user("42", "ceo", Role::Ceo, "x")]).unwrap();
        assert_eq!(directory.len(), 1);
        assert_eq!(directory.get_by_id("42").unwrap().info.username, "ceo");
        assert!(directory.get_by_id("43").is_none());
        assert_eq!(directory.list()[0].role, Role::Ceo);
    }
}
