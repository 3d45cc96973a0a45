//! Persisted session: an access token and a role string.
//!
//! The session is an explicit object over an injected `SessionStorage`; the
//! browser build plugs in `localStorage`, tests use `MemoryStorage`.

use std::cell::RefCell;
use std::collections::HashMap;

use super::guard::Principal;
use crate::system::roles::Role;

pub const ACCESS_TOKEN_KEY: &str = "auth_access_token";
pub const ROLE_KEY: &str = "auth_role";

/// Key-value string storage. Write failures are swallowed by implementations,
/// matching browser storage semantics.
pub trait SessionStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.items.borrow_mut().remove(key);
    }
}

#[derive(Debug)]
pub struct Session<S: SessionStorage> {
    storage: S,
}

impl<S: SessionStorage> Session<S> {
    pub fn init(storage: S) -> Self {
        Self { storage }
    }

    pub fn login(&self, access_token: &str, role: Role) {
        self.storage.set(ACCESS_TOKEN_KEY, access_token);
        self.storage.set(ROLE_KEY, role.as_str());
    }

    pub fn logout(&self) {
        self.storage.remove(ACCESS_TOKEN_KEY);
        self.storage.remove(ROLE_KEY);
    }

    pub fn access_token(&self) -> Option<String> {
        self.storage.get(ACCESS_TOKEN_KEY).filter(|t| !t.is_empty())
    }

    pub fn role_raw(&self) -> Option<String> {
        self.storage.get(ROLE_KEY).filter(|r| !r.is_empty())
    }

    /// Read at check time. Both values must be present; the token is not
    /// verified here, only its presence.
    pub fn principal(&self) -> Option<Principal> {
        self.access_token()?;
        let role = Role::parse(&self.role_raw()?)?;
        Some(Principal::authenticated(role))
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_session_has_no_principal() {
        let session = Session::init(MemoryStorage::default());
        assert_eq!(session.principal(), None);
    }

    #[test]
    fn test_login_then_logout() {
        let session = Session::init(MemoryStorage::default());
        session.login("token-1", Role::Accountant);
        assert_eq!(
            session.principal(),
            Some(Principal::authenticated(Role::Accountant))
        );
        assert_eq!(session.access_token().as_deref(), Some("token-1"));

        session.logout();
        assert_eq!(session.principal(), None);
        assert_eq!(session.storage().get(ACCESS_TOKEN_KEY), None);
        assert_eq!(session.storage().get(ROLE_KEY), None);
    }

    #[test]
    fn test_both_values_required() {
        let storage = MemoryStorage::default();
        storage.set(ROLE_KEY, "ceo");
        let session = Session::init(storage);
        assert_eq!(session.principal(), None);

        session.storage().set(ACCESS_TOKEN_KEY, "t");
        session.storage().remove(ROLE_KEY);
        assert_eq!(session.principal(), None);

        session.storage().set(ACCESS_TOKEN_KEY, "");
        session.storage().set(ROLE_KEY, "ceo");
        assert_eq!(session.principal(), None);
    }

    #[test]
    fn test_unknown_stored_role_is_not_a_principal() {
        let storage = MemoryStorage::default();
        storage.set(ACCESS_TOKEN_KEY, "t");
        storage.set(ROLE_KEY, "intern");
        let session = Session::init(storage);
        assert_eq!(session.principal(), None);
        assert_eq!(session.role_raw().as_deref(), Some("intern"));
    }

    #[test]
    fn test_restored_session_is_read_from_storage() {
        let storage = MemoryStorage::default();
        storage.set(ACCESS_TOKEN_KEY, "persisted");
        storage.set(ROLE_KEY, "Store-Keeper");
        let session = Session::init(storage);
        assert_eq!(
            session.principal(),
            Some(Principal::authenticated(Role::StoreKeeper))
        );
    }
}
