//! Роли пользователей консоли.
//!
//! `Role` is the only place where role strings are interpreted. Everything
//! else (menu resolution, route policy, backend authorization) matches on the
//! enum.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Ceo,
    Admin,
    Accountant,
    FactoryManager,
    ProjectManager,
    StoreKeeper,
    ShopKeeper,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown role: '{0}'")]
pub struct UnknownRole(pub String);

impl Role {
    pub const ALL: [Role; 7] = [
        Role::Ceo,
        Role::Admin,
        Role::Accountant,
        Role::FactoryManager,
        Role::ProjectManager,
        Role::StoreKeeper,
        Role::ShopKeeper,
    ];

    /// Wire representation, identical to the serde form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Ceo => "ceo",
            Role::Admin => "admin",
            Role::Accountant => "accountant",
            Role::FactoryManager => "factorymanager",
            Role::ProjectManager => "projectmanager",
            Role::StoreKeeper => "storekeeper",
            Role::ShopKeeper => "shopkeeper",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Role::Ceo => "CEO",
            Role::Admin => "Administrator",
            Role::Accountant => "Accountant",
            Role::FactoryManager => "Factory Manager",
            Role::ProjectManager => "Project Manager",
            Role::StoreKeeper => "Store Keeper",
            Role::ShopKeeper => "Shop Keeper",
        }
    }

    /// Route section owned by the role's dashboard.
    pub fn section(&self) -> &'static str {
        match self {
            Role::Ceo => "/ceo",
            Role::Admin => "/admin",
            Role::Accountant => "/accountant",
            Role::FactoryManager => "/factory-manager",
            Role::ProjectManager => "/project-manager",
            Role::StoreKeeper => "/store-keeper",
            Role::ShopKeeper => "/shop-keeper",
        }
    }

    /// Landing route after login.
    pub fn home(&self) -> String {
        format!("{}/dashboard", self.section())
    }

    /// Lenient parse: case-insensitive, ignores `_`, `-` and spaces.
    pub fn parse(raw: &str) -> Option<Role> {
        let normalized: String = raw
            .trim()
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .flat_map(char::to_lowercase)
            .collect();

        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == normalized)
    }

    /// Role whose section contains `path`, if any.
    pub fn owning_section(path: &str) -> Option<Role> {
        Role::ALL.into_iter().find(|role| {
            let section = role.section();
            path.strip_prefix(section)
                .map(|rest| rest.is_empty() || rest.starts_with('/'))
                .unwrap_or(false)
        })
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::parse(s).ok_or_else(|| UnknownRole(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_roundtrips_wire_names() {
        for role in Role::ALL {
            assert_eq!(Role::parse(role.as_str()), Some(role));
            assert_eq!(role.to_string().parse::<Role>(), Ok(role));
        }
    }

    #[test]
    fn test_parse_is_lenient() {
        assert_eq!(Role::parse("  CEO "), Some(Role::Ceo));
        assert_eq!(Role::parse("Store_Keeper"), Some(Role::StoreKeeper));
        assert_eq!(Role::parse("factory-manager"), Some(Role::FactoryManager));
        assert_eq!(Role::parse("Project Manager"), Some(Role::ProjectManager));
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert_eq!(Role::parse(""), None);
        assert_eq!(Role::parse("janitor"), None);
        assert_eq!(
            "janitor".parse::<Role>(),
            Err(UnknownRole("janitor".to_string()))
        );
    }

    #[test]
    fn test_serde_uses_wire_names() {
        let json = serde_json::to_string(&Role::ShopKeeper).unwrap();
        assert_eq!(json, "\"shopkeeper\"");
        let role: Role = serde_json::from_str("\"factorymanager\"").unwrap();
        assert_eq!(role, Role::FactoryManager);
    }

    #[test]
    fn test_owning_section_respects_segment_boundary() {
        assert_eq!(Role::owning_section("/admin"), Some(Role::Admin));
        assert_eq!(Role::owning_section("/admin/expenses/1"), Some(Role::Admin));
        assert_eq!(Role::owning_section("/administration"), None);
        assert_eq!(Role::owning_section("/login"), None);
        assert_eq!(
            Role::owning_section("/shop-keeper/sales"),
            Some(Role::ShopKeeper)
        );
    }
}
