//! Session guard: who may open what.
//!
//! The guard only decides. Redirecting on a negative decision is up to the
//! caller; `AccessDecision::redirect_target` names where to go.

use crate::system::roles::Role;

pub const LOGIN_ROUTE: &str = "/login";
pub const UNAUTHORIZED_ROUTE: &str = "/unauthorized";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Principal {
    pub role: Role,
    pub authenticated: bool,
}

impl Principal {
    pub fn authenticated(role: Role) -> Self {
        Self {
            role,
            authenticated: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    Granted,
    Unauthenticated,
    Forbidden,
}

impl AccessDecision {
    pub fn is_granted(&self) -> bool {
        matches!(self, AccessDecision::Granted)
    }

    /// Where a caller should send the user instead, if anywhere.
    pub fn redirect_target(&self) -> Option<&'static str> {
        match self {
            AccessDecision::Granted => None,
            AccessDecision::Unauthenticated => Some(LOGIN_ROUTE),
            AccessDecision::Forbidden => Some(UNAUTHORIZED_ROUTE),
        }
    }
}

pub fn check_access(principal: Option<&Principal>, required: Option<&[Role]>) -> AccessDecision {
    let principal = match principal {
        Some(p) if p.authenticated => p,
        _ => return AccessDecision::Unauthenticated,
    };

    match required {
        Some(roles) if !roles.contains(&principal.role) => AccessDecision::Forbidden,
        _ => AccessDecision::Granted,
    }
}

pub fn is_authorized(principal: Option<&Principal>, required: Option<&[Role]>) -> bool {
    check_access(principal, required).is_granted()
}

/// Roles allowed to open `path`: the owner of the role section it falls in.
/// `None` means any authenticated user.
pub fn required_roles_for_path(path: &str) -> Option<Vec<Role>> {
    Role::owning_section(path).map(|role| vec![role])
}
