//! Навигация: дерево меню, сопоставление маршрутов и состояние сайдбара.
//!
//! All of it is pure and synchronous so the same code drives the Leptos
//! sidebar and the unit tests.

pub mod expansion;
pub mod matcher;
pub mod menu;
pub mod shell;

pub use expansion::{ExpansionState, SidebarMode};
pub use matcher::{find_active_leaf, find_expanded_branches};
pub use menu::{menu_for, resolve_menu};
pub use shell::{NavShell, NARROW_VIEWPORT_PX};

use std::fmt;

/// Opaque menu entry identifier, unique within one role's tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MenuId(pub &'static str);

impl MenuId {
    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for MenuId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuEntry {
    Leaf {
        id: MenuId,
        label: &'static str,
        icon: &'static str,
        link: String,
    },
    Branch {
        id: MenuId,
        label: &'static str,
        icon: &'static str,
        children: Vec<MenuEntry>,
    },
}

impl MenuEntry {
    pub fn id(&self) -> MenuId {
        match self {
            MenuEntry::Leaf { id, .. } | MenuEntry::Branch { id, .. } => *id,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuEntry::Leaf { label, .. } | MenuEntry::Branch { label, .. } => label,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            MenuEntry::Leaf { icon, .. } | MenuEntry::Branch { icon, .. } => icon,
        }
    }

    pub fn link(&self) -> Option<&str> {
        match self {
            MenuEntry::Leaf { link, .. } => Some(link),
            MenuEntry::Branch { .. } => None,
        }
    }

    pub fn is_branch(&self) -> bool {
        matches!(self, MenuEntry::Branch { .. })
    }
}

/// Ids of every branch in `tree`, depth-first.
pub fn branch_ids(tree: &[MenuEntry]) -> Vec<MenuId> {
    fn walk(entries: &[MenuEntry], out: &mut Vec<MenuId>) {
        for entry in entries {
            if let MenuEntry::Branch { id, children, .. } = entry {
                out.push(*id);
                walk(children, out);
            }
        }
    }

    let mut ids = Vec::new();
    walk(tree, &mut ids);
    ids
}
