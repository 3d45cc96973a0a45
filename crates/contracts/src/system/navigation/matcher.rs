//! Route matcher: which branches must be open for the current path.
//!
//! A leaf matches when the path starts with its link, so `/admin/expenses/42`
//! is owned by the `/admin/expenses` leaf. The walk is depth-first in
//! document order and stops at the first match on every level.
//!
//! Top-level leaves belong to no branch: they can be the active leaf but
//! never stop the search for a branch to open.

use super::{MenuEntry, MenuId};

/// Outer-to-inner ids of the first top-level branch containing a matching
/// leaf, down to the branch that holds the leaf. Empty when no branch matches.
pub fn find_expanded_branches(tree: &[MenuEntry], current_path: &str) -> Vec<MenuId> {
    for entry in tree {
        if let MenuEntry::Branch { id, children, .. } = entry {
            let mut trail = vec![*id];
            if first_match(children, current_path, &mut trail).is_some() {
                return trail;
            }
        }
    }
    Vec::new()
}

/// The first leaf (document order) whose link prefixes `current_path`.
pub fn find_active_leaf<'a>(tree: &'a [MenuEntry], current_path: &str) -> Option<&'a MenuEntry> {
    let mut trail = Vec::new();
    first_match(tree, current_path, &mut trail)
}

fn first_match<'a>(
    entries: &'a [MenuEntry],
    current_path: &str,
    trail: &mut Vec<MenuId>,
) -> Option<&'a MenuEntry> {
    for entry in entries {
        match entry {
            MenuEntry::Leaf { link, .. } => {
                if current_path.starts_with(link.as_str()) {
                    return Some(entry);
                }
            }
            MenuEntry::Branch { id, children, .. } => {
                trail.push(*id);
                if let Some(found) = first_match(children, current_path, trail) {
                    return Some(found);
                }
                trail.pop();
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::navigation::menu::{menu_for, resolve_menu};
    use crate::system::roles::Role;

    fn leaf(id: &'static str, link: &str) -> MenuEntry {
        MenuEntry::Leaf {
            id: MenuId(id),
            label: id,
            icon: "list",
            link: link.to_string(),
        }
    }

    fn branch(id: &'static str, children: Vec<MenuEntry>) -> MenuEntry {
        MenuEntry::Branch {
            id: MenuId(id),
            label: id,
            icon: "layers",
            children,
        }
    }

    #[test]
    fn test_admin_expenses_subroute_opens_finance() {
        let tree = resolve_menu(Some("admin"));
        assert_eq!(
            find_expanded_branches(&tree, "/admin/expenses/123"),
            vec![MenuId("finance")]
        );
        let active = find_active_leaf(&tree, "/admin/expenses/123").unwrap();
        assert_eq!(active.link(), Some("/admin/expenses"));
    }

    #[test]
    fn test_nested_branch_returns_full_trail() {
        let tree = menu_for(Role::Admin);
        assert_eq!(
            find_expanded_branches(&tree, "/admin/payroll/advances"),
            vec![MenuId("finance"), MenuId("finance.payroll")]
        );
    }

    #[test]
    fn test_top_level_leaf_match_opens_nothing() {
        let tree = menu_for(Role::Admin);
        assert!(find_expanded_branches(&tree, "/admin/dashboard").is_empty());
        assert_eq!(
            find_active_leaf(&tree, "/admin/dashboard").map(MenuEntry::id),
            Some(MenuId("dashboard"))
        );
    }

    #[test]
    fn test_top_level_leaf_does_not_hide_matching_branch() {
        let tree = vec![
            leaf("home", "/admin"),
            branch("finance", vec![leaf("finance.expenses", "/admin/expenses")]),
        ];
        assert_eq!(
            find_expanded_branches(&tree, "/admin/expenses/123"),
            vec![MenuId("finance")]
        );
        assert_eq!(
            find_active_leaf(&tree, "/admin/expenses/123").map(MenuEntry::id),
            Some(MenuId("home"))
        );
        assert!(find_expanded_branches(&tree, "/admin/users").is_empty());
    }

    #[test]
    fn test_no_match_is_empty() {
        let tree = menu_for(Role::Admin);
        assert!(find_expanded_branches(&tree, "/ceo/expenses").is_empty());
        assert!(find_expanded_branches(&tree, "/").is_empty());
        assert!(find_expanded_branches(&[], "/admin/expenses").is_empty());
        assert!(find_active_leaf(&tree, "/nowhere").is_none());
    }

    #[test]
    fn test_first_branch_in_document_order_wins() {
        let tree = vec![
            branch("a", vec![leaf("a.x", "/x")]),
            branch("b", vec![leaf("b.x", "/x/deeper")]),
        ];
        assert_eq!(find_expanded_branches(&tree, "/x/deeper"), vec![MenuId("a")]);
    }

    #[test]
    fn test_unmatched_sibling_branch_does_not_leak_into_trail() {
        let tree = vec![
            branch("a", vec![branch("a.inner", vec![leaf("a.inner.x", "/a/x")])]),
            branch("b", vec![leaf("b.y", "/b/y")]),
        ];
        assert_eq!(find_expanded_branches(&tree, "/b/y/7"), vec![MenuId("b")]);
    }

    #[test]
    fn test_matching_is_idempotent() {
        for role in Role::ALL {
            let tree = menu_for(role);
            for path in [role.home(), format!("{}/expenses/9", role.section()), "/".into()] {
                assert_eq!(
                    find_expanded_branches(&tree, &path),
                    find_expanded_branches(&tree, &path)
                );
            }
        }
    }
}
