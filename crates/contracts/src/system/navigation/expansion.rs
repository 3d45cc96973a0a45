//! Expansion state of the sidebar menu.

use std::collections::BTreeSet;

use super::{branch_ids, matcher::find_expanded_branches, MenuEntry, MenuId};

/// Wide or narrow sidebar. Purely visual, independent of which branches are open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SidebarMode {
    #[default]
    Expanded,
    Collapsed,
}

impl SidebarMode {
    pub fn is_collapsed(&self) -> bool {
        matches!(self, SidebarMode::Collapsed)
    }

    pub fn toggled(self) -> Self {
        match self {
            SidebarMode::Expanded => SidebarMode::Collapsed,
            SidebarMode::Collapsed => SidebarMode::Expanded,
        }
    }
}

/// Set of open branch ids, bound to the tree it was built for.
///
/// Only ids of branches in the bound tree are ever stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpansionState {
    known: BTreeSet<MenuId>,
    expanded: BTreeSet<MenuId>,
}

impl ExpansionState {
    pub fn new(tree: &[MenuEntry]) -> Self {
        Self {
            known: branch_ids(tree).into_iter().collect(),
            expanded: BTreeSet::new(),
        }
    }

    /// Binds to a new tree and closes everything.
    pub fn rebind(&mut self, tree: &[MenuEntry]) {
        *self = Self::new(tree);
    }

    /// Whether `id` is a branch of the bound tree.
    pub fn knows(&self, id: &MenuId) -> bool {
        self.known.contains(id)
    }

    pub fn is_expanded(&self, id: &MenuId) -> bool {
        self.expanded.contains(id)
    }

    pub fn expanded(&self) -> impl Iterator<Item = &MenuId> {
        self.expanded.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.expanded.is_empty()
    }

    /// Flips `id`. In collapsed mode the branch is forced open and the
    /// sidebar widened instead: its open state was not visible to the user.
    ///
    /// Returns whether the branch is open afterwards.
    pub fn toggle(&mut self, id: MenuId, mode: &mut SidebarMode) -> bool {
        if !self.known.contains(&id) {
            return false;
        }

        if mode.is_collapsed() {
            *mode = SidebarMode::Expanded;
            self.expanded.insert(id);
            return true;
        }

        if !self.expanded.remove(&id) {
            self.expanded.insert(id);
            true
        } else {
            false
        }
    }

    /// Replaces the open set with the branches enclosing the route's leaf.
    pub fn sync_to_route(&mut self, tree: &[MenuEntry], current_path: &str) {
        self.expanded = find_expanded_branches(tree, current_path)
            .into_iter()
            .filter(|id| self.known.contains(id))
            .collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::navigation::menu::menu_for;
    use crate::system::roles::Role;

    #[test]
    fn test_double_toggle_restores_membership() {
        let tree = menu_for(Role::Admin);
        let mut state = ExpansionState::new(&tree);
        let mut mode = SidebarMode::Expanded;

        assert!(state.toggle(MenuId("finance"), &mut mode));
        assert!(state.is_expanded(&MenuId("finance")));
        assert!(!state.toggle(MenuId("finance"), &mut mode));
        assert!(!state.is_expanded(&MenuId("finance")));
        assert_eq!(mode, SidebarMode::Expanded);
    }

    #[test]
    fn test_collapsed_toggle_forces_open_and_widens() {
        let tree = menu_for(Role::Admin);
        let mut state = ExpansionState::new(&tree);
        let mut mode = SidebarMode::Expanded;
        state.toggle(MenuId("stock"), &mut mode);
        assert!(state.is_expanded(&MenuId("stock")));

        let mut mode = SidebarMode::Collapsed;
        assert!(state.toggle(MenuId("stock"), &mut mode));
        assert!(state.is_expanded(&MenuId("stock")));
        assert_eq!(mode, SidebarMode::Expanded);

        let mut mode = SidebarMode::Collapsed;
        assert!(state.toggle(MenuId("management"), &mut mode));
        assert!(state.is_expanded(&MenuId("management")));
        assert_eq!(mode, SidebarMode::Expanded);
    }

    #[test]
    fn test_unknown_ids_are_ignored() {
        let tree = menu_for(Role::ShopKeeper);
        let mut state = ExpansionState::new(&tree);
        let mut mode = SidebarMode::Collapsed;

        assert!(!state.toggle(MenuId("finance"), &mut mode));
        assert!(!state.toggle(MenuId("dashboard"), &mut mode));
        assert!(state.is_empty());
        assert_eq!(mode, SidebarMode::Collapsed);
    }

    #[test]
    fn test_sync_replaces_manual_expansion() {
        let tree = menu_for(Role::Admin);
        let mut state = ExpansionState::new(&tree);
        let mut mode = SidebarMode::Expanded;
        state.toggle(MenuId("management"), &mut mode);
        state.toggle(MenuId("stock"), &mut mode);

        state.sync_to_route(&tree, "/admin/payroll/runs/2024-05");
        let open: Vec<_> = state.expanded().copied().collect();
        assert_eq!(open, vec![MenuId("finance"), MenuId("finance.payroll")]);

        state.sync_to_route(&tree, "/admin/dashboard");
        assert!(state.is_empty());
    }

    #[test]
    fn test_rebind_drops_ids_missing_from_new_tree() {
        let admin = menu_for(Role::Admin);
        let mut state = ExpansionState::new(&admin);
        state.sync_to_route(&admin, "/admin/payroll/runs");
        assert!(state.is_expanded(&MenuId("finance.payroll")));

        let accountant = menu_for(Role::Accountant);
        state.rebind(&accountant);
        assert!(!state.is_expanded(&MenuId("finance.payroll")));
        assert!(state.is_empty());

        let mut mode = SidebarMode::Expanded;
        assert!(!state.toggle(MenuId("finance.payroll"), &mut mode));
        assert!(state.toggle(MenuId("reports"), &mut mode));
    }

    #[test]
    fn test_mode_toggled() {
        assert_eq!(SidebarMode::Expanded.toggled(), SidebarMode::Collapsed);
        assert_eq!(SidebarMode::Collapsed.toggled(), SidebarMode::Expanded);
        assert!(SidebarMode::Collapsed.is_collapsed());
        assert_eq!(SidebarMode::default(), SidebarMode::Expanded);
    }
}
