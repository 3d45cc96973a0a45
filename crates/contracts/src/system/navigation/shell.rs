//! Navigation shell state: role, resolved menu, open branches, sidebar mode
//! and current route, kept consistent with each other.

use super::{
    expansion::{ExpansionState, SidebarMode},
    matcher::find_active_leaf,
    menu::menu_for,
    MenuEntry, MenuId,
};
use crate::system::roles::Role;

/// Viewports narrower than this collapse the sidebar after a leaf click.
pub const NARROW_VIEWPORT_PX: f64 = 768.0;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NavShell {
    role: Option<Role>,
    menu: Vec<MenuEntry>,
    expansion: ExpansionState,
    mode: SidebarMode,
    current_path: String,
}

impl NavShell {
    pub fn new(role: Option<Role>, current_path: &str) -> Self {
        let mut shell = Self {
            current_path: current_path.to_string(),
            ..Self::default()
        };
        shell.set_role(role);
        shell
    }

    pub fn role(&self) -> Option<Role> {
        self.role
    }

    pub fn menu(&self) -> &[MenuEntry] {
        &self.menu
    }

    pub fn mode(&self) -> SidebarMode {
        self.mode
    }

    pub fn current_path(&self) -> &str {
        &self.current_path
    }

    pub fn expansion(&self) -> &ExpansionState {
        &self.expansion
    }

    pub fn is_expanded(&self, id: &MenuId) -> bool {
        self.expansion.is_expanded(id)
    }

    pub fn active_leaf(&self) -> Option<&MenuEntry> {
        find_active_leaf(&self.menu, &self.current_path)
    }

    pub fn is_active(&self, id: &MenuId) -> bool {
        self.active_leaf().map(|leaf| leaf.id() == *id).unwrap_or(false)
    }

    /// Re-resolves the menu. A different role means a different tree, so the
    /// expansion is reset before being synced to the route again.
    pub fn set_role(&mut self, role: Option<Role>) {
        if self.role == role && !self.menu.is_empty() {
            return;
        }
        self.role = role;
        self.menu = role.map(menu_for).unwrap_or_default();
        self.expansion.rebind(&self.menu);
        self.expansion.sync_to_route(&self.menu, &self.current_path);
    }

    pub fn navigate(&mut self, path: &str) {
        self.current_path = path.to_string();
        self.expansion.sync_to_route(&self.menu, &self.current_path);
    }

    /// Toggling while collapsed widens the sidebar, which counts as a
    /// collapsed-to-expanded transition: resync first, then force the branch open.
    pub fn toggle_branch(&mut self, id: MenuId) -> bool {
        if self.mode.is_collapsed() && self.expansion.knows(&id) {
            self.expansion.sync_to_route(&self.menu, &self.current_path);
        }
        self.expansion.toggle(id, &mut self.mode)
    }

    pub fn set_mode(&mut self, mode: SidebarMode) {
        let widening = self.mode.is_collapsed() && !mode.is_collapsed();
        self.mode = mode;
        if widening {
            self.expansion.sync_to_route(&self.menu, &self.current_path);
        }
    }

    pub fn toggle_mode(&mut self) {
        self.set_mode(self.mode.toggled());
    }

    /// Records a leaf click and returns the path to navigate to.
    ///
    /// `viewport_width` is sampled by the caller at click time.
    pub fn activate_leaf(&mut self, link: &str, viewport_width: f64) -> String {
        if viewport_width < NARROW_VIEWPORT_PX {
            self.mode = SidebarMode::Collapsed;
        }
        link.to_string()
    }
}
