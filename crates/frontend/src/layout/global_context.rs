use contracts::system::navigation::{MenuId, NavShell};
use contracts::system::roles::Role;
use leptos::prelude::*;

use crate::shared::api_utils::viewport_width;

/// Navigation state shared by the sidebar, header and content area.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub nav: RwSignal<NavShell>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            nav: RwSignal::new(NavShell::default()),
        }
    }

    pub fn sync_role(&self, role: Option<Role>) {
        let changed = self.nav.with_untracked(|nav| nav.role() != role);
        if changed {
            log::debug!("Navigation role -> {:?}", role);
        }
        self.nav.update(|nav| nav.set_role(role));
    }

    pub fn navigate(&self, path: &str) {
        let same = self.nav.with_untracked(|nav| nav.current_path() == path);
        if !same {
            self.nav.update(|nav| nav.navigate(path));
        }
    }

    pub fn toggle_branch(&self, id: MenuId) {
        self.nav.update(|nav| {
            if !nav.toggle_branch(id) {
                log::warn!("toggle_branch: unknown menu id '{}'", id);
            }
        });
    }

    pub fn toggle_sidebar(&self) {
        self.nav.update(|nav| nav.toggle_mode());
    }

    pub fn is_collapsed(&self) -> bool {
        self.nav.with(|nav| nav.mode().is_collapsed())
    }

    /// Records a leaf click. The router performs the actual navigation.
    pub fn activate_leaf(&self, link: &str) {
        let width = viewport_width();
        self.nav.update(|nav| {
            let target = nav.activate_leaf(link, width);
            log::debug!("Menu leaf -> {} (viewport {}px)", target, width);
        });
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}
