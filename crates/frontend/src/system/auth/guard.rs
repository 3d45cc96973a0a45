use contracts::system::auth::{check_access, required_roles_for_path};
use contracts::system::roles::Role;
use leptos::prelude::*;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_location;

use super::context::use_session;

/// Renders children only for an authorized session, otherwise redirects:
/// anonymous users to the login page, wrong roles to the unauthorized page.
///
/// Without `roles`, the allowed roles come from the current path's section.
#[component]
pub fn RequireRole(
    #[prop(optional)] roles: Option<Vec<Role>>,
    children: ChildrenFn,
) -> impl IntoView {
    let session = use_session();
    let pathname = use_location().pathname;

    let decision = Memo::new(move |_| {
        let principal = session.principal();
        let required = roles
            .clone()
            .or_else(|| required_roles_for_path(&pathname.get()));
        check_access(principal.as_ref(), required.as_deref())
    });

    move || match decision.get().redirect_target() {
        None => children().into_any(),
        Some(target) => {
            log::info!("Access to '{}' denied, redirecting to {}", pathname.get_untracked(), target);
            view! { <Redirect path=target /> }.into_any()
        }
    }
}
