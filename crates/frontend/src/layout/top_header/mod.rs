//! TopHeader component - application top navigation bar.
//!
//! Contains the sidebar mode toggle, the application title, the signed-in
//! user with their role, and logout.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::system::auth::context::use_session;
use contracts::system::auth::LOGIN_ROUTE;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let session = use_session();
    let navigate = use_navigate();

    let toggle_sidebar = move |_| {
        ctx.toggle_sidebar();
    };

    let logout = move |_| {
        session.logout();
        navigate(LOGIN_ROUTE, Default::default());
    };

    let is_collapsed = move || ctx.is_collapsed();

    let user_name = move || {
        session
            .user_info
            .get()
            .map(|u| u.full_name.unwrap_or(u.username))
            .unwrap_or_default()
    };
    let role_title = move || {
        session
            .principal()
            .map(|p| p.role.title())
            .unwrap_or("Guest")
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=toggle_sidebar
                    title=move || if is_collapsed() { "Expand navigation" } else { "Collapse navigation" }
                >
                    {move || if is_collapsed() {
                        icon("panel-left-open")
                    } else {
                        icon("panel-left-close")
                    }}
                </button>
                <span class="top-header__title">"Operations Console"</span>
            </div>

            <div class="top-header__actions">
                <div class="top-header__user">
                    {icon("user")}
                    <span>{user_name}</span>
                    <span class="top-header__role">{role_title}</span>
                </div>

                <button class="top-header__icon-btn" on:click=logout title="Log out">
                    {icon("log-out")}
                </button>
            </div>
        </div>
    }
}
