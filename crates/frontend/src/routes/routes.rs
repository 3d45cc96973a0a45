use crate::layout::center::SectionPage;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::left::Sidebar;
use crate::layout::Shell;
use crate::system::auth::context::use_session;
use crate::system::auth::guard::RequireRole;
use crate::system::pages::login::LoginPage;
use crate::system::pages::unauthorized::{NotFoundPage, UnauthorizedPage};
use contracts::system::auth::LOGIN_ROUTE;
use contracts::system::roles::Role;
use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::hooks::use_location;
use leptos_router::path;

/// Everything behind the login: keeps the navigation shell in step with the
/// session role and the current URL.
#[component]
fn MainLayout() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");
    let session = use_session();
    let pathname = use_location().pathname;

    Effect::new(move |_| ctx.sync_role(session.principal().map(|p| p.role)));
    Effect::new(move |_| ctx.navigate(&pathname.get()));

    let content = move || {
        if Role::owning_section(&pathname.get()).is_some() {
            view! { <SectionPage /> }.into_any()
        } else {
            view! { <NotFoundPage /> }.into_any()
        }
    };

    view! {
        <RequireRole>
            <Shell
                left=|| view! { <Sidebar /> }.into_any()
                center=move || content.into_any()
            />
        </RequireRole>
    }
}

/// `/` sends signed-in users to their dashboard and everyone else to login.
#[component]
fn HomeRedirect() -> impl IntoView {
    let session = use_session();
    move || {
        let target = session
            .principal()
            .map(|p| p.role.home())
            .unwrap_or_else(|| LOGIN_ROUTE.to_string());
        view! { <Redirect path=target /> }
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <NotFoundPage /> }>
                <Route path=path!("/login") view=LoginPage />
                <Route path=path!("/unauthorized") view=UnauthorizedPage />
                <Route path=path!("/") view=HomeRedirect />
                <Route path=path!("/*any") view=MainLayout />
            </Routes>
        </Router>
    }
}
