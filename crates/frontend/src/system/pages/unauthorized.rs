use crate::system::auth::context::use_session;
use contracts::system::auth::LOGIN_ROUTE;
use leptos::prelude::*;

#[component]
pub fn UnauthorizedPage() -> impl IntoView {
    let session = use_session();
    let home = move || {
        session
            .principal()
            .map(|p| p.role.home())
            .unwrap_or_else(|| LOGIN_ROUTE.to_string())
    };

    view! {
        <div class="status-page">
            <h1>"403"</h1>
            <p>"You do not have access to this page."</p>
            <a class="btn-primary" href=home>"Back to your dashboard"</a>
        </div>
    }
}

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="status-page">
            <h1>"404"</h1>
            <p>"Page not found."</p>
            <a class="btn-primary" href="/">"Home"</a>
        </div>
    }
}
