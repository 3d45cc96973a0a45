use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn Center(children: Children) -> impl IntoView {
    view! { <div data-zone="center" class="app-content" style="flex: 1; overflow: auto;">{children()}</div> }
}

/// Placeholder page for any route inside a role section: shows the menu
/// entry that owns the current path.
#[component]
pub fn SectionPage() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    let title = move || {
        ctx.nav.with(|nav| {
            nav.active_leaf()
                .map(|leaf| (leaf.icon(), leaf.label()))
                .unwrap_or(("file-text", "Page"))
        })
    };
    let path = move || ctx.nav.with(|nav| nav.current_path().to_string());

    view! {
        <div class="section-page">
            <h1 class="section-page__title">
                {move || icon(title().0)}
                <span>{move || title().1}</span>
            </h1>
            <p class="section-page__path">{path}</p>
        </div>
    }
}
