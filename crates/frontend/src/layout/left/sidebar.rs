//! Sidebar: the signed-in role's menu tree with collapsible branches.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use contracts::system::navigation::MenuEntry;
use leptos::prelude::*;

const INDENT_PX: usize = 12;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    // Rebuilt only when the role's tree changes, not on every toggle.
    let menu = Memo::new(move |_| ctx.nav.with(|nav| nav.menu().to_vec()));

    view! {
        <nav class="app-sidebar__content">
            {move || render_entries(ctx, menu.get(), 0)}
        </nav>
    }
}

fn render_entries(ctx: AppGlobalContext, entries: Vec<MenuEntry>, depth: usize) -> AnyView {
    entries
        .into_iter()
        .map(|entry| render_entry(ctx, entry, depth))
        .collect_view()
        .into_any()
}

fn render_entry(ctx: AppGlobalContext, entry: MenuEntry, depth: usize) -> AnyView {
    let padding = format!("{}px", INDENT_PX + depth * INDENT_PX);

    match entry {
        MenuEntry::Leaf { id, label, icon: icon_name, link } => {
            let is_active = move || ctx.nav.with(|nav| nav.is_active(&id));
            let href = link.clone();

            view! {
                <a
                    href=href
                    class="app-sidebar__item"
                    class:app-sidebar__item--active=is_active
                    style:padding-left=padding
                    title=label
                    on:click=move |_| ctx.activate_leaf(&link)
                >
                    <div class="app-sidebar__item-content">
                        {icon(icon_name)}
                        <span class="app-sidebar__label">{label}</span>
                    </div>
                </a>
            }
            .into_any()
        }
        MenuEntry::Branch { id, label, icon: icon_name, children } => {
            let is_expanded = move || ctx.nav.with(|nav| nav.is_expanded(&id));
            let show_children = move || is_expanded() && !ctx.is_collapsed();
            let children = StoredValue::new(children);

            view! {
                <div class="app-sidebar__group">
                    <div
                        class="app-sidebar__item"
                        style:padding-left=padding
                        title=label
                        on:click=move |_| ctx.toggle_branch(id)
                    >
                        <div class="app-sidebar__item-content">
                            {icon(icon_name)}
                            <span class="app-sidebar__label">{label}</span>
                        </div>
                        <div
                            class="app-sidebar__chevron"
                            class:app-sidebar__chevron--expanded=is_expanded
                        >
                            {icon("chevron-right")}
                        </div>
                    </div>

                    <Show when=show_children>
                        <div class="app-sidebar__children">
                            {render_entries(ctx, children.get_value(), depth + 1)}
                        </div>
                    </Show>
                </div>
            }
            .into_any()
        }
    }
}
