//! Collapsible sidebar with one entry per managed entity.

use crate::layout::global_context::use_global_context;
use crate::layout::tabs::tab_label_for_key;
use crate::layout::tabs::tab_labels::{A001_CATEGORY, A002_BOOK, A003_ORDER, A004_USER};
use crate::shared::icons::icon;
use leptos::prelude::*;

/// (list tab key, icon)
const MENU_ITEMS: [(&str, &str); 4] = [
    (A002_BOOK, "products"),
    (A001_CATEGORY, "folder-closed"),
    (A004_USER, "users"),
    (A003_ORDER, "orders"),
];

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_global_context();

    view! {
        <aside data-zone="left" class="left" class:hidden=move || !ctx.left_open.get()>
            <nav class="app-sidebar__content">
                {MENU_ITEMS
                    .into_iter()
                    .map(|(key, icon_name)| {
                        let label = tab_label_for_key(key);
                        let label_for_click = label.clone();
                        view! {
                            <div
                                class="app-sidebar__item"
                                class:app-sidebar__item--active=move || {
                                    ctx.active.get().as_deref() == Some(key)
                                }
                                on:click=move |_| ctx.open_tab(key, &label_for_click)
                            >
                                <div class="app-sidebar__item-content">
                                    {icon(icon_name)}
                                    <span>{label}</span>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </nav>
        </aside>
    }
}
