//! Keeps a tab's page mounted while it is open; inactive tabs are only hidden,
//! so their filters and scroll position survive switching.

use super::registry::render_tab_content;
use crate::layout::global_context::{AppGlobalContext, Tab};
use leptos::prelude::*;

#[component]
pub fn TabPage(tab: Tab, tabs_store: AppGlobalContext) -> impl IntoView {
    let key = tab.key;
    log::debug!("tab mounted: {}", key);

    let active_key = key.clone();
    let is_active = move || tabs_store.active.with(|a| a.as_deref() == Some(active_key.as_str()));

    let cleanup_key = key.clone();
    on_cleanup(move || log::debug!("tab unmounted: {}", cleanup_key));

    let content = render_tab_content(&key, tabs_store);

    view! {
        <div class="tabs__item" class:tabs__item--hidden=move || !is_active() data-tab-key=key>
            {content}
        </div>
    }
}
