//! Tab bar plus the stack of open tab pages.

use crate::layout::global_context::{use_global_context, Tab};
use crate::layout::tabs::TabPage;
use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;

#[component]
fn TabButton(tab: Tab) -> impl IntoView {
    let ctx = use_global_context();

    let key = StoredValue::new(tab.key);
    let is_active = Memo::new(move |_| {
        key.with_value(|k| ctx.active.with(|active| active.as_deref() == Some(k.as_str())))
    });

    let on_close = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
        key.with_value(|k| ctx.close_tab(k));
    };

    view! {
        <div
            class="tab"
            class:active=is_active
            on:click=move |_| key.with_value(|k| ctx.activate_tab(k))
        >
            <span>{tab.title}</span>
            <button class="tab-close" on:click=on_close title="Close">
                {icon("x")}
            </button>
        </div>
    }
}

#[component]
pub fn TabStrip() -> impl IntoView {
    let ctx = use_global_context();

    view! {
        <div data-zone="center" class="tabs-container">
            <div class="tabs-bar">
                <For
                    each=move || ctx.opened.get()
                    key=|tab| tab.key.clone()
                    children=|tab| view! { <TabButton tab=tab /> }
                />
            </div>
            <div class="tab-content">
                <Show
                    when=move || ctx.opened.with(|tabs| !tabs.is_empty())
                    fallback=|| view! {
                        <div class="placeholder">"Pick a section in the sidebar to start."</div>
                    }
                >
                    <For
                        each=move || ctx.opened.get()
                        key=|tab| tab.key.clone()
                        children=move |tab: Tab| view! { <TabPage tab=tab tabs_store=ctx /> }
                    />
                </Show>
            </div>
        </div>
    }
}
