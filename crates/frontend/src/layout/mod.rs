pub mod global_context;
pub mod sidebar;
pub mod tab_strip;
pub mod tabs;
pub mod top_header;

use crate::shared::notify::NotificationHost;
use leptos::prelude::*;
use sidebar::Sidebar;
use tab_strip::TabStrip;
use top_header::TopHeader;

/// Signed-in application shell.
///
/// ```text
/// +------------------------------+
/// |          TopHeader           |
/// +------------------------------+
/// |  Sidebar  |    TabStrip      |
/// +------------------------------+
/// ```
#[component]
pub fn Shell() -> impl IntoView {
    global_context::use_global_context().sync_active_tab_with_url();

    view! {
        <div class="app-layout">
            <TopHeader />

            <div class="app-body">
                <Sidebar />
                <main class="app-main">
                    <TabStrip />
                </main>
            </div>

            <NotificationHost />
        </div>
    }
}
