use crate::layout::global_context::AppGlobalContext;
use crate::layout::Shell;
use crate::shared::config::AppConfig;
use crate::shared::notify::Notifications;
use crate::system::auth::context::{use_auth, AuthProvider};
use crate::system::pages::login::LoginPage;
use leptos::prelude::*;

/// Shows the login page until a session exists, the shell afterwards.
#[component]
fn SessionGate() -> impl IntoView {
    let auth = use_auth();

    view! {
        <Show when=move || auth.is_signed_in() fallback=|| view! { <LoginPage /> }>
            <Shell />
        </Show>
    }
}

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::load();
    log::info!("backend at {}", config.api_base);
    provide_context(config);

    provide_context(AppGlobalContext::new());
    provide_context(Notifications::new());

    view! {
        <AuthProvider>
            <SessionGate />
        </AuthProvider>
    }
}
