use contracts::system::auth::SessionUser;
use leptos::prelude::*;

use super::storage;
use crate::shared::config::AppConfig;
use crate::shared::http::{ApiClient, ApiError, Session};

/// Signed-in session shared through context
#[derive(Clone, Copy)]
pub struct AuthContext {
    session: RwSignal<Session>,
}

impl AuthContext {
    pub fn new(session: Session) -> Self {
        Self {
            session: RwSignal::new(session),
        }
    }

    /// Snapshot for one request; does not subscribe.
    pub fn session(&self) -> Session {
        self.session.get_untracked()
    }

    pub fn is_signed_in(&self) -> bool {
        self.session.with(Session::is_signed_in)
    }

    pub fn user(&self) -> Option<SessionUser> {
        self.session.with(|s| s.user.clone())
    }

    pub fn client(&self, config: &AppConfig) -> ApiClient {
        ApiClient::new(config, self.session())
    }

    pub fn sign_in(&self, token: String, user: SessionUser) {
        storage::save_session(&token, &user);
        log::info!("signed in as {}", user.email);
        self.session.set(Session::new(token, user));
    }

    pub fn sign_out(&self) {
        storage::clear_session();
        self.session.set(Session::default());
    }

    /// The backend rejected the token; drop it and return to the login page.
    pub fn expire(&self) {
        log::warn!("session rejected by backend, signing out");
        self.sign_out();
    }

    /// Signs out when `err` means the token is no longer accepted.
    pub fn observe(&self, err: &ApiError) {
        if err.is_auth() {
            self.expire();
        }
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    // Restore session from localStorage on mount
    let auth = AuthContext::new(storage::load_session());
    provide_context(auth);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthProvider not found in component tree")
}
