use contracts::domain::a004_user::aggregate::{Role, UserForm, UserId};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a004_user::api;
use crate::shared::config::{use_config, AppConfig};
use crate::shared::http::ApiClient;
use crate::shared::list_view::FormState;
use crate::shared::notify::{use_notifications, NotificationSink, Notifications};
use crate::system::auth::context::{use_auth, AuthContext};

/// ViewModel for the user form
#[derive(Clone, Copy)]
pub struct UserDetailsViewModel {
    pub id: Option<UserId>,
    pub username: RwSignal<String>,
    pub email: RwSignal<String>,
    pub role: RwSignal<String>,
    /// Blank on edit keeps the stored password
    pub password: RwSignal<String>,
    pub banned: RwSignal<bool>,
    pub form: RwSignal<FormState>,
    pub loading: RwSignal<bool>,
    pub load_error: RwSignal<Option<String>>,
    config: StoredValue<AppConfig>,
    auth: AuthContext,
    notifications: Notifications,
}

impl UserDetailsViewModel {
    pub fn new(id: Option<i64>) -> Self {
        let defaults = UserForm::default();
        Self {
            id: id.map(UserId),
            username: RwSignal::new(defaults.username),
            email: RwSignal::new(defaults.email),
            role: RwSignal::new(defaults.role),
            password: RwSignal::new(defaults.password),
            banned: RwSignal::new(defaults.banned),
            form: RwSignal::new(FormState::default()),
            loading: RwSignal::new(false),
            load_error: RwSignal::new(None),
            config: StoredValue::new(use_config()),
            auth: use_auth(),
            notifications: use_notifications(),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.id.is_some()
    }

    fn client(&self) -> ApiClient {
        self.auth.client(&self.config.get_value())
    }

    pub fn field_error(&self, field: &'static str) -> Option<String> {
        self.form.with(|f| f.field_error(field))
    }

    /// Admin accounts cannot be banned, so the flag is hidden for them.
    pub fn can_ban(&self) -> bool {
        self.role.with(|r| Role::parse(r) != Some(Role::Admin))
    }

    pub fn load_if_needed(&self) {
        let Some(id) = self.id else {
            return;
        };
        let this = *self;
        this.loading.set(true);
        spawn_local(async move {
            match api::fetch_by_id(&this.client(), id).await {
                Ok(user) => {
                    let form = UserForm::from_record(&user);
                    this.username.set(form.username);
                    this.email.set(form.email);
                    this.role.set(form.role);
                    this.password.set(form.password);
                    this.banned.set(form.banned);
                }
                Err(e) => {
                    this.auth.observe(&e);
                    this.load_error.set(Some(format!("Failed to load user: {}", e)));
                }
            }
            this.loading.set(false);
        });
    }

    pub fn save_command(&self, on_saved: Callback<()>) {
        let input = UserForm {
            username: self.username.get_untracked(),
            email: self.email.get_untracked(),
            role: self.role.get_untracked(),
            password: self.password.get_untracked(),
            banned: self.banned.get_untracked() && self.can_ban(),
        };
        let creating = !self.is_edit_mode();
        let Some(draft) = self
            .form
            .try_update(|f| f.submit(|| input.validate(creating)))
            .flatten()
        else {
            return;
        };

        let this = *self;
        spawn_local(async move {
            let client = this.client();
            let result = match this.id {
                Some(id) => api::update(&client, id, &draft).await,
                None => api::create(&client, &draft).await,
            };
            match result {
                Ok(_) => {
                    this.form.update(FormState::succeed);
                    this.password.set(String::new());
                    let verb = if creating { "created" } else { "updated" };
                    this.notifications
                        .success(format!("User \"{}\" {}", draft.user_name, verb));
                    on_saved.run(());
                }
                Err(e) => {
                    this.auth.observe(&e);
                    if let Some(message) = this.form.try_update(|f| f.fail(e)).flatten() {
                        this.notifications.error(message);
                    }
                }
            }
        });
    }
}
