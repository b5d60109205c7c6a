use contracts::domain::a001_category::aggregate::{CategoryForm, CategoryId};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a001_category::api;
use crate::shared::config::{use_config, AppConfig};
use crate::shared::http::ApiClient;
use crate::shared::list_view::FormState;
use crate::shared::notify::{use_notifications, NotificationSink, Notifications};
use crate::system::auth::context::{use_auth, AuthContext};

/// ViewModel for the category form
#[derive(Clone, Copy)]
pub struct CategoryDetailsViewModel {
    pub id: Option<CategoryId>,
    pub name: RwSignal<String>,
    pub description: RwSignal<String>,
    pub form: RwSignal<FormState>,
    pub loading: RwSignal<bool>,
    pub load_error: RwSignal<Option<String>>,
    config: StoredValue<AppConfig>,
    auth: AuthContext,
    notifications: Notifications,
}

impl CategoryDetailsViewModel {
    pub fn new(id: Option<i64>) -> Self {
        Self {
            id: id.map(CategoryId),
            name: RwSignal::new(String::new()),
            description: RwSignal::new(String::new()),
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

    /// Fetches the stored record when editing, so the form never starts from
    /// a stale list row.
    pub fn load_if_needed(&self) {
        let Some(id) = self.id else {
            return;
        };
        let this = *self;
        this.loading.set(true);
        spawn_local(async move {
            match api::fetch_by_id(&this.client(), id).await {
                Ok(category) => {
                    let form = CategoryForm::from_record(&category);
                    this.name.set(form.name);
                    this.description.set(form.description);
                }
                Err(e) => {
                    this.auth.observe(&e);
                    this.load_error.set(Some(format!("Failed to load category: {}", e)));
                }
            }
            this.loading.set(false);
        });
    }

    pub fn save_command(&self, on_saved: Callback<()>) {
        let input = CategoryForm {
            name: self.name.get_untracked(),
            description: self.description.get_untracked(),
        };
        let Some(draft) = self.form.try_update(|f| f.submit(|| input.validate())).flatten() else {
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
                    let verb = if this.is_edit_mode() { "updated" } else { "created" };
                    this.notifications
                        .success(format!("Category \"{}\" {}", draft.name, verb));
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
