use contracts::domain::a001_category::aggregate::Category;
use contracts::domain::a002_book::aggregate::{remove_image, BookForm, BookId, BookImage, ImageId};
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::File;

use crate::domain::a001_category::api as category_api;
use crate::domain::a002_book::api;
use crate::shared::config::{use_config, AppConfig};
use crate::shared::http::ApiClient;
use crate::shared::list_view::FormState;
use crate::shared::notify::{use_notifications, NotificationSink, Notifications};
use crate::system::auth::context::{use_auth, AuthContext};

/// ViewModel for the product form
#[derive(Clone, Copy)]
pub struct BookDetailsViewModel {
    pub id: Option<BookId>,
    pub name: RwSignal<String>,
    pub description: RwSignal<String>,
    pub unit_price: RwSignal<String>,
    pub units_in_stock: RwSignal<String>,
    pub discount: RwSignal<String>,
    pub category_id: RwSignal<String>,
    pub categories: RwSignal<Vec<Category>>,
    /// Images already stored for the product
    pub images: RwSignal<Vec<BookImage>>,
    /// Files picked for upload with the next save
    pub files: RwSignal<Vec<File>, LocalStorage>,
    pub upload_progress: RwSignal<Option<u8>>,
    pub deleting_image: RwSignal<Option<ImageId>>,
    pub form: RwSignal<FormState>,
    pub loading: RwSignal<bool>,
    pub load_error: RwSignal<Option<String>>,
    config: StoredValue<AppConfig>,
    auth: AuthContext,
    notifications: Notifications,
}

impl BookDetailsViewModel {
    pub fn new(id: Option<i64>) -> Self {
        Self {
            id: id.map(BookId),
            name: RwSignal::new(String::new()),
            description: RwSignal::new(String::new()),
            unit_price: RwSignal::new(String::new()),
            units_in_stock: RwSignal::new(String::new()),
            discount: RwSignal::new("0".to_string()),
            category_id: RwSignal::new(String::new()),
            categories: RwSignal::new(Vec::new()),
            images: RwSignal::new(Vec::new()),
            files: RwSignal::new_local(Vec::new()),
            upload_progress: RwSignal::new(None),
            deleting_image: RwSignal::new(None),
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

    pub fn is_busy(&self) -> bool {
        self.loading.get() || self.form.with(|f| f.submitting)
    }

    /// Loads the category picker and, when editing, the stored product.
    pub fn load(&self) {
        let this = *self;
        spawn_local(async move {
            match category_api::fetch_all(&this.client()).await {
                Ok(categories) => this.categories.set(categories),
                Err(e) => {
                    this.auth.observe(&e);
                    this.notifications
                        .error(format!("Failed to load categories: {}", e));
                }
            }
        });

        let Some(id) = self.id else {
            return;
        };
        self.loading.set(true);
        spawn_local(async move {
            match api::fetch_by_id(&this.client(), id).await {
                Ok(book) => {
                    let form = BookForm::from_record(&book);
                    this.name.set(form.name);
                    this.description.set(form.description);
                    this.unit_price.set(form.unit_price);
                    this.units_in_stock.set(form.units_in_stock);
                    this.discount.set(form.discount);
                    this.category_id.set(form.category_id);
                    this.images.set(book.images);
                }
                Err(e) => {
                    this.auth.observe(&e);
                    this.load_error.set(Some(format!("Failed to load product: {}", e)));
                }
            }
            this.loading.set(false);
        });
    }

    pub fn pick_files(&self, files: Vec<File>) {
        self.files.set(files);
    }

    pub fn file_names(&self) -> Vec<String> {
        self.files.with(|files| files.iter().map(File::name).collect())
    }

    /// Removes a stored image right away; the rest of the form is untouched.
    pub fn delete_image(&self, image_id: ImageId) {
        let Some(book_id) = self.id else {
            return;
        };
        if self.deleting_image.get_untracked().is_some() {
            return;
        }
        self.deleting_image.set(Some(image_id));
        let this = *self;
        spawn_local(async move {
            match api::delete_image(&this.client(), book_id, image_id).await {
                Ok(()) => {
                    this.images.update(|images| {
                        remove_image(images, image_id);
                    });
                    this.notifications.success("Image deleted");
                }
                Err(e) => {
                    this.auth.observe(&e);
                    this.notifications
                        .error(format!("Failed to delete image: {}", e));
                }
            }
            this.deleting_image.set(None);
        });
    }

    fn input(&self) -> BookForm {
        BookForm {
            name: self.name.get_untracked(),
            description: self.description.get_untracked(),
            unit_price: self.unit_price.get_untracked(),
            units_in_stock: self.units_in_stock.get_untracked(),
            discount: self.discount.get_untracked(),
            category_id: self.category_id.get_untracked(),
        }
    }

    pub fn save_command(&self, on_saved: Callback<()>) {
        let input = self.input();
        let Some(draft) = self.form.try_update(|f| f.submit(|| input.validate())).flatten() else {
            return;
        };

        let this = *self;
        let files = self.files.get_untracked();
        this.upload_progress.set(Some(0));
        spawn_local(async move {
            let client = this.client();
            let progress = this.upload_progress;
            let on_progress = move |pct: u8| progress.set(Some(pct));
            let result = match this.id {
                Some(id) => api::update(&client, id, &draft, &files, on_progress).await,
                None => api::create(&client, &draft, &files, on_progress).await,
            };
            this.upload_progress.set(None);
            match result {
                Ok(_) => {
                    this.form.update(FormState::succeed);
                    this.files.set(Vec::new());
                    let verb = if this.is_edit_mode() { "updated" } else { "created" };
                    this.notifications
                        .success(format!("Product \"{}\" {}", draft.name, verb));
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
