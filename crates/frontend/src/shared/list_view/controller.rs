use std::future::Future;

use contracts::shared::paging::decode_page;
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde_json::Value;

use super::query::ListQuery;
use super::record::{ListRecord, ListResource};
use super::selection::{RowAction, Selection, SelectionStep};
use super::state::{ListState, LoadOutcome};
use crate::shared::api_utils::item_path;
use crate::shared::config::{use_config, AppConfig};
use crate::shared::http::{ApiClient, ApiError};
use crate::shared::notify::{use_notifications, NotificationSink, Notifications};
use crate::system::auth::context::{use_auth, AuthContext};

/// Reactive handle of one entity list: query, loaded page and row selection.
///
/// Every load goes through [`ListState::begin_load`], so a response that was
/// overtaken by a newer request is dropped instead of rendered.
pub struct ListController<R: ListResource> {
    pub query: RwSignal<ListQuery<R::Filter>>,
    pub state: RwSignal<ListState<R::Record>>,
    pub selection: RwSignal<Selection<R::Record>>,
    config: StoredValue<AppConfig>,
    auth: AuthContext,
    notifications: Notifications,
}

impl<R: ListResource> Clone for ListController<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: ListResource> Copy for ListController<R> {}

impl<R: ListResource> ListController<R> {
    pub fn new(config: AppConfig, auth: AuthContext, notifications: Notifications) -> Self {
        Self {
            query: RwSignal::new(ListQuery::new(config.page_size)),
            state: RwSignal::new(ListState::default()),
            selection: RwSignal::new(Selection::Idle),
            config: StoredValue::new(config),
            auth,
            notifications,
        }
    }

    pub fn client(&self) -> ApiClient {
        self.auth.client(&self.config.get_value())
    }

    pub fn notifications(&self) -> Notifications {
        self.notifications
    }

    /// Fetches the page described by the current query.
    pub fn reload(&self) {
        let query = self.query.get_untracked();
        let query_string = match query.to_query_string() {
            Ok(qs) => qs,
            Err(e) => {
                log::error!("{} query could not be encoded: {}", R::NOUN, e);
                self.notifications.error(format!("Invalid filter: {}", e));
                return;
            }
        };
        let Some(ticket) = self.state.try_update(|s| s.begin_load(query.page_index)) else {
            return;
        };
        log!("📋 load {} page {} (#{})", R::COLLECTION, ticket.page_index, ticket.seq);

        let client = self.client();
        let this = *self;
        spawn_local(async move {
            let result = client
                .get_with_query(R::COLLECTION, &query_string)
                .await
                .and_then(|value| {
                    decode_page::<R::Record>(value, R::ENVELOPE_KEY).map_err(ApiError::from)
                });
            match this.state.try_update(|s| s.apply(ticket, result)) {
                Some(LoadOutcome::Applied) => {}
                Some(LoadOutcome::Stale) => {
                    log!("⏭️ dropped stale {} page {} (#{})", R::COLLECTION, ticket.page_index, ticket.seq);
                }
                Some(LoadOutcome::Failed(err)) => {
                    this.query.update(ListQuery::mark_failed);
                    this.report(&format!("Failed to load {}", R::NOUN.to_lowercase()), err);
                }
                None => {}
            }
        });
    }

    /// Loads the first page now and again whenever `version` changes.
    pub fn load_on(&self, version: impl Fn() -> u64 + 'static) {
        let this = *self;
        Effect::new(move |prev: Option<u64>| {
            let current = version();
            if prev != Some(current) {
                this.reload();
            }
            current
        });
    }

    pub fn go_to_page(&self, page_index: u32) {
        if self.query.try_update(|q| q.set_page(page_index)).unwrap_or(false) {
            self.reload();
        }
    }

    /// Applies a new filter on the server, starting again from page 1.
    pub fn apply_filter(&self, filter: R::Filter) {
        if self.query.try_update(|q| q.set_filter(filter)).unwrap_or(false) {
            self.reload();
        }
    }

    pub fn set_page_size(&self, page_size: u32) {
        if self.query.try_update(|q| q.set_page_size(page_size)).unwrap_or(false) {
            self.reload();
        }
    }

    /// Shows a failure. A rejected session signs the user out.
    pub fn report(&self, context: &str, err: ApiError) {
        self.auth.observe(&err);
        self.notifications.error(format!("{}: {}", context, err));
    }

    pub fn open_menu(&self, record: R::Record) -> bool {
        self.selection
            .try_update(|s| s.open_menu(record))
            .unwrap_or(false)
    }

    pub fn choose(&self, action: RowAction) -> SelectionStep<R::Record> {
        self.selection
            .try_update(|s| s.choose(action))
            .unwrap_or(SelectionStep::Ignored)
    }

    pub fn confirm(&self) -> SelectionStep<R::Record> {
        self.selection
            .try_update(|s| s.confirm())
            .unwrap_or(SelectionStep::Ignored)
    }

    pub fn close(&self) {
        self.selection.update(|s| {
            s.close();
        });
    }

    pub fn is_submitting(&self) -> bool {
        self.selection.with(Selection::is_submitting)
    }

    pub fn menu_open_for(&self, id: &<R::Record as ListRecord>::Id) -> bool {
        self.selection
            .with(|s| matches!(s, Selection::MenuOpen(record) if record.id() == *id))
    }

    /// Record and action behind the confirmation dialog. Stays set while the
    /// confirmed mutation runs so the dialog can show it as busy.
    pub fn pending_confirmation(&self) -> Option<(R::Record, RowAction)> {
        self.selection.with(|s| match (s.record(), s.pending_action()) {
            (Some(record), Some(action)) if action.needs_confirmation() => {
                Some((record.clone(), action.clone()))
            }
            _ => None,
        })
    }

    pub fn viewing(&self) -> Option<R::Record> {
        self.selection.with(|s| match s {
            Selection::Viewing(record) => Some(record.clone()),
            _ => None,
        })
    }

    /// Confirms a pending delete and removes the row once the backend agrees.
    pub fn delete_selected(&self) {
        match self.confirm() {
            SelectionStep::Submit(record, RowAction::Delete) => self.delete(record),
            SelectionStep::Submit(_, action) => {
                log::warn!("delete_selected called with pending {:?}", action);
                self.selection.update(Selection::finish);
            }
            _ => {}
        }
    }

    fn delete(&self, record: R::Record) {
        let id = record.id();
        let path = item_path(R::COLLECTION, &id);
        let success = format!("{} \"{}\" deleted", R::NOUN, record.label());
        self.run_row_mutation(
            RowAction::Delete,
            success,
            move |client| async move { client.delete(&path).await.map(|_| Value::Null) },
            move |state, _| {
                state.remove(&id);
            },
        );
    }

    /// Runs one backend mutation for the submitting selection.
    ///
    /// `reconcile` patches the loaded page with the response; on failure the
    /// page is left as it was. The selection returns to idle either way.
    pub fn run_row_mutation<F, Fut, G>(&self, action: RowAction, success: String, call: F, reconcile: G)
    where
        F: FnOnce(ApiClient) -> Fut + 'static,
        Fut: Future<Output = Result<Value, ApiError>> + 'static,
        G: FnOnce(&mut ListState<R::Record>, Value) + 'static,
    {
        let client = self.client();
        let this = *self;
        let label = action_label(&action);
        log!("✏️ {} {}", R::NOUN, label);
        spawn_local(async move {
            let result = call(client).await;
            this.selection.update(Selection::finish);
            match this.state.try_update(|s| s.settle(result, reconcile)) {
                Some(Ok(())) => this.notifications.success(success),
                Some(Err(err)) => this.report(&format!("{} failed", label), err),
                None => {}
            }
        });
    }
}

/// Builds a controller from the app's config, auth and notification contexts.
pub fn use_list_controller<R: ListResource>() -> ListController<R> {
    ListController::new(use_config(), use_auth(), use_notifications())
}

/// Human text of a row action, for menus and failure messages.
pub fn action_label(action: &RowAction) -> String {
    match action {
        RowAction::Edit => "Edit".to_string(),
        RowAction::Delete => "Delete".to_string(),
        RowAction::ToggleStatus => "Status change".to_string(),
        RowAction::ViewDetail => "View detail".to_string(),
        RowAction::ChangeStatus(status) => format!("Change status to {}", status),
    }
}
