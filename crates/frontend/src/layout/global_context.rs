use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

use crate::layout::tabs::tab_label_for_key;

/// Open tabs, the active one and per-list reload counters.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub opened: RwSignal<Vec<Tab>>,
    pub active: RwSignal<Option<String>>,
    pub left_open: RwSignal<bool>,
    /// Bumped per list tab key when a form saved a record of that list
    pub list_versions: RwSignal<HashMap<String, u64>>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            opened: RwSignal::new(vec![]),
            active: RwSignal::new(None),
            left_open: RwSignal::new(true),
            list_versions: RwSignal::new(HashMap::new()),
        }
    }

    /// Restores the tab named by `?active=` and keeps the query in step with
    /// the active tab afterwards, so a reload lands on the same page.
    pub fn sync_active_tab_with_url(&self) {
        let search = current_search();
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        if let Some(key) = params.get("active") {
            self.open_tab(key, &tab_label_for_key(key));
        }

        let this = *self;
        Effect::new(move |_| {
            let Some(key) = this.active.get() else {
                return;
            };
            let Ok(query) = serde_qs::to_string(&HashMap::from([("active", key)])) else {
                return;
            };
            let url = format!("?{}", query);
            if current_search() == url {
                return;
            }
            if let Some(history) = window().and_then(|w| w.history().ok()) {
                let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&url));
            }
        });
    }

    pub fn open_tab(&self, key: &str, title: &str) {
        log::debug!("open tab {} ({})", key, title);
        let exists = self
            .opened
            .with_untracked(|tabs| tabs.iter().any(|tab| tab.key == key));
        if !exists {
            self.opened.update(|tabs| {
                tabs.push(Tab {
                    key: key.to_string(),
                    title: title.to_string(),
                })
            });
        }
        self.activate_tab(key);
    }

    pub fn activate_tab(&self, key: &str) {
        self.active.set(Some(key.to_string()));
    }

    pub fn close_tab(&self, key: &str) {
        log::debug!("close tab {}", key);
        self.opened.update(|tabs| tabs.retain(|tab| tab.key != key));
        if self.active.with_untracked(|active| active.as_deref() == Some(key)) {
            let next = self.opened.with_untracked(|tabs| fallback_active(tabs));
            self.active.set(next);
        }
    }

    /// Drops every tab; used on sign-out.
    pub fn close_all(&self) {
        self.opened.set(vec![]);
        self.active.set(None);
    }

    /// Closes a form tab, returns to its list and has the list reload.
    pub fn finish_form(&self, form_key: &str, list_key: &str) {
        self.close_tab(form_key);
        self.refresh_list(list_key);
        self.open_tab(list_key, &tab_label_for_key(list_key));
    }

    pub fn refresh_list(&self, list_key: &str) {
        self.list_versions.update(|versions| bump(versions, list_key));
    }

    /// Tracked read, for lists that reload when a form saved.
    pub fn list_version(&self, list_key: &str) -> u64 {
        self.list_versions
            .with(|versions| versions.get(list_key).copied().unwrap_or_default())
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub key: String,
    pub title: String,
}

/// Tab that becomes active after the active one was closed: the last opened.
fn fallback_active(tabs: &[Tab]) -> Option<String> {
    tabs.last().map(|t| t.key.clone())
}

fn bump(versions: &mut HashMap<String, u64>, list_key: &str) {
    *versions.entry(list_key.to_string()).or_default() += 1;
}

fn current_search() -> String {
    window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

pub fn use_global_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext context not found")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tab(key: &str) -> Tab {
        Tab {
            key: key.to_string(),
            title: key.to_string(),
        }
    }

    #[test]
    fn test_fallback_active_is_last_tab() {
        assert_eq!(fallback_active(&[tab("a002_book"), tab("a004_user")]), Some("a004_user".to_string()));
        assert_eq!(fallback_active(&[]), None);
    }

    #[test]
    fn test_bump_counts_per_list() {
        let mut versions = HashMap::new();
        bump(&mut versions, "a002_book");
        bump(&mut versions, "a002_book");
        bump(&mut versions, "a001_category");
        assert_eq!(versions["a002_book"], 2);
        assert_eq!(versions["a001_category"], 1);
    }
}
