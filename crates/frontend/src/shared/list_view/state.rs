use contracts::shared::paging::Page;

use super::record::ListRecord;
use crate::shared::http::ApiError;

/// Handle of one issued page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    pub seq: u64,
    pub page_index: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    Applied,
    /// A newer request was issued after this one; its response is dropped.
    Stale,
    /// The newest request failed; the previous page stays visible.
    Failed(ApiError),
}

/// Last successfully loaded page of a list plus request bookkeeping.
///
/// Only the response to the newest issued request is ever applied, whatever
/// order responses arrive in.
#[derive(Debug, Clone, PartialEq)]
pub struct ListState<T> {
    pub items: Vec<T>,
    pub page_index: u32,
    pub total_pages: u32,
    pub is_loaded: bool,
    pub loading: bool,
    pub error: Option<String>,
    issued_seq: u64,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            page_index: 1,
            total_pages: 1,
            is_loaded: false,
            loading: false,
            error: None,
            issued_seq: 0,
        }
    }
}

impl<T: ListRecord> ListState<T> {
    pub fn begin_load(&mut self, page_index: u32) -> LoadTicket {
        self.issued_seq += 1;
        self.loading = true;
        LoadTicket {
            seq: self.issued_seq,
            page_index,
        }
    }

    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        ticket.seq == self.issued_seq
    }

    pub fn apply(&mut self, ticket: LoadTicket, result: Result<Page<T>, ApiError>) -> LoadOutcome {
        if !self.is_current(ticket) {
            return LoadOutcome::Stale;
        }
        self.loading = false;
        match result {
            Ok(page) => {
                self.items = page.items;
                self.total_pages = page.total_pages.max(1);
                self.page_index = ticket.page_index;
                self.is_loaded = true;
                self.error = None;
                LoadOutcome::Applied
            }
            Err(err) => {
                self.error = Some(err.to_string());
                LoadOutcome::Failed(err)
            }
        }
    }

    /// Reconciles the page with the result of a row mutation. A failed call
    /// leaves the page exactly as it was and hands the error back.
    pub fn settle<V>(
        &mut self,
        result: Result<V, ApiError>,
        reconcile: impl FnOnce(&mut Self, V),
    ) -> Result<(), ApiError> {
        let value = result?;
        reconcile(self, value);
        Ok(())
    }

    pub fn find(&self, id: &T::Id) -> Option<&T> {
        self.items.iter().find(|item| &item.id() == id)
    }

    /// Drops the row with `id`. Returns whether a row was removed.
    pub fn remove(&mut self, id: &T::Id) -> bool {
        let before = self.items.len();
        self.items.retain(|item| &item.id() != id);
        before != self.items.len()
    }

    /// Swaps in an updated row with the same id, keeping its position.
    pub fn replace(&mut self, record: T) -> bool {
        let id = record.id();
        match self.items.iter_mut().find(|item| item.id() == id) {
            Some(slot) => {
                *slot = record;
                true
            }
            None => false,
        }
    }

    /// Edits the row with `id` in place.
    pub fn patch(&mut self, id: &T::Id, f: impl FnOnce(&mut T)) -> bool {
        match self.items.iter_mut().find(|item| &item.id() == id) {
            Some(item) => {
                f(item);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_category::aggregate::{Category, CategoryId};
    use contracts::domain::a004_user::aggregate::{User, UserId};

    fn category(id: i64, name: &str) -> Category {
        Category {
            id: CategoryId(id),
            name: name.into(),
            description: None,
        }
    }

    fn user(id: i64, active: bool) -> User {
        User {
            user_id: UserId(id),
            user_name: format!("User {}", id),
            email: format!("user{}@example.com", id),
            role_id: 2,
            user_status: active,
        }
    }

    fn loaded(items: Vec<Category>) -> ListState<Category> {
        let mut state = ListState::default();
        let ticket = state.begin_load(1);
        state.apply(ticket, Ok(Page::new(items, 1)));
        state
    }

    #[test]
    fn test_apply_shows_exact_response() {
        let mut state: ListState<Category> = ListState::default();
        let ticket = state.begin_load(1);
        assert!(state.loading);
        let outcome = state.apply(
            ticket,
            Ok(Page::new(vec![category(2, "Poetry"), category(1, "Fiction")], 3)),
        );
        assert_eq!(outcome, LoadOutcome::Applied);
        assert_eq!(state.items, vec![category(2, "Poetry"), category(1, "Fiction")]);
        assert_eq!(state.total_pages, 3);
        assert!(state.is_loaded);
        assert!(!state.loading);
    }

    #[test]
    fn test_late_response_of_superseded_page_is_dropped() {
        let mut state: ListState<Category> = ListState::default();
        let _page1 = state.begin_load(1);
        let page2 = state.begin_load(2);
        let page3 = state.begin_load(3);

        let outcome3 = state.apply(page3, Ok(Page::new(vec![category(30, "Page three")], 3)));
        assert_eq!(outcome3, LoadOutcome::Applied);

        let outcome2 = state.apply(page2, Ok(Page::new(vec![category(20, "Page two")], 3)));
        assert_eq!(outcome2, LoadOutcome::Stale);

        assert_eq!(state.items, vec![category(30, "Page three")]);
        assert_eq!(state.page_index, 3);
    }

    #[test]
    fn test_superseded_response_arriving_first_is_dropped() {
        let mut state: ListState<Category> = ListState::default();
        let page2 = state.begin_load(2);
        let page3 = state.begin_load(3);
        assert_eq!(
            state.apply(page2, Ok(Page::new(vec![category(20, "Page two")], 3))),
            LoadOutcome::Stale
        );
        assert!(state.loading);
        state.apply(page3, Ok(Page::new(vec![category(30, "Page three")], 3)));
        assert_eq!(state.items, vec![category(30, "Page three")]);
    }

    #[test]
    fn test_failed_load_keeps_previous_page() {
        let mut state = loaded(vec![category(1, "Fiction")]);
        let ticket = state.begin_load(2);
        let outcome = state.apply(ticket, Err(ApiError::Timeout(15_000)));
        assert_eq!(outcome, LoadOutcome::Failed(ApiError::Timeout(15_000)));
        assert_eq!(state.items, vec![category(1, "Fiction")]);
        assert_eq!(state.page_index, 1);
        assert!(state.error.is_some());
        assert!(!state.loading);
    }

    #[test]
    fn test_failed_first_load_stays_empty() {
        let mut state: ListState<Category> = ListState::default();
        let ticket = state.begin_load(1);
        state.apply(ticket, Err(ApiError::Network("offline".into())));
        assert!(state.items.is_empty());
        assert!(!state.is_loaded);
    }

    #[test]
    fn test_remove_exactly_one() {
        let mut state = loaded(vec![category(1, "Fiction"), category(2, "Poetry"), category(3, "Drama")]);
        assert!(state.remove(&CategoryId(2)));
        assert_eq!(state.items, vec![category(1, "Fiction"), category(3, "Drama")]);
        assert!(!state.remove(&CategoryId(9)));
        assert_eq!(state.items.len(), 2);
    }

    #[test]
    fn test_patch_touches_only_target() {
        let mut state: ListState<User> = ListState::default();
        let ticket = state.begin_load(1);
        state.apply(ticket, Ok(Page::new(vec![user(1, true), user(2, true), user(3, false)], 1)));

        assert!(state.patch(&UserId(2), |u| u.user_status = !u.user_status));
        assert_eq!(state.items, vec![user(1, true), user(2, false), user(3, false)]);
    }

    #[test]
    fn test_replace_keeps_position() {
        let mut state = loaded(vec![category(1, "Fiction"), category(2, "Poetry")]);
        assert!(state.replace(category(1, "Novels")));
        assert_eq!(state.items[0].name, "Novels");
        assert!(!state.replace(category(5, "Missing")));
        assert_eq!(state.find(&CategoryId(2)).map(|c| c.name.as_str()), Some("Poetry"));
    }

    #[test]
    fn test_settled_delete_removes_row() {
        let mut state = loaded(vec![category(1, "Fiction"), category(2, "Poetry")]);
        let settled = state.settle(Ok(()), |s, _| {
            s.remove(&CategoryId(1));
        });
        assert!(settled.is_ok());
        assert_eq!(state.items, vec![category(2, "Poetry")]);
    }

    #[test]
    fn test_failed_delete_keeps_page() {
        let mut state = loaded(vec![category(1, "Fiction"), category(2, "Poetry")]);
        let before = state.clone();
        let settled = state.settle(
            Err::<(), _>(ApiError::from_response(409, r#"{"message":"Category has books"}"#)),
            |s, _| {
                s.remove(&CategoryId(1));
            },
        );
        assert_eq!(settled.map_err(|e| e.to_string()), Err("Category has books".to_string()));
        assert_eq!(state, before);
    }

    #[test]
    fn test_failed_toggle_keeps_status() {
        let mut state: ListState<User> = ListState::default();
        let ticket = state.begin_load(1);
        state.apply(ticket, Ok(Page::new(vec![user(1, true), user(2, true)], 1)));

        let settled = state.settle(Err::<(), _>(ApiError::Network("offline".into())), |s, _| {
            s.patch(&UserId(2), |u| u.user_status = !u.user_status);
        });
        assert!(settled.is_err());
        assert_eq!(state.items, vec![user(1, true), user(2, true)]);

        state
            .settle(Ok(()), |s, _| {
                s.patch(&UserId(2), |u| u.user_status = !u.user_status);
            })
            .unwrap();
        assert_eq!(state.items, vec![user(1, true), user(2, false)]);
    }
}
