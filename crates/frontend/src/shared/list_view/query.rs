use serde::Serialize;

/// Pagination and filter parameters of one list.
///
/// Every change is resolved on the server: the caller reloads whenever a
/// setter reports a change. Filtering never happens on the loaded page alone,
/// so the rows shown always match the filter across all pages.
#[derive(Debug, Clone, PartialEq)]
pub struct ListQuery<F> {
    /// 1-based page number as the backend expects it
    pub page_index: u32,
    pub page_size: u32,
    pub filter: F,
    /// Set when the last load of these parameters failed, so asking for the
    /// same page or filter again still reloads.
    unloaded: bool,
}

impl<F: Default> ListQuery<F> {
    pub fn new(page_size: u32) -> Self {
        Self {
            page_index: 1,
            page_size: page_size.max(1),
            filter: F::default(),
            unloaded: false,
        }
    }
}

impl<F> ListQuery<F> {
    /// Marks the current parameters as not loaded after a failed request.
    pub fn mark_failed(&mut self) {
        self.unloaded = true;
    }

    /// Reports `changed`, or a pending retry of a failed load, and clears the
    /// retry flag when a reload follows.
    fn settle_change(&mut self, changed: bool) -> bool {
        let reload = changed || self.unloaded;
        if reload {
            self.unloaded = false;
        }
        reload
    }
}

impl<F: PartialEq + Serialize> ListQuery<F> {
    /// Returns `true` when the page actually changed.
    pub fn set_page(&mut self, page_index: u32) -> bool {
        let page_index = page_index.max(1);
        let changed = self.page_index != page_index;
        self.page_index = page_index;
        self.settle_change(changed)
    }

    /// Replaces the filter and rewinds to the first page. Returns `true` when
    /// anything changed.
    pub fn set_filter(&mut self, filter: F) -> bool {
        let changed = self.filter != filter || self.page_index != 1;
        self.filter = filter;
        self.page_index = 1;
        self.settle_change(changed)
    }

    pub fn set_page_size(&mut self, page_size: u32) -> bool {
        let page_size = page_size.max(1);
        if self.page_size == page_size {
            return self.settle_change(false);
        }
        self.page_size = page_size;
        self.page_index = 1;
        self.settle_change(true)
    }

    /// `pageIndex=..&pageSize=..` followed by the non-empty filter fields.
    pub fn to_query_string(&self) -> Result<String, serde_qs::Error> {
        let paging = format!("pageIndex={}&pageSize={}", self.page_index, self.page_size);
        let filter = serde_qs::to_string(&self.filter)?;
        if filter.is_empty() {
            Ok(paging)
        } else {
            Ok(format!("{}&{}", paging, filter))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::http::ApiError;
    use crate::shared::list_view::state::{ListState, LoadOutcome};
    use contracts::domain::a001_category::aggregate::{Category, CategoryFilter, CategoryId};
    use contracts::shared::paging::Page;
    use contracts::domain::a003_order::aggregate::{OrderFilter, OrderStatus};

    #[test]
    fn test_plain_paging() {
        let query: ListQuery<CategoryFilter> = ListQuery::new(5);
        assert_eq!(query.to_query_string().unwrap(), "pageIndex=1&pageSize=5");
    }

    #[test]
    fn test_filter_appended() {
        let mut query: ListQuery<CategoryFilter> = ListQuery::new(5);
        query.set_filter(CategoryFilter {
            search: "fiction".into(),
        });
        assert_eq!(
            query.to_query_string().unwrap(),
            "pageIndex=1&pageSize=5&search=fiction"
        );
    }

    #[test]
    fn test_order_filter_field_names() {
        let mut query: ListQuery<OrderFilter> = ListQuery::new(5);
        query.set_filter(OrderFilter {
            customer_phone: Some("0901".into()),
            order_status: Some(OrderStatus::Shipped),
            ..Default::default()
        });
        assert_eq!(
            query.to_query_string().unwrap(),
            "pageIndex=1&pageSize=5&CustomerPhone=0901&OrderStatus=Shipped"
        );
    }

    #[test]
    fn test_set_page_reports_change() {
        let mut query: ListQuery<CategoryFilter> = ListQuery::new(5);
        assert!(!query.set_page(1));
        assert!(query.set_page(3));
        assert_eq!(query.page_index, 3);
        assert!(query.set_page(0));
        assert_eq!(query.page_index, 1);
    }

    #[test]
    fn test_set_filter_rewinds() {
        let mut query: ListQuery<CategoryFilter> = ListQuery::new(5);
        query.set_page(4);
        assert!(query.set_filter(CategoryFilter::default()));
        assert_eq!(query.page_index, 1);
        assert!(!query.set_filter(CategoryFilter::default()));
    }

    #[test]
    fn test_page_size_change_rewinds() {
        let mut query: ListQuery<CategoryFilter> = ListQuery::new(5);
        query.set_page(2);
        assert!(query.set_page_size(10));
        assert_eq!(query.page_index, 1);
        assert!(!query.set_page_size(10));
    }

    fn fiction() -> Category {
        Category {
            id: CategoryId(1),
            name: "Fiction".into(),
            description: None,
        }
    }

    #[test]
    fn test_failed_page_can_be_requested_again() {
        let mut query: ListQuery<CategoryFilter> = ListQuery::new(5);
        let mut state: ListState<Category> = ListState::default();
        let first = state.begin_load(query.page_index);
        state.apply(first, Ok(Page::new(vec![fiction()], 3)));

        assert!(query.set_page(2));
        let second = state.begin_load(query.page_index);
        let outcome = state.apply(second, Err(ApiError::Timeout(15000)));
        assert!(matches!(outcome, LoadOutcome::Failed(_)));
        query.mark_failed();

        // the pager still shows page 1, so "Next" asks for page 2 again
        assert_eq!(state.page_index, 1);
        assert!(query.set_page(state.page_index + 1));
        // once reloading, repeating the same page is a no-op again
        assert!(!query.set_page(2));
    }

    #[test]
    fn test_failed_filter_can_be_submitted_again() {
        let mut query: ListQuery<CategoryFilter> = ListQuery::new(5);
        let filter = CategoryFilter {
            search: "poetry".into(),
        };
        assert!(query.set_filter(filter.clone()));
        query.mark_failed();
        assert!(query.set_filter(filter.clone()));
        assert!(!query.set_filter(filter));
    }
}
