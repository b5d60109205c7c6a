use contracts::domain::a001_category::aggregate::{
    Category, CategoryDraft, CategoryFilter, CategoryId,
};
use contracts::shared::paging::decode_page;
use serde_json::Value;

use crate::shared::api_utils::item_path;
use crate::shared::http::{ApiClient, ApiError};
use crate::shared::list_view::{ListRecord, ListResource};

pub const COLLECTION: &str = "/api/categories";
const ENVELOPE_KEY: &str = "categories";
/// Enough for every category to appear in a picker.
const PICKER_PAGE_SIZE: u32 = 100;

pub struct CategoryResource;

impl ListResource for CategoryResource {
    type Record = Category;
    type Filter = CategoryFilter;

    const COLLECTION: &'static str = COLLECTION;
    const ENVELOPE_KEY: &'static str = ENVELOPE_KEY;
    const NOUN: &'static str = "Category";
}

impl ListRecord for Category {
    type Id = CategoryId;

    fn id(&self) -> CategoryId {
        self.id
    }

    fn label(&self) -> String {
        self.name.clone()
    }
}

pub async fn fetch_by_id(client: &ApiClient, id: CategoryId) -> Result<Category, ApiError> {
    client.get(&item_path(COLLECTION, id)).await
}

/// Categories for the product form picker.
pub async fn fetch_all(client: &ApiClient) -> Result<Vec<Category>, ApiError> {
    let query = format!("pageIndex=1&pageSize={}", PICKER_PAGE_SIZE);
    let value = client.get_with_query(COLLECTION, &query).await?;
    Ok(decode_page::<Category>(value, ENVELOPE_KEY)?.items)
}

pub async fn create(client: &ApiClient, draft: &CategoryDraft) -> Result<Value, ApiError> {
    client.post(COLLECTION, draft).await
}

pub async fn update(
    client: &ApiClient,
    id: CategoryId,
    draft: &CategoryDraft,
) -> Result<Value, ApiError> {
    client.put(&item_path(COLLECTION, id), draft).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delete_targets_item_path() {
        assert_eq!(
            item_path(CategoryResource::COLLECTION, CategoryId(1)),
            "/api/categories/1"
        );
    }
}
