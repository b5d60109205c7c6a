use contracts::domain::a004_user::aggregate::{User, UserDraft, UserFilter, UserId};
use serde_json::Value;

use crate::shared::api_utils::item_path;
use crate::shared::http::{ApiClient, ApiError};
use crate::shared::list_view::{ListRecord, ListResource};

pub const COLLECTION: &str = "/api/users";

pub struct UserResource;

impl ListResource for UserResource {
    type Record = User;
    type Filter = UserFilter;

    const COLLECTION: &'static str = COLLECTION;
    const ENVELOPE_KEY: &'static str = "data";
    const NOUN: &'static str = "User";
}

impl ListRecord for User {
    type Id = UserId;

    fn id(&self) -> UserId {
        self.user_id
    }

    fn label(&self) -> String {
        self.user_name.clone()
    }
}

pub fn toggle_path(id: UserId) -> String {
    format!("{}/toggle/{}", COLLECTION, id)
}

/// Flips the ban flag of a regular account.
pub async fn toggle_status(client: &ApiClient, id: UserId) -> Result<Value, ApiError> {
    client.put_empty(&toggle_path(id), "").await
}

pub async fn fetch_by_id(client: &ApiClient, id: UserId) -> Result<User, ApiError> {
    client.get(&item_path(COLLECTION, id)).await
}

pub async fn create(client: &ApiClient, draft: &UserDraft) -> Result<Value, ApiError> {
    client.post(COLLECTION, draft).await
}

pub async fn update(client: &ApiClient, id: UserId, draft: &UserDraft) -> Result<Value, ApiError> {
    client.put(&item_path(COLLECTION, id), draft).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_path() {
        assert_eq!(toggle_path(UserId(5)), "/api/users/toggle/5");
    }
}
