use contracts::domain::a002_book::aggregate::{Book, BookDraft, BookFilter, BookId, ImageId};
use serde_json::Value;
use web_sys::File;

use crate::shared::api_utils::item_path;
use crate::shared::http::upload::build_form_data;
use crate::shared::http::{ApiClient, ApiError, Method};
use crate::shared::list_view::{ListRecord, ListResource};

pub const COLLECTION: &str = "/api/books";

pub struct BookResource;

impl ListResource for BookResource {
    type Record = Book;
    type Filter = BookFilter;

    const COLLECTION: &'static str = COLLECTION;
    const ENVELOPE_KEY: &'static str = "data";
    const NOUN: &'static str = "Product";
}

impl ListRecord for Book {
    type Id = BookId;

    fn id(&self) -> BookId {
        self.book_id
    }

    fn label(&self) -> String {
        self.book_name.clone()
    }
}

pub async fn fetch_by_id(client: &ApiClient, id: BookId) -> Result<Book, ApiError> {
    client.get(&item_path(COLLECTION, id)).await
}

/// `POST /api/books` as multipart, with the picked image files attached.
pub async fn create<P>(
    client: &ApiClient,
    draft: &BookDraft,
    files: &[File],
    on_progress: P,
) -> Result<Value, ApiError>
where
    P: Fn(u8) + 'static,
{
    let form = build_form_data(&draft.multipart_fields(), BookDraft::IMAGES_FIELD, files)?;
    client.upload(Method::Post, COLLECTION, &form, on_progress).await
}

/// `PUT /api/books/{id}`; attached files are added to the existing images.
pub async fn update<P>(
    client: &ApiClient,
    id: BookId,
    draft: &BookDraft,
    files: &[File],
    on_progress: P,
) -> Result<Value, ApiError>
where
    P: Fn(u8) + 'static,
{
    let form = build_form_data(&draft.multipart_fields(), BookDraft::IMAGES_FIELD, files)?;
    client
        .upload(Method::Put, &item_path(COLLECTION, id), &form, on_progress)
        .await
}

pub fn image_path(book_id: BookId, image_id: ImageId) -> String {
    format!("{}/images/{}", item_path(COLLECTION, book_id), image_id)
}

pub async fn delete_image(
    client: &ApiClient,
    book_id: BookId,
    image_id: ImageId,
) -> Result<(), ApiError> {
    client.delete(&image_path(book_id, image_id)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_path() {
        assert_eq!(image_path(BookId(7), ImageId(31)), "/api/books/7/images/31");
    }
}
