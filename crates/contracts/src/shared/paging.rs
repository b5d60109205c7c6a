//! Paginated collection envelope.
//!
//! Every list endpoint answers `{"<key>": [...], "totalPages": n}` where the
//! collection key differs per entity. The category endpoint has also been seen
//! returning a bare array; that shape decodes as a single page.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One server page of records plus the page count reported alongside it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_pages: u32,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total_pages: u32) -> Self {
        Self {
            items,
            total_pages: total_pages.max(1),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PageDecodeError {
    #[error("response has no \"{0}\" collection")]
    MissingCollection(String),
    #[error("response is neither an object nor an array")]
    UnexpectedShape,
    #[error("malformed record: {0}")]
    Record(#[from] serde_json::Error),
}

/// Decodes a paginated response whose records sit under `envelope_key`.
pub fn decode_page<T: DeserializeOwned>(
    value: Value,
    envelope_key: &str,
) -> Result<Page<T>, PageDecodeError> {
    match value {
        Value::Array(items) => {
            let items = decode_items(items)?;
            Ok(Page::new(items, 1))
        }
        Value::Object(mut map) => {
            let items = match map.remove(envelope_key) {
                Some(Value::Array(items)) => decode_items(items)?,
                _ => return Err(PageDecodeError::MissingCollection(envelope_key.to_string())),
            };
            let total_pages = map
                .get("totalPages")
                .and_then(Value::as_u64)
                .map(|n| u32::try_from(n).unwrap_or(u32::MAX))
                .unwrap_or(1);
            Ok(Page::new(items, total_pages))
        }
        _ => Err(PageDecodeError::UnexpectedShape),
    }
}

fn decode_items<T: DeserializeOwned>(items: Vec<Value>) -> Result<Vec<T>, serde_json::Error> {
    items.into_iter().map(serde_json::from_value).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, PartialEq, Deserialize)]
    struct Row {
        id: i64,
        name: String,
    }

    #[test]
    fn test_decode_envelope_keeps_order() {
        let body = json!({
            "categories": [{"id": 2, "name": "Poetry"}, {"id": 1, "name": "Fiction"}],
            "totalPages": 4
        });
        let page: Page<Row> = decode_page(body, "categories").unwrap();
        assert_eq!(page.total_pages, 4);
        assert_eq!(
            page.items,
            vec![
                Row { id: 2, name: "Poetry".into() },
                Row { id: 1, name: "Fiction".into() },
            ]
        );
    }

    #[test]
    fn test_decode_bare_array_is_single_page() {
        let body = json!([{"id": 1, "name": "Fiction"}]);
        let page: Page<Row> = decode_page(body, "categories").unwrap();
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.items.len(), 1);
    }

    #[test]
    fn test_decode_missing_key() {
        let body = json!({"data": [], "totalPages": 1});
        let err = decode_page::<Row>(body, "items").unwrap_err();
        assert!(matches!(err, PageDecodeError::MissingCollection(key) if key == "items"));
    }

    #[test]
    fn test_zero_total_pages_normalised() {
        let body = json!({"data": [], "totalPages": 0});
        let page: Page<Row> = decode_page(body, "data").unwrap();
        assert_eq!(page.total_pages, 1);
        assert!(page.items.is_empty());
    }

    #[test]
    fn test_malformed_record() {
        let body = json!({"data": [{"id": "x"}], "totalPages": 1});
        assert!(matches!(
            decode_page::<Row>(body, "data"),
            Err(PageDecodeError::Record(_))
        ));
    }
}
