//! URL helpers for frontend-backend communication.

/// Build a full API URL from the configured base, a path and an optional
/// query string.
///
/// # Example
/// ```rust,ignore
/// let url = api_url("http://localhost:5000", "/api/books", "pageIndex=1&pageSize=5");
/// ```
pub fn api_url(base: &str, path: &str, query: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{}", path)
    };
    if query.is_empty() {
        format!("{}{}", base, path)
    } else {
        format!("{}{}?{}", base, path, query)
    }
}

/// `"/api/books/7"` from a collection path and an id.
pub fn item_path(collection: &str, id: impl std::fmt::Display) -> String {
    format!(
        "{}/{}",
        collection.trim_end_matches('/'),
        urlencoding::encode(&id.to_string())
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_url() {
        assert_eq!(
            api_url("http://localhost:5000/", "/api/categories", "pageIndex=1&pageSize=5"),
            "http://localhost:5000/api/categories?pageIndex=1&pageSize=5"
        );
        assert_eq!(api_url("", "api/books/7", ""), "/api/books/7");
    }

    #[test]
    fn test_item_path() {
        assert_eq!(item_path("/api/categories", 1), "/api/categories/1");
        assert_eq!(item_path("/api/users/", "a b"), "/api/users/a%20b");
    }
}
