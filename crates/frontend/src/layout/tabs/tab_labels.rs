//! Tab keys and tab titles.
//!
//! List tabs use the entity key itself; form tabs append `_new` or
//! `_edit_<id>` to it.

pub const A001_CATEGORY: &str = "a001_category";
pub const A002_BOOK: &str = "a002_book";
pub const A003_ORDER: &str = "a003_order";
pub const A004_USER: &str = "a004_user";

const ENTITY_KEYS: [&str; 4] = [A001_CATEGORY, A002_BOOK, A003_ORDER, A004_USER];

/// (list title, element title) of an entity key
fn entity_names(entity_key: &str) -> Option<(&'static str, &'static str)> {
    match entity_key {
        A001_CATEGORY => Some(("Categories", "Category")),
        A002_BOOK => Some(("Products", "Product")),
        A003_ORDER => Some(("Orders", "Order")),
        A004_USER => Some(("Users", "User")),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabRoute<'a> {
    List(&'a str),
    New(&'a str),
    Edit(&'a str, i64),
    Unknown,
}

pub fn new_tab_key(entity_key: &str) -> String {
    format!("{}_new", entity_key)
}

pub fn edit_tab_key(entity_key: &str, id: impl std::fmt::Display) -> String {
    format!("{}_edit_{}", entity_key, id)
}

pub fn parse_tab_key(key: &str) -> TabRoute<'_> {
    for entity in ENTITY_KEYS {
        let Some(rest) = key.strip_prefix(entity) else {
            continue;
        };
        if rest.is_empty() {
            return TabRoute::List(entity);
        }
        if rest == "_new" {
            return TabRoute::New(entity);
        }
        if let Some(id) = rest.strip_prefix("_edit_").and_then(|id| id.parse().ok()) {
            return TabRoute::Edit(entity, id);
        }
    }
    TabRoute::Unknown
}

/// Readable tab title for a key. Falls back to the key itself.
pub fn tab_label_for_key(key: &str) -> String {
    match parse_tab_key(key) {
        TabRoute::List(entity) => entity_names(entity).map(|(list, _)| list.to_string()),
        TabRoute::New(entity) => entity_names(entity).map(|(_, element)| format!("New {}", element)),
        TabRoute::Edit(entity, id) => {
            entity_names(entity).map(|(_, element)| detail_tab_label(element, &id.to_string()))
        }
        TabRoute::Unknown => None,
    }
    .unwrap_or_else(|| key.to_string())
}

/// Detail tab title: `<entity> · <identifier>`.
pub fn detail_tab_label(entity_label: &str, identifier: &str) -> String {
    format!("{} · {}", entity_label, identifier)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tab_key() {
        assert_eq!(parse_tab_key("a001_category"), TabRoute::List(A001_CATEGORY));
        assert_eq!(parse_tab_key("a002_book_new"), TabRoute::New(A002_BOOK));
        assert_eq!(parse_tab_key("a004_user_edit_12"), TabRoute::Edit(A004_USER, 12));
        assert_eq!(parse_tab_key("a004_user_edit_x"), TabRoute::Unknown);
        assert_eq!(parse_tab_key("a009_unknown"), TabRoute::Unknown);
    }

    #[test]
    fn test_keys_round_trip() {
        assert_eq!(parse_tab_key(&new_tab_key(A001_CATEGORY)), TabRoute::New(A001_CATEGORY));
        assert_eq!(parse_tab_key(&edit_tab_key(A002_BOOK, 7)), TabRoute::Edit(A002_BOOK, 7));
    }

    #[test]
    fn test_labels() {
        assert_eq!(tab_label_for_key("a002_book"), "Products");
        assert_eq!(tab_label_for_key("a001_category_new"), "New Category");
        assert_eq!(tab_label_for_key("a002_book_edit_7"), "Product · 7");
        assert_eq!(tab_label_for_key("whatever"), "whatever");
    }
}
