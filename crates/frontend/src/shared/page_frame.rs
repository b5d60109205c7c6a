//! PageFrame: root wrapper for every page rendered inside a tab.
//!
//! Puts two metadata attributes on the root element:
//!   - `id`                  `"{entity}--{category}"`, e.g. `"a001_category--list"`
//!   - `data-page-category`  one of the PAGE_CAT_* constants

use super::page_standard::*;
use leptos::logging::log;
use leptos::prelude::*;

fn frame_class(category: &str, extra: &str) -> String {
    let base_class = match category {
        PAGE_CAT_DETAIL => "page page--detail",
        PAGE_CAT_SYSTEM => "page page--system",
        _ => "page",
    };
    if extra.is_empty() {
        base_class.to_string()
    } else {
        format!("{base_class} {extra}")
    }
}

/// Root wrapper that sets standard metadata on every tab page.
#[component]
pub fn PageFrame(
    /// HTML id in format `{entity}--{category}`.
    page_id: &'static str,
    /// One of the PAGE_CAT_* constants from `page_standard`.
    category: &'static str,
    /// Additional CSS classes appended after the base class.
    #[prop(optional)]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    if !is_valid_page_id(page_id) || !is_known_category(category) {
        log!("⚠️ Non-standard page metadata: id='{}' category='{}'", page_id, category);
    }

    view! {
        <div
            id=page_id
            class=frame_class(category, class)
            data-page-category=category
        >
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_class() {
        assert_eq!(frame_class(PAGE_CAT_LIST, ""), "page");
        assert_eq!(frame_class(PAGE_CAT_DETAIL, ""), "page page--detail");
        assert_eq!(frame_class(PAGE_CAT_LIST, "page--wide"), "page page--wide");
    }
}
