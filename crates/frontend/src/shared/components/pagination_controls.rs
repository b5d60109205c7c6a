use crate::shared::icons::icon;
use leptos::prelude::*;

/// Page buttons that can be enabled for a 1-based `page` out of `total_pages`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageNav {
    pub has_prev: bool,
    pub has_next: bool,
}

pub fn page_nav(page: u32, total_pages: u32) -> PageNav {
    let total = total_pages.max(1);
    PageNav {
        has_prev: page > 1,
        has_next: page < total,
    }
}

/// PaginationControls component - reusable pagination controls
#[component]
pub fn PaginationControls(
    /// Current page (1-based, as the backend counts)
    #[prop(into)]
    current_page: Signal<u32>,

    /// Total number of pages
    #[prop(into)]
    total_pages: Signal<u32>,

    /// Current page size
    #[prop(into)]
    page_size: Signal<u32>,

    /// Callback when page changes
    on_page_change: Callback<u32>,

    /// Callback when page size changes
    on_page_size_change: Callback<u32>,

    /// Disables navigation while a page is loading
    #[prop(into, optional)]
    disabled: Signal<bool>,

    /// Available page size options (optional, defaults to [5, 10, 20])
    #[prop(optional)]
    page_size_options: Option<Vec<u32>>,
) -> impl IntoView {
    let page_size_opts = page_size_options.unwrap_or_else(|| vec![5, 10, 20]);
    let nav = move || page_nav(current_page.get(), total_pages.get());

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(1)
                disabled=move || disabled.get() || !nav().has_prev
                title="First page"
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    if nav().has_prev {
                        on_page_change.run(current_page.get() - 1);
                    }
                }
                disabled=move || disabled.get() || !nav().has_prev
                title="Previous page"
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">
                {move || format!("{} / {}", current_page.get(), total_pages.get().max(1))}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    if nav().has_next {
                        on_page_change.run(current_page.get() + 1);
                    }
                }
                disabled=move || disabled.get() || !nav().has_next
                title="Next page"
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(total_pages.get().max(1))
                disabled=move || disabled.get() || !nav().has_next
                title="Last page"
            >
                {icon("chevrons-right")}
            </button>
            <select
                class="page-size-select"
                on:change=move |ev| {
                    if let Ok(size) = event_target_value(&ev).parse() {
                        on_page_size_change.run(size);
                    }
                }
                prop:value=move || page_size.get().to_string()
            >
                {page_size_opts.iter().map(|&size| {
                    view! {
                        <option value={size.to_string()} selected=move || page_size.get() == size>
                            {size.to_string()}
                        </option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_nav_bounds() {
        assert_eq!(page_nav(1, 1), PageNav { has_prev: false, has_next: false });
        assert_eq!(page_nav(1, 3), PageNav { has_prev: false, has_next: true });
        assert_eq!(page_nav(2, 3), PageNav { has_prev: true, has_next: true });
        assert_eq!(page_nav(3, 3), PageNav { has_prev: true, has_next: false });
    }

    #[test]
    fn test_zero_total_counts_as_one_page() {
        assert_eq!(page_nav(1, 0), PageNav { has_prev: false, has_next: false });
    }
}
