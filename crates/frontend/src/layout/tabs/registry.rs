//! Tab content registry: maps a tab key to its page.

use super::tab_labels::{parse_tab_key, TabRoute, A001_CATEGORY, A002_BOOK, A003_ORDER, A004_USER};
use crate::domain::a001_category::ui::details::CategoryDetails;
use crate::domain::a001_category::ui::list::CategoryList;
use crate::domain::a002_book::ui::details::BookDetails;
use crate::domain::a002_book::ui::list::BookList;
use crate::domain::a003_order::ui::list::OrderList;
use crate::domain::a004_user::ui::details::UserDetails;
use crate::domain::a004_user::ui::list::UserList;
use crate::layout::global_context::AppGlobalContext;
use leptos::logging::log;
use leptos::prelude::*;

/// Renders the content of the tab with `key`.
///
/// Form tabs close themselves on cancel; on save they also send the user back
/// to the list, which reloads.
pub fn render_tab_content(key: &str, tabs_store: AppGlobalContext) -> AnyView {
    let route = parse_tab_key(key);
    let form_key = key.to_string();

    let on_cancel = {
        let form_key = form_key.clone();
        Callback::new(move |_: ()| tabs_store.close_tab(&form_key))
    };
    let on_saved = |list_key: &'static str| {
        let form_key = form_key.clone();
        Callback::new(move |_: ()| tabs_store.finish_form(&form_key, list_key))
    };

    match route {
        TabRoute::List(A001_CATEGORY) => view! { <CategoryList /> }.into_any(),
        TabRoute::New(A001_CATEGORY) => view! {
            <CategoryDetails id=None on_saved=on_saved(A001_CATEGORY) on_cancel=on_cancel />
        }
        .into_any(),
        TabRoute::Edit(A001_CATEGORY, id) => view! {
            <CategoryDetails id=Some(id) on_saved=on_saved(A001_CATEGORY) on_cancel=on_cancel />
        }
        .into_any(),

        TabRoute::List(A002_BOOK) => view! { <BookList /> }.into_any(),
        TabRoute::New(A002_BOOK) => view! {
            <BookDetails id=None on_saved=on_saved(A002_BOOK) on_cancel=on_cancel />
        }
        .into_any(),
        TabRoute::Edit(A002_BOOK, id) => view! {
            <BookDetails id=Some(id) on_saved=on_saved(A002_BOOK) on_cancel=on_cancel />
        }
        .into_any(),

        TabRoute::List(A003_ORDER) => view! { <OrderList /> }.into_any(),

        TabRoute::List(A004_USER) => view! { <UserList /> }.into_any(),
        TabRoute::New(A004_USER) => view! {
            <UserDetails id=None on_saved=on_saved(A004_USER) on_cancel=on_cancel />
        }
        .into_any(),
        TabRoute::Edit(A004_USER, id) => view! {
            <UserDetails id=Some(id) on_saved=on_saved(A004_USER) on_cancel=on_cancel />
        }
        .into_any(),

        _ => {
            log!("⚠️ Unknown tab type: {}", key);
            view! { <div class="placeholder">{"Not implemented yet"}</div> }.into_any()
        }
    }
}
