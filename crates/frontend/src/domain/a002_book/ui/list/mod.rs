use contracts::domain::a002_book::aggregate::{Book, BookFilter, PriceSort};
use leptos::prelude::*;
use thaw::*;

use crate::domain::a002_book::api::BookResource;
use crate::layout::global_context::use_global_context;
use crate::layout::tabs::tab_labels::A002_BOOK;
use crate::layout::tabs::{edit_tab_key, new_tab_key, tab_label_for_key};
use crate::shared::components::{MenuItem, PaginationControls, RowMenu};
use crate::shared::icons::icon;
use crate::shared::list_view::{use_list_controller, RowAction, SelectionStep};
use crate::shared::modal::ConfirmDialog;
use crate::shared::number_format::{format_percent, format_vnd};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;

#[component]
pub fn BookList() -> impl IntoView {
    let ctl = use_list_controller::<BookResource>();
    let tabs = use_global_context();
    ctl.load_on(move || tabs.list_version(A002_BOOK));

    let search = RwSignal::new(String::new());
    let sort = RwSignal::new(PriceSort::None);

    let apply_filter = move || {
        ctl.apply_filter(BookFilter {
            search: search.get_untracked().trim().to_string(),
            sort: sort.get_untracked(),
        });
    };
    let reset_filter = move || {
        search.set(String::new());
        sort.set(PriceSort::None);
        ctl.apply_filter(BookFilter::default());
    };

    let open_form = move |key: String| tabs.open_tab(&key, &tab_label_for_key(&key));

    let on_action = move |action: RowAction| {
        if let SelectionStep::Navigate(book) = ctl.choose(action) {
            open_form(edit_tab_key(A002_BOOK, book.book_id));
        }
    };

    let loading = Signal::derive(move || ctl.state.with(|s| s.loading));
    let busy = Signal::derive(move || ctl.is_submitting());

    view! {
        <PageFrame page_id="a002_book--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Products"</h1>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| open_form(new_tab_key(A002_BOOK))
                    >
                        {icon("plus")}
                        " Add Product"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| ctl.reload()
                        disabled=loading
                    >
                        {icon("refresh")}
                        {move || if loading.get() { " Loading..." } else { " Refresh" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || ctl.state.with(|s| s.error.clone()).map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <div class="filter-panel">
                    <div class="filter-panel-header">
                        <div class="filter-panel-header__left">
                            {icon("filter")}
                            <span class="filter-panel__title">"Filters"</span>
                        </div>
                        <div class="filter-panel-header__center">
                            <PaginationControls
                                current_page=Signal::derive(move || ctl.state.with(|s| s.page_index))
                                total_pages=Signal::derive(move || ctl.state.with(|s| s.total_pages))
                                page_size=Signal::derive(move || ctl.query.with(|q| q.page_size))
                                on_page_change=Callback::new(move |page| ctl.go_to_page(page))
                                on_page_size_change=Callback::new(move |size| ctl.set_page_size(size))
                                disabled=loading
                            />
                        </div>
                    </div>

                    <div class="filter-panel-content">
                        <Flex gap=FlexGap::Small align=FlexAlign::End>
                            <div style="flex: 1; max-width: 320px;" on:keydown=move |ev| {
                                if ev.key() == "Enter" {
                                    apply_filter();
                                }
                            }>
                                <Input value=search placeholder="Product name..." />
                            </div>
                            <div class="form__group form__group--inline">
                                <Label>"Price"</Label>
                                <select
                                    class="form__select"
                                    prop:value=move || sort.get().key()
                                    on:change=move |ev| {
                                        sort.set(PriceSort::from_key(&event_target_value(&ev)));
                                        apply_filter();
                                    }
                                >
                                    {PriceSort::ALL.into_iter().map(|option| view! {
                                        <option value=option.key()>{option.label()}</option>
                                    }).collect_view()}
                                </select>
                            </div>
                            <Button
                                appearance=ButtonAppearance::Primary
                                on_click=move |_| apply_filter()
                                disabled=loading
                            >
                                "Search"
                            </Button>
                            <Button
                                appearance=ButtonAppearance::Secondary
                                on_click=move |_| reset_filter()
                            >
                                "Reset"
                            </Button>
                        </Flex>
                    </div>
                </div>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell min_width=64.0>"Image"</TableHeaderCell>
                                <TableHeaderCell min_width=220.0>"Name"</TableHeaderCell>
                                <TableHeaderCell min_width=140.0>"Category"</TableHeaderCell>
                                <TableHeaderCell min_width=120.0>"Price"</TableHeaderCell>
                                <TableHeaderCell min_width=80.0>"Stock"</TableHeaderCell>
                                <TableHeaderCell min_width=80.0>"Discount"</TableHeaderCell>
                                <TableHeaderCell min_width=60.0></TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || ctl.state.with(|s| s.items.clone())
                                key=|b: &Book| b.book_id
                                children=move |book| {
                                    let id = book.book_id;
                                    let thumbnail = book.images.first().map(|i| i.url.clone());
                                    let price = format_vnd(book.unit_price);
                                    let discount = format_percent(book.discount);
                                    let for_menu = book.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                {match thumbnail {
                                                    Some(url) => view! { <img class="table__thumb" src=url alt="" /> }.into_any(),
                                                    None => view! { <span class="table__thumb table__thumb--empty">{icon("image")}</span> }.into_any(),
                                                }}
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span style="font-weight: 500;">{book.book_name.clone()}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {book.category_name.clone().unwrap_or_else(|| book.category_id.to_string())}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{price}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{book.units_in_stock}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{discount}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <RowMenu
                                                    open=Signal::derive(move || ctl.menu_open_for(&id))
                                                    items=vec![
                                                        MenuItem::new(RowAction::Edit, "edit"),
                                                        MenuItem::new(RowAction::Delete, "trash").danger(),
                                                    ]
                                                    on_open=Callback::new(move |_| {
                                                        ctl.open_menu(for_menu.clone());
                                                    })
                                                    on_close=Callback::new(move |_| ctl.close())
                                                    on_select=Callback::new(on_action)
                                                    disabled=busy
                                                />
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                    <Show when=move || ctl.state.with(|s| s.is_loaded && s.items.is_empty())>
                        <div class="table__empty">"No products found"</div>
                    </Show>
                </div>

                {move || ctl.pending_confirmation().map(|(book, _)| view! {
                    <ConfirmDialog
                        title="Delete product"
                        message=format!("Delete product \"{}\"? This cannot be undone.", book.book_name)
                        confirm_label="Delete"
                        on_confirm=Callback::new(move |_| ctl.delete_selected())
                        on_cancel=Callback::new(move |_| ctl.close())
                        busy=busy
                    />
                })}
            </div>
        </PageFrame>
    }
}
