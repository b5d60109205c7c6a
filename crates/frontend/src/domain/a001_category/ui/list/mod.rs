use contracts::domain::a001_category::aggregate::{Category, CategoryFilter};
use leptos::prelude::*;
use thaw::*;

use crate::domain::a001_category::api::CategoryResource;
use crate::layout::global_context::use_global_context;
use crate::layout::tabs::tab_labels::A001_CATEGORY;
use crate::layout::tabs::{edit_tab_key, new_tab_key, tab_label_for_key};
use crate::shared::components::{MenuItem, PaginationControls, RowMenu};
use crate::shared::icons::icon;
use crate::shared::list_view::{use_list_controller, RowAction, SelectionStep};
use crate::shared::modal::ConfirmDialog;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;

#[component]
pub fn CategoryList() -> impl IntoView {
    let ctl = use_list_controller::<CategoryResource>();
    let tabs = use_global_context();
    ctl.load_on(move || tabs.list_version(A001_CATEGORY));

    let search = RwSignal::new(String::new());

    let apply_search = move || {
        ctl.apply_filter(CategoryFilter {
            search: search.get_untracked().trim().to_string(),
        });
    };
    let reset_search = move || {
        search.set(String::new());
        ctl.apply_filter(CategoryFilter::default());
    };

    let open_form = move |key: String| tabs.open_tab(&key, &tab_label_for_key(&key));

    let on_action = move |action: RowAction| {
        if let SelectionStep::Navigate(category) = ctl.choose(action) {
            open_form(edit_tab_key(A001_CATEGORY, category.id));
        }
    };

    let loading = Signal::derive(move || ctl.state.with(|s| s.loading));
    let busy = Signal::derive(move || ctl.is_submitting());

    view! {
        <PageFrame page_id="a001_category--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Categories"</h1>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| open_form(new_tab_key(A001_CATEGORY))
                    >
                        {icon("plus")}
                        " Add Category"
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
                            {icon("search")}
                            <span class="filter-panel__title">"Search"</span>
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
                                    apply_search();
                                }
                            }>
                                <Input value=search placeholder="Category name..." />
                            </div>
                            <Button
                                appearance=ButtonAppearance::Primary
                                on_click=move |_| apply_search()
                                disabled=loading
                            >
                                "Search"
                            </Button>
                            <Button
                                appearance=ButtonAppearance::Secondary
                                on_click=move |_| reset_search()
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
                                <TableHeaderCell min_width=200.0>"Name"</TableHeaderCell>
                                <TableHeaderCell min_width=300.0>"Description"</TableHeaderCell>
                                <TableHeaderCell min_width=60.0></TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || ctl.state.with(|s| s.items.clone())
                                key=|c: &Category| (c.id, c.name.clone())
                                children=move |category| {
                                    let id = category.id;
                                    let for_menu = category.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span style="font-weight: 500;">{category.name.clone()}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {category.description.clone().unwrap_or_default()}
                                                </TableCellLayout>
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
                        <div class="table__empty">"No categories found"</div>
                    </Show>
                </div>

                {move || ctl.pending_confirmation().map(|(category, _)| view! {
                    <ConfirmDialog
                        title="Delete category"
                        message=format!("Delete category \"{}\"? This cannot be undone.", category.name)
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
