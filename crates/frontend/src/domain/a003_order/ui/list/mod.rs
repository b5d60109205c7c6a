use contracts::domain::a003_order::aggregate::{Order, OrderFilterForm, OrderStatus};
use contracts::shared::validation::ValidationErrors;
use leptos::prelude::*;
use thaw::*;

use super::details::OrderDetailDialog;
use crate::domain::a003_order::api::{self, OrderResource};
use crate::layout::global_context::use_global_context;
use crate::layout::tabs::tab_labels::A003_ORDER;
use crate::shared::components::{MenuItem, PaginationControls, RowMenu};
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::list_view::{use_list_controller, RowAction, SelectionStep};
use crate::shared::number_format::format_vnd;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;

pub fn status_badge_class(status: &OrderStatus) -> &'static str {
    match status {
        OrderStatus::Pending => "badge badge--warning",
        OrderStatus::Processing | OrderStatus::Shipped => "badge badge--primary",
        OrderStatus::Delivered | OrderStatus::Completed => "badge badge--success",
        OrderStatus::Cancelled => "badge badge--error",
        OrderStatus::Other(_) => "badge badge--neutral",
    }
}

/// Row menu of an order: view, then every status it can move to.
pub fn order_menu(order: &Order) -> Vec<MenuItem> {
    let mut items = vec![MenuItem::new(RowAction::ViewDetail, "eye")];
    items.extend(
        order
            .order_status
            .targets()
            .into_iter()
            .map(|status| MenuItem::new(RowAction::ChangeStatus(status.to_string()), "check")),
    );
    items
}

/// Raw filter panel input; validated only when Search is pressed.
#[derive(Clone, Copy)]
struct FilterInputs {
    start_date: RwSignal<String>,
    end_date: RwSignal<String>,
    min_price: RwSignal<String>,
    max_price: RwSignal<String>,
    customer_phone: RwSignal<String>,
    customer_name: RwSignal<String>,
    user_id: RwSignal<String>,
    order_status: RwSignal<String>,
}

impl FilterInputs {
    fn new() -> Self {
        Self {
            start_date: RwSignal::new(String::new()),
            end_date: RwSignal::new(String::new()),
            min_price: RwSignal::new(String::new()),
            max_price: RwSignal::new(String::new()),
            customer_phone: RwSignal::new(String::new()),
            customer_name: RwSignal::new(String::new()),
            user_id: RwSignal::new(String::new()),
            order_status: RwSignal::new(String::new()),
        }
    }

    fn to_form(self) -> OrderFilterForm {
        OrderFilterForm {
            start_date: self.start_date.get_untracked(),
            end_date: self.end_date.get_untracked(),
            min_price: self.min_price.get_untracked(),
            max_price: self.max_price.get_untracked(),
            customer_phone: self.customer_phone.get_untracked(),
            customer_name: self.customer_name.get_untracked(),
            user_id: self.user_id.get_untracked(),
            order_status: self.order_status.get_untracked(),
        }
    }

    fn clear(self) {
        for field in [
            self.start_date,
            self.end_date,
            self.min_price,
            self.max_price,
            self.customer_phone,
            self.customer_name,
            self.user_id,
            self.order_status,
        ] {
            field.set(String::new());
        }
    }
}

#[component]
fn FilterField(
    label: &'static str,
    value: RwSignal<String>,
    #[prop(optional)] input_type: &'static str,
    field: &'static str,
    errors: RwSignal<ValidationErrors>,
) -> impl IntoView {
    let input_type = if input_type.is_empty() { "text" } else { input_type };
    view! {
        <div class="form__group">
            <Label>{label}</Label>
            <input
                class="form__input"
                type=input_type
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            {move || errors.with(|e| e.get(field).map(str::to_string)).map(|e| view! { <div class="form__error">{e}</div> })}
        </div>
    }
}

#[component]
pub fn OrderList() -> impl IntoView {
    let ctl = use_list_controller::<OrderResource>();
    let tabs = use_global_context();
    ctl.load_on(move || tabs.list_version(A003_ORDER));

    let inputs = FilterInputs::new();
    let filter_errors = RwSignal::new(ValidationErrors::new());
    let is_expanded = RwSignal::new(true);

    let apply_filter = move || match inputs.to_form().validate() {
        Ok(filter) => {
            filter_errors.set(ValidationErrors::new());
            ctl.apply_filter(filter);
        }
        Err(errors) => filter_errors.set(errors),
    };
    let reset_filter = move || {
        inputs.clear();
        filter_errors.set(ValidationErrors::new());
        ctl.apply_filter(Default::default());
    };

    let change_status = move |order: Order, status: String| {
        let id = order.order_id;
        let target = OrderStatus::from(status);
        let success = format!("Order #{} moved to {}", id, target);
        let requested = target.clone();
        ctl.run_row_mutation(
            RowAction::ChangeStatus(target.to_string()),
            success,
            move |client| async move { api::change_status(&client, id, &requested).await },
            move |state, _| {
                state.patch(&id, |o| o.order_status = target);
            },
        );
    };

    let on_action = move |action: RowAction| {
        if let SelectionStep::Submit(order, RowAction::ChangeStatus(status)) = ctl.choose(action) {
            change_status(order, status);
        }
    };

    let loading = Signal::derive(move || ctl.state.with(|s| s.loading));
    let busy = Signal::derive(move || ctl.is_submitting());

    view! {
        <PageFrame page_id="a003_order--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Orders"</h1>
                </div>
                <div class="page__header-right">
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
                        <div
                            class="filter-panel-header__left"
                            on:click=move |_| is_expanded.update(|e| *e = !*e)
                        >
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

                    <Show when=move || is_expanded.get()>
                        <div class="filter-panel-content">
                            <div class="filter-grid">
                                <FilterField label="Start date" value=inputs.start_date input_type="date" field="start_date" errors=filter_errors />
                                <FilterField label="End date" value=inputs.end_date input_type="date" field="end_date" errors=filter_errors />
                                <FilterField label="Min price" value=inputs.min_price input_type="number" field="min_price" errors=filter_errors />
                                <FilterField label="Max price" value=inputs.max_price input_type="number" field="max_price" errors=filter_errors />
                                <FilterField label="Customer phone" value=inputs.customer_phone field="customer_phone" errors=filter_errors />
                                <FilterField label="Customer name" value=inputs.customer_name field="customer_name" errors=filter_errors />
                                <FilterField label="User id" value=inputs.user_id input_type="number" field="user_id" errors=filter_errors />
                                <div class="form__group">
                                    <Label>"Status"</Label>
                                    <select
                                        class="form__select"
                                        prop:value=move || inputs.order_status.get()
                                        on:change=move |ev| inputs.order_status.set(event_target_value(&ev))
                                    >
                                        <option value="">"All"</option>
                                        {OrderStatus::KNOWN.into_iter().map(|status| view! {
                                            <option value=status.to_string()>{status.to_string()}</option>
                                        }).collect_view()}
                                    </select>
                                </div>
                            </div>
                            <Flex gap=FlexGap::Small>
                                <Button
                                    appearance=ButtonAppearance::Primary
                                    on_click=move |_| apply_filter()
                                    disabled=loading
                                >
                                    {icon("search")}
                                    " Search"
                                </Button>
                                <Button
                                    appearance=ButtonAppearance::Secondary
                                    on_click=move |_| reset_filter()
                                >
                                    "Reset"
                                </Button>
                            </Flex>
                        </div>
                    </Show>
                </div>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell min_width=70.0>"Order"</TableHeaderCell>
                                <TableHeaderCell min_width=180.0>"Customer"</TableHeaderCell>
                                <TableHeaderCell min_width=120.0>"Phone"</TableHeaderCell>
                                <TableHeaderCell min_width=150.0>"Date"</TableHeaderCell>
                                <TableHeaderCell min_width=120.0>"Total"</TableHeaderCell>
                                <TableHeaderCell min_width=100.0>"Status"</TableHeaderCell>
                                <TableHeaderCell min_width=60.0></TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || ctl.state.with(|s| s.items.clone())
                                key=|o: &Order| (o.order_id, o.order_status.to_string())
                                children=move |order| {
                                    let id = order.order_id;
                                    let menu = order_menu(&order);
                                    let badge = status_badge_class(&order.order_status);
                                    let for_menu = order.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>{format!("#{}", id)}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span style="font-weight: 500;">{order.customer_name.clone()}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{order.customer_phone.clone().unwrap_or_default()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{format_datetime(&order.order_date)}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{format_vnd(order.total)}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <span class=badge>{order.order_status.to_string()}</span>
                                            </TableCell>
                                            <TableCell>
                                                <RowMenu
                                                    open=Signal::derive(move || ctl.menu_open_for(&id))
                                                    items=menu
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
                        <div class="table__empty">"No orders match the filter"</div>
                    </Show>
                </div>

                {move || ctl.viewing().map(|order| view! {
                    <OrderDetailDialog order=order on_close=Callback::new(move |_| ctl.close()) />
                })}
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn order(status: &str) -> Order {
        serde_json::from_value(json!({
            "orderId": 3,
            "customerName": "Alice Johnson",
            "orderDate": "2024-03-15T10:00:00",
            "total": 150000.0,
            "orderStatus": status
        }))
        .unwrap()
    }

    #[test]
    fn test_menu_offers_other_statuses() {
        let items = order_menu(&order("Shipped"));
        assert_eq!(items[0].action, RowAction::ViewDetail);
        assert_eq!(items.len(), 1 + OrderStatus::KNOWN.len() - 1);
        assert!(!items
            .iter()
            .any(|i| i.action == RowAction::ChangeStatus("Shipped".into())));
        assert!(items
            .iter()
            .any(|i| i.action == RowAction::ChangeStatus("Delivered".into())));
    }

    #[test]
    fn test_unknown_status_can_move_anywhere() {
        let items = order_menu(&order("OnHold"));
        assert_eq!(items.len(), 1 + OrderStatus::KNOWN.len());
        assert_eq!(
            status_badge_class(&OrderStatus::Other("OnHold".into())),
            "badge badge--neutral"
        );
    }

    #[test]
    fn test_status_badges() {
        assert_eq!(status_badge_class(&OrderStatus::Cancelled), "badge badge--error");
        assert_eq!(status_badge_class(&OrderStatus::Completed), "badge badge--success");
    }
}
