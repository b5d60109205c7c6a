use contracts::domain::a003_order::aggregate::{Order, OrderDetail};
use leptos::prelude::*;
use thaw::*;

use crate::shared::date_utils::format_datetime;
use crate::shared::modal::Modal;
use crate::shared::number_format::{format_percent, format_vnd};

/// Price of one order line after its discount.
pub fn line_total(detail: &OrderDetail) -> f64 {
    detail.unit_price * detail.quantity as f64 * (1.0 - detail.discount / 100.0)
}

/// Read-only order dialog: order information and its lines.
#[component]
pub fn OrderDetailDialog(order: Order, on_close: Callback<()>) -> impl IntoView {
    let title = format!("Order #{}", order.order_id);
    let lines = order.order_details.clone();
    let no_lines = lines.is_empty();

    view! {
        <Modal title=title on_close=on_close class="modal--wide">
            <div class="order-info">
                <h3 class="order-info__title">"Order Information"</h3>
                <dl class="order-info__grid">
                    <dt>"ID"</dt><dd>{order.order_id.to_string()}</dd>
                    <dt>"Customer"</dt><dd>{order.customer_name.clone()}</dd>
                    <dt>"Phone"</dt><dd>{order.customer_phone.clone().unwrap_or_else(|| "-".to_string())}</dd>
                    <dt>"Order date"</dt><dd>{format_datetime(&order.order_date)}</dd>
                    <dt>"Total"</dt><dd>{format_vnd(order.total)}</dd>
                    <dt>"Status"</dt><dd>{order.order_status.to_string()}</dd>
                </dl>
            </div>

            <h3 class="order-info__title">"Order Details"</h3>
            <Table attr:style="width: 100%;">
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"Image"</TableHeaderCell>
                        <TableHeaderCell>"Book"</TableHeaderCell>
                        <TableHeaderCell>"Unit price"</TableHeaderCell>
                        <TableHeaderCell>"Quantity"</TableHeaderCell>
                        <TableHeaderCell>"Discount"</TableHeaderCell>
                        <TableHeaderCell>"Line total"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {lines.into_iter().map(|detail| {
                        let name = detail.book_name().to_string();
                        let thumb = match detail.cover_url().map(str::to_string) {
                            Some(url) => {
                                let alt = name.clone();
                                view! { <img class="table__thumb" src=url alt=alt /> }.into_any()
                            }
                            None => view! { <span class="form__hint">"No image"</span> }.into_any(),
                        };
                        let unit_price = format_vnd(detail.unit_price);
                        let quantity = detail.quantity;
                        let discount = format_percent(detail.discount);
                        let total = format_vnd(line_total(&detail));
                        view! {
                            <TableRow>
                                <TableCell>{thumb}</TableCell>
                                <TableCell>
                                    <TableCellLayout truncate=true>{name}</TableCellLayout>
                                </TableCell>
                                <TableCell>{unit_price}</TableCell>
                                <TableCell>{quantity}</TableCell>
                                <TableCell>{discount}</TableCell>
                                <TableCell>{total}</TableCell>
                            </TableRow>
                        }
                    }).collect_view()}
                </TableBody>
            </Table>
            {no_lines.then(|| view! { <div class="table__empty">"This order has no lines"</div> })}
        </Modal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_book::aggregate::BookId;

    #[test]
    fn test_line_total_applies_discount() {
        let detail = OrderDetail {
            book_id: BookId(1),
            unit_price: 100_000.0,
            quantity: 3,
            discount: 10.0,
            book: None,
        };
        assert!((line_total(&detail) - 270_000.0).abs() < 1e-6);
    }

    #[test]
    fn test_line_total_without_discount() {
        let detail = OrderDetail {
            book_id: BookId(2),
            unit_price: 50_000.0,
            quantity: 2,
            discount: 0.0,
            book: None,
        };
        assert_eq!(line_total(&detail), 100_000.0);
    }
}
