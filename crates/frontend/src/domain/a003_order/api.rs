use contracts::domain::a003_order::aggregate::{Order, OrderFilter, OrderId, OrderStatus};
use serde_json::Value;

use crate::shared::api_utils::item_path;
use crate::shared::http::{ApiClient, ApiError};
use crate::shared::list_view::{ListRecord, ListResource};

pub const COLLECTION: &str = "/api/orders";

pub struct OrderResource;

impl ListResource for OrderResource {
    type Record = Order;
    type Filter = OrderFilter;

    const COLLECTION: &'static str = COLLECTION;
    const ENVELOPE_KEY: &'static str = "items";
    const NOUN: &'static str = "Order";
}

impl ListRecord for Order {
    type Id = OrderId;

    fn id(&self) -> OrderId {
        self.order_id
    }

    fn label(&self) -> String {
        format!("#{}", self.order_id)
    }
}

pub fn status_path(id: OrderId) -> String {
    format!("{}/status", item_path(COLLECTION, id))
}

pub fn status_query(status: &OrderStatus) -> String {
    format!("newStatus={}", urlencoding::encode(status.as_str()))
}

/// `PUT /api/orders/{id}/status?newStatus=..`
pub async fn change_status(
    client: &ApiClient,
    id: OrderId,
    status: &OrderStatus,
) -> Result<Value, ApiError> {
    client.put_empty(&status_path(id), &status_query(status)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_request() {
        assert_eq!(status_path(OrderId(12)), "/api/orders/12/status");
        assert_eq!(status_query(&OrderStatus::Shipped), "newStatus=Shipped");
        assert_eq!(
            status_query(&OrderStatus::Other("On Hold".into())),
            "newStatus=On%20Hold"
        );
    }

    #[test]
    fn test_label() {
        let order: Order = serde_json::from_value(serde_json::json!({
            "orderId": 9,
            "customerName": "Jane Smith",
            "orderDate": "2024-03-15T10:00:00",
            "total": 200000.0,
            "orderStatus": "Pending"
        }))
        .unwrap();
        assert_eq!(order.label(), "#9");
    }
}
