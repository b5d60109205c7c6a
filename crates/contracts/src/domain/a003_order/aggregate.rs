use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::a002_book::aggregate::{BookId, BookImage};
use crate::domain::a004_user::aggregate::UserId;
use crate::shared::validation::ValidationErrors;

// ============================================================================
// ID Type
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub i64);

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Status
// ============================================================================

/// Order lifecycle status. Strings the client does not know are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipped,
    Delivered,
    Completed,
    Cancelled,
    Other(String),
}

impl OrderStatus {
    pub const KNOWN: [OrderStatus; 6] = [
        OrderStatus::Pending,
        OrderStatus::Processing,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
        OrderStatus::Completed,
        OrderStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Processing => "Processing",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Completed => "Completed",
            OrderStatus::Cancelled => "Cancelled",
            OrderStatus::Other(s) => s,
        }
    }

    /// Statuses an order can be moved to from `self`.
    pub fn targets(&self) -> Vec<OrderStatus> {
        Self::KNOWN.into_iter().filter(|s| s != self).collect()
    }
}

impl From<String> for OrderStatus {
    fn from(value: String) -> Self {
        Self::KNOWN
            .into_iter()
            .find(|s| s.as_str().eq_ignore_ascii_case(&value))
            .unwrap_or(OrderStatus::Other(value))
    }
}

impl From<OrderStatus> for String {
    fn from(value: OrderStatus) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Records
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderBook {
    #[serde(default)]
    pub book_name: Option<String>,
    #[serde(default)]
    pub images: Vec<BookImage>,
}

/// One order line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDetail {
    pub book_id: BookId,
    pub unit_price: f64,
    pub quantity: i64,
    #[serde(default)]
    pub discount: f64,
    #[serde(default)]
    pub book: Option<OrderBook>,
}

impl OrderDetail {
    pub fn book_name(&self) -> &str {
        self.book
            .as_ref()
            .and_then(|b| b.book_name.as_deref())
            .unwrap_or("N/A")
    }

    /// Cover shown in the detail dialog: the second image when present, as the
    /// storefront keeps the thumbnail first.
    pub fn cover_url(&self) -> Option<&str> {
        let images = &self.book.as_ref()?.images;
        images.get(1).or_else(|| images.first()).map(|i| i.url.as_str())
    }
}

/// Order as listed by `GET /api/orders`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(alias = "id")]
    pub order_id: OrderId,
    pub customer_name: String,
    #[serde(default)]
    pub customer_phone: Option<String>,
    pub order_date: String,
    #[serde(alias = "totalAmount")]
    pub total: f64,
    #[serde(alias = "status")]
    pub order_status: OrderStatus,
    #[serde(default)]
    pub user_id: Option<UserId>,
    #[serde(default)]
    pub order_details: Vec<OrderDetail>,
}

// ============================================================================
// Filter
// ============================================================================

/// Order list filter as typed into the filter panel
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderFilterForm {
    pub start_date: String,
    pub end_date: String,
    pub min_price: String,
    pub max_price: String,
    pub customer_phone: String,
    pub customer_name: String,
    pub user_id: String,
    pub order_status: String,
}

/// Validated filter, serialized into the `GET /api/orders` query string
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OrderFilter {
    #[serde(rename = "StartDate", skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(rename = "EndDate", skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(rename = "MinPrice", skip_serializing_if = "Option::is_none")]
    pub min_price: Option<f64>,
    #[serde(rename = "MaxPrice", skip_serializing_if = "Option::is_none")]
    pub max_price: Option<f64>,
    #[serde(rename = "CustomerPhone", skip_serializing_if = "Option::is_none")]
    pub customer_phone: Option<String>,
    #[serde(rename = "CustomerName", skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    #[serde(rename = "UserId", skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UserId>,
    #[serde(rename = "OrderStatus", skip_serializing_if = "Option::is_none")]
    pub order_status: Option<OrderStatus>,
}

fn optional_text(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn optional_date(
    errors: &mut ValidationErrors,
    field: &'static str,
    label: &str,
    value: &str,
) -> Option<NaiveDate> {
    let value = optional_text(value)?;
    match NaiveDate::parse_from_str(&value, "%Y-%m-%d") {
        Ok(date) => Some(date),
        Err(_) => {
            errors.push(field, format!("{} must be a date (YYYY-MM-DD)", label));
            None
        }
    }
}

fn optional_price(
    errors: &mut ValidationErrors,
    field: &'static str,
    label: &str,
    value: &str,
) -> Option<f64> {
    let value = optional_text(value)?;
    match value.parse::<f64>() {
        Ok(p) if p.is_finite() && p >= 0.0 => Some(p),
        Ok(_) => {
            errors.push(field, format!("{} cannot be negative", label));
            None
        }
        Err(_) => {
            errors.push(field, format!("{} must be a number", label));
            None
        }
    }
}

impl OrderFilterForm {
    pub fn validate(&self) -> Result<OrderFilter, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let start_date = optional_date(&mut errors, "start_date", "Start date", &self.start_date);
        let end_date = optional_date(&mut errors, "end_date", "End date", &self.end_date);
        if let (Some(start), Some(end)) = (start_date, end_date) {
            if start > end {
                errors.push("end_date", "End date must not be before start date");
            }
        }

        let min_price = optional_price(&mut errors, "min_price", "Min price", &self.min_price);
        let max_price = optional_price(&mut errors, "max_price", "Max price", &self.max_price);
        if let (Some(min), Some(max)) = (min_price, max_price) {
            if min > max {
                errors.push("max_price", "Max price must not be below min price");
            }
        }

        let user_id = match optional_text(&self.user_id) {
            Some(raw) => match raw.parse::<i64>() {
                Ok(id) => Some(UserId(id)),
                Err(_) => {
                    errors.push("user_id", "User id must be a whole number");
                    None
                }
            },
            None => None,
        };

        let filter = OrderFilter {
            start_date,
            end_date,
            min_price,
            max_price,
            customer_phone: optional_text(&self.customer_phone),
            customer_name: optional_text(&self.customer_name),
            user_id,
            order_status: optional_text(&self.order_status).map(OrderStatus::from),
        };
        errors.into_result(|| filter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_roundtrip_keeps_unknown() {
        let status: OrderStatus = serde_json::from_value(json!("shipped")).unwrap();
        assert_eq!(status, OrderStatus::Shipped);
        let odd: OrderStatus = serde_json::from_value(json!("OnHold")).unwrap();
        assert_eq!(odd, OrderStatus::Other("OnHold".into()));
        assert_eq!(serde_json::to_value(&odd).unwrap(), json!("OnHold"));
    }

    #[test]
    fn test_targets_exclude_current() {
        let targets = OrderStatus::Pending.targets();
        assert_eq!(targets.len(), 5);
        assert!(!targets.contains(&OrderStatus::Pending));
    }

    #[test]
    fn test_decode_order_with_lines() {
        let order: Order = serde_json::from_value(json!({
            "orderId": 9,
            "customerName": "Jane Smith",
            "customerPhone": "0901234567",
            "orderDate": "2023-07-02",
            "total": 200.0,
            "orderStatus": "Pending",
            "orderDetails": [{
                "bookId": 7, "unitPrice": 100.0, "quantity": 2, "discount": 0,
                "book": {"bookName": "Dune", "images": [
                    {"imageId": 1, "url": "/a.jpg"}, {"imageId": 2, "url": "/b.jpg"}
                ]}
            }]
        }))
        .unwrap();
        assert_eq!(order.order_id, OrderId(9));
        assert_eq!(order.order_details[0].book_name(), "Dune");
        assert_eq!(order.order_details[0].cover_url(), Some("/b.jpg"));
    }

    #[test]
    fn test_line_without_book() {
        let line = OrderDetail {
            book_id: BookId(1),
            unit_price: 1.0,
            quantity: 1,
            discount: 0.0,
            book: None,
        };
        assert_eq!(line.book_name(), "N/A");
        assert_eq!(line.cover_url(), None);
    }

    #[test]
    fn test_filter_validation() {
        let form = OrderFilterForm {
            start_date: "2024-02-01".into(),
            end_date: "2024-01-01".into(),
            min_price: "50".into(),
            max_price: "10".into(),
            user_id: "abc".into(),
            ..Default::default()
        };
        let errors = form.validate().unwrap_err();
        assert!(errors.get("end_date").is_some());
        assert!(errors.get("max_price").is_some());
        assert!(errors.get("user_id").is_some());
    }

    #[test]
    fn test_blank_filter_is_empty() {
        let filter = OrderFilterForm::default().validate().unwrap();
        assert_eq!(filter, OrderFilter::default());
    }

    #[test]
    fn test_filter_keeps_given_fields() {
        let form = OrderFilterForm {
            start_date: "2024-01-01".into(),
            customer_phone: " 0901 ".into(),
            order_status: "Shipped".into(),
            ..Default::default()
        };
        let filter = form.validate().unwrap();
        assert_eq!(filter.start_date, NaiveDate::from_ymd_opt(2024, 1, 1));
        assert_eq!(filter.customer_phone.as_deref(), Some("0901"));
        assert_eq!(filter.order_status, Some(OrderStatus::Shipped));
    }
}
