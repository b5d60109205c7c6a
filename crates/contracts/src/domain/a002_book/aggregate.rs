use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::a001_category::aggregate::CategoryId;
use crate::shared::validation::{parse_decimal, parse_int, required, ValidationErrors};

// ============================================================================
// ID Types
// ============================================================================

/// Book (product) identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(pub i64);

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of one stored book image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageId(pub i64);

impl fmt::Display for ImageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Records
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookImage {
    #[serde(alias = "id")]
    pub image_id: ImageId,
    pub url: String,
}

/// Book as returned by `GET /api/books` and `GET /api/books/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    #[serde(alias = "id")]
    pub book_id: BookId,
    #[serde(alias = "name")]
    pub book_name: String,
    #[serde(default)]
    pub description: String,
    pub unit_price: f64,
    #[serde(default)]
    pub units_in_stock: i64,
    #[serde(default)]
    pub discount: f64,
    pub category_id: CategoryId,
    #[serde(default)]
    pub category_name: Option<String>,
    #[serde(default)]
    pub images: Vec<BookImage>,
}

/// Drops the image with `image_id` from a loaded image list. Returns whether
/// one was removed.
pub fn remove_image(images: &mut Vec<BookImage>, image_id: ImageId) -> bool {
    let before = images.len();
    images.retain(|image| image.image_id != image_id);
    before != images.len()
}

/// Sort order for the product list, sent as `sort`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PriceSort {
    #[default]
    #[serde(rename = "none")]
    None,
    #[serde(rename = "priceAsc")]
    LowToHigh,
    #[serde(rename = "priceDesc")]
    HighToLow,
}

impl PriceSort {
    pub const ALL: [PriceSort; 3] = [PriceSort::None, PriceSort::LowToHigh, PriceSort::HighToLow];

    pub fn label(self) -> &'static str {
        match self {
            PriceSort::None => "None",
            PriceSort::LowToHigh => "Low to High",
            PriceSort::HighToLow => "High to Low",
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            PriceSort::None => "none",
            PriceSort::LowToHigh => "priceAsc",
            PriceSort::HighToLow => "priceDesc",
        }
    }

    pub fn from_key(key: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|s| s.key() == key)
            .unwrap_or_default()
    }
}

/// Query filter of the product list
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BookFilter {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub search: String,
    #[serde(skip_serializing_if = "is_unsorted")]
    pub sort: PriceSort,
}

fn is_unsorted(sort: &PriceSort) -> bool {
    *sort == PriceSort::None
}

// ============================================================================
// Form / Draft
// ============================================================================

pub const DISCOUNT_MAX: f64 = 100.0;

/// Raw product form input, as typed
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookForm {
    pub name: String,
    pub description: String,
    pub unit_price: String,
    pub units_in_stock: String,
    pub discount: String,
    pub category_id: String,
}

impl BookForm {
    pub fn from_record(book: &Book) -> Self {
        Self {
            name: book.book_name.clone(),
            description: book.description.clone(),
            unit_price: book.unit_price.to_string(),
            units_in_stock: book.units_in_stock.to_string(),
            discount: book.discount.to_string(),
            category_id: book.category_id.to_string(),
        }
    }

    pub fn validate(&self) -> Result<BookDraft, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let name = required(&mut errors, "name", "Name", &self.name);
        let description = required(&mut errors, "description", "Description", &self.description);

        let unit_price = parse_decimal(&mut errors, "unit_price", "Price", &self.unit_price);
        if matches!(unit_price, Some(p) if p <= 0.0) {
            errors.push("unit_price", "Price must be greater than 0");
        }

        let units_in_stock = parse_int(&mut errors, "units_in_stock", "Stock", &self.units_in_stock);
        if matches!(units_in_stock, Some(s) if s < 0) {
            errors.push("units_in_stock", "Stock cannot be negative");
        }

        let discount = if self.discount.trim().is_empty() {
            Some(0.0)
        } else {
            parse_decimal(&mut errors, "discount", "Discount", &self.discount)
        };
        if matches!(discount, Some(d) if !(0.0..=DISCOUNT_MAX).contains(&d)) {
            errors.push("discount", "Discount must be between 0 and 100");
        }

        let category_id = parse_int(&mut errors, "category_id", "Category", &self.category_id);
        if matches!(category_id, Some(c) if c <= 0) {
            errors.push("category_id", "Category is required");
        }

        match (unit_price, units_in_stock, discount, category_id) {
            (Some(unit_price), Some(units_in_stock), Some(discount), Some(category_id))
                if errors.is_empty() =>
            {
                Ok(BookDraft {
                    name,
                    description,
                    unit_price,
                    units_in_stock,
                    discount,
                    category_id: CategoryId(category_id),
                })
            }
            _ => Err(errors),
        }
    }
}

/// Validated scalar part of `POST /api/books` / `PUT /api/books/{id}`
#[derive(Debug, Clone, PartialEq)]
pub struct BookDraft {
    pub name: String,
    pub description: String,
    pub unit_price: f64,
    pub units_in_stock: i64,
    pub discount: f64,
    pub category_id: CategoryId,
}

impl BookDraft {
    /// Multipart field name for attached image files.
    pub const IMAGES_FIELD: &'static str = "Images";

    /// Scalar multipart fields, in the order the backend binds them.
    pub fn multipart_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Name", self.name.clone()),
            ("Description", self.description.clone()),
            ("UnitPrice", self.unit_price.to_string()),
            ("UnitsInStock", self.units_in_stock.to_string()),
            ("Discount", self.discount.to_string()),
            ("CategoryId", self.category_id.to_string()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_form() -> BookForm {
        BookForm {
            name: "Dune".into(),
            description: "Desert planet".into(),
            unit_price: "120000".into(),
            units_in_stock: "4".into(),
            discount: "10".into(),
            category_id: "2".into(),
        }
    }

    #[test]
    fn test_valid_form() {
        let draft = valid_form().validate().unwrap();
        assert_eq!(draft.unit_price, 120000.0);
        assert_eq!(draft.units_in_stock, 4);
        assert_eq!(draft.category_id, CategoryId(2));
    }

    #[test]
    fn test_price_must_be_positive() {
        let form = BookForm {
            unit_price: "0".into(),
            ..valid_form()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get("unit_price"), Some("Price must be greater than 0"));
    }

    #[test]
    fn test_collects_every_failing_field() {
        let form = BookForm {
            name: "".into(),
            description: "".into(),
            unit_price: "abc".into(),
            units_in_stock: "-1".into(),
            discount: "150".into(),
            category_id: "x".into(),
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get("name"), Some("Name is required"));
        assert_eq!(errors.get("description"), Some("Description is required"));
        assert_eq!(errors.get("unit_price"), Some("Price must be a number"));
        assert_eq!(errors.get("units_in_stock"), Some("Stock cannot be negative"));
        assert_eq!(errors.get("discount"), Some("Discount must be between 0 and 100"));
        assert_eq!(errors.get("category_id"), Some("Category must be a whole number"));
    }

    #[test]
    fn test_blank_discount_defaults_to_zero() {
        let form = BookForm {
            discount: " ".into(),
            ..valid_form()
        };
        assert_eq!(form.validate().unwrap().discount, 0.0);
    }

    #[test]
    fn test_multipart_field_names() {
        let draft = valid_form().validate().unwrap();
        let names: Vec<_> = draft.multipart_fields().into_iter().map(|(k, _)| k).collect();
        assert_eq!(
            names,
            vec!["Name", "Description", "UnitPrice", "UnitsInStock", "Discount", "CategoryId"]
        );
    }

    #[test]
    fn test_decode_book_with_images() {
        let book: Book = serde_json::from_value(json!({
            "bookId": 7,
            "bookName": "Dune",
            "description": "Desert planet",
            "unitPrice": 120000.0,
            "unitsInStock": 4,
            "discount": 0,
            "categoryId": 2,
            "images": [{"imageId": 11, "url": "/img/11.jpg"}, {"imageId": 12, "url": "/img/12.jpg"}]
        }))
        .unwrap();
        assert_eq!(book.book_id, BookId(7));
        let mut images = book.images;
        assert!(remove_image(&mut images, ImageId(11)));
        assert_eq!(images.len(), 1);
        assert_eq!(images[0].image_id, ImageId(12));
        assert!(!remove_image(&mut images, ImageId(11)));
    }

    #[test]
    fn test_price_sort_keys() {
        assert_eq!(PriceSort::from_key("priceDesc"), PriceSort::HighToLow);
        assert_eq!(PriceSort::from_key("bogus"), PriceSort::None);
    }
}
