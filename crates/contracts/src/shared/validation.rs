//! Client-side form validation.
//!
//! Forms hold raw input strings; each entity turns its form into a typed draft
//! through these helpers and collects every failing field before returning.
//! Nothing here touches the network, so a form that fails validation never
//! produces a request.

use std::fmt;

/// A single failing form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// All field errors of one submission, in form order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.push(FieldError {
            field,
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// First message recorded for `field`.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    /// `Ok(value)` when nothing was recorded, otherwise the collected errors.
    pub fn into_result<T>(self, value: impl FnOnce() -> T) -> Result<T, ValidationErrors> {
        if self.is_empty() {
            Ok(value())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .errors
            .iter()
            .map(|e| e.message.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        f.write_str(&joined)
    }
}

impl std::error::Error for ValidationErrors {}

/// Trimmed non-empty value, or records `"<label> is required"`.
pub fn required(errors: &mut ValidationErrors, field: &'static str, label: &str, value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        errors.push(field, format!("{} is required", label));
    }
    trimmed.to_string()
}

/// Parses a decimal number. Blank input counts as missing.
pub fn parse_decimal(
    errors: &mut ValidationErrors,
    field: &'static str,
    label: &str,
    value: &str,
) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        errors.push(field, format!("{} is required", label));
        return None;
    }
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() => Some(v),
        _ => {
            errors.push(field, format!("{} must be a number", label));
            None
        }
    }
}

/// Parses a whole number. Blank input counts as missing.
pub fn parse_int(
    errors: &mut ValidationErrors,
    field: &'static str,
    label: &str,
    value: &str,
) -> Option<i64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        errors.push(field, format!("{} is required", label));
        return None;
    }
    match trimmed.parse::<i64>() {
        Ok(v) => Some(v),
        Err(_) => {
            errors.push(field, format!("{} must be a whole number", label));
            None
        }
    }
}

/// Loose `local@domain.tld` shape check, no whitespace allowed.
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_trims_and_reports() {
        let mut errors = ValidationErrors::new();
        assert_eq!(required(&mut errors, "name", "Name", "  Fiction "), "Fiction");
        assert!(errors.is_empty());

        required(&mut errors, "name", "Name", "   ");
        assert_eq!(errors.get("name"), Some("Name is required"));
    }

    #[test]
    fn test_parse_decimal() {
        let mut errors = ValidationErrors::new();
        assert_eq!(parse_decimal(&mut errors, "price", "Price", "12.5"), Some(12.5));
        assert_eq!(parse_decimal(&mut errors, "price", "Price", "abc"), None);
        assert_eq!(errors.get("price"), Some("Price must be a number"));
    }

    #[test]
    fn test_parse_int_rejects_fraction() {
        let mut errors = ValidationErrors::new();
        assert_eq!(parse_int(&mut errors, "stock", "Stock", "3.5"), None);
        assert_eq!(errors.get("stock"), Some("Stock must be a whole number"));
    }

    #[test]
    fn test_email_shape() {
        assert!(is_valid_email("user1@example.com"));
        assert!(!is_valid_email("user1example.com"));
        assert!(!is_valid_email("user 1@example.com"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@localhost"));
        assert!(!is_valid_email("a@b@c.com"));
    }

    #[test]
    fn test_display_joins_messages() {
        let mut errors = ValidationErrors::new();
        errors.push("name", "Name is required");
        errors.push("price", "Price must be greater than 0");
        assert_eq!(
            errors.to_string(),
            "Name is required; Price must be greater than 0"
        );
        assert_eq!(errors.len(), 2);
    }
}
