//! Number formatting for prices and discounts.

/// Inserts `separator` every three digits of an integer string, keeping the sign.
fn group_thousands(integer_part: &str, separator: char) -> String {
    let mut result = String::new();
    for (i, c) in integer_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 && c != '-' {
            result.push(separator);
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Formats an amount the way `vi-VN` renders VND: no fraction digits, `.` as
/// thousands separator and the `₫` sign after a non-breaking space, e.g.
/// `120.000 ₫`.
pub fn format_vnd(value: f64) -> String {
    if !value.is_finite() {
        return "-".to_string();
    }
    let rounded = format!("{:.0}", value);
    let rounded = if rounded == "-0" { "0".to_string() } else { rounded };
    format!("{}\u{a0}₫", group_thousands(&rounded, '.'))
}

/// Formats a discount percentage, dropping a zero fraction: `10%`, `12.5%`.
pub fn format_percent(value: f64) -> String {
    let text = format!("{:.2}", value);
    let text = text.trim_end_matches('0').trim_end_matches('.');
    format!("{}%", text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_vnd() {
        assert_eq!(format_vnd(0.0), "0\u{a0}₫");
        assert_eq!(format_vnd(999.0), "999\u{a0}₫");
        assert_eq!(format_vnd(120000.0), "120.000\u{a0}₫");
        assert_eq!(format_vnd(1234567.4), "1.234.567\u{a0}₫");
        assert_eq!(format_vnd(-2500.0), "-2.500\u{a0}₫");
    }

    #[test]
    fn test_format_vnd_rounds() {
        assert_eq!(format_vnd(99999.6), "100.000\u{a0}₫");
        assert_eq!(format_vnd(-0.2), "0\u{a0}₫");
        assert_eq!(format_vnd(f64::NAN), "-");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(10.0), "10%");
        assert_eq!(format_percent(12.5), "12.5%");
        assert_eq!(format_percent(0.0), "0%");
    }
}
