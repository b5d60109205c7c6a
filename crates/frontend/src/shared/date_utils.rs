//! Display formatting of backend timestamps (`dd/mm/yyyy`, as the shop shows them).

use chrono::{DateTime, NaiveDate, NaiveDateTime};

const DISPLAY_DATETIME: &str = "%d/%m/%Y %H:%M:%S";

/// "2024-03-15T14:02:26.123Z" -> "15/03/2024 14:02:26".
///
/// An explicit offset is kept as written, not converted to local time.
/// Anything unparseable is returned as is.
pub fn format_datetime(value: &str) -> String {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return dt.format(DISPLAY_DATETIME).to_string();
    }
    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, pattern) {
            return dt.format(DISPLAY_DATETIME).to_string();
        }
    }
    match NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        Ok(date) => date.format("%d/%m/%Y").to_string(),
        Err(_) => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_datetime() {
        assert_eq!(format_datetime("2024-03-15T14:02:26.123Z"), "15/03/2024 14:02:26");
        assert_eq!(format_datetime("2024-12-31T23:59:59Z"), "31/12/2024 23:59:59");
        assert_eq!(format_datetime("2024-12-31T23:59:59+07:00"), "31/12/2024 23:59:59");
        assert_eq!(format_datetime("2024-12-31T08:00:00.5"), "31/12/2024 08:00:00");
        assert_eq!(format_datetime("2024-12-31 08:00:00"), "31/12/2024 08:00:00");
        assert_eq!(format_datetime("2024-12-31"), "31/12/2024");
    }

    #[test]
    fn test_unparseable_kept() {
        assert_eq!(format_datetime("invalid"), "invalid");
    }
}
