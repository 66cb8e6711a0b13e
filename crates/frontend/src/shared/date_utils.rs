/// Utilities for date formatting
///
/// Catalog dates arrive as ISO strings; the UI shows them as DD.MM.YYYY.
use chrono::NaiveDate;

/// Format ISO date string to DD.MM.YYYY format
/// Example: "2024-03-15" or "2024-03-15T14:02:26Z" -> "15.03.2024"
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(date) => date.format("%d.%m.%Y").to_string(),
        Err(_) => date_str.to_string(),
    }
}

/// Optional date, "-" when absent
pub fn format_date_opt(date: Option<&str>) -> String {
    match date {
        Some(d) if !d.is_empty() => format_date(d),
        _ => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "15.03.2024");
        assert_eq!(format_date("1957-10-04T00:00:00Z"), "04.10.1957");
    }

    #[test]
    fn test_format_date_opt() {
        assert_eq!(format_date_opt(None), "-");
        assert_eq!(format_date_opt(Some("")), "-");
        assert_eq!(format_date_opt(Some("2001-02-03")), "03.02.2001");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_date("invalid"), "invalid");
        assert_eq!(format_date("2024-13-45"), "2024-13-45");
    }
}
