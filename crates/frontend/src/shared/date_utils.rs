/// Utilities for date formatting
///
/// Record dates arrive as ISO strings ("2024-03-05" or full timestamps).
/// Unparseable input renders as "Invalid Date" instead of failing the view.
use contracts::domain::a001_medical_records::aggregate::parse_record_date;

pub const INVALID_DATE: &str = "Invalid Date";

/// "2024-03-05" -> "Mar 5, 2024"
pub fn format_short_date(date_str: &str) -> String {
    format_with(date_str, "%b %-d, %Y")
}

/// "2024-03-05" -> "March 5, 2024"
pub fn format_long_date(date_str: &str) -> String {
    format_with(date_str, "%B %-d, %Y")
}

/// "2024-03-05" -> "3/5/2024"
pub fn format_numeric_date(date_str: &str) -> String {
    format_with(date_str, "%-m/%-d/%Y")
}

/// Chart axis label: "2024-03-05" -> "Mar 5"
pub fn format_axis_date(date_str: &str) -> String {
    format_with(date_str, "%b %-d")
}

fn format_with(date_str: &str, pattern: &str) -> String {
    match parse_record_date(date_str) {
        Some(date) => date.format(pattern).to_string(),
        None => INVALID_DATE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_short_date() {
        assert_eq!(format_short_date("2024-03-05"), "Mar 5, 2024");
        assert_eq!(format_short_date("2024-12-31T23:59:59Z"), "Dec 31, 2024");
    }

    #[test]
    fn test_format_long_date() {
        assert_eq!(format_long_date("2024-03-05"), "March 5, 2024");
        assert_eq!(format_long_date("2023-11-02"), "November 2, 2023");
    }

    #[test]
    fn test_format_numeric_date() {
        assert_eq!(format_numeric_date("2024-03-05"), "3/5/2024");
        assert_eq!(format_numeric_date("2024-10-21"), "10/21/2024");
    }

    #[test]
    fn test_format_axis_date() {
        assert_eq!(format_axis_date("2024-03-05"), "Mar 5");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_short_date("invalid"), INVALID_DATE);
        assert_eq!(format_long_date(""), INVALID_DATE);
        assert_eq!(format_numeric_date("2024-13-01"), INVALID_DATE);
    }
}
