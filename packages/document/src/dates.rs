//! Month-level date formatting for the previews.

use chrono::NaiveDate;

/// "January 2020"
pub fn format_month_year(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}

/// "Jan 2020"
pub fn format_short_month_year(date: NaiveDate) -> String {
    date.format("%b %Y").to_string()
}

/// Date line for a content item.
///
/// Both dates give "January 2020 - June 2024". A single date is shown alone,
/// with no dangling separator.
pub fn format_date_range(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Option<String> {
    match (start, end) {
        (Some(start), Some(end)) => Some(format!(
            "{} - {}",
            format_month_year(start),
            format_month_year(end)
        )),
        (Some(date), None) | (None, Some(date)) => Some(format_month_year(date)),
        (None, None) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_full_range() {
        assert_eq!(
            format_date_range(Some(date(2020, 1, 1)), Some(date(2024, 6, 1))).as_deref(),
            Some("January 2020 - June 2024")
        );
    }

    #[test]
    fn test_open_ended_range_has_no_trailing_separator() {
        assert_eq!(
            format_date_range(Some(date(2020, 1, 1)), None).as_deref(),
            Some("January 2020")
        );
    }

    #[test]
    fn test_end_only_and_empty() {
        assert_eq!(
            format_date_range(None, Some(date(2024, 6, 1))).as_deref(),
            Some("June 2024")
        );
        assert_eq!(format_date_range(None, None), None);
    }

    #[test]
    fn test_short_form() {
        assert_eq!(format_short_month_year(date(2021, 9, 15)), "Sep 2021");
    }
}
