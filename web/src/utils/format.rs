use chrono::{Datelike, NaiveDate};

/// Human-readable span for a competition's calendar dates, e.g.
/// "July 11-12, 2026" or "December 31, 2026 - January 1, 2027".
pub fn format_date_range(start: NaiveDate, end: NaiveDate) -> String {
    if start == end {
        return start.format("%B %-d, %Y").to_string();
    }
    if start.year() == end.year() && start.month() == end.month() {
        return format!(
            "{} {}-{}, {}",
            start.format("%B"),
            start.day(),
            end.day(),
            start.year()
        );
    }
    format!(
        "{} - {}",
        start.format("%B %-d, %Y"),
        end.format("%B %-d, %Y")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn single_day() {
        assert_eq!(
            format_date_range(date("2026-07-11"), date("2026-07-11")),
            "July 11, 2026"
        );
    }

    #[test]
    fn same_month_weekend() {
        assert_eq!(
            format_date_range(date("2026-07-11"), date("2026-07-12")),
            "July 11-12, 2026"
        );
    }

    #[test]
    fn spans_months() {
        assert_eq!(
            format_date_range(date("2026-08-30"), date("2026-09-01")),
            "August 30, 2026 - September 1, 2026"
        );
    }

    #[test]
    fn spans_years() {
        assert_eq!(
            format_date_range(date("2026-12-31"), date("2027-01-01")),
            "December 31, 2026 - January 1, 2027"
        );
    }
}
