// Utility helpers for parsing and formatting.
//
// This module centralizes all the "dirty" CSV/date handling so the rest of
// the pipeline can assume clean, typed values.
use chrono::{NaiveDate, NaiveDateTime};
use num_format::{Locale, ToFormattedString};

/// Plain date formats seen in work-order exports. `%m/%d/%y` must come
/// before `%m/%d/%Y`: `%Y` also accepts a 2-digit year, which would turn
/// `06/01/23` into year 23, while `%y` rejects a 4-digit year outright.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%y", "%m/%d/%Y"];

/// Timestamp formats; the time-of-day part is discarded.
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S"];

/// Parse a string-like value into a `NaiveDate` while being forgiving about
/// the formats that show up in exports from the work-order system.
///
/// - Accepts `Option<&str>` so callers can pass through optional fields.
/// - Trims whitespace.
/// - Returns `None` for blanks and anything that matches no known format.
///   A `None` here is not an error anywhere downstream; the classifier
///   treats absent dates as "not present".
pub fn parse_date_safe(s: Option<&str>) -> Option<NaiveDate> {
    let s = s?.trim();
    if s.is_empty() {
        return None;
    }
    for fmt in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d);
        }
    }
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.date());
        }
    }
    None
}

pub fn days_between(start: NaiveDate, end: NaiveDate) -> i64 {
    // `NaiveDate` supports subtraction; the result is a `Duration` in days.
    (end - start).num_days()
}

/// `100 * part / whole`, defined as 0 when `whole` is 0. Every percentage in
/// the report tables goes through here so a division by zero can never leak
/// a NaN into an exported table.
pub fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    100.0 * part as f64 / whole as f64
}

/// Render a percentage column with one decimal place. Used by the `tabled`
/// previews; exported CSV/JSON keeps the unrounded value.
pub fn fmt_pct(v: &f64) -> String {
    format!("{:.1}", v)
}

pub fn format_int<T>(n: T) -> String
where
    T: ToFormattedString,
{
    // Thin wrapper around `num-format` for integer-like values. This is used
    // for counts in console messages (e.g., `9,855 rows loaded`).
    n.to_formatted_string(&Locale::en)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_supported_date_format() {
        let expected = NaiveDate::from_ymd_opt(2023, 6, 1).unwrap();
        for s in ["2023-06-01", "06/01/2023", "06/01/23", "2023-06-01 14:30:00"] {
            assert_eq!(parse_date_safe(Some(s)), Some(expected), "format: {s}");
        }
    }

    #[test]
    fn two_digit_years_expand_to_a_full_century() {
        // A slash date with a 2-digit year must never parse as year 0023.
        assert_eq!(
            parse_date_safe(Some("01/15/23")),
            Some(NaiveDate::from_ymd_opt(2023, 1, 15).unwrap())
        );
        assert_eq!(
            parse_date_safe(Some("12/31/99")),
            Some(NaiveDate::from_ymd_opt(1999, 12, 31).unwrap())
        );
    }

    #[test]
    fn blank_and_garbage_dates_are_none() {
        assert_eq!(parse_date_safe(None), None);
        assert_eq!(parse_date_safe(Some("")), None);
        assert_eq!(parse_date_safe(Some("   ")), None);
        assert_eq!(parse_date_safe(Some("not a date")), None);
    }

    #[test]
    fn percentage_of_zero_whole_is_zero() {
        assert_eq!(percentage(0, 0), 0.0);
        assert_eq!(percentage(5, 0), 0.0);
        assert_eq!(percentage(1, 4), 25.0);
    }

    #[test]
    fn days_between_is_signed() {
        let a = NaiveDate::from_ymd_opt(2023, 6, 1).unwrap();
        let b = NaiveDate::from_ymd_opt(2023, 6, 11).unwrap();
        assert_eq!(days_between(a, b), 10);
        assert_eq!(days_between(b, a), -10);
    }
}
