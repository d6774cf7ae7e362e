// Month labels and the rolling reporting window.
//
// This is the only place in the crate that derives month boundaries or
// bucket labels; every aggregator asks `RollingWindows` which bucket a date
// belongs to instead of re-deriving the arithmetic locally.
use chrono::{Datelike, NaiveDate};

/// Calendar-month label in the report's display form, e.g. `Jun-23`.
pub fn month_label(d: NaiveDate) -> String {
    d.format("%b-%y").to_string()
}

/// Calendar-month label in `YYYY-MM` form, which sorts chronologically as
/// text. Used by the late-orders table.
pub fn iso_month_label(d: NaiveDate) -> String {
    d.format("%Y-%m").to_string()
}

/// Months since year 0. Window construction runs on these indices so that
/// stepping across a year boundary is plain integer arithmetic.
fn month_index(d: NaiveDate) -> i32 {
    d.year() * 12 + d.month0() as i32
}

fn month_start(index: i32) -> NaiveDate {
    let year = index.div_euclid(12);
    let month = index.rem_euclid(12) as u32 + 1;
    // day 1 of a real month is always a valid date
    NaiveDate::from_ymd_opt(year, month, 1).unwrap()
}

/// One reporting bucket: the right-closed range `(start, end]` spanning
/// exactly one calendar month, labeled by the month it starts in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthWindow {
    /// First day of the labeled month. Exclusive bound.
    pub start: NaiveDate,
    /// First day of the following month. Inclusive bound.
    pub end: NaiveDate,
    pub label: String,
}

impl MonthWindow {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start < date && date <= self.end
    }
}

/// The consecutive complete calendar months ending just before the current
/// one. Construction guarantees the windows are chronological, contiguous,
/// one month wide each, and that the current partial month is excluded.
#[derive(Debug, Clone)]
pub struct RollingWindows {
    windows: Vec<MonthWindow>,
}

impl RollingWindows {
    /// Build the `months` complete calendar-month windows that precede
    /// `as_of`'s month.
    pub fn ending_at(as_of: NaiveDate, months: u32) -> RollingWindows {
        let current = month_index(as_of);
        let windows = (1..=months as i32)
            .rev()
            .map(|offset| {
                let start = month_start(current - offset);
                MonthWindow {
                    start,
                    end: month_start(current - offset + 1),
                    label: month_label(start),
                }
            })
            .collect();
        RollingWindows { windows }
    }

    /// Index of the window containing `date`, or `None` when the date falls
    /// outside the rolling range (too old, or in the current partial month).
    pub fn window_index(&self, date: NaiveDate) -> Option<usize> {
        self.windows.iter().position(|w| w.contains(date))
    }

    pub fn windows(&self) -> &[MonthWindow] {
        &self.windows
    }

    /// The most recent completed month's window.
    pub fn last(&self) -> Option<&MonthWindow> {
        self.windows.last()
    }

    pub fn labels(&self) -> Vec<String> {
        self.windows.iter().map(|w| w.label.clone()).collect()
    }
}
