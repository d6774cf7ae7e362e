use chrono::{Datelike, NaiveDate};
use wo_report::months::{iso_month_label, month_label, RollingWindows};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

#[test]
fn builds_exactly_twelve_chronological_windows() {
    let windows = RollingWindows::ending_at(d(2023, 6, 15), 12);
    let ws = windows.windows();
    assert_eq!(ws.len(), 12);
    assert_eq!(ws[0].label, "Jun-22");
    assert_eq!(ws[11].label, "May-23");
    for pair in ws.windows(2) {
        assert!(pair[0].start < pair[1].start, "windows out of order");
    }
}

#[test]
fn windows_are_contiguous_one_month_spans() {
    let windows = RollingWindows::ending_at(d(2024, 2, 3), 12);
    let ws = windows.windows();
    for pair in ws.windows(2) {
        // No gap and no overlap: each window ends where the next begins.
        assert_eq!(pair[0].end, pair[1].start);
    }
    for w in ws {
        assert_eq!(w.start.day(), 1);
        assert_eq!(w.end.day(), 1);
        let months_apart = (w.end.year() - w.start.year()) * 12
            + (w.end.month() as i32 - w.start.month() as i32);
        assert_eq!(months_apart, 1, "window {} is not one month wide", w.label);
    }
}

#[test]
fn boundary_dates_follow_the_right_closed_rule() {
    let windows = RollingWindows::ending_at(d(2023, 6, 15), 12);

    // A window's start date is excluded, its end date included.
    assert_eq!(windows.window_index(d(2023, 5, 1)), Some(10)); // end of Apr-23
    assert_eq!(windows.window_index(d(2023, 5, 2)), Some(11)); // inside May-23
    assert_eq!(windows.window_index(d(2023, 6, 1)), Some(11)); // end of May-23
}

#[test]
fn current_partial_month_and_out_of_range_dates_are_excluded() {
    let windows = RollingWindows::ending_at(d(2023, 6, 15), 12);
    // The run date itself sits in the current, unfinished month.
    assert_eq!(windows.window_index(d(2023, 6, 15)), None);
    assert_eq!(windows.window_index(d(2023, 6, 2)), None);
    // The very first start bound is exclusive too.
    assert_eq!(windows.window_index(d(2022, 6, 1)), None);
    assert_eq!(windows.window_index(d(2020, 1, 15)), None);
}

#[test]
fn windows_cross_year_boundaries_cleanly() {
    let windows = RollingWindows::ending_at(d(2024, 3, 10), 12);
    let labels = windows.labels();
    assert_eq!(labels.first().map(String::as_str), Some("Mar-23"));
    assert_eq!(labels.last().map(String::as_str), Some("Feb-24"));
    assert_eq!(windows.window_index(d(2024, 1, 1)), Some(9)); // end of Dec-23
}

#[test]
fn last_window_is_the_most_recent_completed_month() {
    let windows = RollingWindows::ending_at(d(2023, 6, 15), 12);
    let last = windows.last().unwrap();
    assert_eq!(last.label, "May-23");
    assert_eq!(last.end, d(2023, 6, 1));
}

#[test]
fn label_formats() {
    assert_eq!(month_label(d(2023, 6, 5)), "Jun-23");
    assert_eq!(iso_month_label(d(2023, 6, 5)), "2023-06");
}
