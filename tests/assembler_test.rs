use chrono::NaiveDate;
use wo_report::assembler::assemble;
use wo_report::config::ReportConfig;
use wo_report::types::WorkOrder;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn order(
    id: &str,
    status: &str,
    group: &str,
    target: NaiveDate,
    finish: Option<NaiveDate>,
    grace: Option<NaiveDate>,
) -> WorkOrder {
    WorkOrder {
        work_order: id.to_string(),
        status: status.to_string(),
        target_date: Some(target),
        actual_finish: finish,
        grace_date: grace,
        group: group.to_string(),
        work_type: Some("PM".to_string()),
        description: "Inspect pump".to_string(),
    }
}

/// A small dataset spread across several months of the rolling window for
/// an as-of date of 2023-07-15.
fn dataset() -> Vec<WorkOrder> {
    vec![
        order("WO-001", "COMP", "Mechanical", d(2023, 6, 10), Some(d(2023, 6, 9)), Some(d(2023, 6, 15))),
        order("WO-002", "REVWD", "Mechanical", d(2023, 6, 10), Some(d(2023, 6, 20)), Some(d(2023, 6, 15))),
        order("WO-003", "INPRG", "Electrical", d(2023, 5, 10), None, None),
        order("WO-004", "CAN", "Electrical", d(2023, 5, 10), None, None),
        order("WO-005", "COMP", "Facilities", d(2023, 2, 10), Some(d(2023, 2, 9)), Some(d(2023, 2, 15))),
        order("WO-006", "REVWD", "Facilities", d(2023, 2, 10), Some(d(2023, 3, 1)), Some(d(2023, 2, 15))),
        // Old unresolved order: outside the window, but extreme-late.
        order("WO-007", "WAPPR", "Facilities", d(2022, 3, 1), None, None),
    ]
}

#[test]
fn trend_and_summary_agree_month_by_month() {
    let bundle = assemble(&dataset(), d(2023, 7, 15), &ReportConfig::default());

    let real_months = &bundle.monthly_summary[..bundle.monthly_summary.len() - 1];
    assert_eq!(real_months.len(), bundle.trend.len());
    for (summary, trend) in real_months.iter().zip(&bundle.trend) {
        assert_eq!(summary.month, trend.month);
        assert_eq!(summary.due, trend.generated);
        assert_eq!(summary.missed, trend.missed);
        assert_eq!(summary.completed, trend.completed);
    }
}

#[test]
fn disposition_totals_match_the_summary_missed_counts() {
    let bundle = assemble(&dataset(), d(2023, 7, 15), &ReportConfig::default());

    for (summary, disp) in bundle.monthly_summary.iter().zip(&bundle.disposition) {
        assert_eq!(summary.month, disp.month);
        assert_eq!(
            summary.missed,
            disp.closed + disp.awaiting_qa + disp.awaiting_dept,
            "disposition diverges from summary in {}",
            summary.month
        );
    }
}

#[test]
fn overview_panels_are_slices_of_the_summary() {
    let as_of = d(2023, 7, 15);
    let bundle = assemble(&dataset(), as_of, &ReportConfig::default());

    // Current month is the last completed month's summary row.
    let last_real = &bundle.monthly_summary[bundle.monthly_summary.len() - 2];
    let current = &bundle.overview.current_month;
    assert_eq!(current.month, last_real.month);
    assert_eq!(current.due, last_real.due);
    assert_eq!(current.completed, last_real.completed);
    assert_eq!(current.completion_pct, last_real.completion_pct);

    // YTD sums the windows in the as-of calendar year: Jan-23 through
    // Jun-23 of the dataset (4 completed-or-not orders per above, less the
    // out-of-window one).
    let ytd = &bundle.overview.year_to_date;
    assert_eq!(ytd.month, "YTD 2023");
    let expected_due: usize = bundle
        .monthly_summary
        .iter()
        .filter(|r| r.month.ends_with("-23"))
        .map(|r| r.due)
        .sum();
    assert_eq!(ytd.due, expected_due);
}

#[test]
fn late_orders_come_from_the_full_dataset() {
    let bundle = assemble(&dataset(), d(2023, 7, 15), &ReportConfig::default());
    // WO-007 is too old for any rolling window but must still be surfaced.
    assert!(bundle.late_orders.iter().any(|r| r.work_order == "WO-007"));
}

#[test]
fn empty_dataset_yields_well_formed_tables() {
    let bundle = assemble(&[], d(2023, 7, 15), &ReportConfig::default());

    assert_eq!(bundle.monthly_summary.len(), 13);
    assert_eq!(bundle.trend.len(), 12);
    assert_eq!(bundle.disposition.len(), 12);
    assert!(bundle.group_breakdown.is_empty());
    assert!(bundle.late_orders.is_empty());
    assert!(bundle.cleaned_rows.is_empty());
    assert_eq!(bundle.overview.current_month.due, 0);
    assert_eq!(bundle.overview.current_month.completion_pct, 0.0);
}

#[test]
fn same_inputs_produce_identical_bundles() {
    let orders = dataset();
    let as_of = d(2023, 7, 15);
    let cfg = ReportConfig::default();

    let a = serde_json::to_string(&assemble(&orders, as_of, &cfg)).unwrap();
    let b = serde_json::to_string(&assemble(&orders, as_of, &cfg)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn cleaned_rows_carry_every_input_order_with_a_class() {
    let orders = dataset();
    let bundle = assemble(&orders, d(2023, 7, 15), &ReportConfig::default());
    assert_eq!(bundle.cleaned_rows.len(), orders.len());
}
