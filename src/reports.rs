// Report aggregators.
//
// Every table here is computed from the same classified rows and the same
// `RollingWindows`, and all month-keyed tables are seeded from the window
// list, so an empty month shows up as a zero-filled row rather than
// disappearing. The monthly summary, the trend table and the governance
// overview all read from one shared per-window count, which is what keeps
// their totals in agreement.
use crate::classifier;
use crate::config::{Disposition, DispositionMap, GroupScope};
use crate::months::{iso_month_label, RollingWindows};
use crate::types::{
    ClassifiedOrder, Classification, DispositionRow, GovernanceOverview, GroupBreakdownRow,
    LateOrderRow, MonthlySummaryRow, TrendRow,
};
use crate::util::{days_between, percentage};
use chrono::{Datelike, NaiveDate};
use std::collections::HashMap;

/// Per-bucket tally of the four lifecycle classes.
#[derive(Debug, Default, Clone, Copy)]
struct ClassCounts {
    on_time: usize,
    missed: usize,
    open: usize,
    canceled: usize,
}

impl ClassCounts {
    fn add(&mut self, class: Classification) {
        match class {
            Classification::OnTime => self.on_time += 1,
            Classification::Missed => self.missed += 1,
            Classification::Open => self.open += 1,
            Classification::Canceled => self.canceled += 1,
        }
    }

    fn merge(&mut self, other: &ClassCounts) {
        self.on_time += other.on_time;
        self.missed += other.missed;
        self.open += other.open;
        self.canceled += other.canceled;
    }

    /// Total orders due in the bucket. Canceled and open orders count
    /// toward due, not only the finished ones.
    fn due(&self) -> usize {
        self.on_time + self.missed + self.open + self.canceled
    }

    fn summary_row(&self, month: &str) -> MonthlySummaryRow {
        MonthlySummaryRow {
            month: month.to_string(),
            due: self.due(),
            completed: self.on_time,
            missed: self.missed,
            still_open: self.open,
            canceled: self.canceled,
            completion_pct: percentage(self.on_time, self.due()),
        }
    }
}

/// Tally the classes of every row falling inside each rolling window.
/// Undated rows and rows outside the window range are left out.
fn counts_per_window(rows: &[ClassifiedOrder], windows: &RollingWindows) -> Vec<ClassCounts> {
    let mut counts = vec![ClassCounts::default(); windows.windows().len()];
    for row in rows {
        if let Some(target) = row.order.target_date {
            if let Some(i) = windows.window_index(target) {
                counts[i].add(row.class);
            }
        }
    }
    counts
}

/// One summary row per rolling window plus the synthetic `Grand Total` row,
/// always last. The grand-total percentage is recomputed from the summed
/// counts, never averaged from the per-month percentages.
pub fn monthly_summary(
    rows: &[ClassifiedOrder],
    windows: &RollingWindows,
) -> Vec<MonthlySummaryRow> {
    let counts = counts_per_window(rows, windows);
    let mut total = ClassCounts::default();
    let mut out: Vec<MonthlySummaryRow> = windows
        .windows()
        .iter()
        .zip(&counts)
        .map(|(w, c)| {
            total.merge(c);
            c.summary_row(&w.label)
        })
        .collect();
    out.push(total.summary_row("Grand Total"));
    out
}

/// The rolling missed/completed/generated trend. `generated` equals the
/// summary's `due` for the same month by construction.
pub fn rolling_trend(rows: &[ClassifiedOrder], windows: &RollingWindows) -> Vec<TrendRow> {
    counts_per_window(rows, windows)
        .iter()
        .zip(windows.windows())
        .map(|(c, w)| TrendRow {
            month: w.label.clone(),
            missed: c.missed,
            completed: c.on_time,
            generated: c.due(),
        })
        .collect()
}

/// Per-group performance over the configured scope, sorted by group name.
/// Returns every observed group unfiltered; rendering applies
/// `retain_groups_with_missed` separately when a chart only wants misses.
pub fn group_breakdown(
    rows: &[ClassifiedOrder],
    windows: &RollingWindows,
    scope: GroupScope,
) -> Vec<GroupBreakdownRow> {
    let last_index = windows.windows().len().checked_sub(1);
    let in_scope = |row: &ClassifiedOrder| match scope {
        GroupScope::AllData => true,
        GroupScope::MostRecentMonth => row
            .order
            .target_date
            .and_then(|t| windows.window_index(t))
            .is_some_and(|i| Some(i) == last_index),
    };

    let mut by_group: HashMap<String, ClassCounts> = HashMap::new();
    for row in rows.iter().filter(|r| in_scope(r)) {
        by_group.entry(row.order.group.clone()).or_default().add(row.class);
    }

    let mut out: Vec<GroupBreakdownRow> = by_group
        .into_iter()
        .map(|(group, c)| GroupBreakdownRow {
            group,
            missed: c.missed,
            completed: c.on_time,
            generated: c.due(),
            missed_percent: percentage(c.missed, c.due()),
            still_open: c.open,
        })
        .collect();
    out.sort_by(|a, b| a.group.cmp(&b.group));
    out
}

/// Drop groups with no missed orders. Applied by renderers that chart
/// misses only; the aggregated table itself stays unfiltered.
pub fn retain_groups_with_missed(rows: Vec<GroupBreakdownRow>) -> Vec<GroupBreakdownRow> {
    rows.into_iter().filter(|r| r.missed > 0).collect()
}

/// Current status of the missed orders in each rolling window, folded into
/// the three disposition categories. One row per window, all three columns
/// always present.
pub fn disposition_breakdown(
    rows: &[ClassifiedOrder],
    windows: &RollingWindows,
    map: &DispositionMap,
) -> Vec<DispositionRow> {
    let mut out: Vec<DispositionRow> = windows
        .labels()
        .into_iter()
        .map(|month| DispositionRow {
            month,
            closed: 0,
            awaiting_qa: 0,
            awaiting_dept: 0,
        })
        .collect();

    for row in rows.iter().filter(|r| r.class == Classification::Missed) {
        let Some(target) = row.order.target_date else { continue };
        let Some(i) = windows.window_index(target) else { continue };
        match map.categorize(&row.order.status) {
            Disposition::Closed => out[i].closed += 1,
            Disposition::AwaitingQa => out[i].awaiting_qa += 1,
            Disposition::AwaitingDept => out[i].awaiting_dept += 1,
        }
    }
    out
}

/// Still-unresolved orders more than `threshold_days` past their target
/// date, sorted by month, then group, then most overdue first. Scans the
/// full dataset: the subjects here are often old enough to fall outside the
/// rolling window.
pub fn extreme_late_orders(
    rows: &[ClassifiedOrder],
    as_of: NaiveDate,
    threshold_days: i64,
) -> Vec<LateOrderRow> {
    let mut out: Vec<LateOrderRow> = rows
        .iter()
        .filter(|r| classifier::is_unresolved(&r.order.status))
        .filter_map(|r| {
            let target = r.order.target_date?;
            let age_days = days_between(target, as_of);
            if age_days <= threshold_days {
                return None;
            }
            Some(LateOrderRow {
                month: iso_month_label(target),
                work_order: r.order.work_order.clone(),
                group: r.order.group.clone(),
                target_date: target,
                age_days,
                description: r.order.description.clone(),
                class: r.class,
                status: r.order.status.clone(),
            })
        })
        .collect();
    out.sort_by(|a, b| {
        a.month
            .cmp(&b.month)
            .then_with(|| a.group.cmp(&b.group))
            .then_with(|| b.age_days.cmp(&a.age_days))
    });
    out
}

/// Title-panel data: the most recent completed month next to the
/// year-to-date totals. The YTD percentage is recomputed from the summed
/// counts of the windows falling in `as_of`'s calendar year.
pub fn governance_overview(
    rows: &[ClassifiedOrder],
    windows: &RollingWindows,
    as_of: NaiveDate,
) -> GovernanceOverview {
    let counts = counts_per_window(rows, windows);

    let current_month = match (windows.last(), counts.last()) {
        (Some(w), Some(c)) => c.summary_row(&w.label),
        _ => ClassCounts::default().summary_row("n/a"),
    };

    let mut ytd = ClassCounts::default();
    for (w, c) in windows.windows().iter().zip(&counts) {
        if w.start.year() == as_of.year() {
            ytd.merge(c);
        }
    }
    GovernanceOverview {
        current_month,
        year_to_date: ytd.summary_row(&format!("YTD {}", as_of.year())),
    }
}
