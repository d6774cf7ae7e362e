// Report assembly.
//
// One call produces one self-consistent snapshot: the dataset is classified
// once, the rolling windows are built once from a single `as_of` date, and
// every table comes from that same classified set. Nothing here reads a
// clock; the caller captures "today" once and passes it in, so a run that
// straddles midnight cannot hand renderers tables computed against two
// different days.
use crate::classifier::apply_classification;
use crate::config::ReportConfig;
use crate::months::RollingWindows;
use crate::reports;
use crate::types::{
    CleanedRow, DispositionRow, GovernanceOverview, GroupBreakdownRow, LateOrderRow,
    MonthlySummaryRow, TrendRow, WorkOrder,
};
use chrono::NaiveDate;
use serde::Serialize;

/// Everything one report run produces, ready for previewing and export.
#[derive(Debug, Clone, Serialize)]
pub struct ReportBundle {
    pub as_of: NaiveDate,
    /// 12 monthly rows plus the `Grand Total` row, always last.
    pub monthly_summary: Vec<MonthlySummaryRow>,
    pub trend: Vec<TrendRow>,
    pub group_breakdown: Vec<GroupBreakdownRow>,
    pub disposition: Vec<DispositionRow>,
    pub late_orders: Vec<LateOrderRow>,
    pub overview: GovernanceOverview,
    /// The classified dataset itself, exported alongside the tables.
    pub cleaned_rows: Vec<CleanedRow>,
}

/// Run the whole pipeline over one dataset. Pure function of
/// `(orders, as_of, config)`; shape errors belong to the loader, so this
/// cannot fail; an empty dataset yields well-formed zero-filled tables.
pub fn assemble(orders: &[WorkOrder], as_of: NaiveDate, config: &ReportConfig) -> ReportBundle {
    let classified = apply_classification(orders);
    let windows = RollingWindows::ending_at(as_of, config.lookback_months);

    ReportBundle {
        as_of,
        monthly_summary: reports::monthly_summary(&classified, &windows),
        trend: reports::rolling_trend(&classified, &windows),
        group_breakdown: reports::group_breakdown(&classified, &windows, config.group_scope),
        disposition: reports::disposition_breakdown(&classified, &windows, &config.disposition),
        late_orders: reports::extreme_late_orders(&classified, as_of, config.late_threshold_days),
        overview: reports::governance_overview(&classified, &windows, as_of),
        cleaned_rows: classified.iter().map(CleanedRow::from).collect(),
    }
}
