use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use tabled::Tabled;

/// One record as it appears in the raw work-order export. Column names are
/// the source system's; everything is optional at this stage so a sparse or
/// partially filled export still deserializes row by row.
#[derive(Debug, Deserialize)]
pub struct RawRow {
    #[serde(rename = "work_orders")]
    pub work_order: Option<String>,
    #[serde(rename = "current_status")]
    pub status: Option<String>,
    #[serde(rename = "targ_comp_date")]
    pub target_date: Option<String>,
    #[serde(rename = "act_finish")]
    pub actual_finish: Option<String>,
    #[serde(rename = "finish_no_later")]
    pub grace_date: Option<String>,
    #[serde(rename = "work_type")]
    pub work_type: Option<String>,
    #[serde(rename = "wo_description")]
    pub description: Option<String>,
    #[serde(rename = "wo_assigned_group")]
    pub group: Option<String>,
}

/// A cleaned work order. Immutable once loaded; classification and month
/// bucketing attach derived values to copies, never to this struct.
#[derive(Debug, Clone)]
pub struct WorkOrder {
    pub work_order: String,
    /// Trimmed and uppercased status code (e.g. `COMP`, `INPRG`, `CAN`).
    pub status: String,
    pub target_date: Option<NaiveDate>,
    pub actual_finish: Option<NaiveDate>,
    /// Latest date the order may finish and still count as on time.
    pub grace_date: Option<NaiveDate>,
    pub group: String,
    pub work_type: Option<String>,
    pub description: String,
}

/// Lifecycle state of a work order. The four states partition any dataset:
/// every order lands in exactly one of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    Canceled,
    Open,
    OnTime,
    Missed,
}

impl Classification {
    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::Canceled => "canceled",
            Classification::Open => "open",
            Classification::OnTime => "on_time",
            Classification::Missed => "missed",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A work order together with its derived lifecycle state.
#[derive(Debug, Clone)]
pub struct ClassifiedOrder {
    pub order: WorkOrder,
    pub class: Classification,
}

/// One month of the governance summary. Also used for the synthetic
/// `Grand Total` row and the current-month / year-to-date panels, whose
/// percentages are recomputed from the summed counts.
#[derive(Debug, Serialize, Tabled, Clone)]
pub struct MonthlySummaryRow {
    #[serde(rename = "Month")]
    #[tabled(rename = "Month")]
    pub month: String,
    #[serde(rename = "Due")]
    #[tabled(rename = "Due")]
    pub due: usize,
    #[serde(rename = "Completed")]
    #[tabled(rename = "Completed")]
    pub completed: usize,
    #[serde(rename = "Missed")]
    #[tabled(rename = "Missed")]
    pub missed: usize,
    #[serde(rename = "Still Open")]
    #[tabled(rename = "Still Open")]
    pub still_open: usize,
    #[serde(rename = "Canceled")]
    #[tabled(rename = "Canceled")]
    pub canceled: usize,
    #[serde(rename = "Completion %")]
    #[tabled(rename = "Completion %", display_with = "crate::util::fmt_pct")]
    pub completion_pct: f64,
}

/// One month of the rolling missed/completed/generated trend. `generated`
/// counts every order due in the month and always equals the summary's
/// `due` for the same month.
#[derive(Debug, Serialize, Tabled, Clone)]
pub struct TrendRow {
    #[serde(rename = "Month")]
    #[tabled(rename = "Month")]
    pub month: String,
    #[serde(rename = "Missed")]
    #[tabled(rename = "Missed")]
    pub missed: usize,
    #[serde(rename = "Completed")]
    #[tabled(rename = "Completed")]
    pub completed: usize,
    #[serde(rename = "Generated")]
    #[tabled(rename = "Generated")]
    pub generated: usize,
}

/// Per-group performance within the selected scope.
#[derive(Debug, Serialize, Tabled, Clone)]
pub struct GroupBreakdownRow {
    #[serde(rename = "Group")]
    #[tabled(rename = "Group")]
    pub group: String,
    #[serde(rename = "Missed")]
    #[tabled(rename = "Missed")]
    pub missed: usize,
    #[serde(rename = "Completed")]
    #[tabled(rename = "Completed")]
    pub completed: usize,
    #[serde(rename = "Generated")]
    #[tabled(rename = "Generated")]
    pub generated: usize,
    #[serde(rename = "Missed %")]
    #[tabled(rename = "Missed %", display_with = "crate::util::fmt_pct")]
    pub missed_percent: f64,
    #[serde(rename = "Still Open")]
    #[tabled(rename = "Still Open")]
    pub still_open: usize,
}

/// Current status of the orders missed in one month, folded into the three
/// disposition categories. All three columns are always present.
#[derive(Debug, Serialize, Tabled, Clone)]
pub struct DispositionRow {
    #[serde(rename = "Month")]
    #[tabled(rename = "Month")]
    pub month: String,
    #[serde(rename = "Closed")]
    #[tabled(rename = "Closed")]
    pub closed: usize,
    #[serde(rename = "Awaiting QA")]
    #[tabled(rename = "Awaiting QA")]
    pub awaiting_qa: usize,
    #[serde(rename = "Awaiting Dept")]
    #[tabled(rename = "Awaiting Dept")]
    pub awaiting_dept: usize,
}

/// A still-unresolved order more than the threshold number of days past its
/// target date. `month` is the target month in `YYYY-MM` form so the column
/// sorts chronologically as text.
#[derive(Debug, Serialize, Tabled, Clone)]
pub struct LateOrderRow {
    #[serde(rename = "Month")]
    #[tabled(rename = "Month")]
    pub month: String,
    #[serde(rename = "Work Order")]
    #[tabled(rename = "Work Order")]
    pub work_order: String,
    #[serde(rename = "Group")]
    #[tabled(rename = "Group")]
    pub group: String,
    #[serde(rename = "Target Date")]
    #[tabled(rename = "Target Date")]
    pub target_date: NaiveDate,
    #[serde(rename = "Days Late")]
    #[tabled(rename = "Days Late")]
    pub age_days: i64,
    #[serde(rename = "Description")]
    #[tabled(rename = "Description")]
    pub description: String,
    #[serde(rename = "Class")]
    #[tabled(rename = "Class")]
    pub class: Classification,
    #[serde(rename = "Status")]
    #[tabled(rename = "Status")]
    pub status: String,
}

/// Flat export form of a classified order, written alongside the report
/// tables so downstream consumers get the cleaned dataset itself.
#[derive(Debug, Serialize, Clone)]
pub struct CleanedRow {
    pub work_order: String,
    pub status: String,
    pub target_date: Option<NaiveDate>,
    pub actual_finish: Option<NaiveDate>,
    pub grace_date: Option<NaiveDate>,
    pub group: String,
    pub work_type: Option<String>,
    pub description: String,
    pub wo_class: Classification,
}

impl From<&ClassifiedOrder> for CleanedRow {
    fn from(row: &ClassifiedOrder) -> Self {
        CleanedRow {
            work_order: row.order.work_order.clone(),
            status: row.order.status.clone(),
            target_date: row.order.target_date,
            actual_finish: row.order.actual_finish,
            grace_date: row.order.grace_date,
            group: row.order.group.clone(),
            work_type: row.order.work_type.clone(),
            description: row.order.description.clone(),
            wo_class: row.class,
        }
    }
}

/// Data behind the title-slide panels: the most recent completed month next
/// to the year-to-date totals.
#[derive(Debug, Serialize, Clone)]
pub struct GovernanceOverview {
    pub current_month: MonthlySummaryRow,
    pub year_to_date: MonthlySummaryRow,
}
