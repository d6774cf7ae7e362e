// Report settings and the status tables that were previously scattered as
// inline literals across the reporting code. The disposition mapping in
// particular drifted between call sites in earlier iterations of this tool;
// it now lives in exactly one place and can be overridden from a settings
// file.
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Which slice of the dataset the group breakdown covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupScope {
    /// Only orders due in the most recent *completed* month (the last
    /// rolling window). The current partial month never skews group rates.
    MostRecentMonth,
    /// Every classified order in the dataset.
    AllData,
}

/// Disposition category for an order that was classified `missed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    Closed,
    AwaitingQa,
    AwaitingDept,
}

/// Maps a missed order's *current* status to its disposition category.
/// Statuses matching none of the lists fall through to Awaiting Dept.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DispositionMap {
    pub closed: Vec<String>,
    pub awaiting_qa: Vec<String>,
    pub awaiting_dept: Vec<String>,
}

impl Default for DispositionMap {
    fn default() -> Self {
        fn owned(list: &[&str]) -> Vec<String> {
            list.iter().map(|s| s.to_string()).collect()
        }
        DispositionMap {
            closed: owned(&["CLOSE", "REVWD", "PENRVW", "COMP", "CORRTD"]),
            awaiting_qa: owned(&["PENDQA"]),
            awaiting_dept: owned(&["FLAGGED", "MISSED", "WAPPR", "APPR", "INPRG"]),
        }
    }
}

impl DispositionMap {
    pub fn categorize(&self, status: &str) -> Disposition {
        let matches = |list: &[String]| list.iter().any(|s| s.eq_ignore_ascii_case(status));
        if matches(&self.closed) {
            Disposition::Closed
        } else if matches(&self.awaiting_qa) {
            Disposition::AwaitingQa
        } else {
            // awaiting_dept doubles as the fallback bucket
            Disposition::AwaitingDept
        }
    }
}

/// Settings for one report run. Defaults reproduce the standing governance
/// report: 12 complete months, 90-day late threshold, group charts scoped
/// to the previous month.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Number of complete calendar months in the rolling window.
    pub lookback_months: u32,
    /// An open order older than this many days past target is "extreme late".
    pub late_threshold_days: i64,
    pub group_scope: GroupScope,
    pub input_path: PathBuf,
    pub report_dir: PathBuf,
    pub disposition: DispositionMap,
}

impl Default for ReportConfig {
    fn default() -> Self {
        ReportConfig {
            lookback_months: 12,
            late_threshold_days: 90,
            group_scope: GroupScope::MostRecentMonth,
            input_path: PathBuf::from("data/raw/work_orders.csv"),
            report_dir: PathBuf::from("outputs/reports"),
            disposition: DispositionMap::default(),
        }
    }
}

/// Read settings from a JSON file, falling back to the defaults when the
/// file is absent. A malformed file is reported and ignored rather than
/// aborting the session.
pub fn load_or_default(path: &Path) -> ReportConfig {
    match fs::read_to_string(path) {
        Ok(text) => match serde_json::from_str(&text) {
            Ok(cfg) => {
                log::info!("loaded report settings from {}", path.display());
                cfg
            }
            Err(err) => {
                log::warn!("ignoring malformed settings file {}: {}", path.display(), err);
                ReportConfig::default()
            }
        },
        Err(_) => ReportConfig::default(),
    }
}
