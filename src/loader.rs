// CSV ingestion for work-order exports.
//
// The loader is the only place where a run can fail on data shape: a file
// missing a structural column aborts immediately with an error naming the
// column. Everything row-local degrades instead: a blank or unparseable
// optional field becomes `None` and the row is still loaded and counted.
use crate::error::ReportError;
use crate::types::{RawRow, WorkOrder};
use crate::util::parse_date_safe;
use csv::ReaderBuilder;
use std::collections::HashMap;
use std::path::Path;

/// Source columns without which aggregation cannot proceed.
pub const REQUIRED_COLUMNS: &[&str] = &["current_status", "targ_comp_date"];

/// Source columns the pipeline uses but can live without.
const OPTIONAL_COLUMNS: &[&str] = &[
    "work_orders",
    "act_finish",
    "finish_no_later",
    "work_type",
    "wo_description",
    "wo_assigned_group",
];

#[derive(Debug, Clone)]
pub struct LoadReport {
    pub total_rows: usize,
    pub loaded_rows: usize,
    pub parse_errors: usize,
    /// Rows with no usable target date; they load fine but fall outside
    /// every month bucket.
    pub undated_rows: usize,
    /// Work-order counts per work type, largest first.
    pub by_type: Vec<(String, usize)>,
}

fn clean_opt(value: Option<String>) -> Option<String> {
    let v = value?.trim().to_string();
    if v.is_empty() {
        None
    } else {
        Some(v)
    }
}

/// Load a work-order export into clean records plus load diagnostics.
pub fn load_work_orders(path: &Path) -> Result<(Vec<WorkOrder>, LoadReport), ReportError> {
    let mut rdr = ReaderBuilder::new().flexible(true).from_path(path)?;

    let headers = rdr.headers()?.clone();
    if headers.is_empty() {
        return Err(ReportError::NoHeader(path.to_path_buf()));
    }
    for col in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h.trim() == *col) {
            return Err(ReportError::MissingColumn(col));
        }
    }
    for col in OPTIONAL_COLUMNS {
        if !headers.iter().any(|h| h.trim() == *col) {
            log::warn!("input has no '{}' column; affected fields load as empty", col);
        }
    }

    let mut total_rows = 0usize;
    let mut parse_errors = 0usize;
    let mut undated_rows = 0usize;
    let mut orders: Vec<WorkOrder> = Vec::new();
    let mut type_counts: HashMap<String, usize> = HashMap::new();

    for result in rdr.deserialize::<RawRow>() {
        total_rows += 1;
        let raw = match result {
            Ok(r) => r,
            Err(err) => {
                parse_errors += 1;
                log::debug!("skipping row {}: {}", total_rows, err);
                continue;
            }
        };

        let status = raw.status.unwrap_or_default().trim().to_uppercase();
        let target_date = parse_date_safe(raw.target_date.as_deref());
        if target_date.is_none() {
            undated_rows += 1;
        }
        let group = clean_opt(raw.group).unwrap_or_else(|| "Unassigned".to_string());
        let work_type = clean_opt(raw.work_type);

        let type_key = work_type.clone().unwrap_or_else(|| "Unspecified".to_string());
        *type_counts.entry(type_key).or_insert(0) += 1;

        orders.push(WorkOrder {
            work_order: clean_opt(raw.work_order).unwrap_or_default(),
            status,
            target_date,
            actual_finish: parse_date_safe(raw.actual_finish.as_deref()),
            grace_date: parse_date_safe(raw.grace_date.as_deref()),
            group,
            work_type,
            description: clean_opt(raw.description).unwrap_or_default(),
        });
    }

    let mut by_type: Vec<(String, usize)> = type_counts.into_iter().collect();
    by_type.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    log::info!(
        "loaded {} of {} rows from {} ({} parse errors, {} undated)",
        orders.len(),
        total_rows,
        path.display(),
        parse_errors,
        undated_rows
    );

    let report = LoadReport {
        total_rows,
        loaded_rows: orders.len(),
        parse_errors,
        undated_rows,
        by_type,
    };
    Ok((orders, report))
}
