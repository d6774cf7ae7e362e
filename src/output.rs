// Console previews and file export of the report tables.
//
// CSV and JSON are the data contract with the downstream deck/sheet
// renderers; this module never reshapes a table, it only serializes what
// the aggregators produced.
use crate::assembler::ReportBundle;
use crate::error::ReportError;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tabled::{settings::Style, Table, Tabled};

pub fn write_csv<T: Serialize>(path: &Path, rows: &[T]) -> Result<(), ReportError> {
    let mut wtr = csv::Writer::from_path(path)?;
    for r in rows {
        wtr.serialize(r)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), ReportError> {
    let s = serde_json::to_string_pretty(value)?;
    std::fs::write(path, s)?;
    Ok(())
}

/// Print a numbered report header and the first `max_rows` rows as a
/// Markdown table. An empty table prints a `(no rows)` placeholder instead
/// of being skipped.
pub fn preview_table<T>(report_no: usize, title: &str, note: Option<&str>, rows: &[T], max_rows: usize)
where
    T: Tabled + Clone,
{
    println!("\nReport {}: {}", report_no, title);
    if let Some(n) = note {
        println!("({})", n);
    }
    println!();
    let slice: Vec<T> = rows.iter().cloned().take(max_rows).collect();
    if slice.is_empty() {
        println!("(no rows)\n");
        return;
    }
    let table_str = Table::new(slice).with(Style::markdown()).to_string();
    println!("{}\n", table_str);
}

/// Write every table of a bundle under `dir`, returning the written paths.
/// The directory is created if needed.
pub fn export_bundle(dir: &Path, bundle: &ReportBundle) -> Result<Vec<PathBuf>, ReportError> {
    std::fs::create_dir_all(dir)?;
    let mut written = Vec::new();

    let path = dir.join("monthly_summary.csv");
    write_csv(&path, &bundle.monthly_summary)?;
    written.push(path);

    let path = dir.join("pm_trend.csv");
    write_csv(&path, &bundle.trend)?;
    written.push(path);

    let path = dir.join("group_breakdown.csv");
    write_csv(&path, &bundle.group_breakdown)?;
    written.push(path);

    let path = dir.join("missed_disposition.csv");
    write_csv(&path, &bundle.disposition)?;
    written.push(path);

    let path = dir.join("late_work_orders.csv");
    write_csv(&path, &bundle.late_orders)?;
    written.push(path);

    let path = dir.join("cleaned_work_orders.csv");
    write_csv(&path, &bundle.cleaned_rows)?;
    written.push(path);

    let path = dir.join("governance_overview.json");
    write_json(&path, &bundle.overview)?;
    written.push(path);

    Ok(written)
}
