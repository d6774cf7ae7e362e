// Entry point and high-level CLI flow.
//
// - Option [1] loads a work-order export, printing load diagnostics.
// - Option [2] assembles the full report bundle, previews every table,
//   prints the current-month / year-to-date panel and exports the tables.
// - After generating reports, the user can choose to go back to the
//   selection menu or exit.
use chrono::Local;
use once_cell::sync::Lazy;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use wo_report::config::{self, GroupScope, ReportConfig};
use wo_report::types::{MonthlySummaryRow, WorkOrder};
use wo_report::{assembler, loader, output, reports, util};

// Simple in-memory app state so we only load the export once but can
// generate reports multiple times in a single run.
static APP_STATE: Lazy<Mutex<AppState>> = Lazy::new(|| Mutex::new(AppState { data: None }));

struct AppState {
    data: Option<Vec<WorkOrder>>,
}

/// Read a single line of input after printing the common "Enter choice:" prompt.
///
/// The prompt is reused for both the main menu and simple numeric inputs.
fn read_choice() -> String {
    print!("Enter choice: ");
    let _ = io::stdout().flush();
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).ok();
    buf.trim().to_string()
}

/// Ask the user whether to go back to the report selection menu after
/// generating reports.
///
/// Returns `true` if the user chose `Y`, `false` if they chose `N`.
fn prompt_back_to_menu() -> bool {
    loop {
        print!("Back to Report Selection (Y/N): ");
        let _ = io::stdout().flush();
        let mut buf = String::new();
        io::stdin().read_line(&mut buf).ok();
        let resp = buf.trim().to_uppercase();
        match resp.as_str() {
            "Y" => return true,
            "N" => return false,
            _ => println!("Invalid choice. Please enter Y or N."),
        }
    }
}

/// Handle option [1]: load a work-order export.
///
/// On success, we store the `Vec<WorkOrder>` in `APP_STATE` and print a
/// short textual summary of what was loaded.
fn handle_load(cfg: &ReportConfig) {
    print!("Work order file [{}]: ", cfg.input_path.display());
    let _ = io::stdout().flush();
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).ok();
    let entered = buf.trim();
    let path = if entered.is_empty() {
        cfg.input_path.clone()
    } else {
        PathBuf::from(entered)
    };

    match loader::load_work_orders(&path) {
        Ok((data, load_report)) => {
            println!(
                "Processing dataset... ({} rows read, {} work orders loaded)",
                util::format_int(load_report.total_rows as i64),
                util::format_int(load_report.loaded_rows as i64)
            );
            if load_report.parse_errors > 0 {
                println!(
                    "Note: {} rows skipped due to parse errors.",
                    util::format_int(load_report.parse_errors as i64)
                );
            }
            if load_report.undated_rows > 0 {
                println!(
                    "Note: {} rows have no target date and fall outside the month buckets.",
                    util::format_int(load_report.undated_rows as i64)
                );
            }
            if !load_report.by_type.is_empty() {
                println!("Work orders by type:");
                for (work_type, count) in &load_report.by_type {
                    println!("  {:<14} {}", work_type, util::format_int(*count as i64));
                }
            }
            println!();
            let mut state = APP_STATE.lock().unwrap();
            state.data = Some(data);
        }
        Err(e) => {
            eprintln!("Failed to load file: {}\n", e);
        }
    }
}

fn panel_line(label: &str, row: &MonthlySummaryRow) {
    println!(
        "{}: {} due, {} completed, {} missed ({:.1}% completion)",
        label,
        util::format_int(row.due as i64),
        util::format_int(row.completed as i64),
        util::format_int(row.missed as i64),
        row.completion_pct
    );
}

/// Handle option [2]: assemble the report bundle, preview every table and
/// export the lot.
///
/// This function is intentionally side-effectful: it writes six CSV files
/// and a JSON overview, and prints Markdown previews to the console. The
/// "today" used for every window is captured exactly once here.
fn handle_generate_reports(cfg: &ReportConfig) {
    let data = {
        let state = APP_STATE.lock().unwrap();
        state.data.clone()
    };
    let Some(data) = data else {
        println!("Error: No data loaded. Please load a work order file first (option 1).\n");
        return;
    };

    let as_of = Local::now().date_naive();
    println!("Generating governance reports as of {}...", as_of);

    let bundle = assembler::assemble(&data, as_of, cfg);

    output::preview_table(
        1,
        "Monthly PM Summary",
        Some("last 12 complete months, plus grand total"),
        &bundle.monthly_summary,
        13,
    );
    output::preview_table(2, "12-Month PM Trend", None, &bundle.trend, 12);

    let group_note = match cfg.group_scope {
        GroupScope::MostRecentMonth => "previous month, groups with at least one miss",
        GroupScope::AllData => "all data, groups with at least one miss",
    };
    let missed_groups = reports::retain_groups_with_missed(bundle.group_breakdown.clone());
    output::preview_table(3, "Missed PMs by Group", Some(group_note), &missed_groups, 10);

    output::preview_table(
        4,
        "Missed PM Disposition",
        Some("current status of missed orders"),
        &bundle.disposition,
        12,
    );
    let late_note = format!(
        "unresolved, more than {} days past target",
        cfg.late_threshold_days
    );
    output::preview_table(5, "Extreme Late Work Orders", Some(&late_note), &bundle.late_orders, 10);

    panel_line("Current month", &bundle.overview.current_month);
    panel_line("Year to date", &bundle.overview.year_to_date);
    println!();

    match output::export_bundle(&cfg.report_dir, &bundle) {
        Ok(paths) => {
            println!("Exported:");
            for p in paths {
                println!("  {}", p.display());
            }
            println!();
        }
        Err(e) => eprintln!("Export error: {}\n", e),
    }
}

fn main() {
    env_logger::init();
    let cfg = config::load_or_default(Path::new("wo_report.json"));
    loop {
        println!("Work Order Governance Reporting:");
        println!("[1] Load work order file");
        println!("[2] Generate governance reports\n");
        match read_choice().as_str() {
            "1" => {
                handle_load(&cfg);
            }
            "2" => {
                println!();
                handle_generate_reports(&cfg);
                if !prompt_back_to_menu() {
                    println!("Exiting the program.");
                    break;
                }
            }
            _ => {
                println!("Invalid choice. Please enter 1 or 2.\n");
            }
        }
    }
}
