// Lifecycle classification of work orders.
//
// The four classes partition any dataset; every aggregator in the crate
// consumes the result of `apply_classification` rather than re-deriving a
// class of its own.
use crate::types::{Classification, ClassifiedOrder, WorkOrder};

/// Status code of a canceled work order.
pub const STATUS_CANCELED: &str = "CAN";

/// Statuses under which an order counts as finished, so its finish date can
/// be judged against the grace date.
pub const TERMINAL_STATUSES: &[&str] = &[
    "COMP", "CORRECTED", "CORRTD", "PENDQA", "PENRVW", "REVWD", "CLOSE",
];

/// Statuses of orders still being worked; the extreme-late report only
/// looks at these.
pub const UNRESOLVED_STATUSES: &[&str] = &["APPR", "INPRG", "WAPPR"];

/// Assign a work order its lifecycle state. Pure function of the status,
/// finish date and grace date; first matching rule wins:
///
/// 1. status `CAN` is `canceled`, whatever the dates say;
/// 2. no finish date, or a status that is not terminal, is `open`;
/// 3. finished on or before the grace date is `on_time`;
/// 4. otherwise `missed`.
///
/// An absent grace date on an otherwise finished order routes to `open`:
/// a missing optional field is never an error and never a comparison.
pub fn classify(order: &WorkOrder) -> Classification {
    let status = order.status.trim().to_uppercase();
    if status == STATUS_CANCELED {
        return Classification::Canceled;
    }
    let finish = match order.actual_finish {
        Some(d) => d,
        None => return Classification::Open,
    };
    if !TERMINAL_STATUSES.contains(&status.as_str()) {
        return Classification::Open;
    }
    match order.grace_date {
        Some(grace) if finish <= grace => Classification::OnTime,
        Some(_) => Classification::Missed,
        None => Classification::Open,
    }
}

/// Classify every row of a dataset. Each input order is copied with its
/// derived class attached; the inputs are never mutated, so reapplying over
/// the produced orders yields the same classes regardless of row order.
pub fn apply_classification(orders: &[WorkOrder]) -> Vec<ClassifiedOrder> {
    orders
        .iter()
        .map(|o| ClassifiedOrder {
            order: o.clone(),
            class: classify(o),
        })
        .collect()
}

pub fn is_unresolved(status: &str) -> bool {
    UNRESOLVED_STATUSES
        .iter()
        .any(|s| s.eq_ignore_ascii_case(status))
}
