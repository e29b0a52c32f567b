//! Cost projection
//!
//! Projects a bill's amount to an annualized total and a monthly-equivalent
//! average, and folds a whole roster into a summary. Variable-amount bills
//! (`amount == None`) contribute zero to projections - a deliberate
//! simplification, not an error.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{Bill, BillType, DueStatus, Frequency};
use crate::status::due_status;

/// Projected cost of a bill over a year.
pub fn annual_cost(amount: Option<f64>, frequency: Frequency) -> f64 {
    match amount {
        Some(a) => a * frequency.per_year() as f64,
        None => 0.0,
    }
}

/// Monthly-equivalent cost of a bill.
///
/// Computed directly from the amount rather than by dividing a stored
/// annual figure, so the two projections agree to within float rounding:
/// `monthly_average(a, f) * 12 == annual_cost(a, f)`.
pub fn monthly_average(amount: Option<f64>, frequency: Frequency) -> f64 {
    match amount {
        Some(a) => a * frequency.per_year() as f64 / 12.0,
        None => 0.0,
    }
}

/// Roster-wide cost summary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostSummary {
    pub active_count: usize,
    pub total_annual: f64,
    pub total_monthly: f64,
    pub overdue_count: usize,
    pub due_soon_count: usize,
    pub by_type: Vec<TypeCost>,
}

/// Per-category slice of the summary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeCost {
    pub bill_type: BillType,
    pub count: usize,
    pub monthly: f64,
    pub annual: f64,
}

/// Summarize costs and due pressure across a roster.
///
/// Inactive bills are excluded entirely. Types with no active bills are
/// omitted; the rest come out in a stable category order.
pub fn summarize(bills: &[Bill], today: NaiveDate) -> CostSummary {
    let active: Vec<&Bill> = bills.iter().filter(|b| b.is_active).collect();

    let total_annual: f64 = active
        .iter()
        .map(|b| annual_cost(b.amount, b.frequency))
        .sum();
    let total_monthly: f64 = active
        .iter()
        .map(|b| monthly_average(b.amount, b.frequency))
        .sum();

    let overdue_count = active
        .iter()
        .filter(|b| due_status(b.next_due_date, today) == DueStatus::Overdue)
        .count();
    let due_soon_count = active
        .iter()
        .filter(|b| {
            matches!(
                due_status(b.next_due_date, today),
                DueStatus::DueToday | DueStatus::DueSoon
            )
        })
        .count();

    // BTreeMap keyed on the wire name gives a stable display order
    let mut groups: BTreeMap<&'static str, TypeCost> = BTreeMap::new();
    for bill in &active {
        let entry = groups
            .entry(bill.bill_type.as_str())
            .or_insert_with(|| TypeCost {
                bill_type: bill.bill_type,
                count: 0,
                monthly: 0.0,
                annual: 0.0,
            });
        entry.count += 1;
        entry.monthly += monthly_average(bill.amount, bill.frequency);
        entry.annual += annual_cost(bill.amount, bill.frequency);
    }

    CostSummary {
        active_count: active.len(),
        total_annual,
        total_monthly,
        overdue_count,
        due_soon_count,
        by_type: groups.into_values().collect(),
    }
}
