//! Payment-streak bookkeeping
//!
//! Maintains the per-bill counters (total/on-time payments, current and
//! longest streak) across "mark paid" events, and derives the on-time rate
//! for display. Counter invariants: `longest_streak >= current_streak`,
//! `total_payments >= on_time_payments`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::Bill;
use crate::schedule::next_due_date;

/// Outcome of recording a single payment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentResult {
    pub on_time: bool,
    /// The due date the payment settled
    pub paid_due_date: NaiveDate,
    /// Where the cadence rolled to
    pub next_due_date: NaiveDate,
    pub current_streak: u32,
    pub longest_streak: u32,
}

/// Percentage of payments made on time, rounded to the nearest integer.
/// Zero payments = 0, not a division error.
pub fn on_time_rate(on_time: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    (on_time as f64 / total as f64 * 100.0).round() as u32
}

/// Record a payment against a bill.
///
/// A payment on or before the due date counts as on time and extends the
/// streak; a late one resets it. The next due date is always rolled forward
/// from the bill's *prior* due date - not from the payment date and not
/// from today - so early and late payments keep the original cadence
/// anchor.
pub fn record_payment(bill: &mut Bill, paid_on: NaiveDate) -> PaymentResult {
    let due = bill.next_due_date;
    let on_time = paid_on <= due;

    bill.total_payments += 1;
    if on_time {
        bill.on_time_payments += 1;
        bill.current_streak += 1;
        bill.longest_streak = bill.longest_streak.max(bill.current_streak);
    } else {
        debug!(
            bill = %bill.name,
            streak = bill.current_streak,
            "Late payment, streak reset"
        );
        bill.current_streak = 0;
    }

    bill.last_paid_date = Some(paid_on);
    bill.next_due_date = next_due_date(due, bill.frequency);

    PaymentResult {
        on_time,
        paid_due_date: due,
        next_due_date: bill.next_due_date,
        current_streak: bill.current_streak,
        longest_streak: bill.longest_streak,
    }
}
