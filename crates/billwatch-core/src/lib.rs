//! Billwatch Core Library
//!
//! Domain logic for the billwatch bill tracker:
//! - Due-date status classification (overdue / due-today / due-soon / upcoming)
//! - Calendar-aware recurrence arithmetic for due-date advancement
//! - Annual-cost and monthly-average projections
//! - Payment-streak bookkeeping and on-time rates
//! - Naive recurring-charge detection over transaction records
//! - Roster file load/save (the caller-side record store)
//!
//! Everything here is synchronous and pure: "today" is always an explicit
//! parameter, never read from an ambient clock.

pub mod detect;
pub mod error;
pub mod models;
pub mod projection;
pub mod roster;
pub mod schedule;
pub mod status;
pub mod streak;

pub use detect::{detect_recurring, DetectorConfig};
pub use error::{Error, Result};
pub use models::{
    Bill, BillType, BillWithStatus, Charge, DueStatus, Frequency, RecurringCandidate,
};
pub use projection::{annual_cost, monthly_average, summarize, CostSummary, TypeCost};
pub use schedule::{due_dates_within, next_due_date, occurrences};
pub use status::{days_until_due, due_status, due_within, with_status, DUE_SOON_WINDOW_DAYS};
pub use streak::{on_time_rate, record_payment, PaymentResult};
