//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `bills` - Roster commands (add, list, pay, activate/deactivate)
//! - `detect` - Recurring-pattern detection over a charge file
//! - `reports` - Upcoming window and cost projection report

pub mod bills;
pub mod detect;
pub mod reports;

// Re-export command functions for main.rs
pub use bills::*;
pub use detect::*;
pub use reports::*;

use anyhow::{Context, Result};
use chrono::NaiveDate;

/// Parse an optional YYYY-MM-DD flag; None means "today".
///
/// This is the single place the CLI reads a clock - everything below it
/// takes the resolved date as a parameter.
pub fn resolve_date(flag: Option<&str>) -> Result<NaiveDate> {
    match flag {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .with_context(|| format!("Invalid date '{}' (use YYYY-MM-DD)", s)),
        None => Ok(chrono::Local::now().date_naive()),
    }
}

/// Truncate a string to a maximum length, adding "..." if truncated.
/// Counts chars, not bytes, so multi-byte names never split mid-character.
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let head: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", head)
    }
}
