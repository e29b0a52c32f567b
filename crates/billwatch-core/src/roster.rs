//! Bill roster file
//!
//! The caller-side record store: a JSON array of bills in a flat file.
//! Deliberately dumb - read file, parse, write file. Anything smarter
//! belongs to whatever system is driving this library.

use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};
use crate::models::Bill;

/// Load a roster from a JSON file. A missing file is an empty roster,
/// so first runs don't need an init step.
pub fn load(path: &Path) -> Result<Vec<Bill>> {
    if !path.exists() {
        debug!(path = %path.display(), "Roster file missing, starting empty");
        return Ok(Vec::new());
    }
    let data = std::fs::read_to_string(path)?;
    let bills: Vec<Bill> = serde_json::from_str(&data)?;
    Ok(bills)
}

/// Write a roster back as pretty-printed JSON.
pub fn save(path: &Path, bills: &[Bill]) -> Result<()> {
    let json = serde_json::to_string_pretty(bills)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Find a bill by numeric id or case-insensitive name match. Returns an
/// index so callers can mutate the entry in place.
pub fn find_index(bills: &[Bill], name_or_id: &str) -> Result<usize> {
    if let Ok(id) = name_or_id.parse::<i64>() {
        if let Some(idx) = bills.iter().position(|b| b.id == id) {
            return Ok(idx);
        }
    }
    bills
        .iter()
        .position(|b| b.name.eq_ignore_ascii_case(name_or_id))
        .ok_or_else(|| Error::NotFound(format!("bill: {}", name_or_id)))
}

/// Next free bill id (max + 1, starting at 1).
pub fn next_id(bills: &[Bill]) -> i64 {
    bills.iter().map(|b| b.id).max().unwrap_or(0) + 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BillType, Frequency};
    use chrono::NaiveDate;

    fn make_bill(id: i64, name: &str) -> Bill {
        Bill {
            id,
            name: name.to_string(),
            amount: Some(9.99),
            frequency: Frequency::Monthly,
            next_due_date: NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(),
            bill_type: BillType::Subscriptions,
            category_id: None,
            auto_pay: false,
            last_paid_date: None,
            is_active: true,
            current_streak: 0,
            longest_streak: 0,
            total_payments: 0,
            on_time_payments: 0,
        }
    }

    #[test]
    fn test_missing_file_is_empty_roster() {
        let dir = tempfile::tempdir().unwrap();
        let bills = load(&dir.path().join("nope.json")).unwrap();
        assert!(bills.is_empty());
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bills.json");

        let bills = vec![make_bill(1, "Netflix"), make_bill(2, "Rent")];
        save(&path, &bills).unwrap();

        let loaded = load(&path).unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[1].name, "Rent");
        assert_eq!(loaded[0].next_due_date.to_string(), "2024-07-01");
    }

    #[test]
    fn test_malformed_roster_fails_loudly() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bills.json");
        std::fs::write(&path, r#"[{"id": 1, "name": "broken""#).unwrap();

        assert!(matches!(load(&path), Err(Error::Json(_))));
    }

    #[test]
    fn test_find_index_by_id_and_name() {
        let bills = vec![make_bill(1, "Netflix"), make_bill(2, "Rent")];

        assert_eq!(find_index(&bills, "2").unwrap(), 1);
        assert_eq!(find_index(&bills, "netflix").unwrap(), 0);
        assert!(matches!(
            find_index(&bills, "Spotify"),
            Err(Error::NotFound(_))
        ));
    }

    #[test]
    fn test_next_id() {
        assert_eq!(next_id(&[]), 1);
        assert_eq!(next_id(&[make_bill(4, "x"), make_bill(2, "y")]), 5);
    }
}
