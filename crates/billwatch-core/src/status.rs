//! Due-date status classification
//!
//! Status is a pure function of (today, next_due_date), recomputed on every
//! read. Both sides are calendar dates, so time-of-day can never move a
//! bill between buckets.

use chrono::NaiveDate;

use crate::models::{Bill, BillWithStatus, DueStatus};

/// Bills due within this many days are "due soon"
pub const DUE_SOON_WINDOW_DAYS: i64 = 3;

/// Signed whole days until a due date; negative = overdue
pub fn days_until_due(next_due: NaiveDate, today: NaiveDate) -> i64 {
    (next_due - today).num_days()
}

/// Classify a due date relative to `today`. First match wins:
/// overdue, due-today, due-soon (within 3 days), upcoming.
pub fn due_status(next_due: NaiveDate, today: NaiveDate) -> DueStatus {
    let days = days_until_due(next_due, today);
    if days < 0 {
        DueStatus::Overdue
    } else if days == 0 {
        DueStatus::DueToday
    } else if days <= DUE_SOON_WINDOW_DAYS {
        DueStatus::DueSoon
    } else {
        DueStatus::Upcoming
    }
}

/// Attach the computed status and day count to a bill record.
pub fn with_status(bill: Bill, today: NaiveDate) -> BillWithStatus {
    let days = days_until_due(bill.next_due_date, today);
    let status = due_status(bill.next_due_date, today);
    BillWithStatus {
        bill,
        status,
        days_until_due: days,
    }
}

/// Active bills due inside an inclusive day window, soonest first.
///
/// Already-overdue bills are included (days_until_due < 0 is still inside
/// any window) since a notification feed that drops overdue bills would be
/// useless.
pub fn due_within(bills: &[Bill], today: NaiveDate, days: i64) -> Vec<&Bill> {
    let mut due: Vec<&Bill> = bills
        .iter()
        .filter(|b| b.is_active && days_until_due(b.next_due_date, today) <= days)
        .collect();
    due.sort_by_key(|b| b.next_due_date);
    due
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BillType, Frequency};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn make_bill(name: &str, due: NaiveDate) -> Bill {
        Bill {
            id: 1,
            name: name.to_string(),
            amount: Some(15.99),
            frequency: Frequency::Monthly,
            next_due_date: due,
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
    fn test_status_bucket_boundaries() {
        let today = date(2024, 6, 15);

        assert_eq!(due_status(date(2024, 6, 14), today), DueStatus::Overdue);
        assert_eq!(days_until_due(date(2024, 6, 14), today), -1);

        assert_eq!(due_status(date(2024, 6, 15), today), DueStatus::DueToday);
        assert_eq!(days_until_due(date(2024, 6, 15), today), 0);

        assert_eq!(due_status(date(2024, 6, 16), today), DueStatus::DueSoon);
        assert_eq!(due_status(date(2024, 6, 18), today), DueStatus::DueSoon);
        assert_eq!(days_until_due(date(2024, 6, 18), today), 3);

        assert_eq!(due_status(date(2024, 6, 19), today), DueStatus::Upcoming);
        assert_eq!(days_until_due(date(2024, 6, 19), today), 4);
    }

    #[test]
    fn test_with_status_keeps_record_intact() {
        let today = date(2024, 6, 15);
        let bill = make_bill("Netflix", date(2024, 6, 13));
        let with = with_status(bill, today);

        assert_eq!(with.status, DueStatus::Overdue);
        assert_eq!(with.days_until_due, -2);
        assert_eq!(with.bill.name, "Netflix");
        assert_eq!(with.bill.amount, Some(15.99));
    }

    #[test]
    fn test_with_status_flattens_bill_fields() {
        let today = date(2024, 6, 15);
        let with = with_status(make_bill("Rent", date(2024, 6, 20)), today);
        let json = serde_json::to_value(&with).unwrap();

        // Status fields sit alongside the bill's own fields, not nested
        assert_eq!(json["name"], "Rent");
        assert_eq!(json["status"], "upcoming");
        assert_eq!(json["days_until_due"], 5);
    }

    #[test]
    fn test_due_within_filters_and_sorts() {
        let today = date(2024, 6, 15);
        let mut overdue = make_bill("Water", date(2024, 6, 10));
        overdue.id = 2;
        let mut inactive = make_bill("Old gym", date(2024, 6, 16));
        inactive.id = 3;
        inactive.is_active = false;
        let mut far = make_bill("Insurance", date(2024, 9, 1));
        far.id = 4;
        let soon = make_bill("Netflix", date(2024, 6, 20));

        let bills = vec![soon, overdue, inactive, far];
        let due = due_within(&bills, today, 14);

        let names: Vec<_> = due.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["Water", "Netflix"]);
    }
}
