//! Roster command implementations

use std::path::Path;

use anyhow::{Context, Result};
use billwatch_core::{
    on_time_rate, record_payment, roster, with_status, Bill, BillType, DueStatus, Frequency,
};
use tracing::debug;

use super::{resolve_date, truncate};

pub fn cmd_add(
    file: &Path,
    name: &str,
    due: &str,
    amount: Option<f64>,
    frequency: &str,
    bill_type: &str,
    auto_pay: bool,
) -> Result<()> {
    let frequency: Frequency = frequency.parse()?;
    let bill_type: BillType = bill_type.parse()?;
    let next_due_date = resolve_date(Some(due)).context("Invalid --due date")?;

    let mut bills = roster::load(file).context("Failed to load roster")?;
    let bill = Bill {
        id: roster::next_id(&bills),
        name: name.to_string(),
        amount,
        frequency,
        next_due_date,
        bill_type,
        category_id: None,
        auto_pay,
        last_paid_date: None,
        is_active: true,
        current_streak: 0,
        longest_streak: 0,
        total_payments: 0,
        on_time_payments: 0,
    };

    let amount_str = amount
        .map(|a| format!("${:.2}", a))
        .unwrap_or_else(|| "variable".to_string());
    println!(
        "✅ Added bill {} (ID: {}): {}/{}, next due {}",
        bill.name, bill.id, amount_str, frequency, next_due_date
    );

    bills.push(bill);
    roster::save(file, &bills).context("Failed to save roster")?;
    debug!(count = bills.len(), path = %file.display(), "Roster saved");
    Ok(())
}

pub fn cmd_list(file: &Path, as_of: Option<&str>, all: bool, json: bool) -> Result<()> {
    let today = resolve_date(as_of)?;
    let bills = roster::load(file).context("Failed to load roster")?;

    let visible: Vec<_> = bills
        .into_iter()
        .filter(|b| all || b.is_active)
        .map(|b| with_status(b, today))
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&visible)?);
        return Ok(());
    }

    if visible.is_empty() {
        println!("No bills in the roster yet. Add one:");
        println!("  billwatch add \"Rent\" --due 2024-07-01 --amount 1450 -t rent");
        return Ok(());
    }

    println!();
    println!("📋 Bills as of {}", today);
    println!("   ─────────────────────────────────────────────────────────────");

    for entry in visible {
        let icon = status_icon(entry.status);
        let bill = &entry.bill;
        let amount_str = bill
            .amount
            .map(|a| format!("${:.2}", a))
            .unwrap_or_else(|| "?".to_string());
        let due_str = match entry.days_until_due {
            d if d < 0 => format!("{} days overdue", -d),
            0 => "due today".to_string(),
            1 => "due tomorrow".to_string(),
            d => format!("due in {} days", d),
        };
        let inactive = if bill.is_active { "" } else { " (inactive)" };

        println!(
            "   {} {:20} │ {:>9}/{:<8} │ {} ({}){}",
            icon,
            truncate(&bill.name, 20),
            amount_str,
            bill.frequency,
            bill.next_due_date,
            due_str,
            inactive
        );
    }

    Ok(())
}

pub fn cmd_pay(file: &Path, name_or_id: &str, date: Option<&str>) -> Result<()> {
    let paid_on = resolve_date(date).context("Invalid --date")?;
    let mut bills = roster::load(file).context("Failed to load roster")?;

    let idx = roster::find_index(&bills, name_or_id)
        .map_err(|_| anyhow::anyhow!("Bill not found: {}", name_or_id))?;
    let result = record_payment(&mut bills[idx], paid_on);
    let bill = &bills[idx];
    debug!(
        bill = %bill.name,
        on_time = result.on_time,
        streak = result.current_streak,
        "Payment recorded"
    );

    if result.on_time {
        println!(
            "✅ {} paid on time ({} for due date {})",
            bill.name, paid_on, result.paid_due_date
        );
        println!(
            "   Streak: {} (longest {})",
            result.current_streak, result.longest_streak
        );
    } else {
        println!(
            "⚠️  {} paid late ({} for due date {}) - streak reset",
            bill.name, paid_on, result.paid_due_date
        );
    }
    println!("   Next due: {}", result.next_due_date);
    println!(
        "   On-time rate: {}% ({}/{})",
        on_time_rate(bill.on_time_payments, bill.total_payments),
        bill.on_time_payments,
        bill.total_payments
    );

    roster::save(file, &bills).context("Failed to save roster")?;
    Ok(())
}

pub fn cmd_set_active(file: &Path, name_or_id: &str, active: bool) -> Result<()> {
    let mut bills = roster::load(file).context("Failed to load roster")?;
    let idx = roster::find_index(&bills, name_or_id)
        .map_err(|_| anyhow::anyhow!("Bill not found: {}", name_or_id))?;

    bills[idx].is_active = active;
    let verb = if active { "reactivated" } else { "deactivated" };
    println!("✅ {} {}", bills[idx].name, verb);

    roster::save(file, &bills).context("Failed to save roster")?;
    Ok(())
}

pub fn status_icon(status: DueStatus) -> &'static str {
    match status {
        DueStatus::Overdue => "🔴",
        DueStatus::DueToday => "🟠",
        DueStatus::DueSoon => "🟡",
        DueStatus::Upcoming => "🟢",
    }
}
