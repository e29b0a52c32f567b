//! Report command implementations

use std::path::Path;

use anyhow::{Context, Result};
use billwatch_core::{days_until_due, due_status, due_within, on_time_rate, roster, summarize};

use super::bills::status_icon;
use super::{resolve_date, truncate};

pub fn cmd_upcoming(file: &Path, days: i64, as_of: Option<&str>) -> Result<()> {
    let today = resolve_date(as_of)?;
    let bills = roster::load(file).context("Failed to load roster")?;

    let due = due_within(&bills, today, days);
    if due.is_empty() {
        println!("Nothing due in the next {} days. 🎉", days);
        return Ok(());
    }

    println!();
    println!("📅 Due within {} days (as of {})", days, today);
    println!("   ─────────────────────────────────────────────────────────────");

    for bill in due {
        let icon = status_icon(due_status(bill.next_due_date, today));
        let amount_str = bill
            .amount
            .map(|a| format!("${:.2}", a))
            .unwrap_or_else(|| "?".to_string());
        let days_str = match days_until_due(bill.next_due_date, today) {
            d if d < 0 => format!("{}d overdue", -d),
            0 => "today".to_string(),
            d => format!("in {}d", d),
        };
        let auto = if bill.auto_pay { " (auto-pay)" } else { "" };

        println!(
            "   {} {:20} │ {:>9} │ {} {}{}",
            icon,
            truncate(&bill.name, 20),
            amount_str,
            bill.next_due_date,
            days_str,
            auto
        );
    }

    Ok(())
}

pub fn cmd_report(file: &Path, as_of: Option<&str>) -> Result<()> {
    let today = resolve_date(as_of)?;
    let bills = roster::load(file).context("Failed to load roster")?;
    let summary = summarize(&bills, today);

    println!();
    println!("💰 Cost projection (as of {})", today);
    println!("   ─────────────────────────────────────────────────────────────");
    println!("   Active bills:     {}", summary.active_count);
    println!("   Monthly average:  ${:.2}", summary.total_monthly);
    println!("   Annual cost:      ${:.2}", summary.total_annual);
    if summary.overdue_count > 0 {
        println!("   🔴 Overdue:        {}", summary.overdue_count);
    }
    if summary.due_soon_count > 0 {
        println!("   🟡 Due soon:       {}", summary.due_soon_count);
    }

    if !summary.by_type.is_empty() {
        println!();
        println!("   By type:");
        for group in &summary.by_type {
            println!(
                "   {:16} {:>2} bill(s) │ ${:>9.2}/mo │ ${:>10.2}/yr",
                group.bill_type.label(),
                group.count,
                group.monthly,
                group.annual
            );
        }
    }

    // Payment track record, only once there is one
    let (on_time, total) = bills
        .iter()
        .filter(|b| b.is_active)
        .fold((0u32, 0u32), |(ot, t), b| {
            (ot + b.on_time_payments, t + b.total_payments)
        });
    if total > 0 {
        println!();
        println!(
            "   On-time rate:     {}% ({}/{} payments)",
            on_time_rate(on_time, total),
            on_time,
            total
        );
    }

    Ok(())
}
