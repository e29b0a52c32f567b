//! Detection command implementation

use std::path::Path;

use anyhow::{Context, Result};
use billwatch_core::{detect_recurring, Charge, DetectorConfig};
use tracing::debug;

use super::truncate;

pub fn cmd_detect(charges_file: &Path, min_charges: usize) -> Result<()> {
    let data = std::fs::read_to_string(charges_file)
        .with_context(|| format!("Failed to read {}", charges_file.display()))?;
    let charges: Vec<Charge> =
        serde_json::from_str(&data).context("Charge file is not a JSON array of charges")?;
    debug!(count = charges.len(), path = %charges_file.display(), "Charge file loaded");

    let config = DetectorConfig {
        min_charges,
        ..Default::default()
    };
    let candidates = detect_recurring(&charges, &config);

    if candidates.is_empty() {
        println!(
            "No recurring patterns found in {} charges.",
            charges.len()
        );
        return Ok(());
    }

    println!();
    println!(
        "🔍 {} recurring pattern(s) in {} charges",
        candidates.len(),
        charges.len()
    );
    println!("   ─────────────────────────────────────────────────────────────");

    for c in &candidates {
        println!(
            "   {:20} │ {:>8.2}/{:<8} │ {}x since {} │ next due ~{}",
            truncate(&c.payee, 20),
            c.amount,
            c.frequency,
            c.occurrences,
            c.first_seen,
            c.suggested_next_due
        );
    }

    println!();
    println!("Add one as a bill:");
    let first = &candidates[0];
    println!(
        "  billwatch add \"{}\" --due {} --amount {:.2} -f {}",
        first.payee, first.suggested_next_due, first.amount, first.frequency
    );

    Ok(())
}
