//! Recurring-charge detection
//!
//! Finds bill-like patterns in a flat list of charge records: groups by
//! normalized payee name, then keeps groups whose amounts are consistent
//! and whose intervals match one recurrence band. Intentionally naive -
//! mean/variance thresholding over small groups, nothing more.

use std::collections::HashMap;

use tracing::debug;

use crate::models::{Charge, Frequency, RecurringCandidate};
use crate::schedule::next_due_date;

/// Detection thresholds
#[derive(Debug, Clone)]
pub struct DetectorConfig {
    /// Minimum charges needed to establish a pattern
    pub min_charges: usize,
    /// Maximum coefficient of variation (stddev/mean) for amounts
    pub amount_variance: f64,
    /// Fraction of intervals that must fall inside the frequency band
    pub interval_consistency: f64,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            min_charges: 3,          // 2 could be coincidence, 3 suggests a pattern
            amount_variance: 0.15,   // 15% spread allowed (utility bills vary)
            interval_consistency: 0.7,
        }
    }
}

/// Detect recurring charge patterns across a set of charges.
///
/// Income/credit rows (amount >= 0) are skipped. Results come back sorted
/// by payee so output is deterministic regardless of input order.
pub fn detect_recurring(charges: &[Charge], config: &DetectorConfig) -> Vec<RecurringCandidate> {
    let mut by_payee: HashMap<String, Vec<&Charge>> = HashMap::new();
    for charge in charges {
        if charge.amount >= 0.0 {
            continue; // Skip income/credits
        }
        by_payee
            .entry(normalize_payee(&charge.description))
            .or_default()
            .push(charge);
    }

    let mut candidates: Vec<RecurringCandidate> = by_payee
        .into_iter()
        .filter_map(|(payee, group)| detect_pattern(&payee, &group, config))
        .collect();
    candidates.sort_by(|a, b| a.payee.cmp(&b.payee));
    candidates
}

/// Check one payee group for a recurring pattern.
fn detect_pattern(
    payee: &str,
    charges: &[&Charge],
    config: &DetectorConfig,
) -> Option<RecurringCandidate> {
    if charges.len() < config.min_charges {
        return None;
    }

    let mut sorted: Vec<&Charge> = charges.to_vec();
    sorted.sort_by_key(|c| c.date);

    let first_seen = sorted.first()?.date;
    let last_seen = sorted.last()?.date;

    // Absolute values since we only look at expenses
    let amounts: Vec<f64> = sorted.iter().map(|c| c.amount.abs()).collect();
    let mean_amount = mean(&amounts);
    if mean_amount < 0.01 {
        return None; // Avoid division by zero on tiny amounts
    }

    // Amounts must cluster around the mean: coefficient of variation
    // (stddev / mean) under the threshold
    let cv = std_dev(&amounts, mean_amount) / mean_amount;
    if cv > config.amount_variance {
        debug!(payee, cv, "Amounts too variable, not a bill");
        return None;
    }

    let intervals: Vec<i64> = sorted
        .windows(2)
        .map(|w| (w[1].date - w[0].date).num_days())
        .collect();
    if intervals.is_empty() {
        return None;
    }

    let avg_interval = intervals.iter().sum::<i64>() as f64 / intervals.len() as f64;
    let (frequency, expected, tolerance) = classify_interval(avg_interval)?;

    // Enough of the individual gaps must sit inside the band; this filters
    // payees you merely visit often but irregularly
    let consistent = intervals
        .iter()
        .filter(|&&i| (i as f64 - expected).abs() <= tolerance)
        .count();
    if (consistent as f64 / intervals.len() as f64) < config.interval_consistency {
        debug!(payee, avg_interval, "Intervals too irregular, not a bill");
        return None;
    }

    Some(RecurringCandidate {
        payee: payee.to_string(),
        amount: mean_amount,
        frequency,
        first_seen,
        last_seen,
        occurrences: sorted.len(),
        suggested_next_due: next_due_date(last_seen, frequency),
    })
}

/// Map an average gap in days onto a recurrence band.
/// Returns (frequency, expected interval, tolerance) or None when the gap
/// is too long to be a bill.
fn classify_interval(avg_days: f64) -> Option<(Frequency, f64, f64)> {
    if avg_days < 10.0 {
        Some((Frequency::Weekly, 7.0, 3.0))
    } else if avg_days < 21.0 {
        Some((Frequency::Biweekly, 14.0, 4.0))
    } else if avg_days < 45.0 {
        Some((Frequency::Monthly, 30.0, 7.0))
    } else if avg_days < 400.0 {
        Some((Frequency::Yearly, 365.0, 30.0))
    } else {
        None
    }
}

/// Simple payee name normalization: uppercase, strip separators, keep the
/// first three non-numeric words (trailing tokens are usually store or
/// transaction IDs).
fn normalize_payee(description: &str) -> String {
    description
        .to_uppercase()
        .replace(['*', '#'], " ")
        .split_whitespace()
        .filter(|word| !word.chars().all(|c| c.is_ascii_digit()))
        .take(3)
        .collect::<Vec<_>>()
        .join(" ")
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

fn std_dev(values: &[f64], mean: f64) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let variance =
        values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn charge(date: NaiveDate, description: &str, amount: f64) -> Charge {
        Charge {
            date,
            description: description.to_string(),
            amount,
        }
    }

    #[test]
    fn test_normalize_payee() {
        assert_eq!(normalize_payee("NETFLIX.COM*12345"), "NETFLIX.COM");
        assert_eq!(normalize_payee("City Power #8871"), "CITY POWER");
        assert_eq!(
            normalize_payee("blue shield insurance co"),
            "BLUE SHIELD INSURANCE"
        );
    }

    #[test]
    fn test_mean_and_std_dev() {
        assert_eq!(mean(&[1.0, 2.0, 3.0]), 2.0);
        assert_eq!(mean(&[]), 0.0);
        assert_eq!(std_dev(&[15.99], 15.99), 0.0);
        assert!(std_dev(&[10.0, 10.0, 10.0], 10.0) < 1e-12);
    }

    #[test]
    fn test_classify_interval_bands() {
        assert_eq!(classify_interval(7.2).unwrap().0, Frequency::Weekly);
        assert_eq!(classify_interval(14.5).unwrap().0, Frequency::Biweekly);
        assert_eq!(classify_interval(30.4).unwrap().0, Frequency::Monthly);
        assert_eq!(classify_interval(365.0).unwrap().0, Frequency::Yearly);
        assert!(classify_interval(500.0).is_none());
    }

    #[test]
    fn test_detects_planted_monthly_pattern() {
        let charges = vec![
            charge(date(2024, 1, 15), "NETFLIX.COM*11111", -15.49),
            charge(date(2024, 2, 15), "NETFLIX.COM*22222", -15.49),
            charge(date(2024, 3, 15), "NETFLIX.COM*33333", -15.49),
            charge(date(2024, 4, 15), "NETFLIX.COM*44444", -15.49),
            // One-off purchases should not surface
            charge(date(2024, 2, 2), "HARDWARE STORE", -84.12),
        ];

        let found = detect_recurring(&charges, &DetectorConfig::default());
        assert_eq!(found.len(), 1);

        let candidate = &found[0];
        assert_eq!(candidate.payee, "NETFLIX.COM");
        assert_eq!(candidate.frequency, Frequency::Monthly);
        assert_eq!(candidate.occurrences, 4);
        assert!((candidate.amount - 15.49).abs() < 1e-9);
        assert_eq!(candidate.first_seen, date(2024, 1, 15));
        assert_eq!(candidate.last_seen, date(2024, 4, 15));
        assert_eq!(candidate.suggested_next_due, date(2024, 5, 15));
    }

    #[test]
    fn test_rejects_irregular_spending() {
        // Same payee, erratic gaps and amounts (a coffee habit, not a bill)
        let charges = vec![
            charge(date(2024, 1, 3), "CORNER CAFE", -4.50),
            charge(date(2024, 1, 6), "CORNER CAFE", -12.80),
            charge(date(2024, 1, 25), "CORNER CAFE", -6.10),
            charge(date(2024, 3, 2), "CORNER CAFE", -9.75),
        ];

        let found = detect_recurring(&charges, &DetectorConfig::default());
        assert!(found.is_empty());
    }

    #[test]
    fn test_detects_biweekly_pattern() {
        let charges = vec![
            charge(date(2024, 1, 5), "CLEANERS LLC", -60.0),
            charge(date(2024, 1, 19), "CLEANERS LLC", -60.0),
            charge(date(2024, 2, 2), "CLEANERS LLC", -60.0),
            charge(date(2024, 2, 16), "CLEANERS LLC", -60.0),
        ];

        let found = detect_recurring(&charges, &DetectorConfig::default());
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].frequency, Frequency::Biweekly);
        assert_eq!(found[0].suggested_next_due, date(2024, 3, 1));
    }

    #[test]
    fn test_allows_variable_utility_amounts_within_threshold() {
        // ~10% spread: passes the default 15% CV threshold
        let charges = vec![
            charge(date(2024, 1, 1), "CITY POWER", -85.0),
            charge(date(2024, 2, 1), "CITY POWER", -95.0),
            charge(date(2024, 3, 1), "CITY POWER", -78.0),
            charge(date(2024, 4, 1), "CITY POWER", -88.0),
        ];

        let found = detect_recurring(&charges, &DetectorConfig::default());
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].frequency, Frequency::Monthly);
    }

    #[test]
    fn test_skips_credits_and_small_groups() {
        let charges = vec![
            // Credits never count
            charge(date(2024, 1, 15), "PAYROLL DEPOSIT", 2500.0),
            charge(date(2024, 2, 15), "PAYROLL DEPOSIT", 2500.0),
            charge(date(2024, 3, 15), "PAYROLL DEPOSIT", 2500.0),
            // Two charges are below the default minimum
            charge(date(2024, 1, 10), "GYM MEMBERSHIP", -40.0),
            charge(date(2024, 2, 10), "GYM MEMBERSHIP", -40.0),
        ];

        let found = detect_recurring(&charges, &DetectorConfig::default());
        assert!(found.is_empty());

        // Lowering the minimum surfaces the gym
        let relaxed = DetectorConfig {
            min_charges: 2,
            ..Default::default()
        };
        let found = detect_recurring(&charges, &relaxed);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].payee, "GYM MEMBERSHIP");
    }
}
