//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI
//! arguments. The actual command implementations are in the `commands`
//! module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Billwatch - Track recurring bills, due dates, and payment streaks
#[derive(Parser)]
#[command(name = "billwatch")]
#[command(about = "Recurring bill tracker with due-date status and cost projections", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Bill roster file
    #[arg(long, default_value = "bills.json", global = true)]
    pub file: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a bill to the roster
    Add {
        /// Display name
        name: String,

        /// First due date (YYYY-MM-DD)
        #[arg(long)]
        due: String,

        /// Amount per period (omit for variable-amount bills)
        #[arg(long)]
        amount: Option<f64>,

        /// Recurrence: weekly, biweekly, monthly, yearly
        #[arg(short = 'f', long, default_value = "monthly")]
        frequency: String,

        /// Bill type: utilities, subscriptions, insurance, rent, loans,
        /// phone, memberships, other
        #[arg(short = 't', long = "type", default_value = "other")]
        bill_type: String,

        /// Mark as auto-pay (informational only)
        #[arg(long)]
        auto_pay: bool,
    },

    /// List bills with their due status
    List {
        /// Evaluate statuses as of this date (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        as_of: Option<String>,

        /// Include inactive bills
        #[arg(long)]
        all: bool,

        /// Output JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Record a payment and roll the due date forward one period
    Pay {
        /// Bill name or ID
        name_or_id: String,

        /// Payment date (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<String>,
    },

    /// Show active bills due within a window
    Upcoming {
        /// Window size in days
        #[arg(long, default_value = "14")]
        days: i64,

        /// Evaluate as of this date (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        as_of: Option<String>,
    },

    /// Cost projection summary (annual, monthly average, per type)
    Report {
        /// Evaluate as of this date (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        as_of: Option<String>,
    },

    /// Find recurring bill patterns in a charge history
    Detect {
        /// JSON file with charge records ({date, description, amount})
        #[arg(short, long)]
        charges: PathBuf,

        /// Minimum charges needed to establish a pattern
        #[arg(long, default_value = "3")]
        min_charges: usize,
    },

    /// Deactivate a bill (kept in the roster, excluded from status and reports)
    Deactivate {
        /// Bill name or ID
        name_or_id: String,
    },

    /// Reactivate a bill
    Activate {
        /// Bill name or ID
        name_or_id: String,
    },
}
