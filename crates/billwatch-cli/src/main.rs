//! Billwatch CLI - Recurring bill tracker
//!
//! Usage:
//!   billwatch add "Rent" --due 2024-07-01 --amount 1450 -t rent
//!   billwatch list                List bills with due status
//!   billwatch pay rent            Record a payment, roll the due date
//!   billwatch detect -c charges.json   Find recurring patterns

mod cli;
mod commands;


use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    match cli.command {
        Commands::Add {
            name,
            due,
            amount,
            frequency,
            bill_type,
            auto_pay,
        } => commands::cmd_add(
            &cli.file,
            &name,
            &due,
            amount,
            &frequency,
            &bill_type,
            auto_pay,
        ),
        Commands::List { as_of, all, json } => {
            commands::cmd_list(&cli.file, as_of.as_deref(), all, json)
        }
        Commands::Pay { name_or_id, date } => {
            commands::cmd_pay(&cli.file, &name_or_id, date.as_deref())
        }
        Commands::Upcoming { days, as_of } => {
            commands::cmd_upcoming(&cli.file, days, as_of.as_deref())
        }
        Commands::Report { as_of } => commands::cmd_report(&cli.file, as_of.as_deref()),
        Commands::Detect {
            charges,
            min_charges,
        } => commands::cmd_detect(&charges, min_charges),
        Commands::Deactivate { name_or_id } => commands::cmd_set_active(&cli.file, &name_or_id, false),
        Commands::Activate { name_or_id } => commands::cmd_set_active(&cli.file, &name_or_id, true),
    }
}
