//! Pricekit CLI
//!
//! Command-line front end for inspecting pricing plans, quoting interval
//! prices and walking through the interval/plan selection flow.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod ui;

#[derive(Parser)]
#[command(name = "pricekit")]
#[command(about = "Pricekit CLI - Quote plans and preview pricing page announcements", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Pricing config file (JSON); can also be set via PRICEKIT_CONFIG env var
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// List plans priced for an interval
    Plans {
        /// Billing interval (monthly, annually, twoYears, threeYears)
        #[arg(short, long, value_parser = commands::parse_interval)]
        interval: Option<pricekit_core::BillingInterval>,

        /// Print plans as JSON
        #[arg(long)]
        json: bool,
    },

    /// Quote a base monthly price for an interval
    Quote {
        /// Base monthly price (e.g. 399 or 99.50)
        base: String,

        /// Interval key; unknown keys are quoted with the monthly rule
        #[arg(short, long, default_value = "monthly")]
        interval: String,

        /// Print the quote as JSON
        #[arg(long)]
        json: bool,
    },

    /// Format an amount for display
    Format {
        /// Amount to format
        #[arg(allow_hyphen_values = true)]
        amount: f64,

        /// Currency code (ISO 4217)
        #[arg(short, long, default_value = "USD")]
        currency: String,

        /// Digits after the decimal separator
        #[arg(short, long, default_value = "0")]
        digits: u32,

        /// Locale tag (en-US, de-DE, fr-FR)
        #[arg(short, long, default_value = "en-US")]
        locale: String,
    },

    /// Show the interval toggle options
    Intervals {
        /// Interval shown as pressed
        #[arg(short, long, value_parser = commands::parse_interval)]
        selected: Option<pricekit_core::BillingInterval>,
    },

    /// Walk through interval and plan selection interactively
    Interactive,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("pricekit_cli=debug,pricekit_core=debug")
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter("pricekit_cli=info,pricekit_core=warn")
            .with_writer(std::io::stderr)
            .init();
    }

    let config_path = cli
        .config
        .or_else(|| std::env::var_os("PRICEKIT_CONFIG").map(PathBuf::from));
    let config = commands::load_config(config_path.as_deref())?;

    // Dispatch commands
    match cli.command {
        Commands::Plans { interval, json } => {
            commands::plans::run(&config, interval, json)?;
        }
        Commands::Quote {
            base,
            interval,
            json,
        } => {
            commands::quote::run(&config, &base, &interval, json)?;
        }
        Commands::Format {
            amount,
            currency,
            digits,
            locale,
        } => {
            commands::format::run(amount, &currency, digits, &locale)?;
        }
        Commands::Intervals { selected } => {
            commands::intervals::run(selected.unwrap_or(config.default_interval));
        }
        Commands::Interactive => {
            commands::interactive::run(&config)?;
        }
    }

    Ok(())
}
