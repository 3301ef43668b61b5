use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};

use stockline_inventory::PriceField;

/// Longest flat-line projection the `forecast` command will produce.
pub const MAX_FORECAST_HORIZON: u64 = 3650;

#[derive(Parser)]
#[command(name = "stockline")]
#[command(version, about = "Inventory analytics over JSON stock records")]
#[command(
    long_about = "Reads stock or demand records exported as JSON (an array, or an object with an `items`/`demand` array) and prints valuation, aging, slow-mover, forecast and summary analytics as JSON."
)]
pub struct Cli {
    /// Analytics config file (JSON); STOCKLINE_* variables override it
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Evaluate as of this instant (RFC 3339) instead of the current time
    #[arg(long, global = true)]
    pub now: Option<DateTime<Utc>>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Summary report: values, margins, aging buckets, slow movers, stock status
    Report {
        /// Path to the stock records file
        #[arg(long)]
        items: PathBuf,
    },

    /// Total stock value
    Value {
        #[arg(long)]
        items: PathBuf,

        /// Price column to value by (costPrice, unitCost, sellingPrice)
        #[arg(long, default_value = "costPrice")]
        price: PriceField,
    },

    /// Every item annotated with its age and aging bucket
    Aging {
        #[arg(long)]
        items: PathBuf,
    },

    /// Items with no movement for longer than the threshold
    SlowMovers {
        #[arg(long)]
        items: PathBuf,

        /// Inactivity threshold in days (defaults to the configured value)
        #[arg(long)]
        threshold_days: Option<u64>,
    },

    /// Demand forecast, optionally with a reorder plan
    Forecast {
        /// Path to the demand series file
        #[arg(long)]
        demand: PathBuf,

        /// Trailing window for the mean (defaults to the configured value)
        #[arg(long)]
        period: Option<usize>,

        /// Length of the flat-line projection
        #[arg(
            long,
            default_value_t = stockline_analytics::DEFAULT_SIMPLE_FORECAST_PERIODS as u64,
            value_parser = clap::value_parser!(u64).range(..=MAX_FORECAST_HORIZON)
        )]
        horizon: u64,

        /// Current on-hand quantity; enables the reorder plan
        #[arg(long, requires = "lead_time_days")]
        on_hand: Option<f64>,

        /// Replenishment lead time in days
        #[arg(long, requires = "on_hand")]
        lead_time_days: Option<f64>,
    },

    /// Turnover and days-inventory-outstanding for a period
    Turnover {
        /// Cost of goods sold over the period
        #[arg(long)]
        cogs: f64,

        /// Average inventory value over the period
        #[arg(long)]
        average_inventory: f64,
    },
}
