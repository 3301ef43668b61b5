use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use serde_json::{Value as JsonValue, json};

use stockline_analytics::{
    AnalyticsConfig, InventoryReport, analyze_stock_aging_with, calculate_days_inventory_outstanding,
    calculate_stock_turnover, calculate_stock_value, forecast_demand, identify_slow_moving_items,
    plan_reorder, simple_forecast,
};
use stockline_inventory::{DemandSample, StockItem, decode_demand, decode_items};

use crate::cli::{Cli, Commands};

/// Execute a command and print its JSON output to stdout.
pub fn run(cli: Cli) -> Result<()> {
    let output = execute(cli)?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// Execute a command with config overrides taken from the process environment.
pub fn execute(cli: Cli) -> Result<JsonValue> {
    execute_with(cli, |key| std::env::var(key).ok())
}

/// Execute a command with config overrides taken from `lookup`.
pub fn execute_with<F>(cli: Cli, lookup: F) -> Result<JsonValue>
where
    F: Fn(&str) -> Option<String>,
{
    let config = load_config(cli.config.as_deref(), lookup)?;
    let now = cli.now.unwrap_or_else(Utc::now);

    let output = match cli.command {
        Commands::Report { items } => {
            let items = load_items(&items)?;
            serde_json::to_value(InventoryReport::build(&items, &config, now))?
        }
        Commands::Value { items, price } => {
            let items = load_items(&items)?;
            json!({
                "priceField": price,
                "items": items.len(),
                "value": calculate_stock_value(&items, price),
            })
        }
        Commands::Aging { items } => {
            let items = load_items(&items)?;
            serde_json::to_value(analyze_stock_aging_with(&items, now, &config.aging))?
        }
        Commands::SlowMovers { items, threshold_days } => {
            let items = load_items(&items)?;
            let threshold = threshold_days.unwrap_or(config.slow_moving_days);
            let slow = identify_slow_moving_items(&items, threshold, now);
            json!({
                "thresholdDays": threshold,
                "count": slow.len(),
                "items": slow,
            })
        }
        Commands::Forecast {
            demand,
            period,
            horizon,
            on_hand,
            lead_time_days,
        } => {
            let samples = load_demand(&demand)?;
            let period = period.unwrap_or(config.forecast_period);
            let mean = forecast_demand(&samples, period);
            let series: Vec<f64> = samples.iter().map(|s| s.quantity).collect();

            let reorder = match (on_hand, lead_time_days) {
                (Some(on_hand), Some(lead_time)) => Some(plan_reorder(
                    on_hand,
                    mean,
                    lead_time,
                    config.service_level,
                )),
                _ => None,
            };

            json!({
                "samples": samples.len(),
                "period": period,
                "forecast": mean,
                "flat": simple_forecast(&series, usize::try_from(horizon)?),
                "reorder": reorder,
            })
        }
        Commands::Turnover {
            cogs,
            average_inventory,
        } => json!({
            "turnover": calculate_stock_turnover(cogs, average_inventory),
            "daysInventoryOutstanding": calculate_days_inventory_outstanding(
                average_inventory,
                cogs,
                config.days_in_period,
            ),
        }),
    };

    Ok(output)
}

fn load_config<F>(path: Option<&Path>, lookup: F) -> Result<AnalyticsConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let base = match path {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("failed to read config {}", path.display()))?;
            serde_json::from_str::<AnalyticsConfig>(&raw)
                .with_context(|| format!("failed to parse config {}", path.display()))?
        }
        None => AnalyticsConfig::default(),
    };

    let config = base.with_overrides(lookup);
    config.validate().context("invalid analytics config")?;
    Ok(config)
}

fn read_json(path: &Path) -> Result<JsonValue> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("{} is not valid JSON", path.display()))
}

fn load_items(path: &Path) -> Result<Vec<StockItem>> {
    let items = decode_items(&read_json(path)?)
        .with_context(|| format!("unexpected record layout in {}", path.display()))?;
    tracing::info!(path = %path.display(), count = items.len(), "loaded stock records");
    Ok(items)
}

fn load_demand(path: &Path) -> Result<Vec<DemandSample>> {
    let samples = decode_demand(&read_json(path)?)
        .with_context(|| format!("unexpected demand layout in {}", path.display()))?;
    tracing::info!(path = %path.display(), count = samples.len(), "loaded demand samples");
    Ok(samples)
}
