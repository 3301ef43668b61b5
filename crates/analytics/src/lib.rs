//! `stockline-analytics`
//!
//! **Responsibility:** inventory analytics over plain stock records.
//!
//! - Every operation is pure and synchronous; "now" is always passed in.
//! - Operations are total: absent or malformed numbers read as 0, divisions by
//!   zero yield 0, and results are always finite.
//! - Nothing here persists or mutates caller data.

pub mod aging;
pub mod config;
pub mod forecast;
pub mod margin;
pub mod reorder;
pub mod report;
pub mod slow_movers;
pub mod turnover;
pub mod valuation;

pub use aging::{
    AgingCategory, AgingResult, AgingThresholds, age_in_days, analyze_stock_aging,
    analyze_stock_aging_with,
};
pub use config::AnalyticsConfig;
pub use forecast::{
    DEFAULT_FORECAST_PERIOD, DEFAULT_SIMPLE_FORECAST_PERIODS, forecast_demand, simple_forecast,
};
pub use margin::{calculate_markup, calculate_profit_margin, item_margin};
pub use reorder::{
    DEFAULT_SERVICE_LEVEL, ReorderPlan, SAFETY_STOCK_Z, calculate_reorder_point,
    calculate_safety_stock, plan_reorder,
};
pub use report::{AgingBucketSummary, InventoryReport};
pub use slow_movers::{DEFAULT_SLOW_MOVING_DAYS, days_since_movement, identify_slow_moving_items};
pub use turnover::{
    DEFAULT_DAYS_IN_PERIOD, calculate_days_inventory_outstanding, calculate_stock_turnover,
};
pub use valuation::calculate_stock_value;
