//! Inventory summary report.
//!
//! One pass over a stock list combining valuation, margin, aging, slow-mover
//! and stock-status analytics.

use chrono::{DateTime, Utc};
use serde::Serialize;

use stockline_core::{finite_or_zero, saturating_add};
use stockline_inventory::{PriceField, StockItem, StockStatus};

use crate::aging::{AgingCategory, age_in_days};
use crate::config::AnalyticsConfig;
use crate::margin::item_margin;
use crate::slow_movers::{is_slow_moving, threshold_duration};
use crate::valuation::calculate_stock_value;

/// Count and cost value of one aging bucket.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgingBucketSummary {
    pub category: AgingCategory,
    pub items: usize,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryReport {
    pub generated_at: DateTime<Utc>,
    pub total_items: usize,
    pub total_quantity: f64,
    /// Valued at the configured cost column.
    pub cost_value: f64,
    pub retail_value: f64,
    /// `retail_value - cost_value`; negative when stock is priced below cost.
    pub potential_profit: f64,
    /// Items carrying a selling price (the margin population).
    pub priced_items: usize,
    /// Mean margin percentage over priced items; 0 when there are none.
    pub average_margin: f64,
    /// Always one entry per category, in bucket order.
    pub aging: Vec<AgingBucketSummary>,
    pub slow_moving_items: usize,
    pub slow_moving_value: f64,
    pub low_stock_items: usize,
    pub out_of_stock_items: usize,
}

impl InventoryReport {
    pub fn build(items: &[StockItem], config: &AnalyticsConfig, now: DateTime<Utc>) -> Self {
        let cost_field = config.valuation_price;
        let slow_threshold = threshold_duration(config.slow_moving_days);

        let mut aging: Vec<AgingBucketSummary> = AgingCategory::ALL
            .iter()
            .map(|category| AgingBucketSummary {
                category: *category,
                items: 0,
                value: 0.0,
            })
            .collect();

        let mut total_quantity = 0.0;
        let mut margin_sum = 0.0;
        let mut priced_items = 0usize;
        let mut slow_moving_items = 0usize;
        let mut slow_moving_value = 0.0;
        let mut low_stock_items = 0usize;
        let mut out_of_stock_items = 0usize;

        for item in items {
            let value = item.value_at(cost_field);
            total_quantity = saturating_add(total_quantity, item.effective_quantity());

            let category = config.aging.categorize(age_in_days(item, now));
            let bucket = &mut aging[category as usize];
            bucket.items += 1;
            bucket.value = saturating_add(bucket.value, value);

            if let Some(margin) = item_margin(item, cost_field) {
                priced_items += 1;
                margin_sum += margin;
            }

            if is_slow_moving(item, slow_threshold, now) {
                slow_moving_items += 1;
                slow_moving_value = saturating_add(slow_moving_value, value);
            }

            match item.status() {
                StockStatus::LowStock => low_stock_items += 1,
                StockStatus::OutOfStock => out_of_stock_items += 1,
                StockStatus::InStock => {}
            }
        }

        let cost_value = calculate_stock_value(items, cost_field);
        let retail_value = calculate_stock_value(items, PriceField::SellingPrice);
        let average_margin = if priced_items == 0 {
            0.0
        } else {
            finite_or_zero(margin_sum / priced_items as f64)
        };

        tracing::debug!(
            total_items = items.len(),
            cost_value,
            slow_moving_items,
            out_of_stock_items,
            "built inventory report"
        );

        Self {
            generated_at: now,
            total_items: items.len(),
            total_quantity,
            cost_value,
            retail_value,
            potential_profit: retail_value - cost_value,
            priced_items,
            average_margin,
            aging,
            slow_moving_items,
            slow_moving_value,
            low_stock_items,
            out_of_stock_items,
        }
    }

    pub fn bucket(&self, category: AgingCategory) -> &AgingBucketSummary {
        &self.aging[category as usize]
    }
}
