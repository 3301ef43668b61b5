//! Turnover and days-inventory-outstanding ratios.

use stockline_core::{clamp_non_negative, safe_ratio, saturating_non_negative};

/// Days per period used by [`calculate_days_inventory_outstanding`] by default.
pub const DEFAULT_DAYS_IN_PERIOD: f64 = 365.0;

/// Cost of goods sold divided by average inventory.
///
/// Returns 0 when `average_inventory` is zero. Both inputs are amounts, so
/// negative or non-finite values clamp to 0; the result is never negative.
pub fn calculate_stock_turnover(cost_of_goods_sold: f64, average_inventory: f64) -> f64 {
    safe_ratio(
        clamp_non_negative(cost_of_goods_sold),
        clamp_non_negative(average_inventory),
    )
}

/// `(average_inventory / cost_of_goods_sold) * days`.
///
/// Returns 0 when `cost_of_goods_sold` is zero. Inputs clamp to 0 like
/// [`calculate_stock_turnover`]; an overflowing product saturates at `f64::MAX`.
pub fn calculate_days_inventory_outstanding(
    average_inventory: f64,
    cost_of_goods_sold: f64,
    days: f64,
) -> f64 {
    let ratio = safe_ratio(
        clamp_non_negative(average_inventory),
        clamp_non_negative(cost_of_goods_sold),
    );
    saturating_non_negative(ratio * clamp_non_negative(days))
}
