//! Reorder planning: safety stock, reorder point and the reorder decision.

use serde::{Deserialize, Serialize};

use stockline_core::{
    ValueObject, clamp_non_negative, finite_or_zero, safe_ratio, saturating_non_negative,
};

/// z-score for a 95% one-sided service level.
pub const SAFETY_STOCK_Z: f64 = 1.65;

/// Service level assumed when the caller does not pass one.
pub const DEFAULT_SERVICE_LEVEL: f64 = 0.95;

/// `z * sqrt(demand * lead_time)` with `z` fixed at [`SAFETY_STOCK_Z`].
///
/// `_service_level` is accepted for API stability but does not select a
/// different z-score. Negative inputs clamp to 0.
pub fn calculate_safety_stock(demand: f64, lead_time: f64, _service_level: f64) -> f64 {
    let exposure = saturating_non_negative(clamp_non_negative(demand) * clamp_non_negative(lead_time));
    finite_or_zero(SAFETY_STOCK_Z * exposure.sqrt())
}

/// `demand * lead_time + safety_stock`.
///
/// Negative or non-finite inputs clamp to 0; an overflowing result saturates
/// at `f64::MAX`.
pub fn calculate_reorder_point(demand: f64, lead_time: f64, safety_stock: f64) -> f64 {
    let demand = clamp_non_negative(demand);
    let lead_time = clamp_non_negative(lead_time);
    let safety_stock = clamp_non_negative(safety_stock);
    saturating_non_negative(demand * lead_time + safety_stock)
}

/// Replenishment decision for a single item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReorderPlan {
    pub on_hand: f64,
    pub safety_stock: f64,
    pub reorder_point: f64,
    /// Days the on-hand quantity lasts at the given demand; `None` when demand is 0.
    pub days_of_supply: Option<f64>,
    pub should_reorder: bool,
}

impl ValueObject for ReorderPlan {}

/// Combine safety stock and reorder point with the current on-hand quantity.
///
/// `daily_demand` and `lead_time_days` must share a time unit (days).
pub fn plan_reorder(
    on_hand: f64,
    daily_demand: f64,
    lead_time_days: f64,
    service_level: f64,
) -> ReorderPlan {
    let on_hand = clamp_non_negative(on_hand);
    let demand = clamp_non_negative(daily_demand);
    let lead_time = clamp_non_negative(lead_time_days);

    let safety_stock = calculate_safety_stock(demand, lead_time, service_level);
    let reorder_point = calculate_reorder_point(demand, lead_time, safety_stock);
    let days_of_supply = (demand > 0.0).then(|| safe_ratio(on_hand, demand));

    ReorderPlan {
        on_hand,
        safety_stock,
        reorder_point,
        days_of_supply,
        should_reorder: on_hand <= reorder_point,
    }
}
