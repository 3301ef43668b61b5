//! Naive demand forecasting.
//!
//! Both models are trailing-window means: no trend, no seasonality.

use stockline_core::clamp_non_negative;
use stockline_inventory::DemandSample;

/// Window used by [`forecast_demand`] when the caller has no preference.
pub const DEFAULT_FORECAST_PERIOD: usize = 30;

/// Horizon (and window) used by [`simple_forecast`] by default.
pub const DEFAULT_SIMPLE_FORECAST_PERIODS: usize = 3;

/// Mean quantity over the last `period` samples (or all of them if fewer).
///
/// Returns 0 for an empty series or a zero-length window.
pub fn forecast_demand(samples: &[DemandSample], period: usize) -> f64 {
    let quantities: Vec<f64> = trailing(samples, period)
        .iter()
        .map(|s| clamp_non_negative(s.quantity))
        .collect();
    mean(&quantities)
}

/// Flat-line projection: the mean of the trailing `periods` values, repeated
/// `periods` times.
///
/// An empty history projects zeros; `periods == 0` projects nothing.
pub fn simple_forecast(series: &[f64], periods: usize) -> Vec<f64> {
    let window: Vec<f64> = trailing(series, periods)
        .iter()
        .map(|x| clamp_non_negative(*x))
        .collect();
    vec![mean(&window); periods]
}

fn trailing<T>(xs: &[T], n: usize) -> &[T] {
    &xs[xs.len().saturating_sub(n)..]
}

fn mean(xs: &[f64]) -> f64 {
    if xs.is_empty() {
        return 0.0;
    }
    xs.iter().fold(0.0, |acc, x| acc + x) / (xs.len() as f64)
}
