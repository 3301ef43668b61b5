//! Analytics configuration.
//!
//! Defaults match the documented behaviour of every operation. A config can be
//! deserialized (all fields optional) or layered from `STOCKLINE_*` environment
//! variables.

use serde::{Deserialize, Serialize};

use stockline_core::{DomainError, DomainResult};
use stockline_inventory::PriceField;

use crate::aging::AgingThresholds;
use crate::forecast::DEFAULT_FORECAST_PERIOD;
use crate::reorder::DEFAULT_SERVICE_LEVEL;
use crate::slow_movers::DEFAULT_SLOW_MOVING_DAYS;
use crate::turnover::DEFAULT_DAYS_IN_PERIOD;

pub const ENV_AGING_DAYS: &str = "STOCKLINE_AGING_DAYS";
pub const ENV_OLD_DAYS: &str = "STOCKLINE_OLD_DAYS";
pub const ENV_VERY_OLD_DAYS: &str = "STOCKLINE_VERY_OLD_DAYS";
pub const ENV_SLOW_MOVING_DAYS: &str = "STOCKLINE_SLOW_MOVING_DAYS";
pub const ENV_FORECAST_PERIOD: &str = "STOCKLINE_FORECAST_PERIOD";
pub const ENV_DAYS_IN_PERIOD: &str = "STOCKLINE_DAYS_IN_PERIOD";
pub const ENV_SERVICE_LEVEL: &str = "STOCKLINE_SERVICE_LEVEL";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    pub aging: AgingThresholds,
    pub slow_moving_days: u64,
    pub forecast_period: usize,
    pub days_in_period: f64,
    /// Passed through to safety-stock calculations (which use a fixed z-score).
    pub service_level: f64,
    /// Price column used for cost valuation in reports.
    pub valuation_price: PriceField,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            aging: AgingThresholds::default(),
            slow_moving_days: DEFAULT_SLOW_MOVING_DAYS,
            forecast_period: DEFAULT_FORECAST_PERIOD,
            days_in_period: DEFAULT_DAYS_IN_PERIOD,
            service_level: DEFAULT_SERVICE_LEVEL,
            valuation_price: PriceField::CostPrice,
        }
    }
}

impl AnalyticsConfig {
    /// Defaults overridden by `STOCKLINE_*` environment variables.
    pub fn from_env() -> Self {
        Self::default().with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup (environment, test map, ...).
    ///
    /// Values that fail to parse are logged and ignored.
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        override_from(&lookup, ENV_AGING_DAYS, &mut self.aging.aging_after_days);
        override_from(&lookup, ENV_OLD_DAYS, &mut self.aging.old_after_days);
        override_from(&lookup, ENV_VERY_OLD_DAYS, &mut self.aging.very_old_after_days);
        override_from(&lookup, ENV_SLOW_MOVING_DAYS, &mut self.slow_moving_days);
        override_from(&lookup, ENV_FORECAST_PERIOD, &mut self.forecast_period);
        override_from(&lookup, ENV_DAYS_IN_PERIOD, &mut self.days_in_period);
        override_from(&lookup, ENV_SERVICE_LEVEL, &mut self.service_level);
        self
    }

    pub fn validate(&self) -> DomainResult<()> {
        self.aging.validate()?;
        if self.forecast_period == 0 {
            return Err(DomainError::validation("forecast_period must be > 0"));
        }
        if !(self.days_in_period.is_finite() && self.days_in_period > 0.0) {
            return Err(DomainError::validation("days_in_period must be a positive number"));
        }
        if !(self.service_level > 0.0 && self.service_level < 1.0) {
            return Err(DomainError::validation("service_level must be within (0, 1)"));
        }
        Ok(())
    }
}

fn override_from<F, T>(lookup: &F, key: &str, slot: &mut T)
where
    F: Fn(&str) -> Option<String>,
    T: core::str::FromStr,
{
    let Some(raw) = lookup(key) else {
        return;
    };
    match raw.trim().parse::<T>() {
        Ok(value) => *slot = value,
        Err(_) => tracing::warn!(key, value = %raw, "ignoring unparsable config override"),
    }
}
