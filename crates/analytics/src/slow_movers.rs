//! Slow-moving stock detection.

use chrono::{DateTime, Duration, Utc};

use stockline_inventory::StockItem;

use crate::aging::whole_days_between;

/// Inactivity threshold used when the caller does not pass one.
pub const DEFAULT_SLOW_MOVING_DAYS: u64 = 90;

/// Items whose last movement (else creation) is strictly more than
/// `threshold_days` before `now`.
///
/// Items with no usable timestamp are never reported.
pub fn identify_slow_moving_items(
    items: &[StockItem],
    threshold_days: u64,
    now: DateTime<Utc>,
) -> Vec<StockItem> {
    let threshold = threshold_duration(threshold_days);
    items
        .iter()
        .filter(|item| is_slow_moving(item, threshold, now))
        .cloned()
        .collect()
}

/// Whole days since the item last moved, if it has a usable timestamp.
pub fn days_since_movement(item: &StockItem, now: DateTime<Utc>) -> Option<u64> {
    item.movement_anchor()
        .map(|since| whole_days_between(since, now))
}

/// `threshold_days` as a duration, saturating at the largest representable span.
pub(crate) fn threshold_duration(threshold_days: u64) -> Duration {
    i64::try_from(threshold_days)
        .ok()
        .and_then(Duration::try_days)
        .unwrap_or(Duration::MAX)
}

pub(crate) fn is_slow_moving(item: &StockItem, threshold: Duration, now: DateTime<Utc>) -> bool {
    match item.movement_anchor() {
        Some(since) => now - since > threshold,
        None => false,
    }
}
