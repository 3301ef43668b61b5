//! Stock aging classification.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockline_core::{DomainError, DomainResult, ValueObject};
use stockline_inventory::StockItem;

const MILLIS_PER_DAY: i64 = 86_400_000;

/// Aging bucket.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgingCategory {
    Current,
    Aging,
    Old,
    VeryOld,
}

impl AgingCategory {
    pub const ALL: [AgingCategory; 4] = [
        AgingCategory::Current,
        AgingCategory::Aging,
        AgingCategory::Old,
        AgingCategory::VeryOld,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            AgingCategory::Current => "current",
            AgingCategory::Aging => "aging",
            AgingCategory::Old => "old",
            AgingCategory::VeryOld => "very_old",
        }
    }
}

/// Upper bounds (inclusive, in days) of the first three buckets.
///
/// An age strictly above `very_old_after_days` is `very_old`, strictly above
/// `old_after_days` is `old`, strictly above `aging_after_days` is `aging`,
/// anything else is `current`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgingThresholds {
    pub aging_after_days: u64,
    pub old_after_days: u64,
    pub very_old_after_days: u64,
}

impl Default for AgingThresholds {
    fn default() -> Self {
        Self {
            aging_after_days: 30,
            old_after_days: 90,
            very_old_after_days: 180,
        }
    }
}

impl AgingThresholds {
    pub fn validate(&self) -> DomainResult<()> {
        if !(self.aging_after_days < self.old_after_days
            && self.old_after_days < self.very_old_after_days)
        {
            return Err(DomainError::validation(format!(
                "aging thresholds must be strictly ascending (got {}/{}/{})",
                self.aging_after_days, self.old_after_days, self.very_old_after_days
            )));
        }
        Ok(())
    }

    pub fn categorize(&self, age_in_days: u64) -> AgingCategory {
        if age_in_days > self.very_old_after_days {
            AgingCategory::VeryOld
        } else if age_in_days > self.old_after_days {
            AgingCategory::Old
        } else if age_in_days > self.aging_after_days {
            AgingCategory::Aging
        } else {
            AgingCategory::Current
        }
    }
}

/// A stock item annotated with its age.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgingResult {
    #[serde(flatten)]
    pub item: StockItem,
    pub age_in_days: u64,
    pub aging_category: AgingCategory,
}

impl ValueObject for AgingResult {}

/// Whole days between `since` and `now`, floored; never negative.
pub(crate) fn whole_days_between(since: DateTime<Utc>, now: DateTime<Utc>) -> u64 {
    let millis = (now - since).num_milliseconds();
    u64::try_from(millis.div_euclid(MILLIS_PER_DAY)).unwrap_or(0)
}

/// Age of an item in whole days, measured from `received_date` (else
/// `created_at`). Items with neither date are age 0.
pub fn age_in_days(item: &StockItem, now: DateTime<Utc>) -> u64 {
    item.age_anchor()
        .map(|since| whole_days_between(since, now))
        .unwrap_or(0)
}

/// Classify every item with the default thresholds (30/90/180 days).
pub fn analyze_stock_aging(items: &[StockItem], now: DateTime<Utc>) -> Vec<AgingResult> {
    analyze_stock_aging_with(items, now, &AgingThresholds::default())
}

/// Classify every item with custom thresholds. The input is left untouched.
pub fn analyze_stock_aging_with(
    items: &[StockItem],
    now: DateTime<Utc>,
    thresholds: &AgingThresholds,
) -> Vec<AgingResult> {
    items
        .iter()
        .map(|item| {
            let age = age_in_days(item, now);
            AgingResult {
                item: item.clone(),
                age_in_days: age,
                aging_category: thresholds.categorize(age),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn received() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 10, 8, 30, 0).unwrap()
    }

    fn item() -> StockItem {
        StockItem::new("pallet-7".parse().unwrap()).with_received_date(received())
    }

    fn category_at(offset: Duration) -> AgingCategory {
        analyze_stock_aging(&[item()], received() + offset)[0].aging_category
    }

    #[test]
    fn spot_checks() {
        assert_eq!(category_at(Duration::days(200)), AgingCategory::VeryOld);
        assert_eq!(category_at(Duration::days(45)), AgingCategory::Aging);
        assert_eq!(category_at(Duration::days(5)), AgingCategory::Current);
    }

    #[test]
    fn bucket_boundaries() {
        let t = AgingThresholds::default();
        assert_eq!(t.categorize(30), AgingCategory::Current);
        assert_eq!(t.categorize(31), AgingCategory::Aging);
        assert_eq!(t.categorize(90), AgingCategory::Aging);
        assert_eq!(t.categorize(91), AgingCategory::Old);
        assert_eq!(t.categorize(180), AgingCategory::Old);
        assert_eq!(t.categorize(181), AgingCategory::VeryOld);
    }

    #[test]
    fn partial_days_are_floored() {
        let now = received() + Duration::days(31) - Duration::seconds(1);
        assert_eq!(age_in_days(&item(), now), 30);
    }

    #[test]
    fn falls_back_to_created_at_then_zero() {
        let created = StockItem::new("c".parse().unwrap()).with_created_at(received());
        assert_eq!(age_in_days(&created, received() + Duration::days(100)), 100);

        let undated = StockItem::new("u".parse().unwrap());
        let results = analyze_stock_aging(&[undated], received());
        assert_eq!(results[0].age_in_days, 0);
        assert_eq!(results[0].aging_category, AgingCategory::Current);
    }

    #[test]
    fn future_received_date_is_age_zero() {
        assert_eq!(age_in_days(&item(), received() - Duration::days(3)), 0);
    }

    #[test]
    fn custom_thresholds_apply() {
        let tight = AgingThresholds {
            aging_after_days: 7,
            old_after_days: 14,
            very_old_after_days: 28,
        };
        let results = analyze_stock_aging_with(&[item()], received() + Duration::days(20), &tight);
        assert_eq!(results[0].aging_category, AgingCategory::Old);
    }

    #[test]
    fn thresholds_must_ascend() {
        let bad = AgingThresholds {
            aging_after_days: 90,
            old_after_days: 90,
            very_old_after_days: 180,
        };
        assert!(bad.validate().is_err());
        assert!(AgingThresholds::default().validate().is_ok());
    }

    #[test]
    fn result_serializes_flat() {
        let results = analyze_stock_aging(&[item()], received() + Duration::days(45));
        let json = serde_json::to_value(&results[0]).unwrap();
        assert_eq!(json["id"], "pallet-7");
        assert_eq!(json["ageInDays"], 45);
        assert_eq!(json["agingCategory"], "aging");
    }
}
