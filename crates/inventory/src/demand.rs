use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value as JsonValue;

use stockline_core::{ValueObject, clamp_non_negative};

use crate::record;

/// One observation of demand (units consumed or sold).
///
/// Sequences of samples are expected in chronological order; forecasting reads
/// the trailing window.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DemandSample {
    pub quantity: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

impl DemandSample {
    /// Build a sample; negative or non-finite quantities are stored as 0.
    pub fn new(quantity: f64, timestamp: DateTime<Utc>) -> Self {
        Self {
            quantity: clamp_non_negative(quantity),
            timestamp: Some(timestamp),
        }
    }

    /// A sample with no timestamp (e.g. a bare number in a series).
    pub fn untimed(quantity: f64) -> Self {
        Self {
            quantity: clamp_non_negative(quantity),
            timestamp: None,
        }
    }

    /// Decode a loosely-typed sample: an object with `quantity` and
    /// `timestamp`/`date`, or a bare number. Never fails.
    pub fn from_json(value: &JsonValue) -> Self {
        record::demand_sample_from_json(value)
    }
}

impl ValueObject for DemandSample {}

impl<'de> Deserialize<'de> for DemandSample {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = JsonValue::deserialize(deserializer)?;
        Ok(DemandSample::from_json(&value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_deserialize_clamps_quantity() {
        let sample: DemandSample = serde_json::from_str(r#"{"quantity": -12}"#).unwrap();
        assert_eq!(sample.quantity, 0.0);
        assert_eq!(sample.timestamp, None);

        let samples: Vec<DemandSample> =
            serde_json::from_str(r#"[{"quantity": "4", "timestamp": "2024-06-01T00:00:00Z"}, 7]"#)
                .unwrap();
        assert_eq!(samples[0].quantity, 4.0);
        assert!(samples[0].timestamp.is_some());
        assert_eq!(samples[1].quantity, 7.0);
    }
}
