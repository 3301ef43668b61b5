//! Lenient decoding of upstream records.
//!
//! Upstream stores hand over loosely-typed JSON: numbers as strings, dates as
//! RFC 3339, plain dates, epoch milliseconds or `{"$date": ..}` wrappers, ids as
//! `_id`/`id`. Anything that cannot be read decodes as absent, which the
//! accessors on [`StockItem`] then treat as zero.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::{Map, Value as JsonValue};

use stockline_core::{DomainError, DomainResult, ItemId};

use crate::demand::DemandSample;
use crate::item::StockItem;

/// Decode a collection of stock records.
///
/// Accepts either a top-level array or an object with an `items` array.
/// Non-object elements decode as empty records rather than being dropped.
pub fn decode_items(value: &JsonValue) -> DomainResult<Vec<StockItem>> {
    let records = records_of(value, "items")?;
    Ok(records.iter().map(stock_item_from_json).collect())
}

/// Decode a demand series (array, or object with a `demand` array).
pub fn decode_demand(value: &JsonValue) -> DomainResult<Vec<DemandSample>> {
    let records = records_of(value, "demand")?;
    Ok(records.iter().map(demand_sample_from_json).collect())
}

fn records_of<'a>(value: &'a JsonValue, key: &str) -> DomainResult<&'a Vec<JsonValue>> {
    match value {
        JsonValue::Array(records) => Ok(records),
        JsonValue::Object(obj) => match obj.get(key) {
            Some(JsonValue::Array(records)) => Ok(records),
            _ => Err(DomainError::validation(format!(
                "expected an array or an object with an `{key}` array"
            ))),
        },
        _ => Err(DomainError::validation(format!(
            "expected an array or an object with an `{key}` array"
        ))),
    }
}

pub(crate) fn stock_item_from_json(value: &JsonValue) -> StockItem {
    let empty = Map::new();
    let obj = value.as_object().unwrap_or(&empty);

    let id = read_id(obj).unwrap_or_else(ItemId::generate);

    StockItem {
        id,
        sku: read_string(obj, "sku"),
        name: read_string(obj, "name"),
        quantity: read_number(obj, "quantity"),
        current_stock: read_number(obj, "currentStock"),
        cost_price: read_number(obj, "costPrice"),
        unit_cost: read_number(obj, "unitCost"),
        selling_price: read_number(obj, "sellingPrice"),
        reorder_level: read_number(obj, "reorderLevel"),
        received_date: read_date(obj, "receivedDate"),
        created_at: read_date(obj, "createdAt"),
        last_movement_date: read_date(obj, "lastMovementDate"),
    }
}

pub(crate) fn demand_sample_from_json(value: &JsonValue) -> DemandSample {
    if let Some(q) = number_of(value) {
        return DemandSample::untimed(q);
    }

    let empty = Map::new();
    let obj = value.as_object().unwrap_or(&empty);
    let quantity = read_number(obj, "quantity").unwrap_or(0.0);
    match read_date(obj, "timestamp").or_else(|| read_date(obj, "date")) {
        Some(at) => DemandSample::new(quantity, at),
        None => DemandSample::untimed(quantity),
    }
}

fn read_id(obj: &Map<String, JsonValue>) -> Option<ItemId> {
    let raw = obj.get("_id").or_else(|| obj.get("id"))?;
    let text = match raw {
        JsonValue::String(s) => s.clone(),
        JsonValue::Number(n) => n.to_string(),
        JsonValue::Object(inner) => inner.get("$oid")?.as_str()?.to_string(),
        _ => return None,
    };
    text.parse().ok()
}

fn read_string(obj: &Map<String, JsonValue>, key: &str) -> Option<String> {
    match obj.get(key)? {
        JsonValue::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        JsonValue::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn read_number(obj: &Map<String, JsonValue>, key: &str) -> Option<f64> {
    let raw = obj.get(key)?;
    let parsed = number_of(raw);
    if parsed.is_none() && !raw.is_null() {
        tracing::trace!(field = key, value = %raw, "unreadable numeric field treated as absent");
    }
    parsed
}

fn number_of(value: &JsonValue) -> Option<f64> {
    let n = match value {
        JsonValue::Number(n) => n.as_f64()?,
        JsonValue::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    n.is_finite().then_some(n)
}

fn read_date(obj: &Map<String, JsonValue>, key: &str) -> Option<DateTime<Utc>> {
    let raw = obj.get(key)?;
    let parsed = date_of(raw);
    if parsed.is_none() && !raw.is_null() {
        tracing::trace!(field = key, value = %raw, "unreadable date field treated as absent");
    }
    parsed
}

fn date_of(value: &JsonValue) -> Option<DateTime<Utc>> {
    match value {
        JsonValue::String(s) => parse_date_str(s.trim()),
        JsonValue::Number(n) => DateTime::from_timestamp_millis(n.as_i64()?),
        // Extended JSON wrapper as exported by document stores.
        JsonValue::Object(inner) => date_of(inner.get("$date")?),
        _ => None,
    }
}

fn parse_date_str(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
