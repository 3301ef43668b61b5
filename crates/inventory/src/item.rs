use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value as JsonValue;

use stockline_core::{DomainError, Entity, ItemId, clamp_non_negative, saturating_non_negative};

use crate::record;

/// Which price column a valuation multiplies quantities by.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PriceField {
    #[default]
    CostPrice,
    UnitCost,
    SellingPrice,
}

impl PriceField {
    /// Key of this column in record form.
    pub fn record_key(self) -> &'static str {
        match self {
            PriceField::CostPrice => "costPrice",
            PriceField::UnitCost => "unitCost",
            PriceField::SellingPrice => "sellingPrice",
        }
    }
}

impl core::fmt::Display for PriceField {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.record_key())
    }
}

impl core::str::FromStr for PriceField {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "costPrice" | "cost_price" | "cost" => Ok(PriceField::CostPrice),
            "unitCost" | "unit_cost" => Ok(PriceField::UnitCost),
            "sellingPrice" | "selling_price" | "selling" | "retail" => Ok(PriceField::SellingPrice),
            other => Err(DomainError::validation(format!("unknown price field: {other}"))),
        }
    }
}

/// Stock level relative to the item's reorder level.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    InStock,
    LowStock,
    OutOfStock,
}

/// A stock record as supplied by the caller.
///
/// Every numeric and date field is optional because upstream records are
/// loosely typed. Accessors apply the defaulting rules: absent, negative or
/// non-finite numbers read as zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StockItem {
    pub id: ItemId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Primary quantity column.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
    /// Alternate quantity column, used when `quantity` is absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_stock: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_cost: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selling_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reorder_level: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub received_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_movement_date: Option<DateTime<Utc>>,
}

impl StockItem {
    /// Create a record with every optional field absent.
    pub fn new(id: ItemId) -> Self {
        Self {
            id,
            sku: None,
            name: None,
            quantity: None,
            current_stock: None,
            cost_price: None,
            unit_cost: None,
            selling_price: None,
            reorder_level: None,
            received_date: None,
            created_at: None,
            last_movement_date: None,
        }
    }

    pub fn with_sku(mut self, sku: impl Into<String>) -> Self {
        self.sku = Some(sku.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_quantity(mut self, quantity: f64) -> Self {
        self.quantity = Some(quantity);
        self
    }

    pub fn with_current_stock(mut self, current_stock: f64) -> Self {
        self.current_stock = Some(current_stock);
        self
    }

    pub fn with_price(mut self, field: PriceField, price: f64) -> Self {
        match field {
            PriceField::CostPrice => self.cost_price = Some(price),
            PriceField::UnitCost => self.unit_cost = Some(price),
            PriceField::SellingPrice => self.selling_price = Some(price),
        }
        self
    }

    pub fn with_reorder_level(mut self, level: f64) -> Self {
        self.reorder_level = Some(level);
        self
    }

    pub fn with_received_date(mut self, at: DateTime<Utc>) -> Self {
        self.received_date = Some(at);
        self
    }

    pub fn with_created_at(mut self, at: DateTime<Utc>) -> Self {
        self.created_at = Some(at);
        self
    }

    pub fn with_last_movement_date(mut self, at: DateTime<Utc>) -> Self {
        self.last_movement_date = Some(at);
        self
    }

    /// Quantity on hand: `quantity`, falling back to `current_stock`, then 0.
    ///
    /// A present but non-finite primary value counts as absent.
    pub fn effective_quantity(&self) -> f64 {
        let primary = self.quantity.filter(|q| q.is_finite());
        clamp_non_negative(primary.or(self.current_stock).unwrap_or(0.0))
    }

    /// Price in the given column, or 0 when absent.
    pub fn price(&self, field: PriceField) -> f64 {
        let raw = match field {
            PriceField::CostPrice => self.cost_price,
            PriceField::UnitCost => self.unit_cost,
            PriceField::SellingPrice => self.selling_price,
        };
        clamp_non_negative(raw.unwrap_or(0.0))
    }

    /// `effective_quantity() * price(field)`, saturating at `f64::MAX`.
    pub fn value_at(&self, field: PriceField) -> f64 {
        saturating_non_negative(self.effective_quantity() * self.price(field))
    }

    /// Timestamp aging is measured from: `received_date`, else `created_at`.
    pub fn age_anchor(&self) -> Option<DateTime<Utc>> {
        self.received_date.or(self.created_at)
    }

    /// Timestamp inactivity is measured from: `last_movement_date`, else `created_at`.
    pub fn movement_anchor(&self) -> Option<DateTime<Utc>> {
        self.last_movement_date.or(self.created_at)
    }

    pub fn status(&self) -> StockStatus {
        let quantity = self.effective_quantity();
        if quantity <= 0.0 {
            return StockStatus::OutOfStock;
        }
        match self.reorder_level.map(clamp_non_negative) {
            Some(level) if level > 0.0 && quantity <= level => StockStatus::LowStock,
            _ => StockStatus::InStock,
        }
    }

    /// Decode a loosely-typed record. Never fails; see [`crate::record`].
    pub fn from_json(value: &JsonValue) -> Self {
        record::stock_item_from_json(value)
    }
}

impl Entity for StockItem {
    type Id = ItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl<'de> Deserialize<'de> for StockItem {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = JsonValue::deserialize(deserializer)?;
        Ok(StockItem::from_json(&value))
    }
}
