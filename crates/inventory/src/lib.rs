//! Inventory records consumed by the analytics layer.
//!
//! Plain, transient data: stock items, demand samples, and the lenient decoding
//! that turns loosely-typed upstream JSON into them. No IO, no storage.

pub mod demand;
pub mod item;
pub mod record;

pub use demand::DemandSample;
pub use item::{PriceField, StockItem, StockStatus};
pub use record::{decode_demand, decode_items};
