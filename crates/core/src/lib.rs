//! `stockline-core` — shared building blocks for the inventory analytics crates.
//!
//! Pure types and helpers only (no IO, no clocks, no logging setup).

pub mod entity;
pub mod error;
pub mod id;
pub mod numeric;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::ItemId;
pub use numeric::{
    clamp_non_negative, finite_or_zero, safe_ratio, saturating_add, saturating_non_negative,
};
pub use value_object::ValueObject;
