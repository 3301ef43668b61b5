//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity**: they are defined entirely by their
//! attribute values. Demand samples, aging results and reorder plans are all
//! value objects; they are built from caller input and discarded after use.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq)]
/// struct DemandSample {
///     quantity: f64,
///     timestamp: DateTime<Utc>,
/// }
///
/// impl ValueObject for DemandSample {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
