//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are immutable and compared by their attribute values; two
/// value objects with the same values are the same value. A price breakdown
/// is a value object; a restaurant is an entity.
///
/// The trait only requires what every value object already derives:
/// `Clone + PartialEq + Debug`.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
