//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are domain objects that have **no identity** — they are
/// defined entirely by their attribute values and should be immutable. Two
/// value objects with the same values are equal. `FilterCriteria` is the
/// canonical storefront example: replacing it wholesale is the only way to
/// "change" it.
///
/// The trait requires:
/// - **Clone**: value objects are cheap to copy (they're values, not references)
/// - **PartialEq**: value objects are compared by their attribute values
/// - **Debug**: helpful for logging and testing
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
