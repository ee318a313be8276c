// ============================================================================
// Comparison Interfaces
// Ordering and equality contracts for value objects
// ============================================================================

use std::cmp::Ordering;

/// Tri-state comparison against another value.
///
/// Unlike [`PartialOrd`], a comparison may be *refused* with an error, e.g. when
/// two monetary values carry different currencies. Implementations must never
/// return an `Ordering` for operands they cannot meaningfully order.
pub trait Comparable<Rhs: ?Sized = Self> {
    /// Error returned when the operands cannot be compared
    type Error;

    /// Compare `self` to `other`
    ///
    /// # Returns
    /// `Less`, `Equal` or `Greater`, or the reason the operands are not comparable
    fn compare_to(&self, other: &Rhs) -> Result<Ordering, Self::Error>;
}

/// Value equality that never fails.
///
/// Operands of an incompatible kind are simply not equal.
pub trait Equatable<Rhs: ?Sized = Self> {
    fn equals(&self, other: &Rhs) -> bool;
}
