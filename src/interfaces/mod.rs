// ============================================================================
// Interfaces Module
// Capability contracts consumed by the value types
// ============================================================================

mod arithmetic;
mod comparison;

pub use arithmetic::{Addition, Division, IntegerDivision, Multiplication, Subtraction};
pub use comparison::{Comparable, Equatable};
