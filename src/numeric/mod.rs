// ============================================================================
// Numeric Module
// Immutable numbers with checked, kind-preserving arithmetic
// ============================================================================
//
// This module provides:
// - Number<K>: Immutable scalar wrapper parameterized by a number kind
// - Integer/Real: The two concrete kinds (i64 with floor division, finite f64)
// - AnyNumber: Runtime-tagged number for operands of unknown kind
// - NumericError: Error types for construction and arithmetic
//
// Design principles:
// - Values never change after construction
// - All arithmetic returns Result (no panics)
// - Mixing kinds is a compile error on Number<K>, a runtime error on AnyNumber

mod any_number;
mod errors;
mod number;
mod scalar;

pub use any_number::AnyNumber;
pub use errors::{NumericError, NumericResult};
pub use number::{Fractional, Integer, Integral, Number, NumberKind, Real};
pub use scalar::{NumericRepr, ScalarValue};
