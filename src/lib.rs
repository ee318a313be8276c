// ============================================================================
// Value Objects Library
// Immutable numbers and money with invariant-preserving arithmetic
// ============================================================================

//! # Value Objects
//!
//! Immutable numeric and monetary value types that check every operation.
//!
//! ## Features
//!
//! - **Checked arithmetic**: overflow and division by zero are errors, never panics
//! - **Kind-safe numbers**: `Integer` and `Real` cannot be mixed by accident
//! - **Currency-safe money**: amounts of different currencies are never combined
//! - **Lossless splitting**: both shares of a split add up to the original amount
//!
//! ## Example
//!
//! ```rust
//! use value_objects::prelude::*;
//!
//! let price = Money::new(1999, Currency::Eur)?;
//! let shipping = Money::new(499, Currency::Eur)?;
//!
//! let total = price.add(&shipping)?;
//! assert_eq!(total.amount(), 2498);
//!
//! // Remainders go to the left share
//! let (first, second) = total.split(1, 2)?;
//! assert_eq!((first.amount(), second.amount()), (833, 1665));
//!
//! // Currencies never mix
//! let dollars = Money::new(100, Currency::Usd)?;
//! assert!(total.add(&dollars).is_err());
//! # Ok::<(), MoneyError>(())
//! ```

pub mod interfaces;
pub mod monetary;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::interfaces::{
        Addition, Comparable, Division, Equatable, IntegerDivision, Multiplication, Subtraction,
    };
    pub use crate::monetary::{Currency, Money, MoneyError, MoneyResult, MultiplicationPolicy, Rounding};
    pub use crate::numeric::{AnyNumber, Integer, Number, NumericError, NumericResult, Real};
}
