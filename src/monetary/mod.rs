// ============================================================================
// Monetary Module
// Currency-safe arithmetic on whole minor units
// ============================================================================
//
// This module provides:
// - Money: Strictly positive amount in a single currency
// - Currency: The supported currencies and their ISO 4217 data
// - MultiplicationPolicy: Precision and rounding of factor multiplication
// - MoneyError: Error types with stable codes
//
// Design principles:
// - Amounts are integers (no floating-point amounts)
// - Operations never produce a non-positive amount, they fail instead
// - Currencies are never converted implicitly

mod config;
mod currency;
mod errors;
mod money;

pub use config::{MultiplicationPolicy, Rounding};
pub use currency::Currency;
pub use errors::{MoneyError, MoneyResult};
pub use money::Money;
