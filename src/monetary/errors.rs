// ============================================================================
// Money Errors
// Error types for monetary construction and arithmetic
// ============================================================================

use super::currency::Currency;
use std::fmt;

/// Errors that can occur while constructing or operating on money.
///
/// Each kind has a stable numeric [`code`](MoneyError::code).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MoneyError {
    /// Amount is zero or negative
    NonPositiveValue(i64),
    /// A non-monetary value was compared to money
    NonMonetaryValue { given: &'static str },
    /// Operands carry different currencies
    DifferingCurrencies { first: Currency, second: Currency },
    /// Multiplication factor is zero, negative or NaN
    NonPositiveFactor(f64),
    /// At least one share of a split would be zero or negative
    SplitResultsInZeroValue { left: u32, right: u32 },
    /// Result exceeds the amount range
    Overflow,
}

impl MoneyError {
    /// Stable error code
    pub const fn code(&self) -> u16 {
        match self {
            MoneyError::NonPositiveValue(_) => 10,
            MoneyError::NonMonetaryValue { .. } => 15,
            MoneyError::DifferingCurrencies { .. } => 20,
            MoneyError::NonPositiveFactor(_) => 30,
            MoneyError::SplitResultsInZeroValue { .. } => 40,
            MoneyError::Overflow => 50,
        }
    }
}

impl fmt::Display for MoneyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyError::NonPositiveValue(value) => {
                write!(f, "A monetary value must be positive [{} given]", value)
            },
            MoneyError::NonMonetaryValue { given } => {
                write!(f, "Non monetary value [{} given]", given)
            },
            MoneyError::DifferingCurrencies { first, second } => write!(
                f,
                "Cannot process monetary values with different currencies [{} and {} given]",
                first.iso(),
                second.iso()
            ),
            MoneyError::NonPositiveFactor(factor) => write!(
                f,
                "Cannot multiply a monetary value with a non positive factor [{} given]",
                factor
            ),
            MoneyError::SplitResultsInZeroValue { left, right } => write!(
                f,
                "Splitting the value by a proportion of {}:{} results in a zero money value",
                left, right
            ),
            MoneyError::Overflow => write!(f, "Monetary value exceeds the representable range"),
        }
    }
}

impl std::error::Error for MoneyError {}

/// Result type alias for money operations
pub type MoneyResult<T> = Result<T, MoneyError>;
