// ============================================================================
// Money
// Positive amount of minor units in a single currency
// ============================================================================

use super::config::MultiplicationPolicy;
use super::currency::Currency;
use super::errors::{MoneyError, MoneyResult};
use crate::interfaces::{Addition, Comparable, Equatable, Subtraction};
use crate::numeric::{AnyNumber, Number, NumberKind};
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;
use std::cmp::Ordering;
use std::fmt;

/// Monetary value: a strictly positive count of minor units (e.g. cents)
/// in one currency.
///
/// Every live instance has `amount > 0`. Operations that would produce a
/// non-positive amount fail instead, and operands must share a currency.
///
/// # Example
/// ```
/// use value_objects::prelude::*;
///
/// let bill = Money::new(500, Currency::Eur)?;
/// let (mine, yours) = bill.split(1, 1)?;
/// assert_eq!(mine.amount() + yours.amount(), 500);
///
/// let discounted = bill.multiply(0.9)?;
/// assert_eq!(discounted, Money::new(450, Currency::Eur)?);
/// # Ok::<(), value_objects::monetary::MoneyError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Money {
    amount: i64,
    currency: Currency,
}

impl Money {
    /// Create a monetary value.
    ///
    /// # Errors
    /// Returns `NonPositiveValue` if `amount <= 0`.
    pub fn new(amount: i64, currency: Currency) -> MoneyResult<Self> {
        if amount <= 0 {
            return Err(MoneyError::NonPositiveValue(amount));
        }
        Ok(Self { amount, currency })
    }

    /// Amount in minor units
    #[inline]
    pub const fn amount(&self) -> i64 {
        self.amount
    }

    #[inline]
    pub const fn currency(&self) -> Currency {
        self.currency
    }

    // ========================================================================
    // Multiplication
    // ========================================================================

    /// Multiply by `factor` under the default policy.
    ///
    /// The factor is truncated to two decimal places *before* multiplying and
    /// the product is rounded half-up, so `100 * 0.99999999 == 99`.
    ///
    /// # Errors
    /// - `NonPositiveFactor` if `factor` is not greater than zero
    /// - `NonPositiveValue` if the rounded product is zero
    /// - `Overflow` if the factor or product is out of range
    pub fn multiply(&self, factor: f64) -> MoneyResult<Self> {
        self.multiply_with(factor, &MultiplicationPolicy::default())
    }

    /// Multiply by `factor` with an explicit precision and rounding policy.
    pub fn multiply_with(&self, factor: f64, policy: &MultiplicationPolicy) -> MoneyResult<Self> {
        // Written as a negation so NaN is rejected too
        if !(factor > 0.0) {
            return Err(MoneyError::NonPositiveFactor(factor));
        }
        // Truncated later as an exact decimal, so 0.29 stays 0.29 instead of
        // flooring its binary value to 0.28
        let factor = Decimal::from_f64(factor).ok_or(MoneyError::Overflow)?;
        self.scale(factor, policy)
    }

    /// Multiply by an exact decimal factor under the default policy.
    pub fn multiply_decimal(&self, factor: Decimal) -> MoneyResult<Self> {
        if factor <= Decimal::ZERO {
            return Err(MoneyError::NonPositiveFactor(factor.to_f64().unwrap_or(0.0)));
        }
        self.scale(factor, &MultiplicationPolicy::default())
    }

    fn scale(&self, factor: Decimal, policy: &MultiplicationPolicy) -> MoneyResult<Self> {
        use rust_decimal::RoundingStrategy;

        let normalized = factor.round_dp_with_strategy(policy.factor_scale, RoundingStrategy::ToZero);
        let product = Decimal::from(self.amount)
            .checked_mul(normalized)
            .ok_or(MoneyError::Overflow)?;
        let rounded = product.round_dp_with_strategy(0, policy.rounding.strategy());
        let amount = rounded.to_i64().ok_or(MoneyError::Overflow)?;

        tracing::trace!(
            amount = self.amount,
            %factor,
            %normalized,
            result = amount,
            "Scaled monetary value"
        );

        Self::new(amount, self.currency)
    }

    // ========================================================================
    // Splitting
    // ========================================================================

    /// Split into two shares proportional to `left:right`.
    ///
    /// The left share is rounded up and the right share down, so any
    /// remainder goes left and the shares always add up to the original
    /// amount.
    ///
    /// # Example
    /// ```text
    /// 5 split 1:1  ->  left = ceil(5 * 1/2) = 3, right = floor(5 * 1/2) = 2
    /// 5 split 1:4  ->  left = ceil(5 * 1/5) = 1, right = floor(5 * 4/5) = 4
    /// ```
    ///
    /// # Errors
    /// Returns `SplitResultsInZeroValue` with the requested proportions if
    /// either share would be zero. The error does not say which side.
    pub fn split(&self, left: u32, right: u32) -> MoneyResult<(Self, Self)> {
        let total = i128::from(left) + i128::from(right);
        let degenerate = MoneyError::SplitResultsInZeroValue { left, right };
        if total == 0 {
            return Err(degenerate);
        }

        // Exact integer arithmetic: ceil(a / b) == (a + b - 1) / b for a >= 0
        let amount = i128::from(self.amount);
        let left_share = (amount * i128::from(left) + total - 1) / total;
        let right_share = amount * i128::from(right) / total;

        if left_share <= 0 || right_share <= 0 {
            tracing::debug!(
                amount = self.amount,
                left,
                right,
                "Split would produce a zero share"
            );
            return Err(degenerate);
        }

        let share = |value: i128| -> MoneyResult<Self> {
            let amount = i64::try_from(value).map_err(|_| MoneyError::Overflow)?;
            Ok(Self {
                amount,
                currency: self.currency,
            })
        };

        Ok((share(left_share)?, share(right_share)?))
    }

    // ========================================================================
    // Guards
    // ========================================================================

    fn guard_currencies(&self, other: &Self) -> MoneyResult<()> {
        if self.currency.equals(&other.currency) {
            return Ok(());
        }
        tracing::debug!(
            first = self.currency.iso(),
            second = other.currency.iso(),
            "Rejected operation on differing currencies"
        );
        Err(MoneyError::DifferingCurrencies {
            first: self.currency,
            second: other.currency,
        })
    }
}

// ============================================================================
// Capability Implementations
// ============================================================================

impl Addition for Money {
    type Output = Self;
    type Error = MoneyError;

    /// # Errors
    /// `DifferingCurrencies` or `Overflow`
    fn add(&self, other: &Self) -> MoneyResult<Self> {
        self.guard_currencies(other)?;
        let amount = self
            .amount
            .checked_add(other.amount)
            .ok_or(MoneyError::Overflow)?;
        Self::new(amount, self.currency)
    }
}

impl Subtraction for Money {
    type Output = Self;
    type Error = MoneyError;

    /// # Errors
    /// `DifferingCurrencies`, or `NonPositiveValue` when `other` is not
    /// smaller than `self`
    fn subtract(&self, other: &Self) -> MoneyResult<Self> {
        self.guard_currencies(other)?;
        // Both amounts are positive, the difference cannot overflow
        Self::new(self.amount - other.amount, self.currency)
    }
}

impl Comparable for Money {
    type Error = MoneyError;

    fn compare_to(&self, other: &Self) -> MoneyResult<Ordering> {
        self.guard_currencies(other)?;
        Ok(self.amount.cmp(&other.amount))
    }
}

impl<K: NumberKind> Comparable<Number<K>> for Money {
    type Error = MoneyError;

    fn compare_to(&self, other: &Number<K>) -> MoneyResult<Ordering> {
        Err(MoneyError::NonMonetaryValue {
            given: other.kind_name(),
        })
    }
}

impl Comparable<AnyNumber> for Money {
    type Error = MoneyError;

    fn compare_to(&self, other: &AnyNumber) -> MoneyResult<Ordering> {
        Err(MoneyError::NonMonetaryValue {
            given: other.kind_name(),
        })
    }
}

impl Equatable for Money {
    #[inline]
    fn equals(&self, other: &Self) -> bool {
        self.currency.equals(&other.currency) && self.amount == other.amount
    }
}

impl<K: NumberKind> Equatable<Number<K>> for Money {
    #[inline]
    fn equals(&self, _other: &Number<K>) -> bool {
        false
    }
}

impl Equatable<AnyNumber> for Money {
    #[inline]
    fn equals(&self, _other: &AnyNumber) -> bool {
        false
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

/// Ordered only within one currency
impl PartialOrd for Money {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        (self.currency == other.currency).then(|| self.amount.cmp(&other.amount))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}

// ============================================================================
// Tests
// ============================================================================
