// ============================================================================
// Numbers
// Immutable scalar wrapper shared by every number kind
// ============================================================================

use super::errors::{NumericError, NumericResult};
use super::scalar::{NumericRepr, ScalarValue};
use crate::interfaces::{
    Addition, Comparable, Division, Equatable, IntegerDivision, Multiplication, Subtraction,
};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

// ============================================================================
// Number Kinds
// ============================================================================

/// Validation and cast strategy of a number kind.
///
/// A kind decides which scalars it accepts and how an accepted scalar is
/// turned into its representation, in one step so no rejected scalar is
/// ever converted. The representation also fixes the rounding behavior of
/// division (see [`NumericRepr::try_div`]).
pub trait NumberKind: Copy + Eq + fmt::Debug + Send + Sync + 'static {
    type Repr: NumericRepr;

    /// Kind name used in diagnostics
    const NAME: &'static str;

    /// Validate `value` and convert it into the representation
    ///
    /// # Returns
    /// `None` if the scalar violates the kind's validation rule
    fn try_cast(value: ScalarValue) -> Option<Self::Repr>;
}

/// Whole numbers backed by `i64`; division floors toward negative infinity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Integral {}

impl NumberKind for Integral {
    type Repr = i64;

    const NAME: &'static str = "Integer";

    #[inline]
    fn try_cast(value: ScalarValue) -> Option<i64> {
        match value {
            ScalarValue::Int(value) => Some(value),
            ScalarValue::Float(_) => None,
        }
    }
}

/// Finite real numbers backed by `f64`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fractional {}

impl NumberKind for Fractional {
    type Repr = f64;

    const NAME: &'static str = "Real";

    #[inline]
    fn try_cast(value: ScalarValue) -> Option<f64> {
        match value {
            ScalarValue::Int(value) => Some(value as f64),
            ScalarValue::Float(value) => value.is_finite().then_some(value),
        }
    }
}

// ============================================================================
// Number
// ============================================================================

/// Immutable number of kind `K`.
///
/// The stored value always satisfies `K`'s validation rule. Every operation
/// returns a new instance; operands must be of the same kind, which the type
/// system enforces.
///
/// # Example
/// ```
/// use value_objects::prelude::*;
///
/// let a = Integer::new(-7)?;
/// let b = Integer::new(2)?;
/// assert_eq!(a.divide(&b)?, Integer::new(-4)?);
/// assert_eq!(a.remainder(&b)?, Integer::new(-1)?);
/// # Ok::<(), value_objects::numeric::NumericError>(())
/// ```
#[derive(Clone, Copy)]
pub struct Number<K: NumberKind> {
    value: K::Repr,
    kind: PhantomData<K>,
}

/// Whole number
pub type Integer = Number<Integral>;

/// Real number
pub type Real = Number<Fractional>;

impl<K: NumberKind> Number<K> {
    /// Validate `value` against the kind's rule and cast it.
    ///
    /// # Errors
    /// Returns `InvalidConstruction` if the kind rejects the scalar.
    pub fn new(value: impl Into<ScalarValue>) -> NumericResult<Self> {
        let value = value.into();
        let repr = K::try_cast(value).ok_or(NumericError::InvalidConstruction {
            kind: K::NAME,
            given: value,
        })?;
        Ok(Self {
            value: repr,
            kind: PhantomData,
        })
    }

    /// The kind's zero value
    #[inline]
    pub fn zero() -> Self {
        Self {
            value: K::Repr::ZERO,
            kind: PhantomData,
        }
    }

    /// Get the stored scalar.
    #[inline]
    pub fn value(&self) -> K::Repr {
        self.value
    }

    /// Kind name, e.g. `"Integer"`
    #[inline]
    pub fn kind_name(&self) -> &'static str {
        K::NAME
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.value == K::Repr::ZERO
    }

    /// Route an operation result back through construction.
    fn from_result(result: Option<K::Repr>) -> NumericResult<Self> {
        let value = result.ok_or(NumericError::Overflow)?;
        Self::new(value)
    }

    fn guard_divisor(divisor: &Self) -> NumericResult<()> {
        if divisor.equals(&Self::zero()) {
            Err(NumericError::DivisionByZero)
        } else {
            Ok(())
        }
    }
}

// ============================================================================
// Capability Implementations
// ============================================================================

impl<K: NumberKind> Addition for Number<K> {
    type Output = Self;
    type Error = NumericError;

    #[inline]
    fn add(&self, other: &Self) -> NumericResult<Self> {
        Self::from_result(self.value.try_add(other.value))
    }
}

impl<K: NumberKind> Subtraction for Number<K> {
    type Output = Self;
    type Error = NumericError;

    #[inline]
    fn subtract(&self, other: &Self) -> NumericResult<Self> {
        Self::from_result(self.value.try_sub(other.value))
    }
}

impl<K: NumberKind> Multiplication for Number<K> {
    type Output = Self;
    type Error = NumericError;

    #[inline]
    fn multiply(&self, other: &Self) -> NumericResult<Self> {
        Self::from_result(self.value.try_mul(other.value))
    }
}

impl<K: NumberKind> Division for Number<K> {
    type Output = Self;
    type Error = NumericError;

    /// Integers floor the quotient; reals divide exactly.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `divisor` equals the kind's zero value.
    #[inline]
    fn divide(&self, divisor: &Self) -> NumericResult<Self> {
        Self::guard_divisor(divisor)?;
        Self::from_result(self.value.try_div(divisor.value))
    }
}

impl IntegerDivision for Integer {
    /// Remainder carrying the sign of the dividend.
    ///
    /// Pairs with truncated division: `34 rem -3 == 1`, `-34 rem 3 == -1`.
    /// It does *not* pair with the floored quotient of `divide`.
    #[inline]
    fn remainder(&self, divisor: &Self) -> NumericResult<Self> {
        Self::guard_divisor(divisor)?;
        Self::from_result(self.value.checked_rem(divisor.value))
    }
}

impl<K: NumberKind> Comparable for Number<K> {
    type Error = NumericError;

    #[inline]
    fn compare_to(&self, other: &Self) -> NumericResult<Ordering> {
        // NaN is rejected at construction, so every pair is ordered
        Ok(self
            .value
            .partial_cmp(&other.value)
            .unwrap_or(Ordering::Equal))
    }
}

impl<K: NumberKind> Equatable for Number<K> {
    #[inline]
    fn equals(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl<K: NumberKind> Default for Number<K> {
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}

impl<K: NumberKind> PartialEq for Number<K> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl<K: NumberKind> PartialOrd for Number<K> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl Eq for Integer {}

impl Ord for Integer {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl Hash for Integer {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<K: NumberKind> fmt::Debug for Number<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})", K::NAME, self.value)
    }
}

impl<K: NumberKind> fmt::Display for Number<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

// ============================================================================
// Tests
// ============================================================================
