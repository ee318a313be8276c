// ============================================================================
// Any Number
// Tagged number for operands whose kind is only known at runtime
// ============================================================================

use super::errors::{NumericError, NumericResult};
use super::number::{Integer, Real};
use crate::interfaces::{Addition, Comparable, Division, Equatable, Multiplication, Subtraction};
use std::cmp::Ordering;
use std::fmt;

/// A number of either kind.
///
/// Operations check the kinds at runtime: combining an `Integer` with a
/// `Real` fails with `IncompatibleOperands`, there is no implicit promotion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnyNumber {
    Integer(Integer),
    Real(Real),
}

impl AnyNumber {
    pub fn kind_name(&self) -> &'static str {
        match self {
            AnyNumber::Integer(number) => number.kind_name(),
            AnyNumber::Real(number) => number.kind_name(),
        }
    }

    fn incompatible(&self, other: &Self) -> NumericError {
        NumericError::IncompatibleOperands {
            left: self.kind_name(),
            right: other.kind_name(),
        }
    }
}

impl From<Integer> for AnyNumber {
    fn from(number: Integer) -> Self {
        AnyNumber::Integer(number)
    }
}

impl From<Real> for AnyNumber {
    fn from(number: Real) -> Self {
        AnyNumber::Real(number)
    }
}

/// Dispatch a binary operation on matching kinds, fail otherwise
macro_rules! dispatch {
    ($left:expr, $right:expr, $op:ident) => {
        match ($left, $right) {
            (AnyNumber::Integer(a), AnyNumber::Integer(b)) => a.$op(b).map(AnyNumber::Integer),
            (AnyNumber::Real(a), AnyNumber::Real(b)) => a.$op(b).map(AnyNumber::Real),
            (left, right) => Err(left.incompatible(right)),
        }
    };
}

impl Addition for AnyNumber {
    type Output = Self;
    type Error = NumericError;

    fn add(&self, other: &Self) -> NumericResult<Self> {
        dispatch!(self, other, add)
    }
}

impl Subtraction for AnyNumber {
    type Output = Self;
    type Error = NumericError;

    fn subtract(&self, other: &Self) -> NumericResult<Self> {
        dispatch!(self, other, subtract)
    }
}

impl Multiplication for AnyNumber {
    type Output = Self;
    type Error = NumericError;

    fn multiply(&self, other: &Self) -> NumericResult<Self> {
        dispatch!(self, other, multiply)
    }
}

impl Division for AnyNumber {
    type Output = Self;
    type Error = NumericError;

    /// Kinds are checked before the divisor.
    fn divide(&self, divisor: &Self) -> NumericResult<Self> {
        dispatch!(self, divisor, divide)
    }
}

impl Comparable for AnyNumber {
    type Error = NumericError;

    fn compare_to(&self, other: &Self) -> NumericResult<Ordering> {
        match (self, other) {
            (AnyNumber::Integer(a), AnyNumber::Integer(b)) => a.compare_to(b),
            (AnyNumber::Real(a), AnyNumber::Real(b)) => a.compare_to(b),
            (left, right) => Err(left.incompatible(right)),
        }
    }
}

impl Equatable for AnyNumber {
    fn equals(&self, other: &Self) -> bool {
        match (self, other) {
            (AnyNumber::Integer(a), AnyNumber::Integer(b)) => a.equals(b),
            (AnyNumber::Real(a), AnyNumber::Real(b)) => a.equals(b),
            _ => false,
        }
    }
}

impl fmt::Display for AnyNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnyNumber::Integer(number) => write!(f, "{}", number),
            AnyNumber::Real(number) => write!(f, "{}", number),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int(value: i64) -> AnyNumber {
        Integer::new(value).unwrap().into()
    }

    fn real(value: f64) -> AnyNumber {
        Real::new(value).unwrap().into()
    }

    const MIXED: NumericError = NumericError::IncompatibleOperands {
        left: "Integer",
        right: "Real",
    };

    #[test]
    fn test_matching_kinds_delegate() {
        assert_eq!(int(2).add(&int(3)).unwrap(), int(5));
        assert_eq!(real(2.0).subtract(&real(0.5)).unwrap(), real(1.5));
        assert_eq!(int(-7).divide(&int(2)).unwrap(), int(-4));
        assert_eq!(real(-7.0).divide(&real(2.0)).unwrap(), real(-3.5));
        assert_eq!(int(1).compare_to(&int(2)).unwrap(), Ordering::Less);
    }

    #[test]
    fn test_mixed_kinds_fail() {
        assert_eq!(int(1).add(&real(1.0)), Err(MIXED));
        assert_eq!(int(1).subtract(&real(1.0)), Err(MIXED));
        assert_eq!(int(1).multiply(&real(1.0)), Err(MIXED));
        assert_eq!(int(1).divide(&real(1.0)), Err(MIXED));
        assert_eq!(int(1).compare_to(&real(1.0)), Err(MIXED));
        assert_eq!(
            real(1.0).add(&int(1)),
            Err(NumericError::IncompatibleOperands {
                left: "Real",
                right: "Integer",
            })
        );
    }

    #[test]
    fn test_mixed_kinds_check_precedes_zero_guard() {
        assert_eq!(int(1).divide(&real(0.0)), Err(MIXED));
        assert_eq!(real(1.0).divide(&real(0.0)), Err(NumericError::DivisionByZero));
    }

    #[test]
    fn test_equals_is_false_across_kinds() {
        assert!(int(1).equals(&int(1)));
        assert!(!int(1).equals(&real(1.0)));
        assert!(!real(1.0).equals(&int(1)));
    }

    #[test]
    fn test_display() {
        assert_eq!(int(3).to_string(), "3");
        assert_eq!(real(0.5).to_string(), "0.5");
        assert_eq!(int(3).kind_name(), "Integer");
        assert_eq!(real(3.0).kind_name(), "Real");
    }
}
