// ============================================================================
// Numeric Errors
// Error types for checked number arithmetic
// ============================================================================

use super::scalar::ScalarValue;
use std::fmt;

/// Errors that can occur while constructing or operating on numbers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericError {
    /// The scalar does not satisfy the kind's validation rule
    InvalidConstruction {
        kind: &'static str,
        given: ScalarValue,
    },
    /// Operands are of different number kinds
    IncompatibleOperands {
        left: &'static str,
        right: &'static str,
    },
    /// Divisor equals the kind's zero value
    DivisionByZero,
    /// Result does not fit the kind's representation
    Overflow,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::InvalidConstruction { kind, given } => {
                write!(f, "invalid construction: {} cannot hold {} value {}", kind, given.kind_name(), given)
            },
            NumericError::IncompatibleOperands { left, right } => write!(
                f,
                "incompatible operands: only numbers of the same kind may be combined [{} and {} given]",
                left, right
            ),
            NumericError::DivisionByZero => write!(f, "division by zero"),
            NumericError::Overflow => {
                write!(f, "arithmetic overflow: result cannot be represented")
            },
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(NumericError::DivisionByZero.to_string(), "division by zero");
        assert_eq!(
            NumericError::InvalidConstruction {
                kind: "Integer",
                given: ScalarValue::Float(2.5),
            }
            .to_string(),
            "invalid construction: Integer cannot hold float value 2.5"
        );
        assert_eq!(
            NumericError::IncompatibleOperands {
                left: "Integer",
                right: "Real",
            }
            .to_string(),
            "incompatible operands: only numbers of the same kind may be combined [Integer and Real given]"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(NumericError::Overflow, NumericError::Overflow);
        assert_ne!(NumericError::Overflow, NumericError::DivisionByZero);
    }
}
