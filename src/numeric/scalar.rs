// ============================================================================
// Scalars
// Raw inputs accepted by number construction and the checked arithmetic
// backing each number kind
// ============================================================================

use std::fmt;

/// A raw scalar handed to [`Number::new`](super::Number::new).
///
/// The tag records which primitive the caller supplied; kinds decide whether
/// they accept it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScalarValue {
    Int(i64),
    Float(f64),
}

impl ScalarValue {
    /// Name of the primitive kind, used in diagnostics
    pub const fn kind_name(&self) -> &'static str {
        match self {
            ScalarValue::Int(_) => "int",
            ScalarValue::Float(_) => "float",
        }
    }

    /// Check if the scalar is integral or a finite fraction.
    #[inline]
    pub fn is_finite(&self) -> bool {
        match self {
            ScalarValue::Int(_) => true,
            ScalarValue::Float(value) => value.is_finite(),
        }
    }
}

impl fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarValue::Int(value) => write!(f, "{}", value),
            ScalarValue::Float(value) => write!(f, "{}", value),
        }
    }
}

macro_rules! scalar_from {
    ($variant:ident, $target:ty, $($source:ty),+) => {
        $(
            impl From<$source> for ScalarValue {
                #[inline]
                fn from(value: $source) -> Self {
                    ScalarValue::$variant(<$target>::from(value))
                }
            }
        )+
    };
}

scalar_from!(Int, i64, i8, i16, i32, i64, u8, u16, u32);
scalar_from!(Float, f64, f32, f64);

// ============================================================================
// Checked Representation Arithmetic
// ============================================================================

/// Internal representation of a number kind.
///
/// All operations are checked: `None` means the result cannot be represented.
/// `try_div` is only called with a non-zero divisor.
pub trait NumericRepr:
    Copy + PartialEq + PartialOrd + fmt::Debug + fmt::Display + Into<ScalarValue> + Send + Sync + 'static
{
    const ZERO: Self;

    fn try_add(self, rhs: Self) -> Option<Self>;
    fn try_sub(self, rhs: Self) -> Option<Self>;
    fn try_mul(self, rhs: Self) -> Option<Self>;
    fn try_div(self, rhs: Self) -> Option<Self>;
}

impl NumericRepr for i64 {
    const ZERO: Self = 0;

    #[inline]
    fn try_add(self, rhs: Self) -> Option<Self> {
        self.checked_add(rhs)
    }

    #[inline]
    fn try_sub(self, rhs: Self) -> Option<Self> {
        self.checked_sub(rhs)
    }

    #[inline]
    fn try_mul(self, rhs: Self) -> Option<Self> {
        self.checked_mul(rhs)
    }

    /// Quotient floored toward negative infinity.
    #[inline]
    fn try_div(self, rhs: Self) -> Option<Self> {
        let quotient = self.checked_div(rhs)?;
        let remainder = self.checked_rem(rhs)?;
        if remainder != 0 && ((remainder < 0) != (rhs < 0)) {
            quotient.checked_sub(1)
        } else {
            Some(quotient)
        }
    }
}

/// Keep a float result only while it stays finite
#[inline]
fn finite(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}

impl NumericRepr for f64 {
    const ZERO: Self = 0.0;

    #[inline]
    fn try_add(self, rhs: Self) -> Option<Self> {
        finite(self + rhs)
    }

    #[inline]
    fn try_sub(self, rhs: Self) -> Option<Self> {
        finite(self - rhs)
    }

    #[inline]
    fn try_mul(self, rhs: Self) -> Option<Self> {
        finite(self * rhs)
    }

    #[inline]
    fn try_div(self, rhs: Self) -> Option<Self> {
        finite(self / rhs)
    }
}
