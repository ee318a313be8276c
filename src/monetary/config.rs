// ============================================================================
// Multiplication Policy
// Precision and rounding applied when money is multiplied by a factor
// ============================================================================

use rust_decimal::RoundingStrategy;

// ============================================================================
// Rounding
// ============================================================================

/// How a fractional product is rounded to whole minor units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Rounding {
    /// Halves round up (2.5 -> 3)
    #[default]
    HalfUp,
    /// Halves round to the even neighbor (2.5 -> 2, 3.5 -> 4)
    HalfEven,
    /// Fractions are discarded (2.9 -> 2)
    Down,
}

impl Rounding {
    pub(crate) fn strategy(self) -> RoundingStrategy {
        match self {
            // Products are always positive, so away-from-zero is half-up
            Rounding::HalfUp => RoundingStrategy::MidpointAwayFromZero,
            Rounding::HalfEven => RoundingStrategy::MidpointNearestEven,
            Rounding::Down => RoundingStrategy::ToZero,
        }
    }
}

// ============================================================================
// Policy
// ============================================================================

/// Configuration for [`Money::multiply_with`](super::Money::multiply_with).
///
/// The factor is first truncated to `factor_scale` decimal places, then the
/// product is rounded to whole minor units using `rounding`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MultiplicationPolicy {
    /// Decimal places of the factor kept before multiplying
    pub factor_scale: u32,

    /// Rounding of the product
    pub rounding: Rounding,
}

impl MultiplicationPolicy {
    /// Decimal places kept by the default policy
    pub const DEFAULT_FACTOR_SCALE: u32 = 2;

    pub const fn new(factor_scale: u32, rounding: Rounding) -> Self {
        Self {
            factor_scale,
            rounding,
        }
    }

    /// Builder: keep `scale` decimal places of the factor
    pub fn with_factor_scale(mut self, scale: u32) -> Self {
        self.factor_scale = scale;
        self
    }

    /// Builder: round products with `rounding`
    pub fn with_rounding(mut self, rounding: Rounding) -> Self {
        self.rounding = rounding;
        self
    }
}

impl Default for MultiplicationPolicy {
    fn default() -> Self {
        Self::new(Self::DEFAULT_FACTOR_SCALE, Rounding::HalfUp)
    }
}
