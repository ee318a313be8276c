// ============================================================================
// Currency
// Closed set of supported currencies
// ============================================================================

use crate::interfaces::Equatable;
use std::fmt;

/// A currency, identified by its variant alone.
///
/// ISO 4217 code and display symbol are fixed per variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Currency {
    /// Euro
    Eur,
    /// United States dollar
    Usd,
}

impl Currency {
    /// Every supported currency
    pub const ALL: [Currency; 2] = [Currency::Eur, Currency::Usd];

    /// ISO 4217 alphabetic code
    pub const fn iso(&self) -> &'static str {
        match self {
            Currency::Eur => "EUR",
            Currency::Usd => "USD",
        }
    }

    pub const fn symbol(&self) -> &'static str {
        match self {
            Currency::Eur => "€",
            Currency::Usd => "$",
        }
    }

    /// Look up a currency by its ISO 4217 code (case-sensitive).
    pub fn from_iso(iso: &str) -> Option<Currency> {
        Self::ALL.into_iter().find(|currency| currency.iso() == iso)
    }
}

impl Equatable for Currency {
    #[inline]
    fn equals(&self, other: &Self) -> bool {
        self == other
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
