//! Property-based tests for Money.
//!
//! This module verifies that Money satisfies:
//!
//! - **Positivity**: construction succeeds exactly for positive amounts
//! - **Currency safety**: arithmetic and comparison refuse mixed currencies
//! - **Lossless split**: both shares are positive and add up to the original
//! - **Factor truncation**: factors are cut to two decimals before multiplying

use proptest::prelude::*;
use std::cmp::Ordering;
use value_objects::prelude::*;

fn currency() -> impl Strategy<Value = Currency> {
    prop_oneof![Just(Currency::Eur), Just(Currency::Usd)]
}

// =============================================================================
// Construction
// =============================================================================

proptest! {
    #[test]
    fn prop_positive_amount_is_kept(amount in 1..=i64::MAX, currency in currency()) {
        let money = Money::new(amount, currency).unwrap();
        prop_assert_eq!(money.amount(), amount);
        prop_assert_eq!(money.currency(), currency);
    }
}

proptest! {
    #[test]
    fn prop_non_positive_amount_is_rejected(amount in i64::MIN..=0, currency in currency()) {
        prop_assert_eq!(Money::new(amount, currency), Err(MoneyError::NonPositiveValue(amount)));
    }
}

// =============================================================================
// Addition and Subtraction
// =============================================================================

proptest! {
    #[test]
    fn prop_add_sums_amounts(a in 1..1_000_000_000i64, b in 1..1_000_000_000i64, currency in currency()) {
        let sum = Money::new(a, currency).unwrap().add(&Money::new(b, currency).unwrap()).unwrap();
        prop_assert_eq!(sum.amount(), a + b);
        prop_assert_eq!(sum.currency(), currency);
    }
}

proptest! {
    #[test]
    fn prop_add_differing_currencies_fails(a in 1..1_000_000i64, b in 1..1_000_000i64) {
        let eur = Money::new(a, Currency::Eur).unwrap();
        let usd = Money::new(b, Currency::Usd).unwrap();

        let expected = MoneyError::DifferingCurrencies { first: Currency::Eur, second: Currency::Usd };
        prop_assert_eq!(eur.add(&usd), Err(expected));
        prop_assert_eq!(eur.subtract(&usd), Err(expected));
        prop_assert_eq!(eur.compare_to(&usd), Err(expected));
    }
}

proptest! {
    /// Subtraction succeeds exactly when the result stays positive
    #[test]
    fn prop_subtract_stays_positive_or_fails(a in 1..1_000_000i64, b in 1..1_000_000i64) {
        let result = Money::new(a, Currency::Eur).unwrap().subtract(&Money::new(b, Currency::Eur).unwrap());
        if a > b {
            prop_assert_eq!(result.unwrap().amount(), a - b);
        } else {
            prop_assert_eq!(result, Err(MoneyError::NonPositiveValue(a - b)));
        }
    }
}

proptest! {
    #[test]
    fn prop_compare_to_matches_amount_order(a in 1..1_000_000i64, b in 1..1_000_000i64) {
        let left = Money::new(a, Currency::Usd).unwrap();
        let right = Money::new(b, Currency::Usd).unwrap();
        prop_assert_eq!(left.compare_to(&right).unwrap(), a.cmp(&b));
        prop_assert_eq!(left.equals(&right), a == b);
    }
}

// =============================================================================
// Splitting
// =============================================================================

proptest! {
    /// ceil(V*L/(L+R)) + floor(V*R/(L+R)) == V for every valid input
    #[test]
    fn prop_split_preserves_total(amount in 1..=i64::MAX, left in 1..=u32::MAX, right in 1..=u32::MAX) {
        match Money::new(amount, Currency::Eur).unwrap().split(left, right) {
            Ok((l, r)) => {
                prop_assert!(l.amount() > 0);
                prop_assert!(r.amount() > 0);
                prop_assert_eq!(i128::from(l.amount()) + i128::from(r.amount()), i128::from(amount));
                prop_assert_eq!(l.currency(), Currency::Eur);
                prop_assert_eq!(r.currency(), Currency::Eur);
            }
            Err(err) => {
                prop_assert_eq!(err, MoneyError::SplitResultsInZeroValue { left, right });
            }
        }
    }
}

proptest! {
    /// The left share is never smaller than its exact proportion
    #[test]
    fn prop_split_remainder_goes_left(amount in 2..1_000_000i64, left in 1..100u32, right in 1..100u32) {
        if let Ok((l, r)) = Money::new(amount, Currency::Eur).unwrap().split(left, right) {
            let total = i128::from(left) + i128::from(right);
            prop_assert!(i128::from(l.amount()) * total >= i128::from(amount) * i128::from(left));
            prop_assert!(i128::from(r.amount()) * total <= i128::from(amount) * i128::from(right));
        }
    }
}

proptest! {
    #[test]
    fn prop_split_with_zero_proportion_fails(amount in 1..=i64::MAX, proportion in 0..=u32::MAX) {
        let money = Money::new(amount, Currency::Usd).unwrap();
        prop_assert_eq!(
            money.split(0, proportion),
            Err(MoneyError::SplitResultsInZeroValue { left: 0, right: proportion })
        );
        prop_assert_eq!(
            money.split(proportion, 0),
            Err(MoneyError::SplitResultsInZeroValue { left: proportion, right: 0 })
        );
    }
}

// =============================================================================
// Multiplication
// =============================================================================

proptest! {
    /// Whole-cent factors are applied exactly
    #[test]
    fn prop_multiply_by_whole_factor(amount in 1..1_000_000i64, factor in 1..1000i64) {
        let money = Money::new(amount, Currency::Eur).unwrap();
        prop_assert_eq!(money.multiply(factor as f64).unwrap().amount(), amount * factor);
    }
}

proptest! {
    /// Digits past the second decimal never change the result
    #[test]
    fn prop_multiply_ignores_third_decimal(amount in 1..1_000_000i64, cents in 1..1000i64, noise in 1..10i64) {
        let money = Money::new(amount, Currency::Eur).unwrap();
        let truncated = rust_decimal::Decimal::new(cents, 2);
        let noisy = rust_decimal::Decimal::new(cents * 10 + noise, 3);

        prop_assert_eq!(money.multiply_decimal(noisy), money.multiply_decimal(truncated));
    }
}

proptest! {
    #[test]
    fn prop_multiply_rejects_non_positive_factor(amount in 1..1_000_000i64, factor in -1.0e6f64..=0.0) {
        let money = Money::new(amount, Currency::Eur).unwrap();
        prop_assert_eq!(money.multiply(factor), Err(MoneyError::NonPositiveFactor(factor)));
    }
}

#[test]
fn test_multiply_truncates_before_rounding() {
    let ten_euro = Money::new(100, Currency::Eur).unwrap();
    assert_eq!(ten_euro.multiply(0.99).unwrap(), Money::new(99, Currency::Eur).unwrap());
    assert_eq!(ten_euro.multiply(0.99999999).unwrap(), Money::new(99, Currency::Eur).unwrap());
}

#[test]
fn test_split_examples() {
    let five = Money::new(5, Currency::Eur).unwrap();
    let eur = |amount| Money::new(amount, Currency::Eur).unwrap();

    assert_eq!(five.split(1, 4).unwrap(), (eur(1), eur(4)));
    assert_eq!(five.split(1, 1).unwrap(), (eur(3), eur(2)));
    assert!(five.split(0, 1).is_err());
    assert!(five.split(1, 0).is_err());
}

#[test]
fn test_ordering_is_tri_state() {
    let small = Money::new(1, Currency::Usd).unwrap();
    let large = Money::new(2, Currency::Usd).unwrap();
    assert_eq!(small.compare_to(&large).unwrap(), Ordering::Less);
    assert_eq!(large.compare_to(&small).unwrap(), Ordering::Greater);
    assert_eq!(small.compare_to(&small).unwrap(), Ordering::Equal);
}
