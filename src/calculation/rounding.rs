//! Rounding helpers shared by every calculation.
//!
//! All rounding in the engine goes through these helpers so that the
//! midpoint rule is applied consistently: halves round away from zero, which
//! for the non-negative values the engine works with is round-half-up.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{EngineError, EngineResult};

/// Decimal places kept on hour values.
pub const HOURS_DECIMAL_PLACES: u32 = 2;

/// Rounds an hour value to two decimal places, half-up.
pub fn round_hours(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(HOURS_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds an amount to a whole currency unit, half-up.
///
/// Fails only if the rounded amount does not fit in an `i64`.
pub fn round_currency(value: Decimal) -> EngineResult<i64> {
    value
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .ok_or_else(|| EngineError::CalculationError {
            message: format!("amount {} is outside the currency range", value),
        })
}

/// Multiplies two decimals, reporting overflow instead of panicking.
pub(crate) fn checked_mul(lhs: Decimal, rhs: Decimal) -> EngineResult<Decimal> {
    lhs.checked_mul(rhs)
        .ok_or_else(|| EngineError::CalculationError {
            message: format!("{} x {} overflows", lhs, rhs),
        })
}

/// Subtracts whole currency amounts, reporting overflow instead of wrapping.
pub(crate) fn checked_sub(lhs: i64, rhs: i64) -> EngineResult<i64> {
    lhs.checked_sub(rhs)
        .ok_or_else(|| EngineError::CalculationError {
            message: format!("{} - {} overflows", lhs, rhs),
        })
}

/// Adds whole currency amounts, reporting overflow instead of wrapping.
pub(crate) fn checked_sum(amounts: &[i64]) -> EngineResult<i64> {
    amounts.iter().try_fold(0i64, |acc, &amount| {
        acc.checked_add(amount)
            .ok_or_else(|| EngineError::CalculationError {
                message: format!("sum of {:?} overflows", amounts),
            })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_round_hours_half_up() {
        assert_eq!(round_hours(dec("1.005")), dec("1.01"));
        assert_eq!(round_hours(dec("1.004")), dec("1.00"));
        assert_eq!(round_hours(dec("8.125")), dec("8.13"));
    }

    #[test]
    fn test_round_hours_repeating_fraction() {
        // 500 minutes
        let hours = Decimal::from(500) / Decimal::from(60);
        assert_eq!(round_hours(hours), dec("8.33"));
    }

    #[test]
    fn test_round_currency_half_up_not_bankers() {
        assert_eq!(round_currency(dec("3899.5")).unwrap(), 3900);
        assert_eq!(round_currency(dec("3900.5")).unwrap(), 3901);
        assert_eq!(round_currency(dec("2.5")).unwrap(), 3);
        assert_eq!(round_currency(dec("2.4999")).unwrap(), 2);
    }

    #[test]
    fn test_round_currency_overflow() {
        let huge = Decimal::from(i64::MAX) * Decimal::from(10);
        assert!(matches!(
            round_currency(huge),
            Err(EngineError::CalculationError { .. })
        ));
    }

    #[test]
    fn test_checked_mul_overflow() {
        assert!(checked_mul(Decimal::MAX, dec("2")).is_err());
        assert_eq!(checked_mul(dec("1.5"), dec("2")).unwrap(), dec("3"));
    }

    #[test]
    fn test_checked_sub_overflow() {
        assert_eq!(checked_sub(96000, 9023).unwrap(), 86977);
        assert_eq!(checked_sub(10, 11).unwrap(), -1);
        assert!(checked_sub(i64::MIN, 1).is_err());
        assert!(checked_sub(0, i64::MIN).is_err());
    }

    #[test]
    fn test_checked_sum() {
        assert_eq!(checked_sum(&[1, 2, 3]).unwrap(), 6);
        assert_eq!(checked_sum(&[]).unwrap(), 0);
        assert!(checked_sum(&[i64::MAX, 1]).is_err());
    }
}
