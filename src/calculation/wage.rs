//! Wage and deduction calculation.
//!
//! Turns hourly wage and hours into base, overtime and weekly holiday pay,
//! then withholds the four statutory insurances from gross pay.
//!
//! The rounding order matters for parity with issued payslips: each pay line
//! and each deduction is rounded to a whole currency unit on its own, and
//! long-term care is taken from the already-rounded health insurance amount.

use rust_decimal::Decimal;

use crate::config::RateTable;
use crate::error::EngineResult;
use crate::models::{PayBreakdown, WageInput};

use super::rounding::{checked_mul, checked_sub, checked_sum, round_currency};

/// Computes the full pay breakdown for a wage input.
///
/// Deterministic: identical inputs and rates always produce identical
/// output. Returns `InvalidWage` for negative wages or hours,
/// `InvalidRateTable` for rates outside their valid range, and
/// `CalculationError` if an amount overflows. Every other input succeeds.
///
/// # Examples
///
/// ```
/// use wage_engine::calculation::compute_pay;
/// use wage_engine::config::RateTable;
/// use wage_engine::models::WageInput;
/// use rust_decimal::Decimal;
///
/// let input = WageInput::new(12000, Decimal::new(8, 0));
/// let pay = compute_pay(&input, &RateTable::default()).unwrap();
///
/// assert_eq!(pay.gross_pay, 96000);
/// assert_eq!(pay.national_pension, 4320);
/// assert_eq!(pay.health_insurance, 3403);
/// assert_eq!(pay.long_term_care_insurance, 436);
/// assert_eq!(pay.employment_insurance, 864);
/// assert_eq!(pay.net_pay, 86977);
/// ```
pub fn compute_pay(input: &WageInput, rates: &RateTable) -> EngineResult<PayBreakdown> {
    input.validate()?;
    rates.validate()?;

    let wage = Decimal::from(input.hourly_wage);

    let base_pay = round_currency(checked_mul(wage, input.regular_hours)?)?;
    let overtime_pay = round_currency(checked_mul(
        checked_mul(wage, input.overtime_hours)?,
        rates.overtime_multiplier,
    )?)?;
    let weekly_holiday_pay = if input.include_weekly_holiday_pay {
        round_currency(checked_mul(wage, rates.weekly_holiday_hours)?)?
    } else {
        0
    };
    let gross_pay = checked_sum(&[base_pay, overtime_pay, weekly_holiday_pay])?;

    let gross = Decimal::from(gross_pay);
    let national_pension = round_currency(checked_mul(gross, rates.national_pension)?)?;
    let health_insurance = round_currency(checked_mul(gross, rates.health_insurance)?)?;
    let long_term_care_insurance =
        round_currency(checked_mul(Decimal::from(health_insurance), rates.long_term_care)?)?;
    let employment_insurance = round_currency(checked_mul(gross, rates.employment_insurance)?)?;

    let total_deduction = checked_sum(&[
        national_pension,
        health_insurance,
        long_term_care_insurance,
        employment_insurance,
    ])?;
    let net_pay = checked_sub(gross_pay, total_deduction)?;

    Ok(PayBreakdown {
        regular_hours: input.regular_hours,
        overtime_hours: input.overtime_hours,
        base_pay,
        overtime_pay,
        weekly_holiday_pay,
        gross_pay,
        national_pension,
        health_insurance,
        long_term_care_insurance,
        employment_insurance,
        total_deduction,
        net_pay,
    })
}

/// Computes pay with the statutory [`RateTable`].
pub fn compute_pay_default(input: &WageInput) -> EngineResult<PayBreakdown> {
    compute_pay(input, &RateTable::STATUTORY)
}

/// A wage calculator bound to one rate table.
///
/// The rates are checked on every calculation, so an engine built from an
/// out-of-range table fails with `InvalidRateTable` rather than producing
/// negative deductions.
///
/// Useful when a caller resolves the rates for a pay date once and then
/// calculates many shifts against them.
///
/// # Example
///
/// ```
/// use wage_engine::calculation::WageEngine;
/// use wage_engine::config::RateTable;
/// use wage_engine::models::WageInput;
/// use rust_decimal::Decimal;
///
/// let engine = WageEngine::new(RateTable::default());
/// let input = WageInput::new(10000, Decimal::new(8, 0)).with_overtime_hours(Decimal::new(2, 0));
/// let pay = engine.compute_pay(&input).unwrap();
/// assert_eq!(pay.overtime_pay, 30000);
/// assert_eq!(pay.gross_pay, 110000);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WageEngine {
    rates: RateTable,
}

impl WageEngine {
    /// Creates an engine using the given rates.
    pub fn new(rates: RateTable) -> Self {
        Self { rates }
    }

    /// Returns the rates this engine applies.
    pub fn rates(&self) -> &RateTable {
        &self.rates
    }

    /// Computes the pay breakdown for `input`. See [`compute_pay`].
    pub fn compute_pay(&self, input: &WageInput) -> EngineResult<PayBreakdown> {
        compute_pay(input, &self.rates)
    }
}
