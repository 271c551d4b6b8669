//! Pay breakdown model.
//!
//! This module contains [`PayBreakdown`], the full set of figures the wage
//! engine produces for a shift: the three pay lines, gross pay, the four
//! statutory deductions, and net pay.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The computed pay for a single shift.
///
/// Every monetary field is a whole currency amount. The sum identities
/// (`gross_pay`, `total_deduction`, `net_pay`) hold for anything produced by
/// [`compute_pay`](crate::calculation::compute_pay); records read from an
/// external source can be checked with [`PayBreakdown::invariant_violations`].
///
/// `net_pay` may be negative when deductions exceed gross pay.
///
/// # Example
///
/// ```
/// use wage_engine::models::PayBreakdown;
/// use rust_decimal::Decimal;
///
/// let pay = PayBreakdown {
///     regular_hours: Decimal::new(8, 0),
///     overtime_hours: Decimal::ZERO,
///     base_pay: 96000,
///     overtime_pay: 0,
///     weekly_holiday_pay: 0,
///     gross_pay: 96000,
///     national_pension: 4320,
///     health_insurance: 3403,
///     long_term_care_insurance: 436,
///     employment_insurance: 864,
///     total_deduction: 9023,
///     net_pay: 86977,
/// };
/// assert!(pay.invariant_violations().is_empty());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PayBreakdown {
    /// Regular hours, echoed from the input.
    pub regular_hours: Decimal,
    /// Overtime hours, echoed from the input.
    pub overtime_hours: Decimal,
    /// Pay for regular hours.
    pub base_pay: i64,
    /// Pay for overtime hours at the overtime multiplier.
    pub overtime_pay: i64,
    /// Flat weekly holiday payment, or zero.
    pub weekly_holiday_pay: i64,
    /// Sum of base, overtime and weekly holiday pay.
    pub gross_pay: i64,
    /// National pension contribution.
    pub national_pension: i64,
    /// Health insurance contribution.
    pub health_insurance: i64,
    /// Long-term care insurance, derived from the health insurance amount.
    pub long_term_care_insurance: i64,
    /// Employment insurance contribution.
    pub employment_insurance: i64,
    /// Sum of the four deductions.
    pub total_deduction: i64,
    /// Gross pay minus total deduction.
    pub net_pay: i64,
}

impl PayBreakdown {
    /// Returns the names of the derived fields whose sum identity does not hold.
    ///
    /// Sums are evaluated in 128-bit arithmetic so that corrupt records with
    /// huge values are reported rather than overflowing.
    pub fn invariant_violations(&self) -> Vec<&'static str> {
        let mut violations = Vec::new();

        let gross = i128::from(self.base_pay)
            + i128::from(self.overtime_pay)
            + i128::from(self.weekly_holiday_pay);
        if gross != i128::from(self.gross_pay) {
            violations.push("gross_pay");
        }

        let deductions = i128::from(self.national_pension)
            + i128::from(self.health_insurance)
            + i128::from(self.long_term_care_insurance)
            + i128::from(self.employment_insurance);
        if deductions != i128::from(self.total_deduction) {
            violations.push("total_deduction");
        }

        if i128::from(self.gross_pay) - i128::from(self.total_deduction)
            != i128::from(self.net_pay)
        {
            violations.push("net_pay");
        }

        violations
    }

    /// Returns the names of every field that differs between `self` and `other`.
    pub fn differing_fields(&self, other: &PayBreakdown) -> Vec<&'static str> {
        let pairs: [(&'static str, bool); 12] = [
            ("regular_hours", self.regular_hours == other.regular_hours),
            ("overtime_hours", self.overtime_hours == other.overtime_hours),
            ("base_pay", self.base_pay == other.base_pay),
            ("overtime_pay", self.overtime_pay == other.overtime_pay),
            (
                "weekly_holiday_pay",
                self.weekly_holiday_pay == other.weekly_holiday_pay,
            ),
            ("gross_pay", self.gross_pay == other.gross_pay),
            ("national_pension", self.national_pension == other.national_pension),
            ("health_insurance", self.health_insurance == other.health_insurance),
            (
                "long_term_care_insurance",
                self.long_term_care_insurance == other.long_term_care_insurance,
            ),
            (
                "employment_insurance",
                self.employment_insurance == other.employment_insurance,
            ),
            ("total_deduction", self.total_deduction == other.total_deduction),
            ("net_pay", self.net_pay == other.net_pay),
        ];

        pairs
            .into_iter()
            .filter(|(_, same)| !same)
            .map(|(name, _)| name)
            .collect()
    }
}
