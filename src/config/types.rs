//! Configuration types for payroll calculation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::ThresholdBreakPolicy;
use crate::error::{EngineError, EngineResult};

/// Metadata about the payroll regime.
#[derive(Debug, Clone, Deserialize)]
pub struct PayrollMetadata {
    /// Short code for the regime (e.g., "KR").
    pub code: String,
    /// The human-readable name of the regime.
    pub name: String,
    /// ISO 4217 currency code of all amounts.
    pub currency: String,
    /// The version of the configuration.
    pub version: String,
}

/// Statutory deduction rates and pay multipliers.
///
/// Rates are fractions (0.045 means 4.5%). The long-term care rate applies to
/// the rounded health insurance amount, not to gross pay.
///
/// # Example
///
/// ```
/// use wage_engine::config::RateTable;
/// use rust_decimal::Decimal;
///
/// let rates = RateTable::default();
/// assert_eq!(rates.national_pension, Decimal::new(45, 3));
/// assert_eq!(rates.overtime_multiplier, Decimal::new(15, 1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateTable {
    /// National pension, as a fraction of gross pay.
    pub national_pension: Decimal,
    /// Health insurance, as a fraction of gross pay.
    pub health_insurance: Decimal,
    /// Long-term care insurance, as a fraction of the health insurance amount.
    pub long_term_care: Decimal,
    /// Employment insurance, as a fraction of gross pay.
    pub employment_insurance: Decimal,
    /// Multiplier applied to the hourly wage for overtime hours.
    pub overtime_multiplier: Decimal,
    /// Hours paid as weekly holiday pay when it applies.
    pub weekly_holiday_hours: Decimal,
}

impl RateTable {
    /// The statutory rates in force when this engine was written.
    pub const STATUTORY: RateTable = RateTable {
        national_pension: Decimal::from_parts(45, 0, 0, false, 3),
        health_insurance: Decimal::from_parts(3545, 0, 0, false, 5),
        long_term_care: Decimal::from_parts(1281, 0, 0, false, 4),
        employment_insurance: Decimal::from_parts(9, 0, 0, false, 3),
        overtime_multiplier: Decimal::from_parts(15, 0, 0, false, 1),
        weekly_holiday_hours: Decimal::from_parts(8, 0, 0, false, 0),
    };

    /// Checks that every rate is a fraction in [0, 1], the overtime
    /// multiplier is at least 1, and weekly holiday hours are not negative.
    pub fn validate(&self) -> EngineResult<()> {
        let fractions = [
            ("national_pension", self.national_pension),
            ("health_insurance", self.health_insurance),
            ("long_term_care", self.long_term_care),
            ("employment_insurance", self.employment_insurance),
        ];
        for (field, rate) in fractions {
            if rate < Decimal::ZERO || rate > Decimal::ONE {
                return Err(EngineError::InvalidRateTable {
                    field: field.to_string(),
                    message: format!("rate {} is outside [0, 1]", rate),
                });
            }
        }

        if self.overtime_multiplier < Decimal::ONE {
            return Err(EngineError::InvalidRateTable {
                field: "overtime_multiplier".to_string(),
                message: format!("multiplier {} is below 1", self.overtime_multiplier),
            });
        }

        if self.weekly_holiday_hours < Decimal::ZERO {
            return Err(EngineError::InvalidRateTable {
                field: "weekly_holiday_hours".to_string(),
                message: format!("{} hours is negative", self.weekly_holiday_hours),
            });
        }

        Ok(())
    }
}

impl Default for RateTable {
    fn default() -> Self {
        Self::STATUTORY
    }
}

/// A rate table together with the date it takes effect.
#[derive(Debug, Clone, Deserialize)]
pub struct RateSchedule {
    /// The first date these rates apply to.
    pub effective_date: NaiveDate,
    /// The rates.
    pub rates: RateTable,
}

/// The complete payroll configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct PayrollConfig {
    metadata: PayrollMetadata,
    break_policy: ThresholdBreakPolicy,
    /// Sorted oldest first.
    schedules: Vec<RateSchedule>,
}

impl PayrollConfig {
    /// Creates a new PayrollConfig from its component parts.
    ///
    /// Schedules are sorted by effective date. Two schedules taking effect on
    /// the same date are rejected.
    pub fn new(
        metadata: PayrollMetadata,
        break_policy: ThresholdBreakPolicy,
        schedules: Vec<RateSchedule>,
    ) -> EngineResult<Self> {
        let mut sorted = schedules;
        sorted.sort_by(|a, b| a.effective_date.cmp(&b.effective_date));

        if let Some(pair) = sorted
            .windows(2)
            .find(|pair| pair[0].effective_date == pair[1].effective_date)
        {
            return Err(EngineError::InvalidRateTable {
                field: "effective_date".to_string(),
                message: format!(
                    "more than one rate schedule takes effect on {}",
                    pair[0].effective_date
                ),
            });
        }

        Ok(Self {
            metadata,
            break_policy,
            schedules: sorted,
        })
    }

    /// Returns the payroll metadata.
    pub fn metadata(&self) -> &PayrollMetadata {
        &self.metadata
    }

    /// Returns the configured break policy.
    pub fn break_policy(&self) -> &ThresholdBreakPolicy {
        &self.break_policy
    }

    /// Returns all rate schedules, oldest first.
    pub fn schedules(&self) -> &[RateSchedule] {
        &self.schedules
    }
}
