//! Wage input model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::HoursResult;

/// Inputs to the wage engine for a single shift.
///
/// Wages are whole currency units; there is no sub-unit precision anywhere in
/// the pay model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WageInput {
    /// Hourly wage in whole currency units.
    pub hourly_wage: i64,
    /// Hours paid at the ordinary rate.
    pub regular_hours: Decimal,
    /// Hours paid at the overtime multiplier.
    #[serde(default)]
    pub overtime_hours: Decimal,
    /// Whether the flat weekly holiday payment is added.
    #[serde(default)]
    pub include_weekly_holiday_pay: bool,
}

impl WageInput {
    /// Creates an input with no overtime and no weekly holiday pay.
    pub fn new(hourly_wage: i64, regular_hours: Decimal) -> Self {
        Self {
            hourly_wage,
            regular_hours,
            overtime_hours: Decimal::ZERO,
            include_weekly_holiday_pay: false,
        }
    }

    /// Creates an input from the regular/overtime split of a shift.
    pub fn from_hours(hourly_wage: i64, hours: &HoursResult) -> Self {
        Self {
            hourly_wage,
            regular_hours: hours.regular_hours,
            overtime_hours: hours.overtime_hours,
            include_weekly_holiday_pay: false,
        }
    }

    /// Sets the overtime hours.
    pub fn with_overtime_hours(mut self, overtime_hours: Decimal) -> Self {
        self.overtime_hours = overtime_hours;
        self
    }

    /// Sets whether weekly holiday pay is included.
    pub fn with_weekly_holiday_pay(mut self, include: bool) -> Self {
        self.include_weekly_holiday_pay = include;
        self
    }

    /// Rejects negative wages and negative hours.
    pub fn validate(&self) -> EngineResult<()> {
        if self.hourly_wage < 0 {
            return Err(EngineError::InvalidWage {
                field: "hourly_wage".to_string(),
                message: format!("must not be negative, got {}", self.hourly_wage),
            });
        }
        if self.regular_hours < Decimal::ZERO {
            return Err(EngineError::InvalidWage {
                field: "regular_hours".to_string(),
                message: format!("must not be negative, got {}", self.regular_hours),
            });
        }
        if self.overtime_hours < Decimal::ZERO {
            return Err(EngineError::InvalidWage {
                field: "overtime_hours".to_string(),
                message: format!("must not be negative, got {}", self.overtime_hours),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_builder_sets_fields() {
        let input = WageInput::new(10000, dec("8"))
            .with_overtime_hours(dec("2"))
            .with_weekly_holiday_pay(true);

        assert_eq!(input.hourly_wage, 10000);
        assert_eq!(input.regular_hours, dec("8"));
        assert_eq!(input.overtime_hours, dec("2"));
        assert!(input.include_weekly_holiday_pay);
    }

    #[test]
    fn test_from_hours_copies_split() {
        let hours = HoursResult {
            total_hours: dec("9.5"),
            regular_hours: dec("8"),
            overtime_hours: dec("1.5"),
        };
        let input = WageInput::from_hours(9860, &hours);
        assert_eq!(input.regular_hours, dec("8"));
        assert_eq!(input.overtime_hours, dec("1.5"));
        assert!(!input.include_weekly_holiday_pay);
    }

    #[test]
    fn test_validate_accepts_zero_values() {
        assert!(WageInput::new(0, Decimal::ZERO).validate().is_ok());
    }

    #[test]
    fn test_validate_accepts_negative_zero_hours() {
        let mut negative_zero = Decimal::new(0, 2);
        negative_zero.set_sign_negative(true);
        assert!(WageInput::new(10000, negative_zero).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_negative_wage() {
        match WageInput::new(-1, dec("8")).validate() {
            Err(EngineError::InvalidWage { field, .. }) => assert_eq!(field, "hourly_wage"),
            other => panic!("Expected InvalidWage error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_negative_hours() {
        match WageInput::new(10000, dec("-1")).validate() {
            Err(EngineError::InvalidWage { field, .. }) => assert_eq!(field, "regular_hours"),
            other => panic!("Expected InvalidWage error, got {:?}", other),
        }

        let input = WageInput::new(10000, dec("8")).with_overtime_hours(dec("-0.5"));
        match input.validate() {
            Err(EngineError::InvalidWage { field, .. }) => assert_eq!(field, "overtime_hours"),
            other => panic!("Expected InvalidWage error, got {:?}", other),
        }
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let json = r#"{ "hourly_wage": 12000, "regular_hours": "8" }"#;
        let input: WageInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.overtime_hours, Decimal::ZERO);
        assert!(!input.include_weekly_holiday_pay);
    }
}
