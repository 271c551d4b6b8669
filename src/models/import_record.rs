//! Imported pay record model.

use serde::{Deserialize, Serialize};

use super::{PayBreakdown, WageInput};

/// A pay row read back from an external spreadsheet.
///
/// Carries the source fields needed to recompute the row alongside every
/// derived figure exactly as it appeared in the sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportedPayRecord {
    /// Hourly wage as entered in the sheet.
    pub hourly_wage: i64,
    /// Whether the row claims weekly holiday pay.
    #[serde(default)]
    pub include_weekly_holiday_pay: bool,
    /// The derived figures as entered in the sheet.
    #[serde(flatten)]
    pub pay: PayBreakdown,
}

impl ImportedPayRecord {
    /// The wage input implied by the row's source fields.
    pub fn wage_input(&self) -> WageInput {
        WageInput {
            hourly_wage: self.hourly_wage,
            regular_hours: self.pay.regular_hours,
            overtime_hours: self.pay.overtime_hours,
            include_weekly_holiday_pay: self.include_weekly_holiday_pay,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_deserialize_flat_row() {
        let json = r#"{
            "hourly_wage": 12000,
            "include_weekly_holiday_pay": false,
            "regular_hours": "8",
            "overtime_hours": "0",
            "base_pay": 96000,
            "overtime_pay": 0,
            "weekly_holiday_pay": 0,
            "gross_pay": 96000,
            "national_pension": 4320,
            "health_insurance": 3403,
            "long_term_care_insurance": 436,
            "employment_insurance": 864,
            "total_deduction": 9023,
            "net_pay": 86977
        }"#;

        let record: ImportedPayRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.pay.net_pay, 86977);

        let input = record.wage_input();
        assert_eq!(input.hourly_wage, 12000);
        assert_eq!(input.regular_hours, Decimal::new(8, 0));
        assert_eq!(input.overtime_hours, Decimal::ZERO);
    }
}
