//! Shift model and hours result.
//!
//! This module defines [`ShiftTimes`], the raw start/end/break triple a
//! caller submits, and [`HoursResult`], the regular/overtime split the
//! hours calculator produces from it.

use chrono::{NaiveTime, Timelike};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Format accepted by [`ShiftTimes::parse`].
pub const TIME_OF_DAY_FORMAT: &str = "%H:%M";

/// A single shift as entered by a worker or an admin.
///
/// Times are time-of-day values at minute precision with no date attached.
/// An end time numerically earlier than the start time denotes a shift that
/// crosses midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftTimes {
    /// When the shift starts.
    pub start_time: NaiveTime,
    /// When the shift ends.
    pub end_time: NaiveTime,
    /// Unpaid break taken during the shift, in minutes.
    #[serde(default)]
    pub break_minutes: u32,
}

impl ShiftTimes {
    /// Creates a shift from already-parsed times.
    pub fn new(start_time: NaiveTime, end_time: NaiveTime, break_minutes: u32) -> Self {
        Self {
            start_time,
            end_time,
            break_minutes,
        }
    }

    /// Parses a shift from `"HH:MM"` strings.
    ///
    /// # Examples
    ///
    /// ```
    /// use wage_engine::models::ShiftTimes;
    ///
    /// let shift = ShiftTimes::parse("22:00", "06:00", 0).unwrap();
    /// assert_eq!(shift.start_minutes(), 22 * 60);
    /// assert_eq!(shift.end_minutes(), 6 * 60);
    ///
    /// assert!(ShiftTimes::parse("24:30", "06:00", 0).is_err());
    /// ```
    pub fn parse(start_time: &str, end_time: &str, break_minutes: u32) -> EngineResult<Self> {
        Ok(Self {
            start_time: parse_time_of_day(start_time)?,
            end_time: parse_time_of_day(end_time)?,
            break_minutes,
        })
    }

    /// Returns a copy of this shift with a different break length.
    pub fn with_break_minutes(self, break_minutes: u32) -> Self {
        Self {
            break_minutes,
            ..self
        }
    }

    /// Minutes since midnight of the start time. Seconds are ignored.
    pub fn start_minutes(&self) -> i64 {
        minutes_since_midnight(self.start_time)
    }

    /// Minutes since midnight of the end time. Seconds are ignored.
    pub fn end_minutes(&self) -> i64 {
        minutes_since_midnight(self.end_time)
    }
}

fn minutes_since_midnight(time: NaiveTime) -> i64 {
    i64::from(time.hour() * 60 + time.minute())
}

/// Parses a single `"HH:MM"` time-of-day value.
pub fn parse_time_of_day(value: &str) -> EngineResult<NaiveTime> {
    NaiveTime::parse_from_str(value.trim(), TIME_OF_DAY_FORMAT).map_err(|e| {
        EngineError::InvalidTime {
            value: value.to_string(),
            message: e.to_string(),
        }
    })
}

/// Billable hours derived from a shift.
///
/// All three values carry two decimal places. `regular_hours` never exceeds
/// the daily threshold and `regular_hours + overtime_hours == total_hours`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoursResult {
    /// Net hours worked after the break.
    pub total_hours: Decimal,
    /// Hours up to the daily threshold.
    pub regular_hours: Decimal,
    /// Hours beyond the daily threshold.
    pub overtime_hours: Decimal,
}

impl HoursResult {
    /// A result with no hours at all.
    pub const ZERO: HoursResult = HoursResult {
        total_hours: Decimal::ZERO,
        regular_hours: Decimal::ZERO,
        overtime_hours: Decimal::ZERO,
    };

    /// Returns true if any part of the shift is overtime.
    pub fn has_overtime(&self) -> bool {
        self.overtime_hours > Decimal::ZERO
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
    fn test_parse_valid_times() {
        let shift = ShiftTimes::parse("09:00", "17:30", 30).unwrap();
        assert_eq!(shift.start_time, NaiveTime::from_hms_opt(9, 0, 0).unwrap());
        assert_eq!(shift.end_time, NaiveTime::from_hms_opt(17, 30, 0).unwrap());
        assert_eq!(shift.break_minutes, 30);
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let shift = ShiftTimes::parse(" 08:15 ", "12:00", 0).unwrap();
        assert_eq!(shift.start_minutes(), 8 * 60 + 15);
    }

    #[test]
    fn test_parse_rejects_out_of_range_hour() {
        let result = ShiftTimes::parse("25:00", "06:00", 0);
        match result {
            Err(EngineError::InvalidTime { value, .. }) => assert_eq!(value, "25:00"),
            other => panic!("Expected InvalidTime error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(ShiftTimes::parse("09:00", "late", 0).is_err());
        assert!(ShiftTimes::parse("", "17:00", 0).is_err());
    }

    #[test]
    fn test_minutes_ignore_seconds() {
        let shift = ShiftTimes::new(
            NaiveTime::from_hms_opt(9, 0, 59).unwrap(),
            NaiveTime::from_hms_opt(10, 30, 1).unwrap(),
            0,
        );
        assert_eq!(shift.start_minutes(), 540);
        assert_eq!(shift.end_minutes(), 630);
    }

    #[test]
    fn test_with_break_minutes_keeps_times() {
        let shift = ShiftTimes::parse("09:00", "18:00", 0).unwrap();
        let adjusted = shift.with_break_minutes(30);
        assert_eq!(adjusted.start_time, shift.start_time);
        assert_eq!(adjusted.end_time, shift.end_time);
        assert_eq!(adjusted.break_minutes, 30);
    }

    #[test]
    fn test_shift_deserialization_defaults_break() {
        let json = r#"{ "start_time": "22:00:00", "end_time": "06:00:00" }"#;
        let shift: ShiftTimes = serde_json::from_str(json).unwrap();
        assert_eq!(shift.break_minutes, 0);
        assert_eq!(shift.end_minutes(), 360);
    }

    #[test]
    fn test_hours_result_has_overtime() {
        let hours = HoursResult {
            total_hours: dec("9.5"),
            regular_hours: dec("8"),
            overtime_hours: dec("1.5"),
        };
        assert!(hours.has_overtime());
        assert!(!HoursResult::ZERO.has_overtime());
    }
}
