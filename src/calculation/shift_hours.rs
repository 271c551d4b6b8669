//! Shift hours calculation.
//!
//! Converts a start time, end time and break into decimal total, regular and
//! overtime hours. The calculator is pure time arithmetic; how long the break
//! is belongs to the caller (see [`BreakPolicy`](super::BreakPolicy)).

use chrono::NaiveTime;
use rust_decimal::Decimal;

use crate::models::{HoursResult, ShiftTimes};

use super::rounding::round_hours;

/// Minutes in a day, added once to shifts that cross midnight.
pub const MINUTES_PER_DAY: i64 = 24 * 60;

/// Default daily threshold in hours; hours beyond it are overtime.
pub const DEFAULT_REGULAR_HOURS_THRESHOLD: Decimal = Decimal::from_parts(8, 0, 0, false, 0);

/// Minutes between two times of day, treating an earlier end as the next day.
///
/// Equal times give zero, not a full day. No shift is assumed to exceed
/// 24 hours.
///
/// # Examples
///
/// ```
/// use wage_engine::calculation::elapsed_minutes;
/// use chrono::NaiveTime;
///
/// let t = |h, m| NaiveTime::from_hms_opt(h, m, 0).unwrap();
/// assert_eq!(elapsed_minutes(t(9, 0), t(17, 30)), 510);
/// assert_eq!(elapsed_minutes(t(22, 0), t(6, 0)), 480);
/// assert_eq!(elapsed_minutes(t(9, 0), t(9, 0)), 0);
/// ```
pub fn elapsed_minutes(start_time: NaiveTime, end_time: NaiveTime) -> i64 {
    let shift = ShiftTimes::new(start_time, end_time, 0);
    elapsed_shift_minutes(&shift)
}

fn elapsed_shift_minutes(shift: &ShiftTimes) -> i64 {
    let raw = shift.end_minutes() - shift.start_minutes();
    if raw < 0 { raw + MINUTES_PER_DAY } else { raw }
}

/// Computes billable hours for a shift using the default 8 hour threshold.
///
/// Never fails. A break longer than the shift yields zero hours, and exactly
/// 8 hours is all regular time.
///
/// # Examples
///
/// ```
/// use wage_engine::calculation::compute_hours;
/// use wage_engine::models::ShiftTimes;
/// use rust_decimal::Decimal;
///
/// let shift = ShiftTimes::parse("22:00", "06:00", 0).unwrap();
/// let hours = compute_hours(&shift);
/// assert_eq!(hours.total_hours, Decimal::new(8, 0));
/// assert_eq!(hours.regular_hours, Decimal::new(8, 0));
/// assert_eq!(hours.overtime_hours, Decimal::ZERO);
///
/// let long = ShiftTimes::parse("09:00", "19:30", 30).unwrap();
/// let hours = compute_hours(&long);
/// assert_eq!(hours.total_hours, Decimal::new(10, 0));
/// assert_eq!(hours.overtime_hours, Decimal::new(2, 0));
/// ```
pub fn compute_hours(shift: &ShiftTimes) -> HoursResult {
    compute_hours_with_threshold(shift, DEFAULT_REGULAR_HOURS_THRESHOLD)
}

/// Computes billable hours with an explicit regular-hours threshold.
///
/// A negative threshold is treated as zero.
pub fn compute_hours_with_threshold(shift: &ShiftTimes, threshold: Decimal) -> HoursResult {
    let threshold = threshold.max(Decimal::ZERO);

    let net_minutes = (elapsed_shift_minutes(shift) - i64::from(shift.break_minutes)).max(0);
    let total_hours = round_hours(Decimal::from(net_minutes) / Decimal::from(60));

    let regular_hours = round_hours(total_hours.min(threshold));
    let overtime_hours = round_hours((total_hours - threshold).max(Decimal::ZERO));

    HoursResult {
        total_hours,
        regular_hours,
        overtime_hours,
    }
}
