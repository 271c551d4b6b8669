//! Break policy.
//!
//! How long the unpaid break on a shift is depends on a business rule, not on
//! time arithmetic: conventionally, shifts longer than 8 hours before any
//! break get a 30 minute break and shorter shifts get none. The rule lives
//! here, outside the hours calculator, and callers pass it in explicitly.

use chrono::NaiveTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::ShiftTimes;

use super::shift_hours::elapsed_minutes;

/// Decides the unpaid break for a shift from its elapsed hours.
///
/// Implemented by [`ThresholdBreakPolicy`], [`NoBreakPolicy`] and any
/// `Fn(Decimal) -> u32` closure.
pub trait BreakPolicy {
    /// Returns the break in minutes for a shift lasting `elapsed_hours`
    /// before any break is taken.
    fn break_minutes(&self, elapsed_hours: Decimal) -> u32;
}

impl<F> BreakPolicy for F
where
    F: Fn(Decimal) -> u32,
{
    fn break_minutes(&self, elapsed_hours: Decimal) -> u32 {
        self(elapsed_hours)
    }
}

/// Gives a long break to shifts strictly longer than a threshold.
///
/// # Example
///
/// ```
/// use wage_engine::calculation::{BreakPolicy, ThresholdBreakPolicy};
/// use rust_decimal::Decimal;
///
/// let policy = ThresholdBreakPolicy::default();
/// assert_eq!(policy.break_minutes(Decimal::new(8, 0)), 0);
/// assert_eq!(policy.break_minutes(Decimal::new(85, 1)), 30);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThresholdBreakPolicy {
    /// Elapsed hours above which the long break applies.
    pub threshold_hours: Decimal,
    /// Break for shifts above the threshold.
    pub long_break_minutes: u32,
    /// Break for shifts at or below the threshold.
    pub short_break_minutes: u32,
}

impl Default for ThresholdBreakPolicy {
    fn default() -> Self {
        Self {
            threshold_hours: Decimal::from_parts(8, 0, 0, false, 0),
            long_break_minutes: 30,
            short_break_minutes: 0,
        }
    }
}

impl ThresholdBreakPolicy {
    /// Rejects a negative threshold.
    pub fn validate(&self) -> EngineResult<()> {
        if self.threshold_hours < Decimal::ZERO {
            return Err(EngineError::InvalidBreakPolicy {
                field: "threshold_hours".to_string(),
                message: format!("{} hours is negative", self.threshold_hours),
            });
        }
        Ok(())
    }
}

impl BreakPolicy for ThresholdBreakPolicy {
    fn break_minutes(&self, elapsed_hours: Decimal) -> u32 {
        if elapsed_hours > self.threshold_hours {
            self.long_break_minutes
        } else {
            self.short_break_minutes
        }
    }
}

/// Never assigns a break.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoBreakPolicy;

impl BreakPolicy for NoBreakPolicy {
    fn break_minutes(&self, _elapsed_hours: Decimal) -> u32 {
        0
    }
}

/// Builds the shift to calculate, with the break chosen by `policy`.
///
/// The policy sees the exact elapsed hours between start and end (overnight
/// aware). They are not rounded, so a threshold finer than a hundredth of an
/// hour is compared against the true shift length.
///
/// # Example
///
/// ```
/// use wage_engine::calculation::{ThresholdBreakPolicy, apply_break_policy, compute_hours};
/// use chrono::NaiveTime;
/// use rust_decimal::Decimal;
///
/// let start = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
/// let end = NaiveTime::from_hms_opt(18, 0, 0).unwrap();
///
/// let shift = apply_break_policy(start, end, &ThresholdBreakPolicy::default());
/// assert_eq!(shift.break_minutes, 30);
/// assert_eq!(compute_hours(&shift).total_hours, Decimal::new(85, 1));
/// ```
pub fn apply_break_policy<P>(start_time: NaiveTime, end_time: NaiveTime, policy: &P) -> ShiftTimes
where
    P: BreakPolicy + ?Sized,
{
    let elapsed_hours = Decimal::from(elapsed_minutes(start_time, end_time)) / Decimal::from(60);
    ShiftTimes::new(start_time, end_time, policy.break_minutes(elapsed_hours))
}
