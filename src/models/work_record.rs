//! Work record models.
//!
//! A [`ShiftApplication`] is what the approval workflow has in hand when a
//! worker's application for a shift is approved; a [`WorkRecord`] is the
//! immutable snapshot it keeps afterwards.

use chrono::{DateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{AuditStep, HoursResult, PayBreakdown, ShiftTimes};

/// An approved shift application awaiting pay calculation.
///
/// The break is not part of the application; it is decided by a
/// [`BreakPolicy`](crate::calculation::BreakPolicy) at calculation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftApplication {
    /// Scheduled start of the shift.
    pub start_time: NaiveTime,
    /// Scheduled end of the shift.
    pub end_time: NaiveTime,
    /// Hourly wage offered in the job posting.
    pub hourly_wage: i64,
    /// Whether the worker qualifies for weekly holiday pay.
    #[serde(default)]
    pub include_weekly_holiday_pay: bool,
}

/// Immutable snapshot of a calculated shift.
///
/// # Example
///
/// ```
/// use wage_engine::calculation::{ThresholdBreakPolicy, calculate_work_record};
/// use wage_engine::config::RateTable;
/// use wage_engine::models::ShiftApplication;
/// use chrono::NaiveTime;
///
/// let application = ShiftApplication {
///     start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
///     end_time: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
///     hourly_wage: 12000,
///     include_weekly_holiday_pay: false,
/// };
///
/// let record = calculate_work_record(
///     &application,
///     &ThresholdBreakPolicy::default(),
///     &RateTable::default(),
/// )
/// .unwrap();
/// assert_eq!(record.pay.net_pay, 86977);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkRecord {
    /// Unique identifier for this record.
    pub record_id: Uuid,
    /// When the calculation was performed.
    pub computed_at: DateTime<Utc>,
    /// The shift as calculated, including the policy-assigned break.
    pub shift: ShiftTimes,
    /// Hourly wage used for the calculation.
    pub hourly_wage: i64,
    /// Whether weekly holiday pay was included.
    pub include_weekly_holiday_pay: bool,
    /// Regular/overtime split of the shift.
    pub hours: HoursResult,
    /// The computed pay.
    pub pay: PayBreakdown,
    /// Every rule applied, in order.
    pub audit_trace: Vec<AuditStep>,
}
