//! Calculation logic for the wage engine.
//!
//! This module contains the pure calculation functions: shift hours with
//! overnight handling, the caller-supplied break policy, gross pay and
//! statutory deductions, the approval workflow's work record composition,
//! and reconciliation of rows imported from spreadsheets.

mod break_policy;
mod import;
mod rounding;
mod shift_hours;
mod wage;
mod work_record;

pub use break_policy::{BreakPolicy, NoBreakPolicy, ThresholdBreakPolicy, apply_break_policy};
pub use import::{ImportMode, ReconciledImport, reconcile_import};
pub use rounding::{HOURS_DECIMAL_PLACES, round_currency, round_hours};
pub use shift_hours::{
    DEFAULT_REGULAR_HOURS_THRESHOLD, MINUTES_PER_DAY, compute_hours, compute_hours_with_threshold,
    elapsed_minutes,
};
pub use wage::{WageEngine, compute_pay, compute_pay_default};
pub use work_record::calculate_work_record;
