//! Core data models for the wage engine.
//!
//! Every model is a transient value object; persisting them is the caller's
//! responsibility.

mod audit;
mod import_record;
mod pay_breakdown;
mod shift;
mod wage;
mod work_record;

pub use audit::AuditStep;
pub use import_record::ImportedPayRecord;
pub use pay_breakdown::PayBreakdown;
pub use shift::{HoursResult, ShiftTimes, TIME_OF_DAY_FORMAT, parse_time_of_day};
pub use wage::WageInput;
pub use work_record::{ShiftApplication, WorkRecord};
