//! Work record calculation.
//!
//! Runs the approval workflow's sequence for one shift: choose the break with
//! a [`BreakPolicy`], compute hours, compute pay, and snapshot everything
//! with an audit trail.

use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

use crate::config::RateTable;
use crate::error::EngineResult;
use crate::models::{
    AuditStep, HoursResult, PayBreakdown, ShiftApplication, ShiftTimes, WageInput, WorkRecord,
};

use super::break_policy::{BreakPolicy, apply_break_policy};
use super::shift_hours::{DEFAULT_REGULAR_HOURS_THRESHOLD, compute_hours, elapsed_minutes};
use super::wage::compute_pay;

/// Calculates an approved shift application into a [`WorkRecord`].
///
/// The record gets a fresh id and timestamp; everything else is a pure
/// function of the application, policy and rates.
pub fn calculate_work_record<P>(
    application: &ShiftApplication,
    policy: &P,
    rates: &RateTable,
) -> EngineResult<WorkRecord>
where
    P: BreakPolicy + ?Sized,
{
    let shift = apply_break_policy(application.start_time, application.end_time, policy);
    let hours = compute_hours(&shift);
    let input = WageInput::from_hours(application.hourly_wage, &hours)
        .with_weekly_holiday_pay(application.include_weekly_holiday_pay);
    let pay = compute_pay(&input, rates)?;

    let audit_trace = vec![
        break_policy_step(1, &shift),
        shift_hours_step(2, &shift, &hours),
        gross_pay_step(3, &input, rates, &pay),
        deductions_step(4, rates, &pay),
    ];

    let record = WorkRecord {
        record_id: Uuid::new_v4(),
        computed_at: Utc::now(),
        shift,
        hourly_wage: application.hourly_wage,
        include_weekly_holiday_pay: application.include_weekly_holiday_pay,
        hours,
        pay,
        audit_trace,
    };

    debug!(
        record_id = %record.record_id,
        total_hours = %hours.total_hours,
        gross_pay = pay.gross_pay,
        net_pay = pay.net_pay,
        "Work record calculated"
    );

    Ok(record)
}

fn break_policy_step(step_number: u32, shift: &ShiftTimes) -> AuditStep {
    let elapsed = elapsed_minutes(shift.start_time, shift.end_time);
    AuditStep {
        step_number,
        rule_id: "break_policy".to_string(),
        rule_name: "Break Policy".to_string(),
        input: serde_json::json!({
            "start_time": shift.start_time.format("%H:%M").to_string(),
            "end_time": shift.end_time.format("%H:%M").to_string(),
            "elapsed_minutes": elapsed
        }),
        output: serde_json::json!({
            "break_minutes": shift.break_minutes
        }),
        reasoning: format!(
            "{} minutes elapsed before break, assigned {} minute break",
            elapsed, shift.break_minutes
        ),
    }
}

fn shift_hours_step(step_number: u32, shift: &ShiftTimes, hours: &HoursResult) -> AuditStep {
    let overnight = shift.end_minutes() < shift.start_minutes();
    AuditStep {
        step_number,
        rule_id: "shift_hours".to_string(),
        rule_name: "Shift Hours Calculation".to_string(),
        input: serde_json::json!({
            "start_time": shift.start_time.format("%H:%M").to_string(),
            "end_time": shift.end_time.format("%H:%M").to_string(),
            "break_minutes": shift.break_minutes,
            "threshold": DEFAULT_REGULAR_HOURS_THRESHOLD.normalize().to_string()
        }),
        output: serde_json::json!({
            "total_hours": hours.total_hours.normalize().to_string(),
            "regular_hours": hours.regular_hours.normalize().to_string(),
            "overtime_hours": hours.overtime_hours.normalize().to_string(),
            "overnight": overnight
        }),
        reasoning: if hours.has_overtime() {
            format!(
                "{} hours worked exceeds {} hour threshold by {} hours",
                hours.total_hours.normalize(),
                DEFAULT_REGULAR_HOURS_THRESHOLD.normalize(),
                hours.overtime_hours.normalize()
            )
        } else {
            format!(
                "{} hours worked, all regular time",
                hours.total_hours.normalize()
            )
        },
    }
}

fn gross_pay_step(
    step_number: u32,
    input: &WageInput,
    rates: &RateTable,
    pay: &PayBreakdown,
) -> AuditStep {
    AuditStep {
        step_number,
        rule_id: "gross_pay".to_string(),
        rule_name: "Gross Pay Calculation".to_string(),
        input: serde_json::json!({
            "hourly_wage": input.hourly_wage,
            "regular_hours": input.regular_hours.normalize().to_string(),
            "overtime_hours": input.overtime_hours.normalize().to_string(),
            "overtime_multiplier": rates.overtime_multiplier.normalize().to_string(),
            "include_weekly_holiday_pay": input.include_weekly_holiday_pay
        }),
        output: serde_json::json!({
            "base_pay": pay.base_pay,
            "overtime_pay": pay.overtime_pay,
            "weekly_holiday_pay": pay.weekly_holiday_pay,
            "gross_pay": pay.gross_pay
        }),
        reasoning: format!(
            "{} base + {} overtime + {} weekly holiday = {} gross",
            pay.base_pay, pay.overtime_pay, pay.weekly_holiday_pay, pay.gross_pay
        ),
    }
}

fn deductions_step(step_number: u32, rates: &RateTable, pay: &PayBreakdown) -> AuditStep {
    AuditStep {
        step_number,
        rule_id: "statutory_deductions".to_string(),
        rule_name: "Statutory Deductions".to_string(),
        input: serde_json::json!({
            "gross_pay": pay.gross_pay,
            "national_pension_rate": rates.national_pension.normalize().to_string(),
            "health_insurance_rate": rates.health_insurance.normalize().to_string(),
            "long_term_care_rate": rates.long_term_care.normalize().to_string(),
            "employment_insurance_rate": rates.employment_insurance.normalize().to_string()
        }),
        output: serde_json::json!({
            "national_pension": pay.national_pension,
            "health_insurance": pay.health_insurance,
            "long_term_care_insurance": pay.long_term_care_insurance,
            "employment_insurance": pay.employment_insurance,
            "total_deduction": pay.total_deduction,
            "net_pay": pay.net_pay
        }),
        reasoning: format!(
            "{} gross - {} deductions = {} net (long-term care taken from {} health insurance)",
            pay.gross_pay, pay.total_deduction, pay.net_pay, pay.health_insurance
        ),
    }
}
