//! Audit trail models.
//!
//! Work records carry an ordered list of [`AuditStep`]s so that an admin
//! reviewing a payslip can see how each figure was reached.

use serde::{Deserialize, Serialize};

/// A single step in the audit trail recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
///
/// # Example
///
/// ```
/// use wage_engine::models::AuditStep;
///
/// let step = AuditStep {
///     step_number: 1,
///     rule_id: "shift_hours".to_string(),
///     rule_name: "Shift Hours Calculation".to_string(),
///     input: serde_json::json!({"start_time": "09:00", "end_time": "17:00"}),
///     output: serde_json::json!({"total_hours": "8"}),
///     reasoning: "8 hours between 09:00 and 17:00".to_string(),
/// };
/// assert_eq!(step.rule_id, "shift_hours");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}
