//! Reconciliation of pay records imported from spreadsheets.
//!
//! A spreadsheet editor can type any number into any cell, so a row read back
//! from a sheet may disagree with what the wage engine would compute from the
//! same wage and hours. [`reconcile_import`] decides what happens then,
//! according to an explicit [`ImportMode`].

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::config::RateTable;
use crate::error::{EngineError, EngineResult};
use crate::models::{ImportedPayRecord, PayBreakdown};

use super::wage::compute_pay;

/// How to treat an imported row whose figures disagree with the engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImportMode {
    /// Reject any row whose derived figures differ from a recomputation.
    #[default]
    Strict,
    /// Replace derived figures with recomputed ones and report what changed.
    Recalculate,
    /// Accept the row as an authoritative override, only flagging broken
    /// sum identities.
    TrustSource,
}

/// The outcome of reconciling one imported row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconciledImport {
    /// The pay figures to keep.
    pub pay: PayBreakdown,
    /// Fields replaced by recomputed values (`Recalculate` only).
    pub corrected_fields: Vec<String>,
    /// Sum identities the kept figures violate (`TrustSource` only).
    pub warnings: Vec<String>,
}

/// Reconciles an imported row against the wage engine.
///
/// # Example
///
/// ```
/// use wage_engine::calculation::{ImportMode, compute_pay, reconcile_import};
/// use wage_engine::config::RateTable;
/// use wage_engine::models::{ImportedPayRecord, WageInput};
/// use rust_decimal::Decimal;
///
/// let rates = RateTable::default();
/// let mut pay = compute_pay(&WageInput::new(12000, Decimal::new(8, 0)), &rates).unwrap();
/// pay.net_pay += 1000;
///
/// let record = ImportedPayRecord { hourly_wage: 12000, include_weekly_holiday_pay: false, pay };
///
/// assert!(reconcile_import(&record, ImportMode::Strict, &rates).is_err());
///
/// let fixed = reconcile_import(&record, ImportMode::Recalculate, &rates).unwrap();
/// assert_eq!(fixed.pay.net_pay, 86977);
/// assert_eq!(fixed.corrected_fields, vec!["net_pay".to_string()]);
/// ```
pub fn reconcile_import(
    record: &ImportedPayRecord,
    mode: ImportMode,
    rates: &RateTable,
) -> EngineResult<ReconciledImport> {
    match mode {
        ImportMode::Strict => {
            let recomputed = compute_pay(&record.wage_input(), rates)?;
            let differing = record.pay.differing_fields(&recomputed);
            if !differing.is_empty() {
                return Err(EngineError::ImportMismatch {
                    fields: differing.into_iter().map(String::from).collect(),
                });
            }
            Ok(ReconciledImport {
                pay: recomputed,
                corrected_fields: Vec::new(),
                warnings: Vec::new(),
            })
        }
        ImportMode::Recalculate => {
            let recomputed = compute_pay(&record.wage_input(), rates)?;
            let corrected_fields: Vec<String> = record
                .pay
                .differing_fields(&recomputed)
                .into_iter()
                .map(String::from)
                .collect();
            for field in &corrected_fields {
                warn!(field = %field, "Imported value replaced by recomputed value");
            }
            Ok(ReconciledImport {
                pay: recomputed,
                corrected_fields,
                warnings: Vec::new(),
            })
        }
        ImportMode::TrustSource => {
            let warnings: Vec<String> = record
                .pay
                .invariant_violations()
                .into_iter()
                .map(|field| format!("{} does not match the sum of its parts", field))
                .collect();
            for warning in &warnings {
                warn!(warning = %warning, "Trusted import violates pay identity");
            }
            Ok(ReconciledImport {
                pay: record.pay,
                corrected_fields: Vec::new(),
                warnings,
            })
        }
    }
}
