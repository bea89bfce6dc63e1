//! Calculation result models for the Payroll Calculation Engine.
//!
//! This module contains the [`PayrollResult`] type and its associated structures
//! that capture all outputs from a payroll run, including the per-bracket tax
//! breakdown, social contributions, and an audit trace.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{CompensationType, PayFrequency};

/// Pension and insurance contributions withheld from gross pay.
///
/// Every amount is rounded to cents, and `total_amount` is the rounded sum of
/// the two rounded components.
///
/// # Example
///
/// ```
/// use payroll_engine::models::SocialContributions;
/// use rust_decimal::Decimal;
///
/// let contributions = SocialContributions {
///     pension_amount: Decimal::new(24000, 2),
///     insurance_amount: Decimal::new(4500, 2),
///     total_amount: Decimal::new(28500, 2),
/// };
/// assert_eq!(contributions.total_amount.to_string(), "285.00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialContributions {
    /// Pension contribution.
    pub pension_amount: Decimal,
    /// Insurance contribution.
    pub insurance_amount: Decimal,
    /// Sum of pension and insurance contributions.
    pub total_amount: Decimal,
}

/// The slice of income taxed within one bracket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BracketTax {
    /// Lower bound of the bracket.
    pub min: Decimal,
    /// Upper bound of the bracket, `None` when unbounded.
    pub max: Option<Decimal>,
    /// Marginal rate of the bracket.
    pub rate: Decimal,
    /// Portion of income that fell inside this bracket.
    pub taxable_amount: Decimal,
    /// Unrounded tax owed on `taxable_amount`.
    pub tax_amount: Decimal,
}

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
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

/// A warning generated during calculation.
///
/// Warnings indicate conditions that don't prevent calculation
/// but may require attention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a payroll run.
///
/// # Example
///
/// ```
/// use payroll_engine::models::AuditTrace;
///
/// let trace = AuditTrace {
///     steps: vec![],
///     warnings: vec![],
///     duration_us: 1234,
/// };
/// assert!(trace.step("net_pay").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

impl AuditTrace {
    /// Returns the first step recorded for the given rule.
    pub fn step(&self, rule_id: &str) -> Option<&AuditStep> {
        self.steps.iter().find(|step| step.rule_id == rule_id)
    }
}

/// The complete result of a payroll run for one worker and one pay period.
///
/// All monetary fields are rounded to cents. `total_deductions` is the sum
/// of the caller-supplied deductions only; social contributions are reported
/// separately and are also withheld from `net_pay`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollResult {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The worker the calculation is for.
    pub worker_id: String,
    /// Salary or hourly.
    pub compensation_type: CompensationType,
    /// The pay frequency the period was computed for.
    pub pay_frequency: PayFrequency,
    /// Earnings before any withholding.
    pub gross_pay: Decimal,
    /// Progressive income tax withheld.
    pub tax_withholding: Decimal,
    /// Per-bracket slices the withholding was summed from.
    pub tax_breakdown: Vec<BracketTax>,
    /// Pension and insurance contributions.
    pub social_contributions: SocialContributions,
    /// Sum of caller-supplied deductions.
    pub total_deductions: Decimal,
    /// Take-home pay, never negative.
    pub net_pay: Decimal,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}
