//! Payroll input validation.
//!
//! Validation is separate from calculation: the calculators accept whatever
//! they are given, so callers that want these guarantees must validate first
//! (the orchestrated [`calculate_payroll`](super::calculate_payroll) does).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::PayrollData;

/// The outcome of validating a payroll record.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ValidationResult {
    /// True when no errors were found.
    pub is_valid: bool,
    /// Human-readable errors, in the order the checks ran.
    pub errors: Vec<String>,
}

impl ValidationResult {
    fn from_errors(errors: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }
}

/// Validates a payroll record before calculation.
///
/// Every rule is checked and every violation reported; nothing
/// short-circuits. The rules are:
///
/// - `worker_id` must be present and not blank
/// - `compensation_amount` must be greater than zero
/// - hourly workers must have non-negative `regular_hours`
/// - `overtime_hours`, when given to an hourly worker, must be non-negative
/// - every deduction must be non-negative
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::validate_payroll_data;
/// use payroll_engine::models::PayrollData;
/// use rust_decimal::Decimal;
///
/// let data = PayrollData::salary("", Decimal::ZERO);
/// let result = validate_payroll_data(&data);
/// assert!(!result.is_valid);
/// assert_eq!(result.errors.len(), 2);
/// ```
pub fn validate_payroll_data(data: &PayrollData) -> ValidationResult {
    let mut errors = Vec::new();

    if data.worker_id.trim().is_empty() {
        errors.push("Worker ID is required".to_string());
    }

    if data.compensation_amount <= Decimal::ZERO {
        errors.push("Compensation amount must be greater than zero".to_string());
    }

    if data.is_hourly() {
        match data.regular_hours {
            None => errors.push("Regular hours are required for hourly workers".to_string()),
            Some(hours) if hours < Decimal::ZERO => {
                errors.push("Regular hours cannot be negative".to_string())
            }
            Some(_) => {}
        }

        if data.overtime_hours.is_some_and(|hours| hours < Decimal::ZERO) {
            errors.push("Overtime hours cannot be negative".to_string());
        }
    }

    for (index, deduction) in data.deductions.iter().enumerate() {
        if *deduction < Decimal::ZERO {
            errors.push(format!(
                "Deduction {} cannot be negative (got {})",
                index + 1,
                deduction
            ));
        }
    }

    ValidationResult::from_errors(errors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CompensationType;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn valid_hourly() -> PayrollData {
        PayrollData::hourly("w-001", dec("20"), dec("40"))
            .with_overtime(dec("5"))
            .with_deductions(vec![dec("25"), Decimal::ZERO])
    }

    /// VD-001: well-formed records pass
    #[test]
    fn test_valid_records_pass() {
        let result = validate_payroll_data(&valid_hourly());
        assert_eq!(result, ValidationResult { is_valid: true, errors: vec![] });

        let salary = PayrollData::salary("w-002", dec("60000"));
        assert!(validate_payroll_data(&salary).is_valid);
    }

    /// VD-002: missing worker id
    #[test]
    fn test_missing_worker_id() {
        let mut data = valid_hourly();
        data.worker_id = String::new();
        let result = validate_payroll_data(&data);
        assert!(!result.is_valid);
        assert_eq!(result.errors, vec!["Worker ID is required"]);
    }

    #[test]
    fn test_blank_worker_id_counts_as_missing() {
        let mut data = valid_hourly();
        data.worker_id = "   ".to_string();
        assert_eq!(validate_payroll_data(&data).errors, vec!["Worker ID is required"]);
    }

    /// VD-003: non-positive compensation
    #[test]
    fn test_non_positive_compensation() {
        for amount in ["0", "-1"] {
            let data = PayrollData::salary("w-001", dec(amount));
            let result = validate_payroll_data(&data);
            assert!(!result.is_valid);
            assert_eq!(
                result.errors,
                vec!["Compensation amount must be greater than zero"]
            );
        }
    }

    /// VD-004: hourly worker without regular hours
    #[test]
    fn test_hourly_requires_regular_hours() {
        let mut data = valid_hourly();
        data.regular_hours = None;
        let result = validate_payroll_data(&data);
        assert_eq!(
            result.errors,
            vec!["Regular hours are required for hourly workers"]
        );
    }

    #[test]
    fn test_negative_hours_rejected() {
        let mut data = valid_hourly();
        data.regular_hours = Some(dec("-1"));
        data.overtime_hours = Some(dec("-0.5"));
        let result = validate_payroll_data(&data);
        assert_eq!(
            result.errors,
            vec![
                "Regular hours cannot be negative",
                "Overtime hours cannot be negative"
            ]
        );
    }

    #[test]
    fn test_zero_hours_are_valid() {
        let data = PayrollData::hourly("w-001", dec("20"), Decimal::ZERO);
        assert!(validate_payroll_data(&data).is_valid);
    }

    #[test]
    fn test_salary_hours_are_not_checked() {
        let mut data = PayrollData::salary("w-001", dec("50000"));
        data.regular_hours = Some(dec("-5"));
        data.overtime_hours = Some(dec("-5"));
        assert!(validate_payroll_data(&data).is_valid);
    }

    /// VD-005: each negative deduction reported with its position
    #[test]
    fn test_negative_deductions_reported_individually() {
        let data = valid_hourly().with_deductions(vec![dec("10"), dec("-5"), dec("-0.01")]);
        let result = validate_payroll_data(&data);
        assert_eq!(
            result.errors,
            vec![
                "Deduction 2 cannot be negative (got -5)",
                "Deduction 3 cannot be negative (got -0.01)"
            ]
        );
    }

    /// VD-006: all violations collected in one pass
    #[test]
    fn test_collects_every_violation() {
        let data = PayrollData {
            worker_id: String::new(),
            compensation_type: CompensationType::Hourly,
            compensation_amount: dec("-20"),
            regular_hours: None,
            overtime_hours: Some(dec("-1")),
            deductions: vec![dec("-3")],
        };
        let result = validate_payroll_data(&data);
        assert!(!result.is_valid);
        assert_eq!(result.errors.len(), 5);
        assert_eq!(result.errors[0], "Worker ID is required");
        assert_eq!(result.errors[4], "Deduction 1 cannot be negative (got -3)");
    }

    #[test]
    fn test_does_not_mutate_input() {
        let data = valid_hourly();
        let before = data.clone();
        let _ = validate_payroll_data(&data);
        assert_eq!(data, before);
    }
}
