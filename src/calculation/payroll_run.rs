//! Orchestrated payroll run.
//!
//! Chains the individual calculators the way a payroll run uses them:
//! validate, compute gross pay, withhold tax and social contributions, then
//! derive net pay. Every step is recorded in the audit trace.

use std::time::Instant;

use chrono::Utc;
use rust_decimal::Decimal;
use serde_json::json;
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::hourly_pay::calculate_hourly_pay;
use super::net_pay::calculate_net_pay;
use super::rounding::round_currency;
use super::salary_pay::calculate_salary_pay;
use super::social_contributions::calculate_social_contributions;
use super::tax_withholding::{calculate_tax_breakdown, calculate_tax_withholding};
use super::validation::validate_payroll_data;
use crate::config::PayrollConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    AuditStep, AuditTrace, AuditWarning, CompensationType, PayFrequency, PayrollData,
    PayrollResult,
};

/// Version string stamped on every [`PayrollResult`].
pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Warning code recorded when withholding exceeds gross pay.
pub const NET_PAY_CLAMPED: &str = "NET_PAY_CLAMPED";

/// Runs a full payroll calculation for one worker and one pay period.
///
/// The record is validated first; an invalid record is rejected with
/// [`EngineError::InvalidPayrollData`] carrying every validation error.
/// Social contributions are withheld alongside the caller's deductions, so
/// `net_pay = max(0, gross - tax - contributions - deductions)`.
///
/// # Arguments
///
/// * `data` - The worker's compensation for the period
/// * `pay_frequency` - Used to divide an annual salary; recorded for hourly workers
/// * `config` - Tax schedule, contribution rates and overtime multiplier
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_payroll;
/// use payroll_engine::config::PayrollConfig;
/// use payroll_engine::models::{PayFrequency, PayrollData};
/// use rust_decimal::Decimal;
///
/// let data = PayrollData::salary("w-001", Decimal::from(480000));
/// let result = calculate_payroll(&data, PayFrequency::Monthly, &PayrollConfig::default())?;
///
/// assert_eq!(result.gross_pay.to_string(), "40000.00");
/// assert_eq!(result.tax_withholding.to_string(), "2700.00");
/// assert_eq!(result.social_contributions.total_amount.to_string(), "3800.00");
/// assert_eq!(result.net_pay.to_string(), "33500.00");
/// # Ok::<(), payroll_engine::error::EngineError>(())
/// ```
pub fn calculate_payroll(
    data: &PayrollData,
    pay_frequency: PayFrequency,
    config: &PayrollConfig,
) -> EngineResult<PayrollResult> {
    let start_time = Instant::now();
    let mut steps: Vec<AuditStep> = Vec::new();
    let mut warnings: Vec<AuditWarning> = Vec::new();

    debug!(
        worker_id = %data.worker_id,
        compensation_type = data.compensation_type.as_str(),
        pay_frequency = %pay_frequency,
        "Starting payroll calculation"
    );

    // Step 1: validation
    let validation = validate_payroll_data(data);
    if !validation.is_valid {
        warn!(
            worker_id = %data.worker_id,
            errors = validation.errors.len(),
            "Payroll data failed validation"
        );
        return Err(EngineError::InvalidPayrollData {
            worker_id: data.worker_id.clone(),
            errors: validation.errors,
        });
    }
    steps.push(AuditStep {
        step_number: next_step(&steps),
        rule_id: "validation".to_string(),
        rule_name: "Payroll Data Validation".to_string(),
        input: json!({
            "worker_id": data.worker_id,
            "compensation_type": data.compensation_type.as_str(),
            "deduction_count": data.deductions.len()
        }),
        output: json!({ "is_valid": true }),
        reasoning: "All validation rules passed".to_string(),
    });

    // Step 2: gross pay
    let gross_pay = match data.compensation_type {
        CompensationType::Salary => {
            let gross = calculate_salary_pay(data.compensation_amount, pay_frequency);
            steps.push(AuditStep {
                step_number: next_step(&steps),
                rule_id: "salary_pay".to_string(),
                rule_name: "Salary Pay".to_string(),
                input: json!({
                    "annual_salary": data.compensation_amount.to_string(),
                    "pay_frequency": pay_frequency.as_str(),
                    "periods_per_year": pay_frequency.periods_per_year()
                }),
                output: json!({ "gross_pay": gross.to_string() }),
                reasoning: format!(
                    "${} / {} periods = ${}",
                    data.compensation_amount,
                    pay_frequency.periods_per_year(),
                    gross
                ),
            });
            gross
        }
        CompensationType::Hourly => {
            // validation guarantees regular hours are present for hourly workers
            let regular_hours = data.regular_hours.unwrap_or(Decimal::ZERO);
            let overtime_hours = data.overtime_hours.unwrap_or(Decimal::ZERO);
            let multiplier = config.overtime_multiplier();
            let gross = calculate_hourly_pay(
                data.compensation_amount,
                regular_hours,
                overtime_hours,
                multiplier,
            );
            steps.push(AuditStep {
                step_number: next_step(&steps),
                rule_id: "hourly_pay".to_string(),
                rule_name: "Hourly Pay".to_string(),
                input: json!({
                    "rate": data.compensation_amount.to_string(),
                    "regular_hours": regular_hours.to_string(),
                    "overtime_hours": overtime_hours.to_string(),
                    "overtime_multiplier": multiplier.to_string()
                }),
                output: json!({ "gross_pay": gross.to_string() }),
                reasoning: format!(
                    "{}h x ${} + {}h x ${} x {} = ${}",
                    regular_hours,
                    data.compensation_amount,
                    overtime_hours,
                    data.compensation_amount,
                    multiplier,
                    gross
                ),
            });
            gross
        }
    };

    // Step 3: income tax
    let brackets = config.tax_schedule().brackets();
    let tax_breakdown = calculate_tax_breakdown(gross_pay, brackets);
    let tax_withholding = calculate_tax_withholding(gross_pay, brackets);
    steps.push(AuditStep {
        step_number: next_step(&steps),
        rule_id: "tax_withholding".to_string(),
        rule_name: "Progressive Tax Withholding".to_string(),
        input: json!({
            "gross_pay": gross_pay.to_string(),
            "bracket_count": brackets.len()
        }),
        output: json!({
            "tax_withholding": tax_withholding.to_string(),
            "brackets_reached": tax_breakdown.len(),
            "marginal_rate": config.tax_schedule().marginal_rate(gross_pay).to_string()
        }),
        reasoning: tax_breakdown
            .iter()
            .map(|slice| {
                format!(
                    "${} x {} = ${}",
                    slice.taxable_amount.normalize(),
                    slice.rate.normalize(),
                    slice.tax_amount.normalize()
                )
            })
            .collect::<Vec<_>>()
            .join("; "),
    });

    // Step 4: social contributions
    let rates = config.contributions();
    let social_contributions =
        calculate_social_contributions(gross_pay, rates.pension_rate, rates.insurance_rate);
    steps.push(AuditStep {
        step_number: next_step(&steps),
        rule_id: "social_contributions".to_string(),
        rule_name: "Social Contributions".to_string(),
        input: json!({
            "gross_pay": gross_pay.to_string(),
            "pension_rate": rates.pension_rate.to_string(),
            "insurance_rate": rates.insurance_rate.to_string()
        }),
        output: json!({
            "pension_amount": social_contributions.pension_amount.to_string(),
            "insurance_amount": social_contributions.insurance_amount.to_string(),
            "total_amount": social_contributions.total_amount.to_string()
        }),
        reasoning: format!(
            "pension ${} + insurance ${} = ${}",
            social_contributions.pension_amount,
            social_contributions.insurance_amount,
            social_contributions.total_amount
        ),
    });

    // Step 5: net pay
    let total_deductions = round_currency(data.total_deductions());
    let mut withheld: Vec<Decimal> = data.deductions.clone();
    withheld.push(social_contributions.total_amount);
    let net_pay = calculate_net_pay(gross_pay, tax_withholding, &withheld);

    let unclamped = gross_pay - tax_withholding - withheld.iter().copied().sum::<Decimal>();
    if unclamped < Decimal::ZERO {
        warn!(
            worker_id = %data.worker_id,
            shortfall = %round_currency(-unclamped),
            "Withholding exceeds gross pay, net pay clamped to zero"
        );
        warnings.push(AuditWarning {
            code: NET_PAY_CLAMPED.to_string(),
            message: format!(
                "Tax, contributions and deductions exceed gross pay by ${}; net pay reported as zero",
                round_currency(-unclamped)
            ),
            severity: "medium".to_string(),
        });
    }

    steps.push(AuditStep {
        step_number: next_step(&steps),
        rule_id: "net_pay".to_string(),
        rule_name: "Net Pay".to_string(),
        input: json!({
            "gross_pay": gross_pay.to_string(),
            "tax_withholding": tax_withholding.to_string(),
            "social_contributions": social_contributions.total_amount.to_string(),
            "total_deductions": total_deductions.to_string()
        }),
        output: json!({
            "net_pay": net_pay.to_string(),
            "clamped": unclamped < Decimal::ZERO
        }),
        reasoning: format!(
            "${} - ${} - ${} - ${} = ${}",
            gross_pay,
            tax_withholding,
            social_contributions.total_amount,
            total_deductions,
            net_pay
        ),
    });

    let duration_us = start_time.elapsed().as_micros() as u64;

    info!(
        worker_id = %data.worker_id,
        gross_pay = %gross_pay,
        tax_withholding = %tax_withholding,
        net_pay = %net_pay,
        duration_us,
        "Payroll calculation completed"
    );

    Ok(PayrollResult {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: ENGINE_VERSION.to_string(),
        worker_id: data.worker_id.clone(),
        compensation_type: data.compensation_type,
        pay_frequency,
        gross_pay,
        tax_withholding,
        tax_breakdown,
        social_contributions,
        total_deductions,
        net_pay,
        audit_trace: AuditTrace {
            steps,
            warnings,
            duration_us,
        },
    })
}

fn next_step(steps: &[AuditStep]) -> u32 {
    steps.len() as u32 + 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::ContributionRates;
    use crate::models::{TaxBracket, TaxSchedule};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    /// PR-001: salaried worker, monthly
    #[test]
    fn test_salary_run_end_to_end() {
        let data = PayrollData::salary("w-001", dec("480000")).with_deductions(vec![dec("500")]);
        let result = calculate_payroll(&data, PayFrequency::Monthly, &PayrollConfig::default())
            .unwrap();

        assert_eq!(result.gross_pay, dec("40000"));
        assert_eq!(result.tax_withholding, dec("2700"));
        assert_eq!(result.social_contributions.pension_amount, dec("3200"));
        assert_eq!(result.social_contributions.insurance_amount, dec("600"));
        assert_eq!(result.total_deductions, dec("500"));
        // 40000 - 2700 - 3800 - 500
        assert_eq!(result.net_pay, dec("33000"));
        assert_eq!(result.pay_frequency, PayFrequency::Monthly);
        assert!(result.audit_trace.warnings.is_empty());
    }

    /// PR-002: hourly worker uses configured overtime multiplier
    #[test]
    fn test_hourly_run_uses_configured_multiplier() {
        let data = PayrollData::hourly("w-002", dec("20"), dec("40")).with_overtime(dec("10"));
        let config = PayrollConfig::default().with_overtime_multiplier(dec("2"));
        let result = calculate_payroll(&data, PayFrequency::Weekly, &config).unwrap();

        assert_eq!(result.gross_pay, dec("1200"));
        let step = result.audit_trace.step("hourly_pay").unwrap();
        assert_eq!(step.input["overtime_multiplier"], "2");
    }

    /// PR-003: invalid data rejected with every error
    #[test]
    fn test_invalid_data_rejected() {
        let mut data = PayrollData::hourly("", dec("0"), dec("40"));
        data.regular_hours = None;

        match calculate_payroll(&data, PayFrequency::Weekly, &PayrollConfig::default()) {
            Err(EngineError::InvalidPayrollData { worker_id, errors }) => {
                assert_eq!(worker_id, "");
                assert_eq!(errors.len(), 3);
            }
            other => panic!("Expected InvalidPayrollData, got {:?}", other),
        }
    }

    /// PR-004: withholding larger than gross is clamped with a warning
    #[test]
    fn test_clamped_net_pay_records_warning() {
        let data = PayrollData::hourly("w-003", dec("10"), dec("10"))
            .with_deductions(vec![dec("250")]);
        let result =
            calculate_payroll(&data, PayFrequency::Weekly, &PayrollConfig::default()).unwrap();

        assert_eq!(result.gross_pay, dec("100"));
        assert_eq!(result.net_pay, Decimal::ZERO);
        assert_eq!(result.audit_trace.warnings.len(), 1);
        assert_eq!(result.audit_trace.warnings[0].code, NET_PAY_CLAMPED);
        assert_eq!(
            result.audit_trace.step("net_pay").unwrap().output["clamped"],
            true
        );
    }

    #[test]
    fn test_audit_steps_numbered_in_order() {
        let data = PayrollData::salary("w-004", dec("60000"));
        let result =
            calculate_payroll(&data, PayFrequency::BiWeekly, &PayrollConfig::default()).unwrap();

        let rule_ids: Vec<&str> = result
            .audit_trace
            .steps
            .iter()
            .map(|s| s.rule_id.as_str())
            .collect();
        assert_eq!(
            rule_ids,
            vec![
                "validation",
                "salary_pay",
                "tax_withholding",
                "social_contributions",
                "net_pay"
            ]
        );
        for (i, step) in result.audit_trace.steps.iter().enumerate() {
            assert_eq!(step.step_number, i as u32 + 1);
        }
    }

    #[test]
    fn test_custom_schedule_and_rates() {
        let schedule = TaxSchedule::new(vec![
            TaxBracket::bounded(Decimal::ZERO, dec("1000"), Decimal::ZERO),
            TaxBracket::unbounded(dec("1000"), dec("0.2")),
        ])
        .unwrap();
        let config = PayrollConfig::default()
            .with_tax_schedule(schedule)
            .with_contributions(ContributionRates {
                pension_rate: dec("0.05"),
                insurance_rate: Decimal::ZERO,
            });

        let data = PayrollData::hourly("w-005", dec("25"), dec("80"));
        let result = calculate_payroll(&data, PayFrequency::BiWeekly, &config).unwrap();

        assert_eq!(result.gross_pay, dec("2000"));
        assert_eq!(result.tax_withholding, dec("200"));
        assert_eq!(result.social_contributions.total_amount, dec("100"));
        assert_eq!(result.net_pay, dec("1700"));
        assert_eq!(result.tax_breakdown.len(), 2);
    }

    #[test]
    fn test_result_carries_engine_version() {
        let data = PayrollData::salary("w-006", dec("52000"));
        let result =
            calculate_payroll(&data, PayFrequency::Weekly, &PayrollConfig::default()).unwrap();
        assert_eq!(result.engine_version, ENGINE_VERSION);
        assert_eq!(result.worker_id, "w-006");
    }
}
