//! Payroll input record.
//!
//! This module defines the [`PayrollData`] record that callers build per
//! calculation request and the [`CompensationType`] that selects between the
//! salary and hourly calculators.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How a worker is compensated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompensationType {
    /// Annual salary, divided across pay periods.
    Salary,
    /// Hourly rate multiplied by hours worked.
    Hourly,
}

impl CompensationType {
    /// Returns the serialized name of the compensation type.
    pub const fn as_str(self) -> &'static str {
        match self {
            CompensationType::Salary => "salary",
            CompensationType::Hourly => "hourly",
        }
    }
}

/// Compensation data for one worker and one pay period.
///
/// For salaried workers `compensation_amount` is the annual salary; for
/// hourly workers it is the hourly rate.
///
/// `worker_id` and `deductions` default to empty when absent so that a
/// missing worker id is reported by
/// [`validate_payroll_data`](crate::calculation::validate_payroll_data)
/// rather than rejected during deserialization.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{CompensationType, PayrollData};
/// use rust_decimal::Decimal;
///
/// let data = PayrollData::hourly("w-001", Decimal::new(20, 0), Decimal::new(40, 0));
/// assert_eq!(data.compensation_type, CompensationType::Hourly);
/// assert!(data.is_hourly());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollData {
    /// Opaque identifier of the worker.
    #[serde(default)]
    pub worker_id: String,
    /// Whether the worker is salaried or hourly.
    pub compensation_type: CompensationType,
    /// Annual salary or hourly rate, depending on `compensation_type`.
    pub compensation_amount: Decimal,
    /// Regular hours worked in the period (hourly workers only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regular_hours: Option<Decimal>,
    /// Overtime hours worked in the period.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overtime_hours: Option<Decimal>,
    /// Post-tax deductions, in the order they were entered.
    #[serde(default)]
    pub deductions: Vec<Decimal>,
}

impl PayrollData {
    /// Creates a salaried record with no deductions.
    pub fn salary(worker_id: impl Into<String>, annual_salary: Decimal) -> Self {
        Self {
            worker_id: worker_id.into(),
            compensation_type: CompensationType::Salary,
            compensation_amount: annual_salary,
            regular_hours: None,
            overtime_hours: None,
            deductions: Vec::new(),
        }
    }

    /// Creates an hourly record with no overtime and no deductions.
    pub fn hourly(worker_id: impl Into<String>, rate: Decimal, regular_hours: Decimal) -> Self {
        Self {
            worker_id: worker_id.into(),
            compensation_type: CompensationType::Hourly,
            compensation_amount: rate,
            regular_hours: Some(regular_hours),
            overtime_hours: None,
            deductions: Vec::new(),
        }
    }

    /// Sets the overtime hours.
    pub fn with_overtime(mut self, overtime_hours: Decimal) -> Self {
        self.overtime_hours = Some(overtime_hours);
        self
    }

    /// Replaces the deduction list.
    pub fn with_deductions(mut self, deductions: Vec<Decimal>) -> Self {
        self.deductions = deductions;
        self
    }

    /// Returns true for hourly workers.
    pub fn is_hourly(&self) -> bool {
        self.compensation_type == CompensationType::Hourly
    }

    /// Returns the sum of all deductions, unrounded.
    pub fn total_deductions(&self) -> Decimal {
        self.deductions.iter().copied().sum()
    }
}
