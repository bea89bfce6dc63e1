//! Calculation logic for the Payroll Calculation Engine.
//!
//! This module contains the pure payroll calculators: salary and hourly
//! gross pay, progressive tax withholding, social contributions and net pay,
//! together with input validation, the shared currency rounding rule, and the
//! orchestrated payroll run that chains them.

mod hourly_pay;
mod net_pay;
mod payroll_run;
mod rounding;
mod salary_pay;
mod social_contributions;
mod tax_withholding;
mod validation;

pub use hourly_pay::{
    DEFAULT_OVERTIME_MULTIPLIER, calculate_hourly_pay, calculate_hourly_pay_default,
    calculate_regular_hourly_pay,
};
pub use net_pay::calculate_net_pay;
pub use payroll_run::{ENGINE_VERSION, NET_PAY_CLAMPED, calculate_payroll};
pub use rounding::{CURRENCY_DECIMAL_PLACES, round_currency};
pub use salary_pay::calculate_salary_pay;
pub use social_contributions::{
    ContributionRates, DEFAULT_INSURANCE_RATE, DEFAULT_PENSION_RATE,
    calculate_default_social_contributions, calculate_social_contributions,
};
pub use tax_withholding::{calculate_tax_breakdown, calculate_tax_withholding};
pub use validation::{ValidationResult, validate_payroll_data};
