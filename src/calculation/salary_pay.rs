//! Salary pay calculation.
//!
//! Converts an annual salary into the gross pay for a single pay period.

use rust_decimal::Decimal;

use super::rounding::round_currency;
use crate::models::PayFrequency;

/// Calculates per-period gross pay for a salaried worker.
///
/// The annual salary is divided by the number of periods in a year for the
/// given frequency (52, 26, 24 or 12) and rounded half-up to cents.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_salary_pay;
/// use payroll_engine::models::PayFrequency;
/// use rust_decimal::Decimal;
///
/// let pay = calculate_salary_pay(Decimal::from(60000), PayFrequency::BiWeekly);
/// assert_eq!(pay.to_string(), "2307.69");
/// ```
pub fn calculate_salary_pay(annual_salary: Decimal, pay_frequency: PayFrequency) -> Decimal {
    let periods = Decimal::from(pay_frequency.periods_per_year());
    round_currency(annual_salary / periods)
}
