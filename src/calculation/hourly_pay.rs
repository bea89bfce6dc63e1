//! Hourly pay calculation.
//!
//! Computes gross pay from an hourly rate, regular hours and overtime hours.
//! Only the final sum is rounded.

use rust_decimal::Decimal;

use super::rounding::round_currency;

/// Default overtime multiplier (time-and-a-half).
pub const DEFAULT_OVERTIME_MULTIPLIER: Decimal = Decimal::from_parts(15, 0, 0, false, 1);

/// Calculates gross pay for an hourly worker.
///
/// `regular_pay = rate × regular_hours` and
/// `overtime_pay = rate × overtime_multiplier × overtime_hours`; the sum is
/// rounded half-up to cents.
///
/// # Arguments
///
/// * `rate` - The hourly rate
/// * `regular_hours` - Hours paid at the plain rate
/// * `overtime_hours` - Hours paid at the overtime rate
/// * `overtime_multiplier` - Overtime loading, usually [`DEFAULT_OVERTIME_MULTIPLIER`]
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::{calculate_hourly_pay, DEFAULT_OVERTIME_MULTIPLIER};
/// use rust_decimal::Decimal;
///
/// let pay = calculate_hourly_pay(
///     Decimal::from(20),
///     Decimal::from(40),
///     Decimal::from(10),
///     DEFAULT_OVERTIME_MULTIPLIER,
/// );
/// assert_eq!(pay.to_string(), "1100.00");
/// ```
pub fn calculate_hourly_pay(
    rate: Decimal,
    regular_hours: Decimal,
    overtime_hours: Decimal,
    overtime_multiplier: Decimal,
) -> Decimal {
    let regular_pay = rate * regular_hours;
    let overtime_pay = rate * overtime_multiplier * overtime_hours;
    round_currency(regular_pay + overtime_pay)
}

/// Calculates hourly pay with the default time-and-a-half multiplier.
pub fn calculate_hourly_pay_default(
    rate: Decimal,
    regular_hours: Decimal,
    overtime_hours: Decimal,
) -> Decimal {
    calculate_hourly_pay(rate, regular_hours, overtime_hours, DEFAULT_OVERTIME_MULTIPLIER)
}

/// Calculates hourly pay for regular hours only.
pub fn calculate_regular_hourly_pay(rate: Decimal, regular_hours: Decimal) -> Decimal {
    calculate_hourly_pay_default(rate, regular_hours, Decimal::ZERO)
}
