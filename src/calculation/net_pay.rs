//! Net pay calculation.

use rust_decimal::Decimal;

use super::rounding::round_currency;

/// Calculates take-home pay after tax and deductions.
///
/// `net = gross_pay - tax_withholding - sum(deductions)`, clamped to zero and
/// then rounded half-up to cents. Net pay is never reported as negative.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_net_pay;
/// use rust_decimal::Decimal;
///
/// let net = calculate_net_pay(
///     Decimal::from(3000),
///     Decimal::from(450),
///     &[Decimal::from(100), Decimal::from(50)],
/// );
/// assert_eq!(net.to_string(), "2400.00");
///
/// let floored = calculate_net_pay(Decimal::from(100), Decimal::from(150), &[]);
/// assert_eq!(floored.to_string(), "0.00");
/// ```
pub fn calculate_net_pay(
    gross_pay: Decimal,
    tax_withholding: Decimal,
    deductions: &[Decimal],
) -> Decimal {
    let total_deductions: Decimal = deductions.iter().copied().sum();
    let net_pay = gross_pay - tax_withholding - total_deductions;
    round_currency(net_pay.max(Decimal::ZERO))
}
