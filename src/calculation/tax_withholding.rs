//! Progressive tax withholding.
//!
//! Applies a marginal bracket schedule to gross pay: each slice of income is
//! taxed at the rate of the bracket it falls in, and income beyond the last
//! finite bracket is taxed at the unbounded bracket's rate.

use rust_decimal::Decimal;

use super::rounding::round_currency;
use crate::models::{BracketTax, TaxBracket};

/// Splits gross pay across the brackets it reaches.
///
/// Brackets are walked in order while income remains. A bracket consumes
/// `min(remaining, max - min)` of the income, or all of it when unbounded.
/// Brackets the income never reaches are omitted. Amounts are unrounded.
///
/// The brackets are not validated here; a bracket with `max < min` is treated
/// as empty. Use [`TaxSchedule`](crate::models::TaxSchedule) to enforce the
/// schedule invariants up front.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_tax_breakdown;
/// use payroll_engine::models::default_tax_brackets;
/// use rust_decimal::Decimal;
///
/// let slices = calculate_tax_breakdown(Decimal::from(40000), &default_tax_brackets());
/// assert_eq!(slices.len(), 3);
/// assert_eq!(slices[2].taxable_amount, Decimal::from(10000));
/// ```
pub fn calculate_tax_breakdown(gross_pay: Decimal, brackets: &[TaxBracket]) -> Vec<BracketTax> {
    let mut remaining_income = gross_pay;
    let mut slices = Vec::new();

    for bracket in brackets {
        if remaining_income <= Decimal::ZERO {
            break;
        }

        let taxable_amount = match bracket.span() {
            Some(span) => remaining_income.min(span.max(Decimal::ZERO)),
            None => remaining_income,
        };

        slices.push(BracketTax {
            min: bracket.min,
            max: bracket.max,
            rate: bracket.rate,
            taxable_amount,
            tax_amount: taxable_amount * bracket.rate,
        });

        remaining_income -= taxable_amount;
    }

    slices
}

/// Calculates the tax to withhold from gross pay under a progressive schedule.
///
/// The result is the sum of the per-bracket taxes, rounded half-up to cents.
/// Zero (or negative) gross pay yields zero.
///
/// # Arguments
///
/// * `gross_pay` - Earnings subject to tax
/// * `brackets` - Brackets in ascending order of `min`
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_tax_withholding;
/// use payroll_engine::models::default_tax_brackets;
/// use rust_decimal::Decimal;
///
/// // 0 on the first 15,000, 1,200 on the next 15,000, 1,500 on the last 10,000
/// let tax = calculate_tax_withholding(Decimal::from(40000), &default_tax_brackets());
/// assert_eq!(tax.to_string(), "2700.00");
/// ```
pub fn calculate_tax_withholding(gross_pay: Decimal, brackets: &[TaxBracket]) -> Decimal {
    let total_tax: Decimal = calculate_tax_breakdown(gross_pay, brackets)
        .iter()
        .map(|slice| slice.tax_amount)
        .sum();
    round_currency(total_tax)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::default_tax_brackets;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn tax(gross: &str) -> Decimal {
        calculate_tax_withholding(dec(gross), &default_tax_brackets())
    }

    /// TX-001: income spanning three brackets
    #[test]
    fn test_income_spanning_three_brackets() {
        assert_eq!(tax("40000"), dec("2700"));
    }

    /// TX-002: zero income
    #[test]
    fn test_zero_income_is_zero_tax() {
        assert_eq!(tax("0").to_string(), "0.00");
        assert!(calculate_tax_breakdown(Decimal::ZERO, &default_tax_brackets()).is_empty());
    }

    /// TX-003: income inside the tax-free band
    #[test]
    fn test_income_within_first_bracket() {
        assert_eq!(tax("12000"), Decimal::ZERO);
    }

    /// TX-004: excess above finite brackets taxed at top rate
    #[test]
    fn test_income_above_finite_brackets() {
        // 0 + 1200 + 3000 + 0.25 × 50000
        assert_eq!(tax("100000"), dec("16700"));
    }

    #[test]
    fn test_income_exactly_on_bracket_boundary() {
        assert_eq!(tax("30000"), dec("1200"));
        let slices = calculate_tax_breakdown(dec("30000"), &default_tax_brackets());
        assert_eq!(slices.len(), 2);
    }

    #[test]
    fn test_fractional_income_rounds_to_cents() {
        // 0.08 × 0.0625 = 0.005 → 0.01
        assert_eq!(tax("15000.0625"), dec("0.01"));
    }

    #[test]
    fn test_negative_income_is_zero_tax() {
        assert_eq!(tax("-500"), Decimal::ZERO);
    }

    #[test]
    fn test_empty_bracket_list_taxes_nothing() {
        assert_eq!(calculate_tax_withholding(dec("1000"), &[]), Decimal::ZERO);
    }

    #[test]
    fn test_single_flat_bracket() {
        let flat = vec![TaxBracket::unbounded(Decimal::ZERO, dec("0.1"))];
        assert_eq!(calculate_tax_withholding(dec("1234.56"), &flat), dec("123.46"));
    }

    #[test]
    fn test_inverted_bracket_is_treated_as_empty() {
        let brackets = vec![
            TaxBracket::bounded(dec("1000"), dec("500"), dec("0.5")),
            TaxBracket::unbounded(dec("500"), dec("0.1")),
        ];
        let slices = calculate_tax_breakdown(dec("1000"), &brackets);
        assert_eq!(slices[0].taxable_amount, Decimal::ZERO);
        assert_eq!(slices[1].taxable_amount, dec("1000"));
        assert_eq!(calculate_tax_withholding(dec("1000"), &brackets), dec("100"));
    }

    #[test]
    fn test_breakdown_sums_to_gross_when_top_bracket_reached() {
        let slices = calculate_tax_breakdown(dec("75000"), &default_tax_brackets());
        let taxed: Decimal = slices.iter().map(|s| s.taxable_amount).sum();
        assert_eq!(taxed, dec("75000"));
        assert_eq!(slices.last().unwrap().max, None);
    }
}
