//! Social contribution calculation.
//!
//! Pension and insurance contributions are flat percentages of gross pay.
//! Each component is rounded to cents before the total is formed.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::rounding::round_currency;
use crate::models::SocialContributions;

/// Default pension contribution rate (8%).
pub const DEFAULT_PENSION_RATE: Decimal = Decimal::from_parts(8, 0, 0, false, 2);

/// Default insurance contribution rate (1.5%).
pub const DEFAULT_INSURANCE_RATE: Decimal = Decimal::from_parts(15, 0, 0, false, 3);

/// Contribution rates applied to gross pay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionRates {
    /// Pension rate as a fraction of gross pay.
    pub pension_rate: Decimal,
    /// Insurance rate as a fraction of gross pay.
    pub insurance_rate: Decimal,
}

impl Default for ContributionRates {
    fn default() -> Self {
        Self {
            pension_rate: DEFAULT_PENSION_RATE,
            insurance_rate: DEFAULT_INSURANCE_RATE,
        }
    }
}

/// Calculates pension and insurance contributions on gross pay.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_social_contributions;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let contributions = calculate_social_contributions(
///     Decimal::from(3000),
///     Decimal::from_str("0.08").unwrap(),
///     Decimal::from_str("0.015").unwrap(),
/// );
/// assert_eq!(contributions.pension_amount.to_string(), "240.00");
/// assert_eq!(contributions.insurance_amount.to_string(), "45.00");
/// assert_eq!(contributions.total_amount.to_string(), "285.00");
/// ```
pub fn calculate_social_contributions(
    gross_pay: Decimal,
    pension_rate: Decimal,
    insurance_rate: Decimal,
) -> SocialContributions {
    let pension_amount = round_currency(gross_pay * pension_rate);
    let insurance_amount = round_currency(gross_pay * insurance_rate);

    SocialContributions {
        pension_amount,
        insurance_amount,
        total_amount: round_currency(pension_amount + insurance_amount),
    }
}

/// Calculates contributions at the default 8% pension and 1.5% insurance rates.
pub fn calculate_default_social_contributions(gross_pay: Decimal) -> SocialContributions {
    let rates = ContributionRates::default();
    calculate_social_contributions(gross_pay, rates.pension_rate, rates.insurance_rate)
}
