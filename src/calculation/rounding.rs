//! Currency rounding.
//!
//! Every calculator rounds its result to the currency's minor unit with the
//! same rule: half-up, i.e. midpoints round away from zero (2.345 becomes
//! 2.35 and -2.345 becomes -2.35). Intermediate products are never rounded.

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of decimal places in a currency amount.
pub const CURRENCY_DECIMAL_PLACES: u32 = 2;

/// Rounds an amount to cents using half-up rounding.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::round_currency;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_currency(Decimal::from_str("2.345").unwrap()).to_string(), "2.35");
/// assert_eq!(round_currency(Decimal::from_str("2307.6923").unwrap()).to_string(), "2307.69");
/// assert_eq!(round_currency(Decimal::from(1100)).to_string(), "1100.00");
/// ```
pub fn round_currency(amount: Decimal) -> Decimal {
    let mut rounded = amount.round_dp_with_strategy(
        CURRENCY_DECIMAL_PLACES,
        RoundingStrategy::MidpointAwayFromZero,
    );
    // round_dp never adds scale; pad so every result carries exactly two places
    rounded.rescale(CURRENCY_DECIMAL_PLACES);
    rounded
}
