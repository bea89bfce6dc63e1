//! Tax bracket and tax schedule models.
//!
//! A [`TaxSchedule`] is an ordered, contiguous run of [`TaxBracket`]s ending
//! in a single unbounded bracket. Schedules are built once, validated, and
//! then only ever read.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// One tier of a progressive tax schedule.
///
/// # Example
///
/// ```
/// use payroll_engine::models::TaxBracket;
/// use rust_decimal::Decimal;
///
/// let bracket = TaxBracket::bounded(Decimal::ZERO, Decimal::new(15000, 0), Decimal::ZERO);
/// assert_eq!(bracket.span(), Some(Decimal::new(15000, 0)));
///
/// let top = TaxBracket::unbounded(Decimal::new(50000, 0), Decimal::new(25, 2));
/// assert!(top.is_unbounded());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    /// Inclusive lower bound of the bracket.
    pub min: Decimal,
    /// Upper bound of the bracket, or `None` when the bracket has no limit.
    #[serde(default)]
    pub max: Option<Decimal>,
    /// Marginal tax rate as a fraction (0.08 is 8%).
    pub rate: Decimal,
}

impl TaxBracket {
    /// Creates a bracket with a finite upper bound.
    pub fn bounded(min: Decimal, max: Decimal, rate: Decimal) -> Self {
        Self {
            min,
            max: Some(max),
            rate,
        }
    }

    /// Creates the open-ended top bracket.
    pub fn unbounded(min: Decimal, rate: Decimal) -> Self {
        Self {
            min,
            max: None,
            rate,
        }
    }

    /// Returns true if this bracket has no upper limit.
    pub fn is_unbounded(&self) -> bool {
        self.max.is_none()
    }

    /// Returns the width of the bracket, or `None` when unbounded.
    pub fn span(&self) -> Option<Decimal> {
        self.max.map(|max| max - self.min)
    }
}

/// A validated progressive tax schedule.
///
/// Construction enforces that brackets:
/// - start at zero,
/// - are contiguous and ascending (each `min` equals the previous `max`),
/// - have `max > min` and a rate between 0 and 1 inclusive,
/// - end in exactly one unbounded bracket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TaxSchedule {
    brackets: Vec<TaxBracket>,
}

impl TaxSchedule {
    /// Validates and wraps a list of brackets.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_engine::models::{TaxBracket, TaxSchedule};
    /// use rust_decimal::Decimal;
    ///
    /// let schedule = TaxSchedule::new(vec![
    ///     TaxBracket::bounded(Decimal::ZERO, Decimal::new(10000, 0), Decimal::ZERO),
    ///     TaxBracket::unbounded(Decimal::new(10000, 0), Decimal::new(20, 2)),
    /// ])?;
    /// assert_eq!(schedule.brackets().len(), 2);
    /// # Ok::<(), payroll_engine::error::EngineError>(())
    /// ```
    pub fn new(brackets: Vec<TaxBracket>) -> EngineResult<Self> {
        if brackets.is_empty() {
            return Err(EngineError::InvalidTaxSchedule {
                index: 0,
                message: "schedule must contain at least one bracket".to_string(),
            });
        }

        let last = brackets.len() - 1;
        let mut expected_min = Decimal::ZERO;

        for (index, bracket) in brackets.iter().enumerate() {
            let invalid = |message: String| EngineError::InvalidTaxSchedule { index, message };

            if bracket.min != expected_min {
                return Err(invalid(format!(
                    "min {} does not continue from previous bound {}",
                    bracket.min, expected_min
                )));
            }

            if bracket.rate < Decimal::ZERO || bracket.rate > Decimal::ONE {
                return Err(invalid(format!(
                    "rate {} must be between 0 and 1",
                    bracket.rate
                )));
            }

            match bracket.max {
                Some(max) if max <= bracket.min => {
                    return Err(invalid(format!(
                        "max {} must be greater than min {}",
                        max, bracket.min
                    )));
                }
                Some(_) if index == last => {
                    return Err(invalid("last bracket must be unbounded".to_string()));
                }
                Some(max) => expected_min = max,
                None if index != last => {
                    return Err(invalid(
                        "only the last bracket may be unbounded".to_string(),
                    ));
                }
                None => {}
            }
        }

        Ok(Self { brackets })
    }

    /// Returns the brackets in ascending order.
    pub fn brackets(&self) -> &[TaxBracket] {
        &self.brackets
    }

    /// Returns the marginal rate that applies to the given income level.
    pub fn marginal_rate(&self, income: Decimal) -> Decimal {
        self.brackets
            .iter()
            .rfind(|bracket| bracket.min <= income)
            .map(|bracket| bracket.rate)
            .unwrap_or(Decimal::ZERO)
    }
}

impl<'de> Deserialize<'de> for TaxSchedule {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let brackets = Vec::<TaxBracket>::deserialize(deserializer)?;
        TaxSchedule::new(brackets).map_err(serde::de::Error::custom)
    }
}

/// Returns the illustrative Suriname-style default bracket table.
///
/// | Band            | Rate |
/// |-----------------|------|
/// | 0 – 15,000      | 0%   |
/// | 15,000 – 30,000 | 8%   |
/// | 30,000 – 50,000 | 15%  |
/// | 50,000 +        | 25%  |
///
/// This is example data, not tax law. Real deployments load their own
/// schedule through [`crate::config::ConfigLoader`].
pub fn default_tax_brackets() -> Vec<TaxBracket> {
    vec![
        TaxBracket::bounded(Decimal::ZERO, Decimal::new(15000, 0), Decimal::ZERO),
        TaxBracket::bounded(
            Decimal::new(15000, 0),
            Decimal::new(30000, 0),
            Decimal::new(8, 2),
        ),
        TaxBracket::bounded(
            Decimal::new(30000, 0),
            Decimal::new(50000, 0),
            Decimal::new(15, 2),
        ),
        TaxBracket::unbounded(Decimal::new(50000, 0), Decimal::new(25, 2)),
    ]
}

impl Default for TaxSchedule {
    fn default() -> Self {
        Self {
            brackets: default_tax_brackets(),
        }
    }
}
