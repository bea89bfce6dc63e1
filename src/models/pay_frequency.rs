//! Pay frequency model.
//!
//! A pay frequency determines how many pay periods fall in a year and
//! therefore the divisor applied to an annual salary.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// How often a worker is paid.
///
/// # Example
///
/// ```
/// use payroll_engine::models::PayFrequency;
///
/// assert_eq!(PayFrequency::BiWeekly.periods_per_year(), 26);
/// assert_eq!("semi-monthly".parse::<PayFrequency>().unwrap(), PayFrequency::SemiMonthly);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PayFrequency {
    /// Paid every week (52 periods).
    Weekly,
    /// Paid every second week (26 periods).
    BiWeekly,
    /// Paid twice a month (24 periods).
    SemiMonthly,
    /// Paid once a month (12 periods).
    Monthly,
}

impl PayFrequency {
    /// All supported frequencies, most frequent first.
    pub const ALL: [PayFrequency; 4] = [
        PayFrequency::Weekly,
        PayFrequency::BiWeekly,
        PayFrequency::SemiMonthly,
        PayFrequency::Monthly,
    ];

    /// Returns the number of pay periods in a year.
    pub const fn periods_per_year(self) -> u32 {
        match self {
            PayFrequency::Weekly => 52,
            PayFrequency::BiWeekly => 26,
            PayFrequency::SemiMonthly => 24,
            PayFrequency::Monthly => 12,
        }
    }

    /// Returns the canonical name used in serialized records.
    pub const fn as_str(self) -> &'static str {
        match self {
            PayFrequency::Weekly => "weekly",
            PayFrequency::BiWeekly => "bi-weekly",
            PayFrequency::SemiMonthly => "semi-monthly",
            PayFrequency::Monthly => "monthly",
        }
    }
}

impl fmt::Display for PayFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PayFrequency {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('_', "-");
        PayFrequency::ALL
            .into_iter()
            .find(|frequency| frequency.as_str() == normalized)
            .ok_or_else(|| EngineError::UnknownPayFrequency {
                value: s.to_string(),
            })
    }
}
