//! Configuration types for payroll calculation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files, and the aggregated
//! [`PayrollConfig`] handed to the payroll run.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::calculation::{ContributionRates, DEFAULT_OVERTIME_MULTIPLIER};
use crate::models::{TaxBracket, TaxSchedule};

/// Metadata about the jurisdiction a configuration describes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct JurisdictionMetadata {
    /// Short jurisdiction code (e.g., "SR").
    pub code: String,
    /// The human-readable name of the jurisdiction.
    pub name: String,
    /// ISO 4217 currency code amounts are expressed in.
    pub currency: String,
    /// The version or effective date of the configuration.
    pub version: String,
}

/// Tax bracket file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct TaxBracketsConfig {
    /// Brackets in ascending order; validated into a [`TaxSchedule`] on load.
    pub brackets: Vec<TaxBracket>,
}

/// Contribution file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct ContributionsConfig {
    /// Pension rate as a fraction of gross pay.
    pub pension_rate: Decimal,
    /// Insurance rate as a fraction of gross pay.
    pub insurance_rate: Decimal,
    /// Overtime multiplier for hourly workers.
    #[serde(default = "default_overtime_multiplier")]
    pub overtime_multiplier: Decimal,
}

fn default_overtime_multiplier() -> Decimal {
    DEFAULT_OVERTIME_MULTIPLIER
}

/// The complete payroll configuration for one jurisdiction.
///
/// The default configuration is the illustrative Suriname-style example:
/// the four-band schedule from [`default_tax_brackets`](crate::models::default_tax_brackets),
/// 8% pension, 1.5% insurance and time-and-a-half overtime.
///
/// # Example
///
/// ```
/// use payroll_engine::config::PayrollConfig;
/// use rust_decimal::Decimal;
///
/// let config = PayrollConfig::default();
/// assert_eq!(config.jurisdiction().code, "SR");
/// assert_eq!(config.overtime_multiplier(), Decimal::new(15, 1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayrollConfig {
    metadata: JurisdictionMetadata,
    tax_schedule: TaxSchedule,
    contributions: ContributionRates,
    overtime_multiplier: Decimal,
}

impl PayrollConfig {
    /// Creates a new PayrollConfig from its component parts.
    pub fn new(
        metadata: JurisdictionMetadata,
        tax_schedule: TaxSchedule,
        contributions: ContributionRates,
        overtime_multiplier: Decimal,
    ) -> Self {
        Self {
            metadata,
            tax_schedule,
            contributions,
            overtime_multiplier,
        }
    }

    /// Returns a copy of this configuration with a different tax schedule.
    pub fn with_tax_schedule(mut self, tax_schedule: TaxSchedule) -> Self {
        self.tax_schedule = tax_schedule;
        self
    }

    /// Returns a copy of this configuration with different contribution rates.
    pub fn with_contributions(mut self, contributions: ContributionRates) -> Self {
        self.contributions = contributions;
        self
    }

    /// Returns a copy of this configuration with a different overtime multiplier.
    pub fn with_overtime_multiplier(mut self, overtime_multiplier: Decimal) -> Self {
        self.overtime_multiplier = overtime_multiplier;
        self
    }

    /// Returns the jurisdiction metadata.
    pub fn jurisdiction(&self) -> &JurisdictionMetadata {
        &self.metadata
    }

    /// Returns the tax schedule.
    pub fn tax_schedule(&self) -> &TaxSchedule {
        &self.tax_schedule
    }

    /// Returns the contribution rates.
    pub fn contributions(&self) -> ContributionRates {
        self.contributions
    }

    /// Returns the overtime multiplier.
    pub fn overtime_multiplier(&self) -> Decimal {
        self.overtime_multiplier
    }
}

impl Default for PayrollConfig {
    fn default() -> Self {
        Self {
            metadata: JurisdictionMetadata {
                code: "SR".to_string(),
                name: "Suriname (example)".to_string(),
                currency: "SRD".to_string(),
                version: "example".to_string(),
            },
            tax_schedule: TaxSchedule::default(),
            contributions: ContributionRates::default(),
            overtime_multiplier: DEFAULT_OVERTIME_MULTIPLIER,
        }
    }
}
