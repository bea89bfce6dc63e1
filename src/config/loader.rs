//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading payroll
//! configurations from YAML files.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::calculation::ContributionRates;
use crate::error::{EngineError, EngineResult};
use crate::models::TaxSchedule;

use super::types::{ContributionsConfig, JurisdictionMetadata, PayrollConfig, TaxBracketsConfig};

/// Loads and provides access to payroll configuration.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/suriname/
/// ├── jurisdiction.yaml   # Jurisdiction metadata
/// ├── tax_brackets.yaml   # Progressive tax schedule
/// └── contributions.yaml  # Pension/insurance rates and overtime multiplier
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/suriname")?;
/// let schedule = loader.config().tax_schedule();
/// println!("{} brackets", schedule.brackets().len());
/// # Ok::<(), payroll_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: PayrollConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing (`ConfigNotFound`)
    /// - Any file contains invalid YAML or misses a field (`ConfigParseError`)
    /// - The brackets break a schedule invariant (`InvalidTaxSchedule`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Loading payroll configuration");

        let metadata = Self::load_yaml::<JurisdictionMetadata>(&path.join("jurisdiction.yaml"))?;
        let brackets = Self::load_yaml::<TaxBracketsConfig>(&path.join("tax_brackets.yaml"))?;
        let contributions =
            Self::load_yaml::<ContributionsConfig>(&path.join("contributions.yaml"))?;

        let tax_schedule = TaxSchedule::new(brackets.brackets)?;

        info!(
            jurisdiction = %metadata.code,
            version = %metadata.version,
            brackets = tax_schedule.brackets().len(),
            "Loaded payroll configuration"
        );

        let config = PayrollConfig::new(
            metadata,
            tax_schedule,
            ContributionRates {
                pension_rate: contributions.pension_rate,
                insurance_rate: contributions.insurance_rate,
            },
            contributions.overtime_multiplier,
        );

        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying payroll configuration.
    pub fn config(&self) -> &PayrollConfig {
        &self.config
    }

    /// Consumes the loader and returns the configuration.
    pub fn into_config(self) -> PayrollConfig {
        self.config
    }

    /// Returns the jurisdiction metadata.
    pub fn jurisdiction(&self) -> &JurisdictionMetadata {
        self.config.jurisdiction()
    }
}
