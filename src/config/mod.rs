//! Configuration loading and management for the Payroll Calculation Engine.
//!
//! This module provides the typed [`PayrollConfig`] (tax schedule,
//! contribution rates and overtime multiplier) and a loader that reads it
//! from a directory of YAML files.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/suriname").unwrap();
//! println!("Loaded jurisdiction: {}", loader.jurisdiction().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{ContributionsConfig, JurisdictionMetadata, PayrollConfig, TaxBracketsConfig};
