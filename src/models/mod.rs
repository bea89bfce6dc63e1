//! Core data models for the Payroll Calculation Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod calculation_result;
mod pay_frequency;
mod payroll_data;
mod tax_bracket;

pub use calculation_result::{
    AuditStep, AuditTrace, AuditWarning, BracketTax, PayrollResult, SocialContributions,
};
pub use pay_frequency::PayFrequency;
pub use payroll_data::{CompensationType, PayrollData};
pub use tax_bracket::{TaxBracket, TaxSchedule, default_tax_brackets};
