//! Payroll Calculation Engine
//!
//! This crate provides the payroll calculation core of an HR/payroll system:
//! per-period salary and hourly gross pay, progressive tax-bracket
//! withholding, social contributions and net pay, all on fixed-point decimal
//! arithmetic, plus validation of the input records.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
