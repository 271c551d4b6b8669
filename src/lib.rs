//! Wage Engine for hourly staffing payroll
//!
//! This crate turns a worked shift into billable regular and overtime hours,
//! and hours into gross pay, statutory insurance deductions and net pay.
//! Every calculation is a pure function of its inputs and an injectable
//! [`config::RateTable`].

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
