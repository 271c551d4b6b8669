//! Configuration loading and management for the wage engine.
//!
//! This module provides the injectable [`RateTable`] and the functionality to
//! load date-effective rate schedules and the break policy from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use wage_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/kr").unwrap();
//! println!("Loaded payroll regime: {}", config.metadata().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{PayrollConfig, PayrollMetadata, RateSchedule, RateTable};
