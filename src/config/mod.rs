//! Configuration loading and management for the roster auditor.
//!
//! This module provides functionality to load rule thresholds from a YAML
//! file. All thresholds default to the stock rules when not configured.
//!
//! # Example
//!
//! ```no_run
//! use roster_audit::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default.yaml").unwrap();
//! println!("Consecutive day limit: {}", config.thresholds().consecutive_days);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    AuditConfig, DEFAULT_CONSECUTIVE_DAYS, DEFAULT_MAX_REST_HOURS, DEFAULT_MAX_SHIFT_HOURS,
    DEFAULT_MIN_REST_HOURS, DayRule, Thresholds,
};
