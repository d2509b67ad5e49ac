//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading auditor
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{AuditError, AuditResult};

use super::types::{AuditConfig, Thresholds};

/// Loads and provides access to auditor configuration.
///
/// # File Format
///
/// ```text
/// thresholds:
///   consecutive_days: 7
///   min_rest_hours: 1
///   max_rest_hours: 10
///   max_shift_hours: 14
///   day_rule: elapsed_time   # or calendar_date
/// ```
///
/// Omitted fields fall back to their defaults.
///
/// # Example
///
/// ```no_run
/// use roster_audit::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default.yaml").unwrap();
/// println!("Max shift hours: {}", loader.thresholds().max_shift_hours);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: AuditConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The file is missing or unreadable
    /// - The file contains invalid YAML or unknown fields
    /// - The thresholds are inconsistent
    pub fn load<P: AsRef<Path>>(path: P) -> AuditResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| AuditError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config = Self::parse(&content).map_err(|e| match e {
            AuditError::ConfigParseError { message, .. } => AuditError::ConfigParseError {
                path: path_str.clone(),
                message,
            },
            other => other,
        })?;

        debug!(path = %path_str, thresholds = ?config.thresholds(), "Loaded configuration");
        Ok(config)
    }

    /// Parses configuration from YAML text.
    pub fn parse(content: &str) -> AuditResult<Self> {
        // serde_yaml maps an empty document to unit, not an empty mapping
        let config = if content.trim().is_empty() {
            AuditConfig::default()
        } else {
            serde_yaml::from_str::<AuditConfig>(content).map_err(|e| {
                AuditError::ConfigParseError {
                    path: "<inline>".to_string(),
                    message: e.to_string(),
                }
            })?
        };

        Self::from_config(config)
    }

    /// Wraps an already-built configuration after validating it.
    pub fn from_config(config: AuditConfig) -> AuditResult<Self> {
        config.thresholds.validate()?;
        Ok(Self { config })
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &AuditConfig {
        &self.config
    }

    /// Returns the rule thresholds.
    pub fn thresholds(&self) -> &Thresholds {
        &self.config.thresholds
    }
}
