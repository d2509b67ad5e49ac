//! Configuration types for roster auditing.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files. Every field has a
//! default, so an empty file yields the stock rules.

use serde::{Deserialize, Serialize};

use crate::error::{AuditError, AuditResult};

/// Default length of a consecutive-day run that is reported.
pub const DEFAULT_CONSECUTIVE_DAYS: u32 = 7;

/// Default lower bound (exclusive) of the short-rest window, in hours.
pub const DEFAULT_MIN_REST_HOURS: i64 = 1;

/// Default upper bound (exclusive) of the short-rest window, in hours.
pub const DEFAULT_MAX_REST_HOURS: i64 = 10;

/// Default maximum whole hours in a single shift before it is reported.
pub const DEFAULT_MAX_SHIFT_HOURS: i64 = 14;

/// How two shifts are judged to fall on consecutive days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayRule {
    /// Whole elapsed days from the previous shift's end to this shift's
    /// start, truncated, must equal exactly one.
    #[default]
    ElapsedTime,
    /// This shift's start date must be the calendar day after the previous
    /// shift's end date.
    CalendarDate,
}

/// The thresholds applied by the violation analyzer.
///
/// # Example
///
/// ```
/// use roster_audit::config::Thresholds;
///
/// let thresholds = Thresholds::default();
/// assert_eq!(thresholds.consecutive_days, 7);
/// assert!(thresholds.is_short_rest(6));
/// assert!(!thresholds.is_short_rest(1));
/// assert!(!thresholds.is_short_rest(10));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Thresholds {
    /// A run of exactly this many consecutive days is reported.
    pub consecutive_days: u32,
    /// Rest gaps strictly above this many hours can be short rest.
    pub min_rest_hours: i64,
    /// Rest gaps strictly below this many hours can be short rest.
    pub max_rest_hours: i64,
    /// Shifts of strictly more than this many whole hours are reported.
    pub max_shift_hours: i64,
    /// How consecutive days are detected.
    pub day_rule: DayRule,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            consecutive_days: DEFAULT_CONSECUTIVE_DAYS,
            min_rest_hours: DEFAULT_MIN_REST_HOURS,
            max_rest_hours: DEFAULT_MAX_REST_HOURS,
            max_shift_hours: DEFAULT_MAX_SHIFT_HOURS,
            day_rule: DayRule::default(),
        }
    }
}

impl Thresholds {
    /// Returns true if a rest gap falls strictly inside the short-rest window.
    pub fn is_short_rest(&self, gap_hours: i64) -> bool {
        self.min_rest_hours < gap_hours && gap_hours < self.max_rest_hours
    }

    /// Returns true if a shift of `shift_hours` whole hours is too long.
    pub fn is_long_shift(&self, shift_hours: i64) -> bool {
        shift_hours > self.max_shift_hours
    }

    /// Checks that the thresholds are mutually consistent.
    pub fn validate(&self) -> AuditResult<()> {
        if self.consecutive_days == 0 {
            return Err(AuditError::InvalidConfig {
                field: "consecutive_days".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if self.min_rest_hours < 0 {
            return Err(AuditError::InvalidConfig {
                field: "min_rest_hours".to_string(),
                message: format!("must not be negative, got {}", self.min_rest_hours),
            });
        }
        if self.max_rest_hours <= self.min_rest_hours {
            return Err(AuditError::InvalidConfig {
                field: "max_rest_hours".to_string(),
                message: format!(
                    "must be greater than min_rest_hours ({}), got {}",
                    self.min_rest_hours, self.max_rest_hours
                ),
            });
        }
        if self.max_shift_hours < 0 {
            return Err(AuditError::InvalidConfig {
                field: "max_shift_hours".to_string(),
                message: format!("must not be negative, got {}", self.max_shift_hours),
            });
        }
        Ok(())
    }
}

/// The complete auditor configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AuditConfig {
    /// Rule thresholds.
    pub thresholds: Thresholds,
}
