//! Violation event models.
//!
//! This module contains the [`ViolationEvent`] type produced by the analyzer
//! and consumed by the reporter.

use serde::Serialize;

/// The rule a shift broke, with the measurement that broke it.
///
/// # Example
///
/// ```
/// use roster_audit::models::ViolationKind;
///
/// let kind = ViolationKind::LongShift { shift_hours: 15 };
/// assert_eq!(kind.code(), "long_shift");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum ViolationKind {
    /// Rest between two shifts fell inside the short-rest window.
    ShortRest {
        /// Whole hours between the previous shift's end and this shift's start.
        gap_hours: i64,
    },
    /// A single shift ran longer than the maximum shift length.
    LongShift {
        /// Whole hours worked in the shift.
        shift_hours: i64,
    },
    /// The run of consecutive working days reached the configured length.
    ConsecutiveDays {
        /// The length of the run when it was reported.
        days: u32,
    },
}

impl ViolationKind {
    /// A stable, machine-friendly code for the rule.
    pub fn code(&self) -> &'static str {
        match self {
            ViolationKind::ShortRest { .. } => "short_rest",
            ViolationKind::LongShift { .. } => "long_shift",
            ViolationKind::ConsecutiveDays { .. } => "consecutive_days",
        }
    }
}

/// A single policy violation found for an employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViolationEvent {
    /// The employee's identifier.
    pub employee_id: String,
    /// The employee's display name.
    pub employee_name: String,
    /// Zero-based position of the offending shift in the employee's roster order.
    pub shift_index: usize,
    /// The rule that was broken.
    #[serde(flatten)]
    pub kind: ViolationKind,
}
