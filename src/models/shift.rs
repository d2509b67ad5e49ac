//! Shift model.
//!
//! This module defines the [`Shift`] struct representing one contiguous
//! work interval, together with the truncating duration helpers the
//! analyzer relies on.

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::error::{AuditError, AuditResult};

const MILLIS_PER_HOUR: i64 = 60 * 60 * 1000;
const MILLIS_PER_DAY: i64 = 24 * MILLIS_PER_HOUR;

/// Represents a work shift with a start and end timestamp.
///
/// Shifts are immutable once created. The constructor enforces
/// `start_time < end_time`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Shift {
    start_time: NaiveDateTime,
    end_time: NaiveDateTime,
}

impl Shift {
    /// Creates a new shift, rejecting zero-length or inverted intervals.
    ///
    /// # Examples
    ///
    /// ```
    /// use roster_audit::models::Shift;
    /// use chrono::NaiveDateTime;
    ///
    /// let start = NaiveDateTime::parse_from_str("2024-01-01 08:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
    /// let end = NaiveDateTime::parse_from_str("2024-01-01 16:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
    ///
    /// assert!(Shift::new(start, end).is_ok());
    /// assert!(Shift::new(end, start).is_err());
    /// ```
    pub fn new(start_time: NaiveDateTime, end_time: NaiveDateTime) -> AuditResult<Self> {
        if end_time <= start_time {
            return Err(AuditError::InvalidShift {
                message: format!(
                    "end time {} is not after start time {}",
                    end_time, start_time
                ),
            });
        }

        Ok(Self {
            start_time,
            end_time,
        })
    }

    /// The start time of the shift.
    pub fn start_time(&self) -> NaiveDateTime {
        self.start_time
    }

    /// The end time of the shift.
    pub fn end_time(&self) -> NaiveDateTime {
        self.end_time
    }

    /// Returns the shift length in whole hours, truncated.
    ///
    /// ```
    /// use roster_audit::models::Shift;
    /// use chrono::NaiveDateTime;
    ///
    /// let start = NaiveDateTime::parse_from_str("2024-01-01 08:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
    /// let end = NaiveDateTime::parse_from_str("2024-01-01 22:59:00", "%Y-%m-%d %H:%M:%S").unwrap();
    ///
    /// assert_eq!(Shift::new(start, end).unwrap().whole_hours(), 14);
    /// ```
    pub fn whole_hours(&self) -> i64 {
        whole_hours_between(self.start_time, self.end_time)
    }

    /// Whole hours of rest between `previous_end` and the start of this shift.
    ///
    /// Negative when the shifts overlap.
    pub fn rest_hours_since(&self, previous_end: NaiveDateTime) -> i64 {
        whole_hours_between(previous_end, self.start_time)
    }

    /// Whole elapsed days between `previous_end` and the start of this shift.
    ///
    /// This is elapsed time, not a calendar-date difference: 23 hours across
    /// midnight is zero days.
    pub fn whole_days_since(&self, previous_end: NaiveDateTime) -> i64 {
        (self.start_time - previous_end).num_milliseconds() / MILLIS_PER_DAY
    }
}

/// Millisecond difference converted to hours by truncating division.
fn whole_hours_between(from: NaiveDateTime, to: NaiveDateTime) -> i64 {
    (to - from).num_milliseconds() / MILLIS_PER_HOUR
}
