//! Employee model.
//!
//! This module defines the [`Employee`] struct, which groups an employee's
//! shifts in the order they appeared in the roster.

use serde::Serialize;

use super::Shift;

/// Represents an employee and the shifts attributed to them.
///
/// The name is fixed when the employee is first seen. Shifts are kept in
/// roster order and are never reordered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// The employee's display name.
    pub name: String,
    /// Shifts in roster order.
    shifts: Vec<Shift>,
}

impl Employee {
    /// Creates an employee with their first shift.
    ///
    /// # Examples
    ///
    /// ```
    /// use roster_audit::models::{Employee, Shift};
    /// use chrono::NaiveDateTime;
    ///
    /// let start = NaiveDateTime::parse_from_str("2024-01-01 08:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
    /// let end = NaiveDateTime::parse_from_str("2024-01-01 16:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
    ///
    /// let employee = Employee::new("E1", "Ada", Shift::new(start, end).unwrap());
    /// assert_eq!(employee.shifts().len(), 1);
    /// ```
    pub fn new(id: impl Into<String>, name: impl Into<String>, first_shift: Shift) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            shifts: vec![first_shift],
        }
    }

    /// Appends a shift after all existing shifts.
    pub fn add_shift(&mut self, shift: Shift) {
        self.shifts.push(shift);
    }

    /// Returns the shifts in roster order.
    pub fn shifts(&self) -> &[Shift] {
        &self.shifts
    }
}
