//! Per-employee shift grouping.

use std::collections::HashMap;

use crate::models::{Employee, Shift};

/// Groups shifts by employee id.
///
/// Employees are yielded in the order they were first seen. Each employee's
/// shifts stay in insertion order regardless of how rows for different
/// employees are interleaved.
///
/// # Example
///
/// ```
/// use roster_audit::ingest::ShiftStore;
/// use roster_audit::models::Shift;
/// use chrono::NaiveDateTime;
///
/// let at = |s: &str| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap();
/// let shift = Shift::new(at("2024-01-01 08:00:00"), at("2024-01-01 16:00:00")).unwrap();
///
/// let mut store = ShiftStore::new();
/// store.add_shift("E1", "Ada", shift);
/// store.add_shift("E2", "Grace", shift);
/// store.add_shift("E1", "Ada", shift);
///
/// let ids: Vec<&str> = store.employees().map(|e| e.id.as_str()).collect();
/// assert_eq!(ids, ["E1", "E2"]);
/// assert_eq!(store.get("E1").unwrap().shifts().len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ShiftStore {
    employees: Vec<Employee>,
    index: HashMap<String, usize>,
}

impl ShiftStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a shift for an employee.
    ///
    /// The first call for an id creates the employee with `employee_name`;
    /// later calls append the shift and ignore the name.
    pub fn add_shift(&mut self, employee_id: &str, employee_name: &str, shift: Shift) {
        match self.index.get(employee_id) {
            Some(&position) => self.employees[position].add_shift(shift),
            None => {
                self.index
                    .insert(employee_id.to_string(), self.employees.len());
                self.employees
                    .push(Employee::new(employee_id, employee_name, shift));
            }
        }
    }

    /// Looks up an employee by id.
    pub fn get(&self, employee_id: &str) -> Option<&Employee> {
        self.index
            .get(employee_id)
            .map(|&position| &self.employees[position])
    }

    /// Iterates over all employees in first-seen order.
    pub fn employees(&self) -> impl Iterator<Item = &Employee> {
        self.employees.iter()
    }

    /// Number of distinct employees.
    pub fn employee_count(&self) -> usize {
        self.employees.len()
    }

    /// Total number of shifts across all employees.
    pub fn shift_count(&self) -> usize {
        self.employees.iter().map(|e| e.shifts().len()).sum()
    }

    /// Returns true if no shifts have been recorded.
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }
}
