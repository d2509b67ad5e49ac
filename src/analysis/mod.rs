//! Violation analysis for the roster auditor.
//!
//! This module walks each employee's shifts in roster order and emits
//! short-rest, long-shift and consecutive-day violation events.

mod analyzer;

pub use analyzer::{analyze_employee, analyze_roster};
