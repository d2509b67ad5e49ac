//! Core data models for the roster auditor.
//!
//! This module contains the domain models shared by ingestion, analysis
//! and reporting.

mod employee;
mod shift;
mod violation;

pub use employee::Employee;
pub use shift::Shift;
pub use violation::{ViolationEvent, ViolationKind};
