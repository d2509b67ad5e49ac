//! Roster compliance auditor
//!
//! This crate reads a roster of employee shifts from a comma-delimited file
//! and reports three labour-rule violations: too little rest between shifts,
//! shifts that run too long, and runs of consecutive working days.

#![warn(missing_docs)]

pub mod analysis;
pub mod config;
pub mod error;
pub mod ingest;
pub mod models;
pub mod report;
pub mod run;
