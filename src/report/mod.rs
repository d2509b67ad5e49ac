//! Human-readable violation reporting.
//!
//! Renders violation events as one line each, in the form
//! `<name> (<id>): <message>`, plus a summary of skipped roster rows.

mod reporter;

pub use reporter::{Reporter, format_violation, violation_message};
