//! Error types for the roster auditor.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while loading configuration,
//! reading a roster, and validating shift records.

use thiserror::Error;

/// The main error type for the roster auditor.
///
/// Source, output and configuration errors are fatal
/// to a run. Record-level errors are collected as rejected rows and the run
/// continues.
///
/// # Example
///
/// ```
/// use roster_audit::error::AuditError;
///
/// let error = AuditError::MalformedRecord {
///     line: 4,
///     reason: "expected 4 fields, found 3".to_string(),
/// };
/// assert_eq!(error.to_string(), "Malformed record on line 4: expected 4 fields, found 3");
/// ```
#[derive(Debug, Error)]
pub enum AuditError {
    /// The roster source could not be opened or read.
    #[error("Failed to read roster '{path}': {message}")]
    FileAccess {
        /// The path of the roster source.
        path: String,
        /// A description of the I/O failure.
        message: String,
    },

    /// The report could not be written to its output stream.
    #[error("Failed to write report: {message}")]
    ReportWrite {
        /// A description of the I/O failure.
        message: String,
    },

    /// A roster row had the wrong shape or an unparsable timestamp.
    #[error("Malformed record on line {line}: {reason}")]
    MalformedRecord {
        /// The 1-based line number of the row in the source.
        line: usize,
        /// A description of what was wrong with the row.
        reason: String,
    },

    /// A shift's timing was inconsistent.
    #[error("Invalid shift: {message}")]
    InvalidShift {
        /// A description of what made the shift invalid.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration values were individually valid but inconsistent.
    #[error("Invalid configuration field '{field}': {message}")]
    InvalidConfig {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },
}

/// A type alias for Results that return AuditError.
pub type AuditResult<T> = Result<T, AuditError>;
