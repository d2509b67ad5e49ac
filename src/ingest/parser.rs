//! Roster row parsing.
//!
//! Each data row is `employee_id,employee_name,start_time,end_time` with
//! timestamps in `YYYY-MM-DD HH:MM:SS` and no timezone.

use chrono::NaiveDateTime;

use crate::error::{AuditError, AuditResult};
use crate::models::Shift;

/// The timestamp pattern accepted in roster rows.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Number of comma-separated fields in a roster row.
pub const FIELD_COUNT: usize = 4;

/// One parsed roster row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftRecord {
    /// The employee's identifier.
    pub employee_id: String,
    /// The employee's display name.
    pub employee_name: String,
    /// The validated shift.
    pub shift: Shift,
}

/// Parses one roster row.
///
/// Fields are trimmed of surrounding whitespace. `line_number` is only used
/// to label errors.
///
/// # Errors
///
/// Returns [`AuditError::MalformedRecord`] if the row does not have exactly
/// four fields, the employee id is empty, either timestamp does not match
/// [`TIMESTAMP_FORMAT`], or the end time is not after the start time.
///
/// # Example
///
/// ```
/// use roster_audit::ingest::parse_record;
///
/// let record = parse_record("E1, Ada Lovelace, 2024-01-01 08:00:00, 2024-01-01 16:00:00", 2).unwrap();
/// assert_eq!(record.employee_id, "E1");
/// assert_eq!(record.employee_name, "Ada Lovelace");
/// assert_eq!(record.shift.whole_hours(), 8);
///
/// assert!(parse_record("E1,Ada,2024-01-01 08:00:00", 3).is_err());
/// ```
pub fn parse_record(line: &str, line_number: usize) -> AuditResult<ShiftRecord> {
    let malformed = |reason: String| AuditError::MalformedRecord {
        line: line_number,
        reason,
    };

    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    if fields.len() != FIELD_COUNT {
        return Err(malformed(format!(
            "expected {} fields, found {}",
            FIELD_COUNT,
            fields.len()
        )));
    }

    let employee_id = fields[0];
    if employee_id.is_empty() {
        return Err(malformed("employee id is empty".to_string()));
    }

    let start_time = parse_timestamp(fields[2])
        .ok_or_else(|| malformed(format!("invalid start time '{}'", fields[2])))?;
    let end_time = parse_timestamp(fields[3])
        .ok_or_else(|| malformed(format!("invalid end time '{}'", fields[3])))?;

    let shift = Shift::new(start_time, end_time).map_err(|e| malformed(e.to_string()))?;

    Ok(ShiftRecord {
        employee_id: employee_id.to_string(),
        employee_name: fields[1].to_string(),
        shift,
    })
}

fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT).ok()
}
