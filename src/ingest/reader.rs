//! Roster source reading.
//!
//! Reads a whole roster into a [`ShiftStore`] before any analysis runs.
//! Malformed rows are skipped and recorded; only an unreadable source
//! fails the read.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{AuditError, AuditResult};

use super::parser::parse_record;
use super::store::ShiftStore;

/// A roster row that was skipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RejectedRecord {
    /// The 1-based line number in the source.
    pub line: usize,
    /// Why the row was skipped.
    pub reason: String,
}

/// The outcome of reading a roster.
#[derive(Debug, Clone, Default)]
pub struct RosterIngest {
    /// Accepted shifts grouped by employee.
    pub store: ShiftStore,
    /// Rows that were skipped, in source order.
    pub rejected: Vec<RejectedRecord>,
    /// Number of non-blank data rows seen, excluding the header.
    pub rows_read: usize,
}

impl RosterIngest {
    fn reject(&mut self, source: &str, line: usize, reason: String) {
        warn!(source = %source, line, reason = %reason, "Skipping malformed record");
        self.rejected.push(RejectedRecord { line, reason });
    }
}

/// Reads a roster from any buffered source.
///
/// The first line is a header and is discarded without inspection. Blank
/// lines are ignored. Rows that are not valid UTF-8 are rejected like any
/// other malformed row. `source` names the input in errors.
///
/// # Errors
///
/// Returns [`AuditError::FileAccess`] if reading from the source fails.
///
/// # Example
///
/// ```
/// use roster_audit::ingest::read_roster;
///
/// let csv = "id,name,start,end\n\
///            E1,Ada,2024-01-01 08:00:00,2024-01-01 16:00:00\n\
///            E1,Ada,not a time,2024-01-02 16:00:00\n";
///
/// let ingest = read_roster(csv.as_bytes(), "inline").unwrap();
/// assert_eq!(ingest.store.shift_count(), 1);
/// assert_eq!(ingest.rejected.len(), 1);
/// assert_eq!(ingest.rejected[0].line, 3);
/// ```
pub fn read_roster<R: BufRead>(reader: R, source: &str) -> AuditResult<RosterIngest> {
    let mut ingest = RosterIngest::default();

    // Decoded per line: a badly encoded row must not fail the whole read
    for (index, bytes) in reader.split(b'\n').enumerate().skip(1) {
        let line_number = index + 1;
        let mut bytes = bytes.map_err(|e| AuditError::FileAccess {
            path: source.to_string(),
            message: format!("line {}: {}", line_number, e),
        })?;
        if bytes.last() == Some(&b'\r') {
            bytes.pop();
        }

        let line = match String::from_utf8(bytes) {
            Ok(line) => line,
            Err(_) => {
                ingest.rows_read += 1;
                ingest.reject(source, line_number, "invalid UTF-8".to_string());
                continue;
            }
        };

        if line.trim().is_empty() {
            continue;
        }
        ingest.rows_read += 1;

        match parse_record(&line, line_number) {
            Ok(record) => {
                ingest
                    .store
                    .add_shift(&record.employee_id, &record.employee_name, record.shift);
            }
            Err(AuditError::MalformedRecord { line, reason }) => {
                ingest.reject(source, line, reason);
            }
            Err(other) => return Err(other),
        }
    }

    debug!(
        source = %source,
        rows = ingest.rows_read,
        employees = ingest.store.employee_count(),
        rejected = ingest.rejected.len(),
        "Roster read"
    );

    Ok(ingest)
}

/// Opens and reads a roster file.
///
/// The file handle is owned by the reader and closed on every return path.
///
/// # Errors
///
/// Returns [`AuditError::FileAccess`] if the file cannot be opened or read.
pub fn load_roster<P: AsRef<Path>>(path: P) -> AuditResult<RosterIngest> {
    let path = path.as_ref();
    let source = path.display().to_string();

    let file = File::open(path).map_err(|e| AuditError::FileAccess {
        path: source.clone(),
        message: e.to_string(),
    })?;

    read_roster(BufReader::new(file), &source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const HEADER: &str = "employee_id,employee_name,start_time,end_time";

    fn roster(rows: &[&str]) -> String {
        let mut text = String::from(HEADER);
        for row in rows {
            text.push('\n');
            text.push_str(row);
        }
        text.push('\n');
        text
    }

    #[test]
    fn test_header_only_roster_is_empty() {
        let ingest = read_roster(roster(&[]).as_bytes(), "test").unwrap();
        assert!(ingest.store.is_empty());
        assert!(ingest.rejected.is_empty());
        assert_eq!(ingest.rows_read, 0);
    }

    #[test]
    fn test_empty_source_is_empty_roster() {
        let ingest = read_roster("".as_bytes(), "test").unwrap();
        assert!(ingest.store.is_empty());
    }

    #[test]
    fn test_header_skipped_even_when_it_looks_like_data() {
        let text = "E0,Header,2024-01-01 08:00:00,2024-01-01 16:00:00\n\
                    E1,Ada,2024-01-01 08:00:00,2024-01-01 16:00:00\n";
        let ingest = read_roster(text.as_bytes(), "test").unwrap();

        assert!(ingest.store.get("E0").is_none());
        assert!(ingest.store.get("E1").is_some());
    }

    #[test]
    fn test_blank_lines_ignored() {
        let text = roster(&[
            "",
            "E1,Ada,2024-01-01 08:00:00,2024-01-01 16:00:00",
            "   ",
            "E1,Ada,2024-01-02 08:00:00,2024-01-02 16:00:00",
        ]);
        let ingest = read_roster(text.as_bytes(), "test").unwrap();

        assert_eq!(ingest.rows_read, 2);
        assert_eq!(ingest.store.shift_count(), 2);
        assert!(ingest.rejected.is_empty());
    }

    #[test]
    fn test_malformed_rows_skipped_and_recorded() {
        let text = roster(&[
            "E1,Ada,2024-01-01 08:00:00,2024-01-01 16:00:00",
            "E1,Ada,2024-01-02 08:00:00",
            "E2,Grace,garbage,2024-01-02 16:00:00",
            "E2,Grace,2024-01-02 08:00:00,2024-01-02 16:00:00",
        ]);
        let ingest = read_roster(text.as_bytes(), "test").unwrap();

        assert_eq!(ingest.rows_read, 4);
        assert_eq!(ingest.store.shift_count(), 2);
        assert_eq!(
            ingest.rejected,
            vec![
                RejectedRecord {
                    line: 3,
                    reason: "expected 4 fields, found 3".to_string(),
                },
                RejectedRecord {
                    line: 4,
                    reason: "invalid start time 'garbage'".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_crlf_line_endings() {
        let text = "id,name,start,end\r\nE1,Ada,2024-01-01 08:00:00,2024-01-01 16:00:00\r\n";
        let ingest = read_roster(text.as_bytes(), "test").unwrap();

        assert_eq!(ingest.store.shift_count(), 1);
        assert!(ingest.rejected.is_empty());
    }

    #[test]
    fn test_invalid_utf8_row_rejected_and_reading_continues() {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(HEADER.as_bytes());
        bytes.extend_from_slice(b"\nE1,Ada,2024-01-01 08:00:00,2024-01-01 23:00:00\n");
        bytes.extend_from_slice(b"E2,Jos\xE9,2024-01-01 08:00:00,2024-01-01 16:00:00\n");
        bytes.extend_from_slice(b"E1,Ada,2024-01-03 08:00:00,2024-01-03 23:00:00\n");

        let ingest = read_roster(bytes.as_slice(), "test").unwrap();

        assert_eq!(ingest.rows_read, 3);
        assert_eq!(ingest.store.shift_count(), 2);
        assert!(ingest.store.get("E2").is_none());
        assert_eq!(
            ingest.rejected,
            vec![RejectedRecord {
                line: 3,
                reason: "invalid UTF-8".to_string(),
            }]
        );
    }

    #[test]
    fn test_last_row_without_newline() {
        let text = format!("{}\nE1,Ada,2024-01-01 08:00:00,2024-01-01 16:00:00", HEADER);
        let ingest = read_roster(text.as_bytes(), "test").unwrap();

        assert_eq!(ingest.store.shift_count(), 1);
        assert!(ingest.rejected.is_empty());
    }

    #[test]
    fn test_load_roster_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "{}",
            roster(&["E1,Ada,2024-01-01 08:00:00,2024-01-01 16:00:00"])
        )
        .unwrap();

        let ingest = load_roster(file.path()).unwrap();
        assert_eq!(ingest.store.employee_count(), 1);
    }

    #[test]
    fn test_load_missing_file_is_file_access_error() {
        match load_roster("/nonexistent/roster.csv") {
            Err(AuditError::FileAccess { path, .. }) => {
                assert_eq!(path, "/nonexistent/roster.csv");
            }
            other => panic!("Expected FileAccess error, got {:?}", other),
        }
    }
}
