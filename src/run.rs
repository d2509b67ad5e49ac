//! Analysis run context.
//!
//! An [`AuditRun`] owns everything one invocation needs: configuration, a
//! correlation id for log lines, and the roster read for that run. Nothing
//! is shared between runs.

use std::io::{BufRead, Write};
use std::path::Path;
use std::time::Instant;

use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::analysis::analyze_roster;
use crate::config::AuditConfig;
use crate::error::{AuditError, AuditResult};
use crate::ingest::{RosterIngest, load_roster, read_roster};
use crate::report::Reporter;

/// Counts describing a completed run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    /// Distinct employees with at least one accepted shift.
    pub employees: usize,
    /// Accepted shifts.
    pub shifts: usize,
    /// Skipped roster rows.
    pub rejected: usize,
    /// Violation lines written.
    pub violations: usize,
}

/// One roster audit, from reading the source to writing the report.
///
/// # Example
///
/// ```
/// use roster_audit::config::AuditConfig;
/// use roster_audit::run::AuditRun;
///
/// let csv = "id,name,start,end\nE1,Ada,2024-01-01 08:00:00,2024-01-01 23:00:00\n";
///
/// let mut out = Vec::new();
/// let mut diag: Vec<u8> = Vec::new();
/// let summary = AuditRun::new(AuditConfig::default())
///     .execute_reader(csv.as_bytes(), "inline", &mut out, &mut diag)
///     .unwrap();
///
/// assert_eq!(summary.violations, 1);
/// assert_eq!(
///     String::from_utf8(out).unwrap(),
///     "Ada (E1): Worked more than 14 hours in a single shift\n"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct AuditRun {
    config: AuditConfig,
    run_id: Uuid,
}

impl AuditRun {
    /// Creates a run with a fresh correlation id.
    pub fn new(config: AuditConfig) -> Self {
        Self {
            config,
            run_id: Uuid::new_v4(),
        }
    }

    /// The correlation id attached to this run's log events.
    pub fn run_id(&self) -> Uuid {
        self.run_id
    }

    /// The configuration this run applies.
    pub fn config(&self) -> &AuditConfig {
        &self.config
    }

    /// Audits the roster file at `path`.
    ///
    /// Violation lines go to `out`; the skipped-row summary goes to `diag`.
    ///
    /// # Errors
    ///
    /// Returns [`AuditError::FileAccess`] if the roster cannot be opened or
    /// read, and [`AuditError::ReportWrite`] if either stream fails. No
    /// violations are written when the roster cannot be read in full.
    pub fn execute<P, O, D>(&self, path: P, out: O, diag: D) -> AuditResult<RunSummary>
    where
        P: AsRef<Path>,
        O: Write,
        D: Write,
    {
        let path = path.as_ref();
        info!(run_id = %self.run_id, source = %path.display(), "Starting roster audit");
        let ingest = load_roster(path)?;
        self.finish(ingest, out, diag)
    }

    /// Audits a roster from an already-open source.
    pub fn execute_reader<R, O, D>(
        &self,
        reader: R,
        source: &str,
        out: O,
        diag: D,
    ) -> AuditResult<RunSummary>
    where
        R: BufRead,
        O: Write,
        D: Write,
    {
        info!(run_id = %self.run_id, source = %source, "Starting roster audit");
        let ingest = read_roster(reader, source)?;
        self.finish(ingest, out, diag)
    }

    fn finish<O: Write, D: Write>(
        &self,
        ingest: RosterIngest,
        out: O,
        diag: D,
    ) -> AuditResult<RunSummary> {
        let started = Instant::now();
        let thresholds = &self.config.thresholds;
        let events = analyze_roster(&ingest.store, thresholds);

        let write_failed = |e: std::io::Error| AuditError::ReportWrite {
            message: e.to_string(),
        };

        let mut reporter = Reporter::new(out, thresholds);
        reporter.write_violations(&events).map_err(write_failed)?;
        reporter.finish().map_err(write_failed)?;

        let mut diagnostics = Reporter::new(diag, thresholds);
        diagnostics
            .write_rejections(&ingest.rejected)
            .map_err(write_failed)?;
        diagnostics.finish().map_err(write_failed)?;

        let summary = RunSummary {
            employees: ingest.store.employee_count(),
            shifts: ingest.store.shift_count(),
            rejected: ingest.rejected.len(),
            violations: events.len(),
        };

        info!(
            run_id = %self.run_id,
            employees = summary.employees,
            shifts = summary.shifts,
            rejected = summary.rejected,
            violations = summary.violations,
            duration_us = started.elapsed().as_micros() as u64,
            "Roster audit complete"
        );

        Ok(summary)
    }
}
