//! Violation line rendering.

use std::io::{self, Write};

use crate::config::Thresholds;
use crate::ingest::RejectedRecord;
use crate::models::{ViolationEvent, ViolationKind};

/// Returns the rule-specific message for a violation.
///
/// Messages quote the configured limits, so with default thresholds they
/// read "Less than 10 hours between shifts", "Worked more than 14 hours in
/// a single shift" and "Worked for 7 consecutive days".
///
/// The short-rest message names only the upper bound. Gaps at or below
/// `min_rest_hours` are never reported, so the message stays the stock
/// wording whatever the lower bound is set to.
pub fn violation_message(kind: &ViolationKind, thresholds: &Thresholds) -> String {
    match kind {
        ViolationKind::ShortRest { .. } => format!(
            "Less than {} hours between shifts",
            thresholds.max_rest_hours
        ),
        ViolationKind::LongShift { .. } => format!(
            "Worked more than {} hours in a single shift",
            thresholds.max_shift_hours
        ),
        ViolationKind::ConsecutiveDays { days } => {
            format!("Worked for {} consecutive days", days)
        }
    }
}

/// Formats a violation as a single report line, without a trailing newline.
///
/// # Example
///
/// ```
/// use roster_audit::config::Thresholds;
/// use roster_audit::models::{ViolationEvent, ViolationKind};
/// use roster_audit::report::format_violation;
///
/// let event = ViolationEvent {
///     employee_id: "E1".to_string(),
///     employee_name: "Ada".to_string(),
///     shift_index: 0,
///     kind: ViolationKind::LongShift { shift_hours: 15 },
/// };
/// assert_eq!(
///     format_violation(&event, &Thresholds::default()),
///     "Ada (E1): Worked more than 14 hours in a single shift"
/// );
/// ```
pub fn format_violation(event: &ViolationEvent, thresholds: &Thresholds) -> String {
    format!(
        "{} ({}): {}",
        event.employee_name,
        event.employee_id,
        violation_message(&event.kind, thresholds)
    )
}

/// Writes report lines to an output stream.
pub struct Reporter<'a, W: Write> {
    out: W,
    thresholds: &'a Thresholds,
}

impl<'a, W: Write> Reporter<'a, W> {
    /// Creates a reporter writing to `out`.
    pub fn new(out: W, thresholds: &'a Thresholds) -> Self {
        Self { out, thresholds }
    }

    /// Writes one violation line.
    pub fn write_violation(&mut self, event: &ViolationEvent) -> io::Result<()> {
        writeln!(self.out, "{}", format_violation(event, self.thresholds))
    }

    /// Writes one line per violation, in order.
    pub fn write_violations(&mut self, events: &[ViolationEvent]) -> io::Result<()> {
        for event in events {
            self.write_violation(event)?;
        }
        Ok(())
    }

    /// Writes a summary of skipped rows. Writes nothing when none were skipped.
    pub fn write_rejections(&mut self, rejected: &[RejectedRecord]) -> io::Result<()> {
        if rejected.is_empty() {
            return Ok(());
        }

        writeln!(self.out, "Skipped {} malformed record(s):", rejected.len())?;
        for record in rejected {
            writeln!(self.out, "  line {}: {}", record.line, record.reason)?;
        }
        Ok(())
    }

    /// Flushes and returns the underlying writer.
    pub fn finish(mut self) -> io::Result<W> {
        self.out.flush()?;
        Ok(self.out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(kind: ViolationKind) -> ViolationEvent {
        ViolationEvent {
            employee_id: "E1".to_string(),
            employee_name: "Ada Lovelace".to_string(),
            shift_index: 3,
            kind,
        }
    }

    fn render(events: &[ViolationEvent], thresholds: &Thresholds) -> String {
        let mut reporter = Reporter::new(Vec::<u8>::new(), thresholds);
        reporter.write_violations(events).unwrap();
        String::from_utf8(reporter.finish().unwrap()).unwrap()
    }

    #[test]
    fn test_default_messages() {
        let thresholds = Thresholds::default();
        assert_eq!(
            format_violation(&event(ViolationKind::ShortRest { gap_hours: 6 }), &thresholds),
            "Ada Lovelace (E1): Less than 10 hours between shifts"
        );
        assert_eq!(
            format_violation(&event(ViolationKind::LongShift { shift_hours: 15 }), &thresholds),
            "Ada Lovelace (E1): Worked more than 14 hours in a single shift"
        );
        assert_eq!(
            format_violation(&event(ViolationKind::ConsecutiveDays { days: 7 }), &thresholds),
            "Ada Lovelace (E1): Worked for 7 consecutive days"
        );
    }

    #[test]
    fn test_messages_follow_configured_limits() {
        let thresholds = Thresholds {
            max_rest_hours: 12,
            max_shift_hours: 10,
            consecutive_days: 5,
            ..Thresholds::default()
        };
        assert_eq!(
            violation_message(&ViolationKind::ShortRest { gap_hours: 11 }, &thresholds),
            "Less than 12 hours between shifts"
        );
        assert_eq!(
            violation_message(&ViolationKind::LongShift { shift_hours: 11 }, &thresholds),
            "Worked more than 10 hours in a single shift"
        );
        assert_eq!(
            violation_message(&ViolationKind::ConsecutiveDays { days: 5 }, &thresholds),
            "Worked for 5 consecutive days"
        );
    }

    #[test]
    fn test_short_rest_message_ignores_lower_bound() {
        let thresholds = Thresholds {
            min_rest_hours: 4,
            ..Thresholds::default()
        };
        assert_eq!(
            violation_message(&ViolationKind::ShortRest { gap_hours: 5 }, &thresholds),
            "Less than 10 hours between shifts"
        );
    }

    #[test]
    fn test_write_violations_one_line_each() {
        let output = render(
            &[
                event(ViolationKind::ShortRest { gap_hours: 6 }),
                event(ViolationKind::LongShift { shift_hours: 15 }),
            ],
            &Thresholds::default(),
        );

        assert_eq!(
            output,
            "Ada Lovelace (E1): Less than 10 hours between shifts\n\
             Ada Lovelace (E1): Worked more than 14 hours in a single shift\n"
        );
    }

    #[test]
    fn test_no_violations_writes_nothing() {
        assert_eq!(render(&[], &Thresholds::default()), "");
    }

    #[test]
    fn test_write_rejections_summary() {
        let thresholds = Thresholds::default();
        let mut reporter = Reporter::new(Vec::<u8>::new(), &thresholds);
        reporter
            .write_rejections(&[
                RejectedRecord {
                    line: 3,
                    reason: "expected 4 fields, found 3".to_string(),
                },
                RejectedRecord {
                    line: 8,
                    reason: "invalid end time 'soon'".to_string(),
                },
            ])
            .unwrap();

        let output = String::from_utf8(reporter.finish().unwrap()).unwrap();
        assert_eq!(
            output,
            "Skipped 2 malformed record(s):\n  line 3: expected 4 fields, found 3\n  line 8: invalid end time 'soon'\n"
        );
    }

    #[test]
    fn test_write_rejections_empty_writes_nothing() {
        let thresholds = Thresholds::default();
        let mut reporter = Reporter::new(Vec::<u8>::new(), &thresholds);
        reporter.write_rejections(&[]).unwrap();
        assert!(reporter.finish().unwrap().is_empty());
    }
}
