//! Shift sequence analysis.
//!
//! Walks each employee's shifts in roster order and applies three
//! independent checks per shift:
//!
//! 1. consecutive-day bookkeeping (increment or reset the run length)
//! 2. short rest since the previous shift
//! 3. long shift
//!
//! after which the previous end time is updated and a run that has just
//! reached the configured length is reported. A single shift can produce
//! several events.

use chrono::{Days, NaiveDateTime};
use tracing::debug;

use crate::config::{DayRule, Thresholds};
use crate::ingest::ShiftStore;
use crate::models::{Employee, Shift, ViolationEvent, ViolationKind};

/// Running state carried across one employee's shifts.
#[derive(Debug, Clone, Copy)]
struct RunState {
    consecutive_days: u32,
    previous_end: Option<NaiveDateTime>,
}

impl Default for RunState {
    fn default() -> Self {
        Self {
            consecutive_days: 1,
            previous_end: None,
        }
    }
}

/// Returns true if `shift` continues a consecutive-day run from `previous_end`.
fn is_next_day(shift: &Shift, previous_end: NaiveDateTime, rule: DayRule) -> bool {
    match rule {
        DayRule::ElapsedTime => shift.whole_days_since(previous_end) == 1,
        DayRule::CalendarDate => previous_end
            .date()
            .checked_add_days(Days::new(1))
            .is_some_and(|next| shift.start_time().date() == next),
    }
}

/// Analyzes one employee's shifts.
///
/// Events are returned in the order they were found: by shift, and within
/// a shift as short rest, long shift, consecutive days.
///
/// # Example
///
/// ```
/// use roster_audit::analysis::analyze_employee;
/// use roster_audit::config::Thresholds;
/// use roster_audit::models::{Employee, Shift, ViolationKind};
/// use chrono::NaiveDateTime;
///
/// let at = |s: &str| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap();
/// let mut employee = Employee::new(
///     "E1",
///     "Ada",
///     Shift::new(at("2024-01-01 12:00:00"), at("2024-01-01 20:00:00")).unwrap(),
/// );
/// employee.add_shift(Shift::new(at("2024-01-02 02:00:00"), at("2024-01-02 10:00:00")).unwrap());
///
/// let events = analyze_employee(&employee, &Thresholds::default());
/// assert_eq!(events.len(), 1);
/// assert_eq!(events[0].kind, ViolationKind::ShortRest { gap_hours: 6 });
/// assert_eq!(events[0].shift_index, 1);
/// ```
pub fn analyze_employee(employee: &Employee, thresholds: &Thresholds) -> Vec<ViolationEvent> {
    let mut events = Vec::new();
    let mut state = RunState::default();

    let mut emit = |shift_index: usize, kind: ViolationKind| {
        debug!(
            employee_id = %employee.id,
            shift_index,
            violation = kind.code(),
            "Violation found"
        );
        events.push(ViolationEvent {
            employee_id: employee.id.clone(),
            employee_name: employee.name.clone(),
            shift_index,
            kind,
        });
    };

    for (shift_index, shift) in employee.shifts().iter().enumerate() {
        match state.previous_end {
            Some(previous_end) if is_next_day(shift, previous_end, thresholds.day_rule) => {
                state.consecutive_days = state.consecutive_days.saturating_add(1);
            }
            _ => state.consecutive_days = 1,
        }

        if let Some(previous_end) = state.previous_end {
            let gap_hours = shift.rest_hours_since(previous_end);
            if thresholds.is_short_rest(gap_hours) {
                emit(shift_index, ViolationKind::ShortRest { gap_hours });
            }
        }

        let shift_hours = shift.whole_hours();
        if thresholds.is_long_shift(shift_hours) {
            emit(shift_index, ViolationKind::LongShift { shift_hours });
        }

        state.previous_end = Some(shift.end_time());

        // Exact match only: day 8 of the same run is not reported again.
        if state.consecutive_days == thresholds.consecutive_days {
            emit(
                shift_index,
                ViolationKind::ConsecutiveDays {
                    days: state.consecutive_days,
                },
            );
        }
    }

    events
}

/// Analyzes every employee in the store, in store order.
pub fn analyze_roster(store: &ShiftStore, thresholds: &Thresholds) -> Vec<ViolationEvent> {
    store
        .employees()
        .flat_map(|employee| analyze_employee(employee, thresholds))
        .collect()
}
