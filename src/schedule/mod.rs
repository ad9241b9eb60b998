//! Schedule evaluation without I/O operations.
//!
//! This module contains pure logic for reminder-time parsing and the
//! pending/taken partition shown on the dashboard. Times are `NaiveTime`
//! values compared numerically, so ordering never depends on string
//! comparison; input must be zero-padded 24-hour "HH:MM" and anything else
//! fails closed with a `ParseError`.

use crate::constants::{REMINDER_TIME_SEPARATOR, TIME_FORMAT};
use crate::errors::ParseError;
use chrono::NaiveTime;
use std::collections::BTreeSet;

/// The pending/taken partition of one medication's reminder times for a day.
///
/// Both lists preserve the order the times were registered in. A time is
/// "pending" until it has both come due and been acknowledged: a not-yet-due
/// time is always pending, and a due-already time is pending unless the
/// medication was marked taken that day.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DaySchedule {
    /// Scheduled times not yet confirmed taken.
    pub pending: Vec<NaiveTime>,
    /// Due-already times covered by the day's taken set.
    pub taken: Vec<NaiveTime>,
}

/// Partitions a medication's reminder times into pending and taken.
///
/// A reminder time strictly earlier than `now` is due-already; it counts as
/// taken when `medication_name` is in the day's taken set, otherwise it stays
/// pending. Times at or after `now` are always pending.
///
/// # Examples
///
/// ```
/// use medilog::schedule::{evaluate, parse_reminder_times};
/// use chrono::NaiveTime;
/// use std::collections::BTreeSet;
///
/// let times = parse_reminder_times("08:00, 20:00").unwrap();
/// let noon = NaiveTime::from_hms_opt(12, 0, 0).unwrap();
///
/// let schedule = evaluate(&times, "Amlodipine", &BTreeSet::new(), noon);
/// assert_eq!(schedule.pending, times);
/// assert!(schedule.taken.is_empty());
/// ```
pub fn evaluate(
    reminder_times: &[NaiveTime],
    medication_name: &str,
    taken_today: &BTreeSet<String>,
    now: NaiveTime,
) -> DaySchedule {
    let mut schedule = DaySchedule::default();
    let acknowledged = taken_today.contains(medication_name);

    for &time in reminder_times {
        if time < now && acknowledged {
            schedule.taken.push(time);
        } else {
            schedule.pending.push(time);
        }
    }

    schedule
}

/// Parses a comma-separated list of reminder times.
///
/// Each element must be a zero-padded 24-hour "HH:MM" value; unpadded hours
/// like "9:00" are rejected rather than silently accepted. Order is
/// preserved.
///
/// # Errors
///
/// Returns `ParseError::ReminderTime` naming the first offending element.
pub fn parse_reminder_times(input: &str) -> Result<Vec<NaiveTime>, ParseError> {
    input
        .split(',')
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(parse_reminder_time)
        .collect()
}

/// Parses a single zero-padded 24-hour "HH:MM" reminder time.
///
/// # Errors
///
/// Returns `ParseError::ReminderTime` if the value is malformed or unpadded.
pub fn parse_reminder_time(piece: &str) -> Result<NaiveTime, ParseError> {
    let time = NaiveTime::parse_from_str(piece, TIME_FORMAT)
        .map_err(|_| ParseError::ReminderTime(piece.to_string()))?;

    // chrono accepts unpadded hours; require the canonical rendering so "9:00"
    // cannot slip into the store.
    if time.format(TIME_FORMAT).to_string() != piece {
        return Err(ParseError::ReminderTime(piece.to_string()));
    }

    Ok(time)
}

/// Renders reminder times as the comma-separated form the user entered.
pub fn format_reminder_times(times: &[NaiveTime]) -> String {
    times
        .iter()
        .map(|t| t.format(TIME_FORMAT).to_string())
        .collect::<Vec<_>>()
        .join(REMINDER_TIME_SEPARATOR)
}
