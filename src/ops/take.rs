//! Marking a medication as taken.

use crate::db::{health_log, medications, Database};
use crate::errors::{AppResult, ValidationError};
use chrono::NaiveDate;
use tracing::info;

/// Records that a medication was taken on the given date.
///
/// The name must belong to a registered medication. Marking the same
/// medication twice on one day is a no-op, which is reported as such.
///
/// # Errors
///
/// Returns `ValidationError::UnknownMedication` for an unregistered name, or
/// a `DatabaseError` if the write fails.
pub fn mark_taken_today(db: &Database, date: NaiveDate, medication_name: &str) -> AppResult<()> {
    let conn = db.get_conn()?;

    if !medications::name_exists(&conn, medication_name)? {
        return Err(ValidationError::UnknownMedication(medication_name.to_string()).into());
    }

    let newly_marked = health_log::mark_taken(&conn, date, medication_name)?;
    info!("Marked '{}' taken on {}", medication_name, date);

    if newly_marked {
        println!("{} marked as taken!", medication_name);
    } else {
        println!("{} was already marked as taken on {}.", medication_name, date);
    }
    Ok(())
}
