//! Registering a new medication.

use crate::db::{medications, medications::NewMedication, Database};
use crate::errors::AppResult;
use tracing::info;

/// Validates and stores a new medication, printing a confirmation.
///
/// # Errors
///
/// Returns a `ValidationError` if a required field is missing or out of
/// range, or a `DatabaseError` if the write fails.
pub fn add_medication(db: &Database, med: &NewMedication) -> AppResult<()> {
    let mut conn = db.get_conn()?;
    let id = medications::insert_medication(&mut conn, med)?;

    info!("Medication '{}' added with id {}", med.name, id);
    println!("Medication '{}' added successfully!", med.name.trim());
    Ok(())
}
