//! Recording symptom entries.

use crate::constants::RECENT_ENTRIES_LIMIT;
use crate::db::{health_log, Database};
use crate::errors::AppResult;
use chrono::NaiveDate;
use tracing::info;

/// Records a symptom entry and prints the most recent entries.
///
/// Always appends a new row; logging several symptoms on one day yields
/// several independent rows.
///
/// # Errors
///
/// Returns a `ValidationError` if the symptom is empty or the severity is
/// out of range, or a `DatabaseError` if a store operation fails.
pub fn record_symptom(
    db: &Database,
    date: NaiveDate,
    symptom: &str,
    severity: Option<u8>,
    notes: Option<&str>,
) -> AppResult<()> {
    let conn = db.get_conn()?;
    health_log::insert_symptom_entry(&conn, date, symptom, severity, notes)?;
    info!("Health entry saved for {}", date);
    println!("Health entry saved!");

    let recent = health_log::list_recent(&conn, RECENT_ENTRIES_LIMIT)?;
    if recent.is_empty() {
        println!("No health logs yet.");
        return Ok(());
    }

    println!();
    println!("Recent health entries:");
    for entry in recent {
        println!(
            "  {}  {}  severity {}  {}",
            entry.date,
            entry.symptom.as_deref().unwrap_or("-"),
            entry
                .severity
                .map(|s| s.to_string())
                .unwrap_or_else(|| "-".to_string()),
            entry.notes.as_deref().unwrap_or("-"),
        );
    }
    Ok(())
}
