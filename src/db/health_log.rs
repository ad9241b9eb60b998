//! Symptom entries and adherence records.
//!
//! Symptom entries are append-only: logging twice on one day creates two
//! independent rows. Adherence lives in its own relation keyed by
//! (date, medication name), so the day's taken set is always a single merged
//! set and marking a medication taken twice is a no-op.

use crate::constants::{DATE_FORMAT_ISO, SEVERITY_MAX, SEVERITY_MIN};
use crate::errors::{AppResult, DatabaseError, ValidationError};
use chrono::NaiveDate;
use rusqlite::{params, Connection};
use std::collections::BTreeSet;
use tracing::debug;

/// A symptom entry in the health log.
#[derive(Debug, Clone)]
pub struct HealthLogEntry {
    pub id: i64,
    pub date: NaiveDate,
    pub symptom: Option<String>,
    pub severity: Option<u8>,
    pub notes: Option<String>,
}

/// Records a symptom entry for the given date.
///
/// Always inserts a new row; multiple entries per day are allowed. Returns
/// the new entry's id.
///
/// # Errors
///
/// Returns a `ValidationError` if the symptom is empty or the severity is out
/// of range (no row is written), or a `DatabaseError` if the write fails.
pub fn insert_symptom_entry(
    conn: &Connection,
    date: NaiveDate,
    symptom: &str,
    severity: Option<u8>,
    notes: Option<&str>,
) -> AppResult<i64> {
    if symptom.trim().is_empty() {
        return Err(ValidationError::MissingSymptom.into());
    }
    if let Some(s) = severity {
        if !(SEVERITY_MIN..=SEVERITY_MAX).contains(&s) {
            return Err(ValidationError::SeverityOutOfRange(s).into());
        }
    }

    debug!("Recording symptom '{}' on {}", symptom.trim(), date);

    conn.execute(
        r#"
        INSERT INTO health_log (date, symptom, severity, notes)
        VALUES (?1, ?2, ?3, ?4)
        "#,
        params![
            date.to_string(),
            symptom.trim(),
            severity.map(|s| s as i64),
            notes.map(str::trim),
        ],
    )
    .map_err(DatabaseError::Sqlite)?;

    Ok(conn.last_insert_rowid())
}

/// Lists the most recent symptom entries, newest date first.
///
/// Never returns more than `limit` rows. Rows sharing a date come back in
/// reverse insertion order (id descending).
///
/// # Errors
///
/// Returns an error if the database operation fails.
pub fn list_recent(conn: &Connection, limit: u32) -> AppResult<Vec<HealthLogEntry>> {
    debug!("Listing {} most recent health log entries", limit);

    let mut stmt = conn
        .prepare(
            r#"
            SELECT id, date, symptom, severity, notes
            FROM health_log
            ORDER BY date DESC, id DESC
            LIMIT ?1
            "#,
        )
        .map_err(DatabaseError::Sqlite)?;

    let entries = stmt
        .query_map(params![limit as i64], map_entry_row)
        .map_err(DatabaseError::Sqlite)?
        .collect::<Result<Vec<_>, _>>()
        .map_err(DatabaseError::Sqlite)?;

    Ok(entries)
}

/// Lists symptom entries with dates in `[start, end]` inclusive, oldest first.
///
/// # Errors
///
/// Returns an error if the database operation fails.
pub fn list_in_range(
    conn: &Connection,
    start: NaiveDate,
    end: NaiveDate,
) -> AppResult<Vec<HealthLogEntry>> {
    debug!("Listing health log entries between {} and {}", start, end);

    let mut stmt = conn
        .prepare(
            r#"
            SELECT id, date, symptom, severity, notes
            FROM health_log
            WHERE date BETWEEN ?1 AND ?2
            ORDER BY date, id
            "#,
        )
        .map_err(DatabaseError::Sqlite)?;

    let entries = stmt
        .query_map(params![start.to_string(), end.to_string()], map_entry_row)
        .map_err(DatabaseError::Sqlite)?
        .collect::<Result<Vec<_>, _>>()
        .map_err(DatabaseError::Sqlite)?;

    Ok(entries)
}

/// Marks a medication as taken on the given date.
///
/// Idempotent: the adherence relation's uniqueness constraint makes a repeat
/// mark a no-op. Returns `true` if this call recorded the medication for the
/// first time that day.
///
/// # Errors
///
/// Returns an error if the database operation fails.
pub fn mark_taken(conn: &Connection, date: NaiveDate, medication_name: &str) -> AppResult<bool> {
    debug!("Marking '{}' taken on {}", medication_name, date);

    let inserted = conn
        .execute(
            "INSERT OR IGNORE INTO adherence (date, medication_name) VALUES (?1, ?2)",
            params![date.to_string(), medication_name],
        )
        .map_err(DatabaseError::Sqlite)?;

    Ok(inserted > 0)
}

/// Returns the set of medication names marked taken on the given date.
///
/// # Errors
///
/// Returns an error if the database operation fails.
pub fn taken_on(conn: &Connection, date: NaiveDate) -> AppResult<BTreeSet<String>> {
    let mut stmt = conn
        .prepare("SELECT medication_name FROM adherence WHERE date = ?1")
        .map_err(DatabaseError::Sqlite)?;

    let names = stmt
        .query_map(params![date.to_string()], |row| row.get::<_, String>(0))
        .map_err(DatabaseError::Sqlite)?
        .collect::<Result<BTreeSet<_>, _>>()
        .map_err(DatabaseError::Sqlite)?;

    Ok(names)
}

/// Counts distinct dates with at least one medication marked taken.
///
/// # Errors
///
/// Returns an error if the database operation fails.
pub fn adherence_day_count(conn: &Connection) -> AppResult<u32> {
    let count: i64 = conn
        .query_row("SELECT COUNT(DISTINCT date) FROM adherence", [], |row| {
            row.get(0)
        })
        .map_err(DatabaseError::Sqlite)?;

    Ok(count as u32)
}

fn map_entry_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<HealthLogEntry> {
    Ok(HealthLogEntry {
        id: row.get(0)?,
        date: {
            let raw: String = row.get(1)?;
            NaiveDate::parse_from_str(&raw, DATE_FORMAT_ISO).map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(
                    1,
                    rusqlite::types::Type::Text,
                    Box::new(e),
                )
            })?
        },
        symptom: row.get(2)?,
        severity: row.get::<_, Option<i64>>(3)?.map(|s| s as u8),
        notes: row.get(4)?,
    })
}
