//! Database schema definitions and initialization.
//!
//! This module defines the SQLite schema for the medication roster, reminder
//! times, symptom entries, and adherence records. All tables are created with
//! proper indexes and foreign key constraints.

use crate::errors::{AppResult, DatabaseError};
use rusqlite::Connection;
use tracing::debug;

/// Current schema version.
///
/// Increment this whenever schema changes are made to support future
/// migrations.
pub const SCHEMA_VERSION: i32 = 1;

/// Creates all database tables and indexes.
///
/// This function is idempotent - it uses `CREATE TABLE IF NOT EXISTS` so it's
/// safe to call multiple times.
///
/// # Tables
///
/// - `medications`: Medication roster
/// - `reminder_times`: Ordered reminder times per medication
/// - `health_log`: Symptom entries (several rows per day allowed)
/// - `adherence`: One row per (date, medication) marked taken
///
/// # Errors
///
/// Returns an error if any DDL statement fails.
pub fn create_tables(conn: &Connection) -> AppResult<()> {
    debug!("Creating database tables");

    // Medications table: the roster of registered medications
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS medications (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            dosage TEXT NOT NULL,
            frequency TEXT NOT NULL,
            start_date TEXT NOT NULL,
            end_date TEXT,
            times_per_day INTEGER NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_medications_start_date ON medications(start_date);
        "#,
    )
    .map_err(DatabaseError::Sqlite)?;

    // Reminder times: ordered one-to-many, replacing a delimiter-joined column
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS reminder_times (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            medication_id INTEGER NOT NULL,
            slot INTEGER NOT NULL,
            time TEXT NOT NULL,
            FOREIGN KEY (medication_id) REFERENCES medications(id) ON DELETE CASCADE,
            UNIQUE(medication_id, slot)
        );

        CREATE INDEX IF NOT EXISTS idx_reminder_times_medication_id
            ON reminder_times(medication_id);
        "#,
    )
    .map_err(DatabaseError::Sqlite)?;

    // Health log: symptom entries; a day may hold several independent rows
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS health_log (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            date TEXT NOT NULL,
            symptom TEXT,
            severity INTEGER,
            notes TEXT
        );

        CREATE INDEX IF NOT EXISTS idx_health_log_date ON health_log(date DESC);
        "#,
    )
    .map_err(DatabaseError::Sqlite)?;

    // Adherence: the UNIQUE constraint makes marking a medication taken
    // idempotent and keeps one merged set per date
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS adherence (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            date TEXT NOT NULL,
            medication_name TEXT NOT NULL,
            UNIQUE(date, medication_name)
        );

        CREATE INDEX IF NOT EXISTS idx_adherence_date ON adherence(date);
        "#,
    )
    .map_err(DatabaseError::Sqlite)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_tables() {
        let conn = Connection::open_in_memory().unwrap();
        create_tables(&conn).unwrap();

        // All four tables should exist
        let count: i32 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table'
                 AND name IN ('medications', 'reminder_times', 'health_log', 'adherence')",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(count, 4);
    }

    #[test]
    fn test_create_tables_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        create_tables(&conn).unwrap();
        create_tables(&conn).unwrap();
    }

    #[test]
    fn test_adherence_uniqueness() {
        let conn = Connection::open_in_memory().unwrap();
        create_tables(&conn).unwrap();

        conn.execute(
            "INSERT INTO adherence (date, medication_name) VALUES ('2024-01-05', 'Amlodipine')",
            [],
        )
        .unwrap();
        let duplicate = conn.execute(
            "INSERT INTO adherence (date, medication_name) VALUES ('2024-01-05', 'Amlodipine')",
            [],
        );
        assert!(duplicate.is_err());
    }
}
