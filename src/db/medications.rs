//! Medication roster CRUD operations.
//!
//! This module provides functions for registering medications and querying
//! which are active on a given date. Medications are never updated or deleted
//! once registered.

use crate::constants::{DATE_FORMAT_ISO, TIMES_PER_DAY_MAX, TIMES_PER_DAY_MIN, TIME_FORMAT};
use crate::errors::{AppResult, DatabaseError, ValidationError};
use chrono::{NaiveDate, NaiveTime};
use rusqlite::{params, Connection};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// How often a medication is taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frequency {
    Daily,
    EveryOtherDay,
    Weekly,
    AsNeeded,
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Frequency::Daily => "Daily",
            Frequency::EveryOtherDay => "Every other day",
            Frequency::Weekly => "Weekly",
            Frequency::AsNeeded => "As needed",
        };
        write!(f, "{}", label)
    }
}

impl FromStr for Frequency {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Daily" => Ok(Frequency::Daily),
            "Every other day" => Ok(Frequency::EveryOtherDay),
            "Weekly" => Ok(Frequency::Weekly),
            "As needed" => Ok(Frequency::AsNeeded),
            other => Err(ValidationError::UnknownFrequency(other.to_string())),
        }
    }
}

/// A registered medication with its dosing schedule.
#[derive(Debug, Clone)]
pub struct Medication {
    pub id: i64,
    pub name: String,
    pub dosage: String,
    pub frequency: Frequency,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub times_per_day: u32,
    /// Reminder times in the order the user entered them.
    pub reminder_times: Vec<NaiveTime>,
}

/// Fields for a medication about to be registered.
#[derive(Debug, Clone)]
pub struct NewMedication {
    pub name: String,
    pub dosage: String,
    pub frequency: Frequency,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub times_per_day: u32,
    pub reminder_times: Vec<NaiveTime>,
}

impl NewMedication {
    /// Checks the required-field and range invariants.
    ///
    /// # Errors
    ///
    /// Returns the first `ValidationError` encountered; nothing is written to
    /// the store when validation fails.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingName);
        }
        if self.dosage.trim().is_empty() {
            return Err(ValidationError::MissingDosage);
        }
        if self.reminder_times.is_empty() {
            return Err(ValidationError::MissingReminderTimes);
        }
        if !(TIMES_PER_DAY_MIN..=TIMES_PER_DAY_MAX).contains(&self.times_per_day) {
            return Err(ValidationError::TimesPerDayOutOfRange(self.times_per_day));
        }
        if let Some(end) = self.end_date {
            if end < self.start_date {
                return Err(ValidationError::EndBeforeStart {
                    start: self.start_date,
                    end,
                });
            }
        }
        Ok(())
    }
}

/// Registers a new medication with its reminder times.
///
/// The medication row and its reminder-time rows are written in one
/// transaction. Returns the new medication's id.
///
/// # Errors
///
/// Returns a `ValidationError` if a required field is missing or out of
/// range (no row is written), or a `DatabaseError` if the write fails.
pub fn insert_medication(conn: &mut Connection, med: &NewMedication) -> AppResult<i64> {
    med.validate()?;
    debug!("Inserting medication '{}'", med.name);

    let tx = conn.transaction().map_err(DatabaseError::Sqlite)?;

    tx.execute(
        r#"
        INSERT INTO medications (name, dosage, frequency, start_date, end_date, times_per_day)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6)
        "#,
        params![
            med.name.trim(),
            med.dosage.trim(),
            med.frequency.to_string(),
            med.start_date.to_string(),
            med.end_date.map(|d| d.to_string()),
            med.times_per_day as i64,
        ],
    )
    .map_err(DatabaseError::Sqlite)?;

    let medication_id = tx.last_insert_rowid();

    {
        let mut stmt = tx
            .prepare("INSERT INTO reminder_times (medication_id, slot, time) VALUES (?1, ?2, ?3)")
            .map_err(DatabaseError::Sqlite)?;
        for (slot, time) in med.reminder_times.iter().enumerate() {
            stmt.execute(params![
                medication_id,
                slot as i64,
                time.format(TIME_FORMAT).to_string()
            ])
            .map_err(DatabaseError::Sqlite)?;
        }
    }

    tx.commit().map_err(DatabaseError::Sqlite)?;

    debug!("Medication inserted with id {}", medication_id);
    Ok(medication_id)
}

/// Lists medications active on the given date.
///
/// A medication is active when `start_date <= date` and its end date is
/// either absent (open-ended) or `date <= end_date`.
///
/// # Errors
///
/// Returns an error if the database operation fails.
pub fn list_active_on(conn: &Connection, date: NaiveDate) -> AppResult<Vec<Medication>> {
    debug!("Listing medications active on {}", date);

    let mut stmt = conn
        .prepare(
            r#"
            SELECT id, name, dosage, frequency, start_date, end_date, times_per_day
            FROM medications
            WHERE start_date <= ?1 AND (end_date IS NULL OR end_date >= ?1)
            ORDER BY id
            "#,
        )
        .map_err(DatabaseError::Sqlite)?;

    let rows = stmt
        .query_map(params![date.to_string()], map_medication_row)
        .map_err(DatabaseError::Sqlite)?
        .collect::<Result<Vec<_>, _>>()
        .map_err(DatabaseError::Sqlite)?;

    attach_reminder_times(conn, rows)
}

/// Lists every medication ever registered, ordered by id.
///
/// # Errors
///
/// Returns an error if the database operation fails.
pub fn list_all(conn: &Connection) -> AppResult<Vec<Medication>> {
    debug!("Listing all medications");

    let mut stmt = conn
        .prepare(
            r#"
            SELECT id, name, dosage, frequency, start_date, end_date, times_per_day
            FROM medications
            ORDER BY id
            "#,
        )
        .map_err(DatabaseError::Sqlite)?;

    let rows = stmt
        .query_map([], map_medication_row)
        .map_err(DatabaseError::Sqlite)?
        .collect::<Result<Vec<_>, _>>()
        .map_err(DatabaseError::Sqlite)?;

    attach_reminder_times(conn, rows)
}

/// Returns whether a medication with this exact name is registered.
///
/// # Errors
///
/// Returns an error if the database operation fails.
pub fn name_exists(conn: &Connection, name: &str) -> AppResult<bool> {
    let count: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM medications WHERE name = ?1",
            params![name],
            |row| row.get(0),
        )
        .map_err(DatabaseError::Sqlite)?;
    Ok(count > 0)
}

fn map_medication_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Medication> {
    Ok(Medication {
        id: row.get(0)?,
        name: row.get(1)?,
        dosage: row.get(2)?,
        frequency: row
            .get::<_, String>(3)?
            .parse::<Frequency>()
            .map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(3, rusqlite::types::Type::Text, Box::new(e))
            })?,
        start_date: parse_date_column(row, 4)?,
        end_date: row
            .get::<_, Option<String>>(5)?
            .map(|s| parse_date_str(&s, 5))
            .transpose()?,
        times_per_day: row.get::<_, i64>(6)? as u32,
        reminder_times: Vec::new(),
    })
}

fn parse_date_column(row: &rusqlite::Row<'_>, idx: usize) -> rusqlite::Result<NaiveDate> {
    parse_date_str(&row.get::<_, String>(idx)?, idx)
}

fn parse_date_str(s: &str, idx: usize) -> rusqlite::Result<NaiveDate> {
    NaiveDate::parse_from_str(s, DATE_FORMAT_ISO).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(e))
    })
}

/// Loads each medication's reminder times, preserving user-entered order.
fn attach_reminder_times(
    conn: &Connection,
    mut medications: Vec<Medication>,
) -> AppResult<Vec<Medication>> {
    let mut stmt = conn
        .prepare("SELECT time FROM reminder_times WHERE medication_id = ?1 ORDER BY slot")
        .map_err(DatabaseError::Sqlite)?;

    for med in &mut medications {
        med.reminder_times = stmt
            .query_map(params![med.id], |row| {
                let raw: String = row.get(0)?;
                NaiveTime::parse_from_str(&raw, TIME_FORMAT).map_err(|e| {
                    rusqlite::Error::FromSqlConversionFailure(
                        0,
                        rusqlite::types::Type::Text,
                        Box::new(e),
                    )
                })
            })
            .map_err(DatabaseError::Sqlite)?
            .collect::<Result<Vec<_>, _>>()
            .map_err(DatabaseError::Sqlite)?;
    }

    Ok(medications)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;

    fn setup_test_db() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        crate::db::schema::create_tables(&conn).unwrap();
        conn
    }

    fn sample(name: &str, start: &str, end: Option<&str>) -> NewMedication {
        NewMedication {
            name: name.to_string(),
            dosage: "5mg".to_string(),
            frequency: Frequency::Daily,
            start_date: NaiveDate::parse_from_str(start, "%Y-%m-%d").unwrap(),
            end_date: end.map(|e| NaiveDate::parse_from_str(e, "%Y-%m-%d").unwrap()),
            times_per_day: 2,
            reminder_times: vec![
                NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
                NaiveTime::from_hms_opt(20, 0, 0).unwrap(),
            ],
        }
    }

    #[test]
    fn test_insert_and_list_all() {
        let mut conn = setup_test_db();
        let id = insert_medication(&mut conn, &sample("Amlodipine", "2024-01-01", None)).unwrap();
        assert!(id > 0);

        let meds = list_all(&conn).unwrap();
        assert_eq!(meds.len(), 1);
        assert_eq!(meds[0].name, "Amlodipine");
        assert_eq!(meds[0].dosage, "5mg");
        assert_eq!(meds[0].frequency, Frequency::Daily);
        assert_eq!(meds[0].times_per_day, 2);
        assert_eq!(
            meds[0].reminder_times,
            vec![
                NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
                NaiveTime::from_hms_opt(20, 0, 0).unwrap(),
            ]
        );
    }

    #[test]
    fn test_empty_name_rejected_without_writing() {
        let mut conn = setup_test_db();
        let med = sample("  ", "2024-01-01", None);

        let result = insert_medication(&mut conn, &med);
        assert!(matches!(
            result,
            Err(AppError::Validation(ValidationError::MissingName))
        ));

        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM medications", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 0);
    }

    #[test]
    fn test_times_per_day_out_of_range_rejected() {
        let mut conn = setup_test_db();
        let mut med = sample("Aspirin", "2024-01-01", None);
        med.times_per_day = 11;
        assert!(insert_medication(&mut conn, &med).is_err());
    }

    #[test]
    fn test_end_before_start_rejected() {
        let mut conn = setup_test_db();
        let med = sample("Aspirin", "2024-02-01", Some("2024-01-01"));
        assert!(insert_medication(&mut conn, &med).is_err());
    }

    #[test]
    fn test_active_window_inclusive() {
        let mut conn = setup_test_db();
        insert_medication(&mut conn, &sample("Bounded", "2024-01-10", Some("2024-01-20"))).unwrap();
        insert_medication(&mut conn, &sample("OpenEnded", "2024-01-15", None)).unwrap();

        let on = |d: &str| {
            list_active_on(&conn, NaiveDate::parse_from_str(d, "%Y-%m-%d").unwrap())
                .unwrap()
                .into_iter()
                .map(|m| m.name)
                .collect::<Vec<_>>()
        };

        assert_eq!(on("2024-01-09"), Vec::<String>::new());
        assert_eq!(on("2024-01-10"), vec!["Bounded"]);
        assert_eq!(on("2024-01-20"), vec!["Bounded", "OpenEnded"]);
        assert_eq!(on("2024-01-21"), vec!["OpenEnded"]);
        assert_eq!(on("2030-06-01"), vec!["OpenEnded"]);
    }

    #[test]
    fn test_name_exists() {
        let mut conn = setup_test_db();
        insert_medication(&mut conn, &sample("Amlodipine", "2024-01-01", None)).unwrap();

        assert!(name_exists(&conn, "Amlodipine").unwrap());
        assert!(!name_exists(&conn, "Metformin").unwrap());
    }

    #[test]
    fn test_frequency_round_trip() {
        for freq in [
            Frequency::Daily,
            Frequency::EveryOtherDay,
            Frequency::Weekly,
            Frequency::AsNeeded,
        ] {
            assert_eq!(freq.to_string().parse::<Frequency>().unwrap(), freq);
        }
        assert!("Twice a fortnight".parse::<Frequency>().is_err());
    }
}
