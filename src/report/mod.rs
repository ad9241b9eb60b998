//! Report aggregation over the health log.
//!
//! Produces the raw series and counts the reports view renders; charting
//! itself is left to external tooling. PDF rendering lives in the `pdf`
//! submodule.

pub mod pdf;

use crate::db::{health_log, Database};
use crate::errors::AppResult;
use chrono::NaiveDate;
use tracing::debug;

/// One point of the symptom-severity series.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesPoint {
    pub date: NaiveDate,
    pub symptom: Option<String>,
    pub severity: Option<u8>,
}

/// Returns the (date, symptom, severity) series for the given range,
/// ordered by date ascending.
///
/// # Errors
///
/// Returns an error if the database operation fails.
pub fn severity_series(
    db: &Database,
    start: NaiveDate,
    end: NaiveDate,
) -> AppResult<Vec<SeriesPoint>> {
    debug!("Building severity series from {} to {}", start, end);

    let conn = db.get_conn()?;
    let entries = health_log::list_in_range(&conn, start, end)?;

    Ok(entries
        .into_iter()
        .map(|e| SeriesPoint {
            date: e.date,
            symptom: e.symptom,
            severity: e.severity,
        })
        .collect())
}

/// Counts distinct days with at least one recorded taken medication.
///
/// # Errors
///
/// Returns an error if the database operation fails.
pub fn adherence_summary(db: &Database) -> AppResult<u32> {
    let conn = db.get_conn()?;
    health_log::adherence_day_count(&conn)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn setup_db(temp_dir: &TempDir) -> Database {
        let db = Database::open(&temp_dir.path().join("test.db")).unwrap();
        db.initialize_schema().unwrap();
        db
    }

    #[test]
    fn test_severity_series_ordered_ascending() {
        let temp_dir = TempDir::new().unwrap();
        let db = setup_db(&temp_dir);
        let conn = db.get_conn().unwrap();

        health_log::insert_symptom_entry(&conn, date("2024-01-07"), "Fatigue", Some(3), None)
            .unwrap();
        health_log::insert_symptom_entry(&conn, date("2024-01-05"), "Headache", Some(6), None)
            .unwrap();

        let series = severity_series(&db, date("2024-01-01"), date("2024-01-31")).unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].date, date("2024-01-05"));
        assert_eq!(series[0].symptom.as_deref(), Some("Headache"));
        assert_eq!(series[0].severity, Some(6));
        assert_eq!(series[1].date, date("2024-01-07"));
    }

    #[test]
    fn test_severity_series_respects_range() {
        let temp_dir = TempDir::new().unwrap();
        let db = setup_db(&temp_dir);
        let conn = db.get_conn().unwrap();

        health_log::insert_symptom_entry(&conn, date("2024-01-05"), "Headache", Some(6), None)
            .unwrap();

        let series = severity_series(&db, date("2024-02-01"), date("2024-02-28")).unwrap();
        assert!(series.is_empty());
    }

    #[test]
    fn test_adherence_summary_counts_days() {
        let temp_dir = TempDir::new().unwrap();
        let db = setup_db(&temp_dir);
        let conn = db.get_conn().unwrap();

        assert_eq!(adherence_summary(&db).unwrap(), 0);

        health_log::mark_taken(&conn, date("2024-01-05"), "Amlodipine").unwrap();
        health_log::mark_taken(&conn, date("2024-01-05"), "Metformin").unwrap();
        health_log::mark_taken(&conn, date("2024-01-06"), "Amlodipine").unwrap();

        assert_eq!(adherence_summary(&db).unwrap(), 2);
    }
}
