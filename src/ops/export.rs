//! Exporting the PDF health report.

use crate::db::{health_log, medications, Database};
use crate::errors::{AppResult, ReportError};
use crate::report::pdf;
use chrono::NaiveDate;
use std::fs;
use std::path::Path;
use tracing::info;

/// Builds the PDF report for `[start, end]` and writes it to `out_dir`.
///
/// The medication table lists every medication ever registered; only the
/// health-log table is filtered by the range. The file is named
/// `health_report_<YYYYMMDD>.pdf` after the generation date.
///
/// # Errors
///
/// Returns an error if a database operation fails, the PDF cannot be
/// rendered, or the file cannot be written.
pub fn export_report(
    db: &Database,
    start: NaiveDate,
    end: NaiveDate,
    out_dir: &Path,
    generated_on: NaiveDate,
) -> AppResult<()> {
    info!("Exporting PDF report for {} to {}", start, end);

    let conn = db.get_conn()?;
    let meds = medications::list_all(&conn)?;
    let entries = health_log::list_in_range(&conn, start, end)?;
    drop(conn);

    let bytes = pdf::build_report(&meds, &entries, generated_on)?;

    fs::create_dir_all(out_dir)?;
    let path = out_dir.join(pdf::report_filename(generated_on));
    fs::write(&path, &bytes).map_err(|source| ReportError::Write {
        path: path.clone(),
        source,
    })?;

    println!("PDF report ready: {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::medications::{Frequency, NewMedication};
    use chrono::NaiveTime;
    use tempfile::TempDir;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_export_writes_named_pdf() {
        let temp_dir = TempDir::new().unwrap();
        let db = Database::open(&temp_dir.path().join("test.db")).unwrap();
        db.initialize_schema().unwrap();

        {
            let mut conn = db.get_conn().unwrap();
            medications::insert_medication(
                &mut conn,
                &NewMedication {
                    name: "Amlodipine".to_string(),
                    dosage: "5mg".to_string(),
                    frequency: Frequency::Daily,
                    start_date: date("2024-01-01"),
                    end_date: None,
                    times_per_day: 1,
                    reminder_times: vec![NaiveTime::from_hms_opt(8, 0, 0).unwrap()],
                },
            )
            .unwrap();
            health_log::insert_symptom_entry(&conn, date("2024-01-05"), "Headache", Some(6), None)
                .unwrap();
        }

        let out_dir = temp_dir.path().join("exports");
        export_report(
            &db,
            date("2024-01-01"),
            date("2024-01-31"),
            &out_dir,
            date("2024-02-01"),
        )
        .unwrap();

        let path = out_dir.join("health_report_20240201.pdf");
        let bytes = fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }
}
