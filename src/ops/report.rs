//! On-screen reports: severity series and adherence summary.

use crate::db::Database;
use crate::errors::AppResult;
use crate::report;
use chrono::NaiveDate;
use tracing::info;

/// Prints the symptom-severity series for the range and the adherence
/// summary.
///
/// # Errors
///
/// Returns an error if a database operation fails.
pub fn show_report(db: &Database, start: NaiveDate, end: NaiveDate) -> AppResult<()> {
    info!("Building report from {} to {}", start, end);

    let series = report::severity_series(db, start, end)?;
    if series.is_empty() {
        println!("No data available for reports yet.");
        return Ok(());
    }

    println!("Symptom severity over time:");
    for point in &series {
        println!(
            "  {}  {}  severity {}",
            point.date,
            point.symptom.as_deref().unwrap_or("-"),
            point
                .severity
                .map(|s| s.to_string())
                .unwrap_or_else(|| "-".to_string()),
        );
    }

    let adherence_days = report::adherence_summary(db)?;
    if adherence_days > 0 {
        println!();
        println!("Medication adherence: {} days logged", adherence_days);
    }
    Ok(())
}
