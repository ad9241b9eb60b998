//! Today's reminder dashboard.

use crate::constants::DASHBOARD_DATE_FORMAT;
use crate::db::{health_log, medications, Database};
use crate::errors::AppResult;
use crate::schedule::{self, format_reminder_times};
use chrono::{NaiveDate, NaiveTime};
use tracing::info;

/// Prints today's active medications with their pending and taken times.
///
/// For each medication active on `today`, the reminder times are partitioned
/// against `now` and the day's taken set. With no active medications, a
/// friendly notice is printed instead.
///
/// # Errors
///
/// Returns an error if a database operation fails.
pub fn show_dashboard(db: &Database, today: NaiveDate, now: NaiveTime) -> AppResult<()> {
    info!("Showing dashboard for {}", today);

    let conn = db.get_conn()?;
    let meds = medications::list_active_on(&conn, today)?;

    if meds.is_empty() {
        println!("No medications scheduled for today. Enjoy your day!");
        return Ok(());
    }

    let taken_today = health_log::taken_on(&conn, today)?;

    println!("Today: {}", today.format(DASHBOARD_DATE_FORMAT));
    for med in &meds {
        let day = schedule::evaluate(&med.reminder_times, &med.name, &taken_today, now);

        println!();
        println!("{} - {}", med.name, med.dosage);
        println!(
            "  Frequency: {} ({}x/day)",
            med.frequency, med.times_per_day
        );
        if !day.pending.is_empty() {
            println!("  Pending: {}", format_reminder_times(&day.pending));
        }
        if !day.taken.is_empty() {
            println!("  Taken: {}", format_reminder_times(&day.taken));
        }
    }

    Ok(())
}
