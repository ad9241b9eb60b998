//! Constants used throughout the application.
//!
//! This module contains all constants used in the medilog application,
//! organized into logical groups. Having constants centralized makes them
//! easier to find, modify, and reference consistently.

// Application Metadata
/// The name of the application.
pub const APP_NAME: &str = "medilog";
/// The description of the application used in CLI help text.
pub const APP_DESCRIPTION: &str = "A personal medication reminder and health journal";

// Configuration Keys & Environment Variables
/// Environment variable for specifying the medilog data directory.
pub const ENV_VAR_MEDILOG_DIR: &str = "MEDILOG_DIR";
/// Default data directory relative to the user's home directory.
pub const DEFAULT_DATA_DIR: &str = "~/.medilog";
/// File name of the SQLite database inside the data directory.
pub const DB_FILE_NAME: &str = "health_log.db";

// Date/Time Logic
/// Date format string for ISO date format (YYYY-MM-DD).
pub const DATE_FORMAT_ISO: &str = "%Y-%m-%d";
/// Date format string for compact date format (YYYYMMDD).
pub const DATE_FORMAT_COMPACT: &str = "%Y%m%d";
/// Zero-padded 24-hour time format used for reminder times.
pub const TIME_FORMAT: &str = "%H:%M";
/// Separator used when rendering a list of reminder times.
pub const REMINDER_TIME_SEPARATOR: &str = ", ";
/// Date format used in the dashboard day header.
pub const DASHBOARD_DATE_FORMAT: &str = "%A, %B %d, %Y";

// Validation Ranges
/// Minimum allowed doses per day for a medication.
pub const TIMES_PER_DAY_MIN: u32 = 1;
/// Maximum allowed doses per day for a medication.
pub const TIMES_PER_DAY_MAX: u32 = 10;
/// Minimum allowed symptom severity.
pub const SEVERITY_MIN: u8 = 1;
/// Maximum allowed symptom severity.
pub const SEVERITY_MAX: u8 = 10;

// Health Log
/// Number of entries shown in the recent-entries listing.
pub const RECENT_ENTRIES_LIMIT: u32 = 10;

// PDF Report
/// File name prefix for exported PDF reports.
pub const REPORT_FILE_PREFIX: &str = "health_report_";
/// Title rendered at the top of the PDF report.
pub const REPORT_TITLE: &str = "Health & Medication Report";
