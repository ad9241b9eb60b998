//! Error handling utilities for the medilog application.
//!
//! This module provides the central error type `AppError` which represents all
//! possible error conditions that might occur in the application, as well as
//! the convenience type alias `AppResult` for functions that can return these
//! errors.

use crate::constants::{SEVERITY_MAX, SEVERITY_MIN, TIMES_PER_DAY_MAX, TIMES_PER_DAY_MIN};
use chrono::NaiveDate;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Represents validation failures on user-submitted medication or log fields.
///
/// A validation error means no row was written: the submission is rejected
/// before it reaches the store.
///
/// # Examples
///
/// ```
/// use medilog::errors::ValidationError;
///
/// let error = ValidationError::MissingName;
/// assert!(format!("{}", error).contains("name"));
/// ```
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Medication name was empty or whitespace-only.
    #[error("Medication name is required. Please provide a non-empty name.")]
    MissingName,

    /// Dosage was empty or whitespace-only.
    #[error("Dosage is required. Please provide a non-empty dosage, e.g. '5mg'.")]
    MissingDosage,

    /// No reminder times were supplied for the medication.
    #[error("At least one reminder time is required, e.g. '08:00, 20:00'.")]
    MissingReminderTimes,

    /// Symptom text was empty or whitespace-only.
    #[error("Symptom is required. Please describe the symptom, e.g. 'Headache'.")]
    MissingSymptom,

    /// The times-per-day value fell outside the accepted range.
    #[error("Times per day must be between {TIMES_PER_DAY_MIN} and {TIMES_PER_DAY_MAX}, got {0}.")]
    TimesPerDayOutOfRange(u32),

    /// The severity value fell outside the accepted range.
    #[error("Severity must be between {SEVERITY_MIN} and {SEVERITY_MAX}, got {0}.")]
    SeverityOutOfRange(u8),

    /// The frequency string did not name a known frequency.
    #[error("Unknown frequency '{0}'. Expected one of: Daily, Every other day, Weekly, As needed.")]
    UnknownFrequency(String),

    /// The medication name does not match any registered medication.
    #[error("No medication named '{0}' is registered. Add it first with 'medilog add'.")]
    UnknownMedication(String),

    /// The end date precedes the start date.
    #[error("End date {end} is before start date {start}.")]
    EndBeforeStart {
        /// The medication's start date.
        start: NaiveDate,
        /// The offending end date.
        end: NaiveDate,
    },
}

/// Represents failures to parse user-supplied date or time strings.
///
/// Malformed input fails closed with one of these variants rather than being
/// stored verbatim.
///
/// # Examples
///
/// ```
/// use medilog::errors::ParseError;
///
/// let error = ParseError::ReminderTime("9:00".to_string());
/// assert!(format!("{}", error).contains("9:00"));
/// ```
#[derive(Debug, Error)]
pub enum ParseError {
    /// A reminder time was not a zero-padded 24-hour "HH:MM" value.
    #[error("Invalid reminder time '{0}'. Expected zero-padded 24-hour HH:MM, e.g. '08:00'.")]
    ReminderTime(String),

    /// A date string was not in a supported format.
    #[error("Invalid date '{0}'. Expected YYYY-MM-DD or YYYYMMDD.")]
    Date(String),
}

/// Represents specific error cases that can occur during database operations.
///
/// This enum provides detailed, contextual error information for different
/// failure modes when interacting with the SQLite store.
///
/// # Examples
///
/// ```
/// use medilog::errors::DatabaseError;
///
/// let error = DatabaseError::NotFound("Medication with id 123 not found".to_string());
/// assert!(format!("{}", error).contains("not found"));
/// ```
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// SQLite database error.
    #[error("Database error: {0}\n\nIf you're seeing 'file is not a database', the database file may be corrupt or not a medilog database.")]
    Sqlite(#[from] rusqlite::Error),

    /// Connection pool error.
    #[error("Failed to get connection from pool: {0}\n\nThis may indicate database connection issues. Try closing other medilog instances.")]
    Pool(#[from] r2d2::Error),

    /// Requested row not found in database.
    #[error("Entry not found: {0}")]
    NotFound(String),
}

/// Represents failures while rendering or writing the PDF report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The PDF backend failed while building the document.
    #[error("PDF rendering failed: {0}")]
    Pdf(String),

    /// The finished report could not be written to disk.
    #[error("Failed to write report to {path}: {source}")]
    Write {
        /// Destination path of the report file.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },
}

/// Represents all possible errors that can occur in the medilog application.
///
/// This enum is the central error type used across the application, with
/// variants for different error categories. It uses `thiserror` for deriving
/// the `Error` trait implementation and formatted error messages.
///
/// # Examples
///
/// Creating a configuration error:
/// ```
/// use medilog::errors::AppError;
///
/// let error = AppError::Config("Missing data directory".to_string());
/// assert_eq!(format!("{}", error), "Configuration error: Missing data directory");
/// ```
///
/// Converting from an IO error:
/// ```
/// use medilog::errors::AppError;
/// use std::io::{self, ErrorKind};
///
/// let io_error = io::Error::new(ErrorKind::NotFound, "file not found");
/// let app_error: AppError = io_error.into();
///
/// match app_error {
///     AppError::Io(inner) => assert_eq!(inner.kind(), ErrorKind::NotFound),
///     _ => panic!("Expected Io variant"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Errors related to configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input/output errors from filesystem operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Errors from validating user-submitted fields.
    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationError),

    /// Errors from parsing user-supplied date or time strings.
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// Errors related to database operations.
    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),

    /// Errors related to PDF report generation.
    #[error("Report error: {0}")]
    Report(#[from] ReportError),
}

/// A type alias for `Result<T, AppError>` to simplify function signatures.
///
/// This type alias is used throughout the application to represent operations
/// that may fail with an `AppError`.
///
/// # Examples
///
/// ```
/// use medilog::errors::{AppError, AppResult};
///
/// fn might_fail() -> AppResult<String> {
///     if false {
///         return Err(AppError::Config("Something went wrong".to_string()));
///     }
///     Ok("Operation succeeded".to_string())
/// }
/// ```
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_from_io_error() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let app_error: AppError = io_error.into();

        match app_error {
            AppError::Io(inner) => assert_eq!(inner.kind(), io::ErrorKind::NotFound),
            _ => panic!("Expected AppError::Io variant"),
        }
    }

    #[test]
    fn test_app_error_from_validation_error() {
        let app_error: AppError = ValidationError::MissingName.into();
        assert!(format!("{}", app_error).starts_with("Invalid input:"));
    }

    #[test]
    fn test_app_error_from_database_error() {
        let db_error = DatabaseError::NotFound("row 7".to_string());
        let app_error: AppError = db_error.into();
        assert!(format!("{}", app_error).contains("row 7"));
    }

    #[test]
    fn test_parse_error_messages_name_the_input() {
        assert!(format!("{}", ParseError::ReminderTime("9:00".into())).contains("'9:00'"));
        assert!(format!("{}", ParseError::Date("01/05/2024".into())).contains("'01/05/2024'"));
    }

    #[test]
    fn test_validation_error_ranges_are_rendered() {
        let message = format!("{}", ValidationError::TimesPerDayOutOfRange(11));
        assert!(message.contains("1"));
        assert!(message.contains("10"));
        assert!(message.contains("11"));
    }
}
