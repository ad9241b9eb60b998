//! Command-line interface for the medilog application.
//!
//! Each subcommand maps to one handler in the `ops` module, replacing the
//! page-selector dispatch of a monolithic UI with an explicit command router.

use crate::constants::{APP_DESCRIPTION, APP_NAME, DATE_FORMAT_COMPACT, DATE_FORMAT_ISO};
use crate::errors::ParseError;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// A personal medication reminder and health journal
#[derive(Parser, Debug)]
#[command(name = APP_NAME, about = APP_DESCRIPTION, version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Override the data directory (defaults to MEDILOG_DIR or ~/.medilog)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Print verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show today's medications with pending and taken reminder times
    Dashboard,

    /// Register a new medication
    Add {
        /// Medication name, e.g. "Amlodipine"
        #[arg(long)]
        name: String,

        /// Dosage, e.g. "5mg"
        #[arg(long)]
        dosage: String,

        /// One of: Daily, Every other day, Weekly, As needed
        #[arg(long, default_value = "Daily")]
        frequency: String,

        /// How many times per day (1-10)
        #[arg(long, default_value_t = 1)]
        times_per_day: u32,

        /// Reminder times, 24-hour HH:MM comma separated, e.g. "08:00, 20:00"
        #[arg(long)]
        times: String,

        /// Start date (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        start: Option<String>,

        /// End date (YYYY-MM-DD, optional; absent means open-ended)
        #[arg(long)]
        end: Option<String>,
    },

    /// Mark a medication as taken
    Take {
        /// Name of the registered medication
        name: String,

        /// Date to mark (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<String>,
    },

    /// Record a symptom entry and show recent entries
    Log {
        /// Symptom description, e.g. "Headache"
        #[arg(long)]
        symptom: String,

        /// Severity from 1 to 10
        #[arg(long)]
        severity: Option<u8>,

        /// Additional notes
        #[arg(long)]
        notes: Option<String>,

        /// Entry date (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<String>,
    },

    /// Print the severity series and adherence summary
    Report {
        /// Range start (YYYY-MM-DD, defaults to all history)
        #[arg(long)]
        from: Option<String>,

        /// Range end (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        to: Option<String>,
    },

    /// Export a PDF health report
    Export {
        /// Range start (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        from: Option<String>,

        /// Range end (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        to: Option<String>,

        /// Output directory (defaults to the current directory)
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

/// Parses a user-supplied date in YYYY-MM-DD or YYYYMMDD format.
///
/// # Errors
///
/// Returns `ParseError::Date` naming the input if neither format matches.
pub fn parse_date(date_str: &str) -> Result<NaiveDate, ParseError> {
    NaiveDate::parse_from_str(date_str, DATE_FORMAT_ISO)
        .or_else(|_| NaiveDate::parse_from_str(date_str, DATE_FORMAT_COMPACT))
        .map_err(|_| ParseError::Date(date_str.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashboard_command() {
        let cli = Cli::parse_from(vec!["medilog", "dashboard"]);
        assert!(matches!(cli.command, Command::Dashboard));
        assert!(!cli.verbose);
        assert!(cli.data_dir.is_none());
    }

    #[test]
    fn test_add_command_with_defaults() {
        let cli = Cli::parse_from(vec![
            "medilog", "add", "--name", "Amlodipine", "--dosage", "5mg", "--times", "08:00, 20:00",
        ]);
        match cli.command {
            Command::Add {
                name,
                dosage,
                frequency,
                times_per_day,
                times,
                start,
                end,
            } => {
                assert_eq!(name, "Amlodipine");
                assert_eq!(dosage, "5mg");
                assert_eq!(frequency, "Daily");
                assert_eq!(times_per_day, 1);
                assert_eq!(times, "08:00, 20:00");
                assert!(start.is_none());
                assert!(end.is_none());
            }
            _ => panic!("Expected Add command"),
        }
    }

    #[test]
    fn test_take_command() {
        let cli = Cli::parse_from(vec!["medilog", "take", "Amlodipine", "--date", "2024-01-05"]);
        match cli.command {
            Command::Take { name, date } => {
                assert_eq!(name, "Amlodipine");
                assert_eq!(date.as_deref(), Some("2024-01-05"));
            }
            _ => panic!("Expected Take command"),
        }
    }

    #[test]
    fn test_log_command() {
        let cli = Cli::parse_from(vec![
            "medilog", "log", "--symptom", "Headache", "--severity", "6",
        ]);
        match cli.command {
            Command::Log {
                symptom,
                severity,
                notes,
                date,
            } => {
                assert_eq!(symptom, "Headache");
                assert_eq!(severity, Some(6));
                assert!(notes.is_none());
                assert!(date.is_none());
            }
            _ => panic!("Expected Log command"),
        }
    }

    #[test]
    fn test_log_command_rejects_non_integer_severity() {
        let result = Cli::try_parse_from(vec!["medilog", "log", "--symptom", "X", "--severity", "bad"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_export_command() {
        let cli = Cli::parse_from(vec![
            "medilog", "export", "--from", "2024-01-01", "--to", "2024-01-31", "--out", "/tmp/out",
        ]);
        match cli.command {
            Command::Export { from, to, out } => {
                assert_eq!(from.as_deref(), Some("2024-01-01"));
                assert_eq!(to.as_deref(), Some("2024-01-31"));
                assert_eq!(out, Some(PathBuf::from("/tmp/out")));
            }
            _ => panic!("Expected Export command"),
        }
    }

    #[test]
    fn test_global_data_dir_flag() {
        let cli = Cli::parse_from(vec!["medilog", "--data-dir", "/tmp/data", "dashboard"]);
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/data")));
    }

    #[test]
    fn test_parse_date_both_formats() {
        use chrono::Datelike;

        let iso = parse_date("2023-01-15").unwrap();
        assert_eq!((iso.year(), iso.month(), iso.day()), (2023, 1, 15));

        let compact = parse_date("20230115").unwrap();
        assert_eq!(compact, iso);

        assert!(parse_date("invalid-date").is_err());
        assert!(parse_date("01/15/2023").is_err());
    }
}
