/*!
# Medilog - Medication Reminder & Health Journal

Command-line entry point. Coordinates the application flow: initializes
logging, parses arguments, loads configuration, opens the database, and
dispatches to the handler for the chosen subcommand.

## Usage

```text
medilog <COMMAND>

Commands:
  dashboard  Show today's medications with pending and taken reminder times
  add        Register a new medication
  take       Mark a medication as taken
  log        Record a symptom entry and show recent entries
  report     Print the severity series and adherence summary
  export     Export a PDF health report
```

## Configuration

- `MEDILOG_DIR`: data directory holding the database (defaults to ~/.medilog);
  `--data-dir` overrides it per invocation.
*/

use chrono::{Local, NaiveDate};
use medilog::cli::{parse_date, Cli, Command};
use medilog::db::Database;
use medilog::errors::AppResult;
use medilog::{ops, Config};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> AppResult<()> {
    let cli = Cli::parse_args();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("Starting medilog");

    // Obtain current date/time once at the beginning
    let now = Local::now().naive_local();
    let today = now.date();

    let mut config = Config::load()?;
    if let Some(data_dir) = cli.data_dir {
        config.data_dir = data_dir;
    }
    config.validate()?;
    debug!("Configuration loaded");

    std::fs::create_dir_all(&config.data_dir)?;
    let db = Database::open(&config.db_path())?;
    db.initialize_schema()?;

    match cli.command {
        Command::Dashboard => ops::show_dashboard(&db, today, now.time()),
        Command::Add {
            name,
            dosage,
            frequency,
            times_per_day,
            times,
            start,
            end,
        } => {
            let med = medilog::db::medications::NewMedication {
                name,
                dosage,
                frequency: frequency.parse()?,
                start_date: parse_date_or(start.as_deref(), today)?,
                end_date: end.as_deref().map(parse_date).transpose()?,
                times_per_day,
                reminder_times: medilog::schedule::parse_reminder_times(&times)?,
            };
            ops::add_medication(&db, &med)
        }
        Command::Take { name, date } => {
            let date = parse_date_or(date.as_deref(), today)?;
            ops::mark_taken_today(&db, date, &name)
        }
        Command::Log {
            symptom,
            severity,
            notes,
            date,
        } => {
            let date = parse_date_or(date.as_deref(), today)?;
            ops::record_symptom(&db, date, &symptom, severity, notes.as_deref())
        }
        Command::Report { from, to } => {
            // Default to all history; the epoch is safely before any entry.
            let start = match from.as_deref() {
                Some(s) => parse_date(s)?,
                None => NaiveDate::from_ymd_opt(1970, 1, 1).unwrap_or(today),
            };
            let end = parse_date_or(to.as_deref(), today)?;
            ops::show_report(&db, start, end)
        }
        Command::Export { from, to, out } => {
            let start = parse_date_or(from.as_deref(), today)?;
            let end = parse_date_or(to.as_deref(), today)?;
            let out_dir = out.unwrap_or_else(|| std::path::PathBuf::from("."));
            ops::export_report(&db, start, end, &out_dir, today)
        }
    }
}

fn parse_date_or(date_str: Option<&str>, default: NaiveDate) -> AppResult<NaiveDate> {
    match date_str {
        Some(s) => Ok(parse_date(s)?),
        None => Ok(default),
    }
}
