/*!
# Medilog

Medilog is a personal medication reminder and health journal. It keeps a
roster of medications with dosing schedules, records daily symptoms and
medication adherence, and produces simple trend summaries plus a PDF report,
all backed by a single local SQLite database.

## Core Features

- Register medications with frequency, date range, and reminder times
- Dashboard partitioning today's reminders into pending and taken
- Append-only symptom log with severity and notes
- Severity series and adherence summary for a date range
- PDF export of the medication roster and health-log entries

## Architecture

The codebase follows a modular architecture with clear separation of concerns:

- `cli`: Command-line interface handling using clap
- `config`: Configuration loading and validation
- `db`: SQLite persistence (medications, health log, adherence)
- `errors`: Error handling infrastructure
- `ops`: One handler per command, wired to the store explicitly
- `report`: Aggregation and PDF rendering
- `schedule`: Pure reminder-time parsing and evaluation

## Usage Example

```rust,no_run
use medilog::db::Database;
use medilog::Config;

fn main() -> medilog::AppResult<()> {
    let config = Config::load()?;
    std::fs::create_dir_all(&config.data_dir)?;

    let db = Database::open(&config.db_path())?;
    db.initialize_schema()?;

    let today = chrono::Local::now().naive_local();
    medilog::ops::show_dashboard(&db, today.date(), today.time())
}
```
*/

/// Command-line interface for parsing and handling user arguments
pub mod cli;
/// Configuration loading and management
pub mod config;
/// Constants used throughout the application
pub mod constants;
/// SQLite persistence for medications and the health log
pub mod db;
/// Error types and utilities for error handling
pub mod errors;
/// High-level operations behind the CLI commands
pub mod ops;
/// Report aggregation and PDF rendering
pub mod report;
/// Reminder-time parsing and schedule evaluation
pub mod schedule;

// Re-export important types for convenience
pub use cli::Cli;
pub use config::Config;
pub use db::Database;
pub use errors::{AppError, AppResult};
