//! High-level operations behind the CLI commands.
//!
//! Each former UI page maps to one handler module here: the dashboard, the
//! add-medication form, the mark-as-taken action, the health-log form, the
//! reports view, and the PDF export. Handlers receive the `Database` handle
//! explicitly and print their results to stdout.

pub mod add_medication;
pub mod dashboard;
pub mod export;
pub mod log;
pub mod report;
pub mod take;

// Re-export commonly used functions
pub use add_medication::add_medication;
pub use dashboard::show_dashboard;
pub use export::export_report;
pub use log::record_symptom;
pub use report::show_report;
pub use take::mark_taken_today;
