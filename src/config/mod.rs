//! Configuration management for the medilog application.
//!
//! This module handles loading and validating configuration settings from
//! environment variables, with sensible defaults. It supports configuring the
//! data directory that holds the SQLite database.
//!
//! # Environment Variables
//!
//! - `MEDILOG_DIR`: Path to the data directory (defaults to `~/.medilog`,
//!   tilde-expanded)

use crate::constants::{DB_FILE_NAME, DEFAULT_DATA_DIR, ENV_VAR_MEDILOG_DIR};
use crate::errors::{AppError, AppResult};
use std::env;
use std::fmt;
use std::path::PathBuf;

/// Configuration for the medilog application.
///
/// This struct holds the configuration settings needed for the application:
/// the directory where the health-log database lives.
///
/// # Examples
///
/// Creating a configuration manually:
/// ```
/// use medilog::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     data_dir: PathBuf::from("/path/to/data"),
/// };
/// assert!(config.db_path().ends_with("health_log.db"));
/// ```
pub struct Config {
    /// Directory where the database file is stored.
    ///
    /// Loaded from the `MEDILOG_DIR` environment variable with a fallback to
    /// `~/.medilog` if not specified.
    pub data_dir: PathBuf,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("data_dir", &"[REDACTED_PATH]")
            .finish()
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Reads `MEDILOG_DIR`, falling back to the default data directory. A
    /// leading tilde is expanded to the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the configured directory is an empty
    /// string.
    pub fn load() -> AppResult<Self> {
        let raw = env::var(ENV_VAR_MEDILOG_DIR).unwrap_or_else(|_| DEFAULT_DATA_DIR.to_string());
        let expanded = shellexpand::tilde(&raw);
        let config = Config {
            data_dir: PathBuf::from(expanded.as_ref()),
        };
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the data directory path is empty.
    pub fn validate(&self) -> AppResult<()> {
        if self.data_dir.as_os_str().is_empty() {
            return Err(AppError::Config(
                "Data directory must not be empty. Set MEDILOG_DIR to a valid path.".to_string(),
            ));
        }
        Ok(())
    }

    /// Returns the path of the SQLite database file inside the data directory.
    pub fn db_path(&self) -> PathBuf {
        self.data_dir.join(DB_FILE_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_load_honors_env_var() {
        env::set_var(ENV_VAR_MEDILOG_DIR, "/custom/medilog/path");
        let config = Config::load().unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/custom/medilog/path"));
        env::remove_var(ENV_VAR_MEDILOG_DIR);
    }

    #[test]
    #[serial]
    fn test_load_default_expands_tilde() {
        env::remove_var(ENV_VAR_MEDILOG_DIR);
        let config = Config::load().unwrap();
        // The default is ~/.medilog; after expansion no tilde remains.
        assert!(!config.data_dir.to_string_lossy().starts_with('~'));
        assert!(config.data_dir.to_string_lossy().ends_with(".medilog"));
    }

    #[test]
    fn test_db_path_joins_file_name() {
        let config = Config {
            data_dir: PathBuf::from("/data"),
        };
        assert_eq!(config.db_path(), PathBuf::from("/data/health_log.db"));
    }

    #[test]
    fn test_validate_rejects_empty_dir() {
        let config = Config {
            data_dir: PathBuf::new(),
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_debug_redacts_path() {
        let config = Config {
            data_dir: PathBuf::from("/secret/location"),
        };
        let debug = format!("{:?}", config);
        assert!(!debug.contains("/secret/location"));
        assert!(debug.contains("REDACTED"));
    }
}
