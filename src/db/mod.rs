//! Database operations for medications and health-log entries.
//!
//! This module provides SQLite database operations for storing the medication
//! roster, symptom entries, and per-day adherence records. It uses connection
//! pooling via r2d2, and the `Database` handle is constructed explicitly and
//! passed to every operation that needs it.
//!
//! # Module Structure
//!
//! - `schema`: Table definitions and schema initialization
//! - `medications`: Medication roster CRUD
//! - `health_log`: Symptom entries and adherence records
//!
//! # Example
//!
//! ```no_run
//! use medilog::db::Database;
//! use std::path::Path;
//!
//! let db = Database::open(Path::new("/tmp/health_log.db"))?;
//! db.initialize_schema()?;
//! # Ok::<(), medilog::AppError>(())
//! ```

pub mod health_log;
pub mod medications;
pub mod schema;

use crate::errors::{AppResult, DatabaseError};
use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::Connection;
use std::path::Path;
use tracing::{debug, info};

/// Type alias for a pooled SQLite connection.
pub type PooledConnection = r2d2::PooledConnection<SqliteConnectionManager>;

/// Database handle with connection pooling.
///
/// Owns the single SQLite file backing the medication roster and health log.
/// All writes are immediately durable; there is no batching or caching layer.
pub struct Database {
    pool: Pool<SqliteConnectionManager>,
}

impl Database {
    /// Opens or creates the SQLite database at the given path.
    ///
    /// If the database file doesn't exist, it will be created.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or the connection pool
    /// cannot be initialized.
    pub fn open(db_path: &Path) -> AppResult<Self> {
        debug!("Opening database at: {:?}", db_path);

        let manager = SqliteConnectionManager::file(db_path);
        let pool = Pool::builder()
            .max_size(5)
            .connection_customizer(Box::new(ConnectionSetup))
            .build(manager)
            .map_err(DatabaseError::Pool)?;

        // Verify the file is usable before handing the pool out.
        let conn = pool.get().map_err(DatabaseError::Pool)?;
        conn.execute_batch("PRAGMA quick_check")
            .map_err(DatabaseError::Sqlite)?;
        drop(conn);

        info!("Database opened successfully");
        Ok(Database { pool })
    }

    /// Gets a connection from the pool.
    ///
    /// # Errors
    ///
    /// Returns an error if no connection is available or the pool is
    /// exhausted.
    pub fn get_conn(&self) -> AppResult<PooledConnection> {
        self.pool
            .get()
            .map_err(|e| DatabaseError::Pool(e).into())
    }

    /// Initializes the database schema.
    ///
    /// Creates all necessary tables and indexes if they don't exist. This is
    /// idempotent and safe to call on every process start.
    ///
    /// # Errors
    ///
    /// Returns an error if schema creation fails.
    pub fn initialize_schema(&self) -> AppResult<()> {
        let conn = self.get_conn()?;
        schema::create_tables(&conn)?;
        info!("Database schema initialized");
        Ok(())
    }
}

/// Connection customizer applying per-connection pragmas.
///
/// Foreign-key enforcement is per-connection in SQLite, so it must be enabled
/// on every connection the pool hands out.
#[derive(Debug)]
struct ConnectionSetup;

impl r2d2::CustomizeConnection<Connection, rusqlite::Error> for ConnectionSetup {
    fn on_acquire(&self, conn: &mut Connection) -> Result<(), rusqlite::Error> {
        conn.pragma_update(None, "foreign_keys", true)?;
        Ok(())
    }

    fn on_release(&self, _conn: Connection) {}
}
