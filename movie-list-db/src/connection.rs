//! Connection provider: owns the single SQLite handle for the process.

use std::path::{Path, PathBuf};

use rusqlite::Connection;

use crate::error::DbError;
use crate::schema;

/// A handle to the movie database file.
///
/// Rows read through this connection are addressable by column name as well
/// as by position. The handle is released by [`Database::close`] or on drop.
pub struct Database {
    conn: Option<Connection>,
    path: Option<PathBuf>,
}

impl Database {
    /// Open (or create) the database file at `path`.
    pub fn connect(path: &Path) -> Result<Self, DbError> {
        let conn = schema::open_database(path)?;
        log::debug!("Opened movie database {}", path.display());
        Ok(Self {
            conn: Some(conn),
            path: Some(path.to_path_buf()),
        })
    }

    /// An in-memory database with the schema and no rows.
    pub fn open_memory() -> Result<Self, DbError> {
        let conn = schema::open_memory()?;
        Ok(Self {
            conn: Some(conn),
            path: None,
        })
    }

    /// Borrow the live connection.
    pub fn connection(&self) -> Result<&Connection, DbError> {
        self.conn.as_ref().ok_or(DbError::Closed)
    }

    pub fn is_open(&self) -> bool {
        self.conn.is_some()
    }

    /// File backing this database, `None` when in memory.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Release the handle. Calling this on a closed database does nothing.
    pub fn close(&mut self) {
        let Some(conn) = self.conn.take() else {
            return;
        };
        match conn.close() {
            Ok(()) => log::debug!("Closed movie database"),
            Err((_conn, e)) => log::warn!("Failed to close movie database cleanly: {}", e),
        }
    }
}

impl Drop for Database {
    fn drop(&mut self) {
        self.close();
    }
}
