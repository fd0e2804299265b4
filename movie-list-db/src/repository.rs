//! The repository object that command handlers are given.
//!
//! Read operations live in [`crate::queries`], writes in
//! [`crate::operations`]; both are methods on [`MovieRepository`].

use std::path::Path;

use rusqlite::Connection;

use crate::connection::Database;
use crate::error::DbError;

/// Catalog operations over one open [`Database`].
pub struct MovieRepository {
    db: Database,
}

impl MovieRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Open the database file at `path` and wrap it.
    pub fn open(path: &Path) -> Result<Self, DbError> {
        Database::connect(path).map(Self::new)
    }

    /// An empty in-memory catalog. Useful for testing.
    pub fn open_memory() -> Result<Self, DbError> {
        Database::open_memory().map(Self::new)
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    pub(crate) fn conn(&self) -> Result<&Connection, DbError> {
        self.db.connection()
    }

    /// Close the underlying database.
    pub fn close(mut self) {
        self.db.close();
    }
}
