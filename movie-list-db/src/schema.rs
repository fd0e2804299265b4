//! SQLite schema creation and version tracking.

use rusqlite::Connection;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("Schema version mismatch: expected at most {expected}, found {found}")]
    VersionMismatch { expected: i32, found: i32 },
}

/// Current schema version. Increment when adding migrations.
pub const CURRENT_VERSION: i32 = 1;

/// Reference categories inserted into a freshly created database.
pub const DEFAULT_CATEGORIES: &[(i64, &str)] = &[(1, "Animation"), (2, "Comedy"), (3, "History")];

/// Create all tables and indexes if they don't exist.
///
/// This is idempotent — safe to call on an existing database.
pub fn create_schema(conn: &Connection) -> Result<(), SchemaError> {
    conn.execute_batch(SCHEMA_SQL)?;
    set_schema_version(conn, CURRENT_VERSION)?;
    Ok(())
}

/// Insert the default categories if the Category table is empty.
///
/// Returns the number of rows inserted.
pub fn seed_default_categories(conn: &Connection) -> Result<usize, SchemaError> {
    let existing: i64 = conn.query_row("SELECT COUNT(*) FROM Category", [], |row| row.get(0))?;
    if existing > 0 {
        return Ok(0);
    }

    let mut stmt = conn.prepare("INSERT INTO Category (categoryID, name) VALUES (?1, ?2)")?;
    for (id, name) in DEFAULT_CATEGORIES {
        stmt.execute(rusqlite::params![id, name])?;
    }
    Ok(DEFAULT_CATEGORIES.len())
}

/// Open or create a movie database at the given path.
///
/// A new file gets the full schema and the default categories. A file that
/// already holds movie tables but predates version tracking is adopted
/// without touching its rows.
pub fn open_database(path: &std::path::Path) -> Result<Connection, SchemaError> {
    let mut conn = Connection::open(path)?;
    conn.execute_batch("PRAGMA foreign_keys=ON;")?;

    let version = get_schema_version(&conn)?;
    if version > CURRENT_VERSION {
        return Err(SchemaError::VersionMismatch {
            expected: CURRENT_VERSION,
            found: version,
        });
    }
    if version == 0 {
        bootstrap(&mut conn, path)?;
    }

    Ok(conn)
}

/// Create the schema and seed or adopt in one transaction.
///
/// The version row is only committed together with the seed, so a failed
/// setup leaves the file unversioned and the next open retries it.
fn bootstrap(conn: &mut Connection, path: &std::path::Path) -> Result<(), SchemaError> {
    let tx = conn.transaction()?;
    let adopted = table_exists(&tx, "Movie")?;
    create_schema(&tx)?;
    if adopted {
        log::debug!("Adopted existing movie tables in {}", path.display());
    } else {
        let seeded = seed_default_categories(&tx)?;
        log::debug!("Created {} with {} categories", path.display(), seeded);
    }
    tx.commit()?;
    Ok(())
}

/// Open an in-memory database with the full schema and no rows. Useful for testing.
pub fn open_memory() -> Result<Connection, SchemaError> {
    let conn = Connection::open_in_memory()?;
    conn.execute_batch("PRAGMA foreign_keys=ON;")?;
    create_schema(&conn)?;
    Ok(conn)
}

fn table_exists(conn: &Connection, name: &str) -> Result<bool, SchemaError> {
    let exists = conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type='table' AND name=?1)",
        [name],
        |row| row.get(0),
    )?;
    Ok(exists)
}

/// Get the current schema version, or 0 if no schema exists.
fn get_schema_version(conn: &Connection) -> Result<i32, SchemaError> {
    if !table_exists(conn, "schema_version")? {
        return Ok(0);
    }

    let version: i32 = conn.query_row(
        "SELECT COALESCE(MAX(version), 0) FROM schema_version",
        [],
        |row| row.get(0),
    )?;
    Ok(version)
}

/// Record a schema version.
fn set_schema_version(conn: &Connection, version: i32) -> Result<(), SchemaError> {
    conn.execute(
        "INSERT INTO schema_version (version)
         SELECT ?1 WHERE NOT EXISTS (SELECT 1 FROM schema_version WHERE version = ?1)",
        [version],
    )?;
    Ok(())
}

const SCHEMA_SQL: &str = r#"
-- Schema version tracking
CREATE TABLE IF NOT EXISTS schema_version (
    version INTEGER NOT NULL,
    applied_at TEXT NOT NULL DEFAULT (datetime('now'))
);

-- Reference data, read-only to the application
CREATE TABLE IF NOT EXISTS Category (
    categoryID INTEGER PRIMARY KEY,
    name TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS Movie (
    movieID INTEGER PRIMARY KEY AUTOINCREMENT,
    categoryID INTEGER NOT NULL REFERENCES Category(categoryID),
    name TEXT NOT NULL,
    year INTEGER NOT NULL,
    minutes INTEGER NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_movie_category ON Movie(categoryID);
CREATE INDEX IF NOT EXISTS idx_movie_year ON Movie(year);
"#;
