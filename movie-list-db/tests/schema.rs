use movie_list_db::schema::{CURRENT_VERSION, DEFAULT_CATEGORIES, create_schema, seed_default_categories};
use movie_list_db::{SchemaError, open_database, open_memory};
use tempfile::TempDir;

#[test]
fn create_schema_in_memory() {
    let conn = open_memory().unwrap();
    let version: i32 = conn
        .query_row(
            "SELECT COALESCE(MAX(version), 0) FROM schema_version",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(version, CURRENT_VERSION);
}

#[test]
fn schema_is_idempotent() {
    let conn = open_memory().unwrap();
    // Creating again should not error or duplicate the version row
    create_schema(&conn).unwrap();
    let rows: i32 = conn
        .query_row("SELECT COUNT(*) FROM schema_version", [], |row| row.get(0))
        .unwrap();
    assert_eq!(rows, 1);
}

#[test]
fn foreign_keys_enabled() {
    let conn = open_memory().unwrap();
    let fk: i32 = conn
        .query_row("PRAGMA foreign_keys", [], |row| row.get(0))
        .unwrap();
    assert_eq!(fk, 1);
}

#[test]
fn all_tables_exist() {
    let conn = open_memory().unwrap();
    for table in ["schema_version", "Category", "Movie"] {
        let exists: bool = conn
            .query_row(
                "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type='table' AND name=?1)",
                [table],
                |row| row.get(0),
            )
            .unwrap();
        assert!(exists, "table '{}' should exist", table);
    }
}

#[test]
fn memory_database_starts_empty() {
    let conn = open_memory().unwrap();
    let categories: i64 = conn
        .query_row("SELECT COUNT(*) FROM Category", [], |row| row.get(0))
        .unwrap();
    assert_eq!(categories, 0);
}

#[test]
fn new_file_is_seeded_once() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("movies.sqlite");

    let conn = open_database(&path).unwrap();
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM Category", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count as usize, DEFAULT_CATEGORIES.len());
    drop(conn);

    // Reopening must not seed again
    let conn = open_database(&path).unwrap();
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM Category", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count as usize, DEFAULT_CATEGORIES.len());
    assert_eq!(seed_default_categories(&conn).unwrap(), 0);
}

#[test]
fn existing_tables_are_adopted_without_seeding() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("legacy.sqlite");
    {
        let conn = rusqlite::Connection::open(&path).unwrap();
        conn.execute_batch(
            "CREATE TABLE Category (categoryID INTEGER PRIMARY KEY, name TEXT NOT NULL);
             CREATE TABLE Movie (movieID INTEGER PRIMARY KEY, categoryID INTEGER NOT NULL,
                                 name TEXT NOT NULL, year INTEGER NOT NULL, minutes INTEGER NOT NULL);
             INSERT INTO Category VALUES (7, 'Drama');
             INSERT INTO Movie VALUES (1, 7, 'Casablanca', 1942, 102);",
        )
        .unwrap();
    }

    let conn = open_database(&path).unwrap();
    let names: Vec<String> = conn
        .prepare("SELECT name FROM Category")
        .unwrap()
        .query_map([], |row| row.get(0))
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(names, vec!["Drama".to_string()]);

    let movies: i64 = conn
        .query_row("SELECT COUNT(*) FROM Movie", [], |row| row.get(0))
        .unwrap();
    assert_eq!(movies, 1);
}

#[test]
fn newer_schema_is_rejected() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("future.sqlite");
    {
        let conn = open_database(&path).unwrap();
        conn.execute(
            "INSERT INTO schema_version (version) VALUES (?1)",
            [CURRENT_VERSION + 1],
        )
        .unwrap();
    }

    match open_database(&path) {
        Err(SchemaError::VersionMismatch { expected, found }) => {
            assert_eq!(expected, CURRENT_VERSION);
            assert_eq!(found, CURRENT_VERSION + 1);
        }
        Err(e) => panic!("unexpected error: {e}"),
        Ok(_) => panic!("newer schema should be rejected"),
    }
}

#[test]
fn failed_seed_is_retried_on_next_open() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("broken.sqlite");
    {
        let conn = rusqlite::Connection::open(&path).unwrap();
        conn.execute_batch(
            "CREATE TABLE Category (categoryID INTEGER PRIMARY KEY, name TEXT NOT NULL,
                                    extra TEXT NOT NULL);",
        )
        .unwrap();
    }

    let err = open_database(&path).err().expect("seeding should fail");
    assert!(err.to_string().contains("NOT NULL"));

    // Nothing from the failed setup was committed
    {
        let conn = rusqlite::Connection::open(&path).unwrap();
        let versioned: bool = conn
            .query_row(
                "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type='table' AND name='schema_version')",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert!(!versioned);
        conn.execute_batch(
            "DROP TABLE Category;
             CREATE TABLE Category (categoryID INTEGER PRIMARY KEY, name TEXT NOT NULL);",
        )
        .unwrap();
    }

    let conn = open_database(&path).unwrap();
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM Category", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count as usize, DEFAULT_CATEGORIES.len());
}
