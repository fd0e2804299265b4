use movie_list_db::{Database, DbError, MovieRepository};
use tempfile::TempDir;

#[test]
fn connect_creates_file() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("movies.sqlite");
    let db = Database::connect(&path).unwrap();
    assert!(db.is_open());
    assert_eq!(db.path(), Some(path.as_path()));
    assert!(path.exists());
}

#[test]
fn connect_fails_for_missing_directory() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("no-such-dir").join("movies.sqlite");
    assert!(Database::connect(&path).is_err());
}

#[test]
fn rows_are_addressable_by_column_name() {
    let db = Database::open_memory().unwrap();
    let conn = db.connection().unwrap();
    conn.execute("INSERT INTO Category (categoryID, name) VALUES (1, 'Comedy')", [])
        .unwrap();
    let name: String = conn
        .query_row("SELECT name FROM Category WHERE categoryID = 1", [], |row| {
            row.get("name")
        })
        .unwrap();
    assert_eq!(name, "Comedy");
}

#[test]
fn close_is_idempotent() {
    let mut db = Database::open_memory().unwrap();
    db.close();
    db.close();
    assert!(!db.is_open());
}

#[test]
fn connection_after_close_is_an_error() {
    let mut db = Database::open_memory().unwrap();
    db.close();
    assert!(matches!(db.connection(), Err(DbError::Closed)));
}

#[test]
fn repository_over_closed_database_reports_closed() {
    let mut db = Database::open_memory().unwrap();
    db.close();
    let repo = MovieRepository::new(db);
    assert!(matches!(repo.categories(), Err(DbError::Closed)));
    assert!(matches!(repo.category(1), Err(DbError::Closed)));
    assert!(matches!(repo.delete_movie(1), Err(DbError::Closed)));
    repo.close();
}

#[test]
fn data_survives_reopen() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("movies.sqlite");

    let repo = MovieRepository::open(&path).unwrap();
    let added = repo
        .add_movie(&movie_list_catalog::NewMovie::new("Toy Story", 1995, 81, 1))
        .unwrap();
    repo.close();

    let repo = MovieRepository::open(&path).unwrap();
    let found = repo.movie(added.id).unwrap().unwrap();
    assert_eq!(found, added);
    assert_eq!(found.category.name, "Animation");
}
