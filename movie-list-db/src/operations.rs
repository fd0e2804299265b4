//! Write operations for the movie catalog.
//!
//! Each write runs in its own transaction and commits immediately. On a
//! storage error the transaction is rolled back, the error is logged, and the
//! original error is returned.

use movie_list_catalog::{Movie, NewMovie};
use rusqlite::{Connection, params};

use crate::error::DbError;
use crate::repository::MovieRepository;

impl MovieRepository {
    /// Validate and insert a movie. Returns the stored movie with its new id.
    ///
    /// Nothing is written unless every field is valid and the category exists.
    pub fn add_movie(&self, movie: &NewMovie) -> Result<Movie, DbError> {
        movie.validate()?;
        let category = self
            .category(movie.category_id)?
            .ok_or(DbError::UnknownCategory(movie.category_id))?;

        let conn = self.conn()?;
        let id = write_with_rollback(conn, "insert movie", |conn| {
            conn.execute(
                "INSERT INTO Movie (categoryID, name, year, minutes) VALUES (?1, ?2, ?3, ?4)",
                params![movie.category_id, movie.name, movie.year, movie.minutes],
            )?;
            Ok(conn.last_insert_rowid())
        })?;

        log::debug!("Inserted movie {} as id {}", movie.name, id);
        Ok(movie.clone().into_movie(id, category))
    }

    /// Delete a movie by id. Returns the number of rows removed (0 or 1).
    pub fn delete_movie(&self, movie_id: i64) -> Result<usize, DbError> {
        let conn = self.conn()?;
        let removed = write_with_rollback(conn, "delete movie", |conn| {
            conn.execute("DELETE FROM Movie WHERE movieID = ?1", params![movie_id])
        })?;

        if removed == 0 {
            log::debug!("No movie with id {} to delete", movie_id);
        }
        Ok(removed)
    }
}

/// Run `f` inside `BEGIN`/`COMMIT`.
///
/// On failure a still-open transaction is rolled back; a rollback failure is
/// logged and the original error is returned.
fn write_with_rollback<T>(
    conn: &Connection,
    action: &str,
    f: impl FnOnce(&Connection) -> rusqlite::Result<T>,
) -> Result<T, DbError> {
    let result = conn
        .execute_batch("BEGIN")
        .and_then(|()| f(conn))
        .and_then(|value| conn.execute_batch("COMMIT").map(|()| value));

    match result {
        Ok(value) => Ok(value),
        Err(e) => {
            if !conn.is_autocommit() {
                if let Err(rollback) = conn.execute_batch("ROLLBACK") {
                    log::error!("Failed to roll back transaction after {} failure: {}", action, rollback);
                }
            }
            log::error!("Failed to {}: {}", action, e);
            Err(e.into())
        }
    }
}
