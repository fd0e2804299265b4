//! Read queries for the movie catalog.
//!
//! Every projection goes through the column aliases below, and rows are
//! decoded by those names in `row_to_category` / `row_to_movie`.

use movie_list_catalog::{Category, Movie};
use rusqlite::{Row, params};

use crate::error::DbError;
use crate::repository::MovieRepository;

/// Projection shared by the category queries.
macro_rules! category_select {
    () => {
        "SELECT categoryID AS categoryID, name AS categoryName FROM Category"
    };
}

/// Projection shared by the movie queries, joined to fill in the category name.
macro_rules! movie_select {
    () => {
        "SELECT m.movieID AS movieID, m.categoryID AS categoryID, c.name AS categoryName,
                m.name AS name, m.year AS year, m.minutes AS minutes
         FROM Movie m JOIN Category c ON c.categoryID = m.categoryID"
    };
}

pub const LIST_CATEGORIES: &str = category_select!();
pub const GET_CATEGORY: &str = concat!(category_select!(), " WHERE categoryID = ?1");
pub const MOVIES_BY_CATEGORY: &str =
    concat!(movie_select!(), " WHERE m.categoryID = ?1 ORDER BY m.movieID");
pub const MOVIES_BY_YEAR: &str =
    concat!(movie_select!(), " WHERE m.year = ?1 ORDER BY m.movieID");
pub const GET_MOVIE: &str = concat!(movie_select!(), " WHERE m.movieID = ?1");

impl MovieRepository {
    /// List all categories in storage order.
    pub fn categories(&self) -> Result<Vec<Category>, DbError> {
        log::debug!("Listing categories");
        let conn = self.conn()?;
        let mut stmt = conn.prepare_cached(LIST_CATEGORIES)?;
        let rows = stmt.query_map([], row_to_category)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// Look up one category. `None` when the id is unknown.
    pub fn category(&self, category_id: i64) -> Result<Option<Category>, DbError> {
        log::debug!("Looking up category {}", category_id);
        let conn = self.conn()?;
        let mut stmt = conn.prepare_cached(GET_CATEGORY)?;
        match stmt.query_row(params![category_id], row_to_category) {
            Ok(category) => Ok(Some(category)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// List the movies in a category.
    pub fn movies_by_category(&self, category_id: i64) -> Result<Vec<Movie>, DbError> {
        log::debug!("Listing movies in category {}", category_id);
        self.query_movies(MOVIES_BY_CATEGORY, category_id)
    }

    /// List the movies released in a year.
    pub fn movies_by_year(&self, year: i64) -> Result<Vec<Movie>, DbError> {
        log::debug!("Listing movies from {}", year);
        self.query_movies(MOVIES_BY_YEAR, year)
    }

    /// Look up one movie. `None` when the id is unknown.
    pub fn movie(&self, movie_id: i64) -> Result<Option<Movie>, DbError> {
        log::debug!("Looking up movie {}", movie_id);
        let conn = self.conn()?;
        let mut stmt = conn.prepare_cached(GET_MOVIE)?;
        match stmt.query_row(params![movie_id], row_to_movie) {
            Ok(movie) => Ok(Some(movie)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn query_movies(&self, sql: &str, key: i64) -> Result<Vec<Movie>, DbError> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare_cached(sql)?;
        let rows = stmt.query_map(params![key], row_to_movie)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }
}

pub(crate) fn row_to_category(row: &Row) -> rusqlite::Result<Category> {
    Ok(Category {
        id: row.get("categoryID")?,
        name: row.get("categoryName")?,
    })
}

pub(crate) fn row_to_movie(row: &Row) -> rusqlite::Result<Movie> {
    Ok(Movie {
        id: row.get("movieID")?,
        name: row.get("name")?,
        year: row.get("year")?,
        minutes: row.get("minutes")?,
        category: row_to_category(row)?,
    })
}
