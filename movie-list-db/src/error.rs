use movie_list_catalog::ValidationError;
use thiserror::Error;

use crate::schema::SchemaError;

/// Errors returned by the repository and connection provider.
#[derive(Debug, Error)]
pub enum DbError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),
    #[error("Invalid movie: {0}")]
    Validation(#[from] ValidationError),
    #[error("There is no category with ID {0}")]
    UnknownCategory(i64),
    #[error("Database connection is closed")]
    Closed,
}
