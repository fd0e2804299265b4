//! SQLite persistence layer for the movie catalog.
//!
//! Provides schema creation, the connection provider, and the repository
//! that maps catalog operations onto SQL (via rusqlite with bundled feature).

pub mod connection;
pub mod error;
pub mod operations;
pub mod queries;
pub mod repository;
pub mod schema;

pub use connection::Database;
pub use error::DbError;
pub use repository::MovieRepository;
pub use schema::{SchemaError, open_database, open_memory};
