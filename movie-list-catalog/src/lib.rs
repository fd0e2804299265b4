//! Movie catalog data model types and field validation.
//!
//! This crate defines the records the catalog stores without any database
//! dependencies. Consumers can use these types directly for display, or pass
//! them to `movie-list-db` for persistence.

pub mod types;
pub mod validate;

pub use types::*;
pub use validate::ValidationError;
