//! Data model types for the movie catalog.
//!
//! Categories are reference data; movies each belong to exactly one category,
//! which is embedded by value when a movie is read back from storage.

use serde::{Deserialize, Serialize};

// ── Category ────────────────────────────────────────────────────────────────

/// A named grouping that every movie belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

impl Category {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

// ── Movie ───────────────────────────────────────────────────────────────────

/// A stored catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    /// Assigned by storage on insert.
    pub id: i64,
    pub name: String,
    /// Release year.
    pub year: i64,
    /// Runtime in minutes.
    pub minutes: i64,
    pub category: Category,
}

/// A movie that has not been stored yet.
///
/// The category is referenced by key; storage resolves it into the embedded
/// [`Category`] when the movie is read back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewMovie {
    pub name: String,
    pub year: i64,
    pub minutes: i64,
    pub category_id: i64,
}

impl NewMovie {
    pub fn new(name: impl Into<String>, year: i64, minutes: i64, category_id: i64) -> Self {
        Self {
            name: name.into(),
            year,
            minutes,
            category_id,
        }
    }

    /// Attach a storage id and resolved category, producing the stored record.
    pub fn into_movie(self, id: i64, category: Category) -> Movie {
        Movie {
            id,
            name: self.name,
            year: self.year,
            minutes: self.minutes,
            category,
        }
    }
}
