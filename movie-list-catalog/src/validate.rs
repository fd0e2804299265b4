//! Field validation for movies about to be stored.

use thiserror::Error;

use crate::types::NewMovie;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Movie name is required")]
    EmptyName,
    #[error("Year must be a positive whole number, got {0}")]
    InvalidYear(i64),
    #[error("Minutes must be a positive whole number, got {0}")]
    InvalidMinutes(i64),
    #[error("Category ID must be a positive whole number, got {0}")]
    InvalidCategoryId(i64),
}

impl NewMovie {
    /// Check that every required field is present.
    ///
    /// Fields are checked in the order they are prompted for, and the first
    /// failure is returned. Whether the category actually exists is a storage
    /// question and is not checked here.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if self.year <= 0 {
            return Err(ValidationError::InvalidYear(self.year));
        }
        if self.minutes <= 0 {
            return Err(ValidationError::InvalidMinutes(self.minutes));
        }
        if self.category_id <= 0 {
            return Err(ValidationError::InvalidCategoryId(self.category_id));
        }
        Ok(())
    }
}
