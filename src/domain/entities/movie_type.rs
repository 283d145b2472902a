//! Movie type entity.
//!
//! Types with ids 1, 2 and 3 are seeded by the initial migration and select the
//! rental pricing tier (see [`crate::domain::pricing::MovieTier`]).

use chrono::{DateTime, Utc};

use crate::domain::pricing::MovieTier;

/// Rental classification of movies (e.g. "New releases").
#[derive(Debug, Clone, PartialEq)]
pub struct MovieType {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl MovieType {
    pub fn new(id: i64, name: String, created_at: DateTime<Utc>, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name,
            created_at,
            updated_at,
        }
    }

    /// Pricing tier selected by this type, if any.
    pub fn tier(&self) -> Option<MovieTier> {
        MovieTier::from_type_id(self.id)
    }
}

/// Input data for creating or renaming a movie type.
#[derive(Debug, Clone, PartialEq)]
pub struct NewMovieType {
    pub name: String,
}
