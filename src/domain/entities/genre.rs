//! Movie genre entity.

use chrono::{DateTime, Utc};

/// Genre used to classify movies (e.g. "Action").
#[derive(Debug, Clone, PartialEq)]
pub struct Genre {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Genre {
    pub fn new(id: i64, name: String, created_at: DateTime<Utc>, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name,
            created_at,
            updated_at,
        }
    }
}

/// Input data for creating or renaming a genre.
#[derive(Debug, Clone, PartialEq)]
pub struct NewGenre {
    pub name: String,
}
