//! Customer entity.

use chrono::{DateTime, Utc};

/// A customer who can rent movies.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i64,
    pub surname: String,
    pub lastname: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn new(
        id: i64,
        surname: String,
        lastname: String,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            surname,
            lastname,
            created_at,
            updated_at,
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.surname, self.lastname)
    }
}

/// Input data for creating or replacing a user.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub surname: String,
    pub lastname: String,
}
