//! DTOs for customer endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{NewUser, User};

/// Request body for creating or replacing a user.
#[derive(Debug, Deserialize, Validate)]
pub struct UserRequest {
    #[validate(length(min = 1, message = "surname must not be empty"))]
    pub surname: String,
    #[validate(length(min = 1, message = "lastname must not be empty"))]
    pub lastname: String,
}

impl From<UserRequest> for NewUser {
    fn from(r: UserRequest) -> Self {
        NewUser {
            surname: r.surname,
            lastname: r.lastname,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UserItem {
    pub id: i64,
    pub surname: String,
    pub lastname: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserItem {
    fn from(u: User) -> Self {
        UserItem {
            id: u.id,
            surname: u.surname,
            lastname: u.lastname,
            created_at: u.created_at,
            updated_at: u.updated_at,
        }
    }
}
