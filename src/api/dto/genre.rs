//! DTOs for genre endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{Genre, NewGenre};

#[derive(Debug, Deserialize, Validate)]
pub struct GenreRequest {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
}

impl From<GenreRequest> for NewGenre {
    fn from(r: GenreRequest) -> Self {
        NewGenre { name: r.name }
    }
}

#[derive(Debug, Serialize)]
pub struct GenreItem {
    pub id: i64,
    pub name: String,
}

impl From<Genre> for GenreItem {
    fn from(g: Genre) -> Self {
        GenreItem {
            id: g.id,
            name: g.name,
        }
    }
}
