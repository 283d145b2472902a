//! DTOs for movie type endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{MovieType, NewMovieType};

#[derive(Debug, Deserialize, Validate)]
pub struct MovieTypeRequest {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
}

impl From<MovieTypeRequest> for NewMovieType {
    fn from(r: MovieTypeRequest) -> Self {
        NewMovieType { name: r.name }
    }
}

#[derive(Debug, Serialize)]
pub struct MovieTypeItem {
    pub id: i64,
    pub name: String,
}

impl From<MovieType> for MovieTypeItem {
    fn from(t: MovieType) -> Self {
        MovieTypeItem {
            id: t.id,
            name: t.name,
        }
    }
}
