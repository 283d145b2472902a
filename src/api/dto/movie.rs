//! DTOs for movie catalog endpoints.

use serde::{Deserialize, Serialize};
use serde_json::json;
use validator::Validate;

use crate::domain::entities::{Movie, NewMovie};
use crate::error::AppError;
use crate::utils::calendar_date::{format_date, parse_date};

/// Request body for creating or replacing a movie.
///
/// `release_date` is a `YYYY-MM-DD` calendar date.
#[derive(Debug, Deserialize, Validate)]
pub struct MovieRequest {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[serde(default)]
    pub overview: String,
    #[validate(range(min = 0.0, message = "price must not be negative"))]
    pub price: f64,
    #[validate(range(min = 1, message = "type_id must be positive"))]
    pub type_id: i64,
    #[validate(range(min = 1, message = "genre_id must be positive"))]
    pub genre_id: i64,
    pub release_date: String,
}

impl MovieRequest {
    /// Parses the release date and builds the domain input.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `release_date` is not `YYYY-MM-DD`.
    pub fn into_new_movie(self) -> Result<NewMovie, AppError> {
        let release_date = parse_date(&self.release_date).map_err(|e| {
            AppError::bad_request(
                format!("Invalid release date... {e}"),
                json!({"field": "release_date", "value": self.release_date}),
            )
        })?;

        Ok(NewMovie {
            name: self.name,
            overview: self.overview,
            price: self.price,
            type_id: self.type_id,
            genre_id: self.genre_id,
            release_date,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct MovieItem {
    pub id: i64,
    pub name: String,
    pub overview: String,
    pub price: f64,
    pub type_id: i64,
    pub type_name: Option<String>,
    pub genre_id: i64,
    pub genre_name: Option<String>,
    pub release_date: String,
}

impl From<Movie> for MovieItem {
    fn from(m: Movie) -> Self {
        MovieItem {
            id: m.id,
            name: m.name,
            overview: m.overview,
            price: m.price,
            type_id: m.type_id,
            type_name: m.type_name,
            genre_id: m.genre_id,
            genre_name: m.genre_name,
            release_date: format_date(m.release_date),
        }
    }
}
