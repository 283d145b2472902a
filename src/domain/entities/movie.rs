//! Movie entity.

use chrono::NaiveDate;

use crate::domain::pricing::{MovieLineItem, MovieTier};

/// A movie available for rent.
///
/// `type_name` and `genre_name` are filled when the movie is loaded through a
/// join and are `None` on freshly built values.
#[derive(Debug, Clone, PartialEq)]
pub struct Movie {
    pub id: i64,
    pub name: String,
    pub overview: String,
    pub price: f64,
    pub type_id: i64,
    pub type_name: Option<String>,
    pub genre_id: i64,
    pub genre_name: Option<String>,
    pub release_date: NaiveDate,
}

impl Movie {
    /// Pricing tier of this movie.
    pub fn tier(&self) -> Option<MovieTier> {
        MovieTier::from_type_id(self.type_id)
    }

    /// Snapshot used to price a rental of this movie.
    pub fn line_item(&self) -> MovieLineItem {
        MovieLineItem::new(self.id, self.price, self.tier())
    }
}

/// Input data for creating or replacing a movie.
#[derive(Debug, Clone, PartialEq)]
pub struct NewMovie {
    pub name: String,
    pub overview: String,
    pub price: f64,
    pub type_id: i64,
    pub genre_id: i64,
    pub release_date: NaiveDate,
}
