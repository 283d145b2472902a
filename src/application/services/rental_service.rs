//! Rental booking service.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::{Movie, NewRental, RentalRequest};
use crate::domain::errors::RentalError;
use crate::domain::pricing::{MovieLineItem, calculate_total};
use crate::domain::read_models::RentalSummary;
use crate::domain::repositories::{MovieRepository, RentalRepository, UserRepository};
use crate::error::AppError;

/// Service for booking rentals.
///
/// A booking resolves the user and every movie, prices the movies for the
/// rental period and stores the rental with its line items atomically. Users
/// and movies are only read.
pub struct RentalService {
    user_repository: Arc<dyn UserRepository>,
    movie_repository: Arc<dyn MovieRepository>,
    rental_repository: Arc<dyn RentalRepository>,
}

impl RentalService {
    /// Creates a new rental service.
    pub fn new(
        user_repository: Arc<dyn UserRepository>,
        movie_repository: Arc<dyn MovieRepository>,
        rental_repository: Arc<dyn RentalRepository>,
    ) -> Self {
        Self {
            user_repository,
            movie_repository,
            rental_repository,
        }
    }

    /// Books a rental.
    ///
    /// # Flow
    ///
    /// 1. Look up the user
    /// 2. Look up every movie in request order, stopping at the first missing one
    /// 3. Price the movies for `request.period.days()` days
    /// 4. Persist the rental and its line items in one unit of work
    ///
    /// Nothing is written unless steps 1-3 succeed.
    ///
    /// # Errors
    ///
    /// Returns [`RentalError::UserNotFound`] or [`RentalError::MovieNotFound`]
    /// for unknown references, and [`RentalError::Storage`] if a lookup or the
    /// transaction fails.
    pub async fn create_rental(&self, request: RentalRequest) -> Result<RentalSummary, RentalError> {
        let days = request.period.days();

        self.user_repository
            .find_by_id(request.user_id)
            .await
            .map_err(RentalError::storage)?
            .ok_or(RentalError::UserNotFound(request.user_id))?;

        let mut movies = Vec::with_capacity(request.movie_ids.len());
        for &movie_id in &request.movie_ids {
            let movie = self
                .movie_repository
                .find_by_id(movie_id)
                .await
                .map_err(RentalError::storage)?
                .ok_or(RentalError::MovieNotFound(movie_id))?;
            movies.push(movie);
        }

        let line_items: Vec<MovieLineItem> = movies.iter().map(Movie::line_item).collect();
        let total = calculate_total(&line_items, days);

        let new_rental = NewRental {
            user_id: request.user_id,
            total,
            start_date: request.period.start(),
            end_date: request.period.end(),
            movie_ids: request.movie_ids,
        };

        let rental = self
            .rental_repository
            .create_with_line_items(new_rental)
            .await
            .map_err(|e| {
                tracing::error!(user_id = request.user_id, error = %e, "Rental transaction failed");
                RentalError::storage(e)
            })?;

        tracing::info!(
            rental_id = rental.id,
            user_id = rental.user_id,
            movies = movies.len(),
            days,
            total,
            "Rental created"
        );

        Ok(RentalSummary::project(&rental, &movies))
    }

    /// Retrieves a stored rental with its movies.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no rental has the given id.
    /// Returns [`AppError::Internal`] on database errors, or if a line item
    /// points at a movie that no longer exists.
    pub async fn get_rental(&self, id: i64) -> Result<RentalSummary, AppError> {
        let rental = self
            .rental_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| {
                AppError::not_found(format!("Rent with ID {id} not found"), json!({ "id": id }))
            })?;

        let line_items = self.rental_repository.list_line_items(id).await?;

        let mut cache: HashMap<i64, Movie> = HashMap::new();
        let mut movies = Vec::with_capacity(line_items.len());
        for item in &line_items {
            if !cache.contains_key(&item.movie_id) {
                let movie = self
                    .movie_repository
                    .find_by_id(item.movie_id)
                    .await?
                    .ok_or_else(|| {
                        AppError::internal(
                            "Rental references a missing movie",
                            json!({ "rental_id": id, "movie_id": item.movie_id }),
                        )
                    })?;
                cache.insert(item.movie_id, movie);
            }
            if let Some(movie) = cache.get(&item.movie_id) {
                movies.push(movie.clone());
            }
        }

        Ok(RentalSummary::project(&rental, &movies))
    }
}
