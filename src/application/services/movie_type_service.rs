//! Movie type management service.

use crate::domain::entities::{MovieType, NewMovieType};
use crate::domain::repositories::MovieTypeRepository;
use crate::error::AppError;
use serde_json::json;
use std::sync::Arc;

/// Service for managing movie types.
///
/// The seeded types 1, 2 and 3 select the rental pricing tier; other types are
/// labels only and are priced at the base rate.
pub struct MovieTypeService {
    repository: Arc<dyn MovieTypeRepository>,
}

impl MovieTypeService {
    pub fn new(repository: Arc<dyn MovieTypeRepository>) -> Self {
        Self { repository }
    }

    pub async fn create_type(&self, new_type: NewMovieType) -> Result<MovieType, AppError> {
        self.repository.create(new_type).await
    }

    pub async fn get_type(&self, id: i64) -> Result<MovieType, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    pub async fn list_types(&self) -> Result<Vec<MovieType>, AppError> {
        self.repository.list().await
    }

    pub async fn update_type(
        &self,
        id: i64,
        movie_type: NewMovieType,
    ) -> Result<MovieType, AppError> {
        self.repository
            .update(id, movie_type)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Deletes a movie type.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the type does not exist.
    /// Returns [`AppError::Conflict`] if movies still use the type.
    pub async fn delete_type(&self, id: i64) -> Result<(), AppError> {
        if self.repository.delete(id).await? {
            Ok(())
        } else {
            Err(not_found(id))
        }
    }
}

fn not_found(id: i64) -> AppError {
    AppError::not_found(format!("Type with ID {id} not found"), json!({"id": id}))
}
