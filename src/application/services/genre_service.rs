//! Genre management service.

use crate::domain::entities::{Genre, NewGenre};
use crate::domain::repositories::GenreRepository;
use crate::error::AppError;
use serde_json::json;
use std::sync::Arc;

/// Service for managing movie genres.
pub struct GenreService {
    repository: Arc<dyn GenreRepository>,
}

impl GenreService {
    pub fn new(repository: Arc<dyn GenreRepository>) -> Self {
        Self { repository }
    }

    pub async fn create_genre(&self, new_genre: NewGenre) -> Result<Genre, AppError> {
        self.repository.create(new_genre).await
    }

    /// Retrieves a genre by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the genre does not exist.
    pub async fn get_genre(&self, id: i64) -> Result<Genre, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    pub async fn list_genres(&self) -> Result<Vec<Genre>, AppError> {
        self.repository.list().await
    }

    pub async fn update_genre(&self, id: i64, genre: NewGenre) -> Result<Genre, AppError> {
        self.repository
            .update(id, genre)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Deletes a genre.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the genre does not exist.
    /// Returns [`AppError::Conflict`] if movies still use the genre.
    pub async fn delete_genre(&self, id: i64) -> Result<(), AppError> {
        if self.repository.delete(id).await? {
            Ok(())
        } else {
            Err(not_found(id))
        }
    }
}

fn not_found(id: i64) -> AppError {
    AppError::not_found(format!("Genre with ID {id} not found"), json!({"id": id}))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockGenreRepository;
    use chrono::Utc;

    fn create_test_genre(id: i64, name: &str) -> Genre {
        Genre::new(id, name.to_string(), Utc::now(), Utc::now())
    }

    #[tokio::test]
    async fn test_create_genre() {
        let mut mock_repo = MockGenreRepository::new();

        mock_repo
            .expect_create()
            .withf(|g| g.name == "Science Fiction")
            .times(1)
            .returning(|g| Ok(create_test_genre(1, &g.name)));

        let service = GenreService::new(Arc::new(mock_repo));

        let genre = service
            .create_genre(NewGenre {
                name: "Science Fiction".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(genre.id, 1);
        assert_eq!(genre.name, "Science Fiction");
    }

    #[tokio::test]
    async fn test_get_genre_not_found() {
        let mut mock_repo = MockGenreRepository::new();

        mock_repo.expect_find_by_id().times(1).returning(|_| Ok(None));

        let service = GenreService::new(Arc::new(mock_repo));

        let err = service.get_genre(3).await.unwrap_err();

        assert_eq!(err.to_string(), "Genre with ID 3 not found");
    }

    #[tokio::test]
    async fn test_update_genre() {
        let mut mock_repo = MockGenreRepository::new();

        mock_repo
            .expect_update()
            .withf(|id, g| *id == 2 && g.name == "Thriller")
            .times(1)
            .returning(|id, g| Ok(Some(create_test_genre(id, &g.name))));

        let service = GenreService::new(Arc::new(mock_repo));

        let genre = service
            .update_genre(
                2,
                NewGenre {
                    name: "Thriller".to_string(),
                },
            )
            .await
            .unwrap();

        assert_eq!(genre.name, "Thriller");
    }

    #[tokio::test]
    async fn test_delete_genre_missing() {
        let mut mock_repo = MockGenreRepository::new();

        mock_repo.expect_delete().times(1).returning(|_| Ok(false));

        let service = GenreService::new(Arc::new(mock_repo));

        let result = service.delete_genre(9).await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }
}
