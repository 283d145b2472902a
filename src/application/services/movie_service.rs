//! Movie catalog service.

use crate::domain::entities::{Movie, NewMovie};
use crate::domain::repositories::{GenreRepository, MovieRepository, MovieTypeRepository};
use crate::error::AppError;
use serde_json::json;
use std::sync::Arc;

/// Service for managing the movie catalog.
///
/// Every write checks that the referenced type and genre exist before
/// touching the movie table, so callers get a 404 naming the missing
/// reference rather than a constraint violation.
pub struct MovieService {
    movie_repository: Arc<dyn MovieRepository>,
    type_repository: Arc<dyn MovieTypeRepository>,
    genre_repository: Arc<dyn GenreRepository>,
}

impl MovieService {
    /// Creates a new movie service.
    pub fn new(
        movie_repository: Arc<dyn MovieRepository>,
        type_repository: Arc<dyn MovieTypeRepository>,
        genre_repository: Arc<dyn GenreRepository>,
    ) -> Self {
        Self {
            movie_repository,
            type_repository,
            genre_repository,
        }
    }

    /// Adds a movie to the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the type or genre does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_movie(&self, new_movie: NewMovie) -> Result<Movie, AppError> {
        self.ensure_references(&new_movie).await?;

        let movie = self.movie_repository.create(new_movie).await?;
        tracing::info!(movie_id = movie.id, type_id = movie.type_id, "Movie created");
        Ok(movie)
    }

    /// Retrieves a movie by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the movie does not exist.
    pub async fn get_movie(&self, id: i64) -> Result<Movie, AppError> {
        self.movie_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Lists the whole catalog.
    pub async fn list_movies(&self) -> Result<Vec<Movie>, AppError> {
        self.movie_repository.list().await
    }

    /// Replaces every field of an existing movie.
    ///
    /// The movie is looked up first, then its new type and genre.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the movie, type or genre does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn update_movie(&self, id: i64, movie: NewMovie) -> Result<Movie, AppError> {
        if self.movie_repository.find_by_id(id).await?.is_none() {
            return Err(not_found(id));
        }

        self.ensure_references(&movie).await?;

        self.movie_repository
            .update(id, movie)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Removes a movie from the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the movie does not exist.
    /// Returns [`AppError::Conflict`] if the movie appears in a rental.
    pub async fn delete_movie(&self, id: i64) -> Result<(), AppError> {
        if !self.movie_repository.delete(id).await? {
            return Err(not_found(id));
        }
        tracing::info!(movie_id = id, "Movie deleted");
        Ok(())
    }

    async fn ensure_references(&self, movie: &NewMovie) -> Result<(), AppError> {
        if self.type_repository.find_by_id(movie.type_id).await?.is_none() {
            return Err(AppError::not_found(
                "type not found",
                json!({"type_id": movie.type_id}),
            ));
        }

        if self
            .genre_repository
            .find_by_id(movie.genre_id)
            .await?
            .is_none()
        {
            return Err(AppError::not_found(
                "genre not found",
                json!({"genre_id": movie.genre_id}),
            ));
        }

        Ok(())
    }
}

fn not_found(id: i64) -> AppError {
    AppError::not_found(format!("Movie with ID {id} not found"), json!({"id": id}))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Genre, MovieType};
    use crate::domain::repositories::{
        MockGenreRepository, MockMovieRepository, MockMovieTypeRepository,
    };
    use chrono::{NaiveDate, Utc};

    fn avatar() -> NewMovie {
        NewMovie {
            name: "Avatar: The Way of Water".to_string(),
            overview: "Jake Sully lives with his newfound family".to_string(),
            price: 11.25,
            type_id: 1,
            genre_id: 1,
            release_date: NaiveDate::from_ymd_opt(2022, 12, 15).unwrap(),
        }
    }

    fn stored(id: i64, movie: &NewMovie) -> Movie {
        Movie {
            id,
            name: movie.name.clone(),
            overview: movie.overview.clone(),
            price: movie.price,
            type_id: movie.type_id,
            type_name: Some("New releases".to_string()),
            genre_id: movie.genre_id,
            genre_name: Some("Science Fiction".to_string()),
            release_date: movie.release_date,
        }
    }

    fn types_with(ids: &'static [i64]) -> MockMovieTypeRepository {
        let mut repo = MockMovieTypeRepository::new();
        repo.expect_find_by_id().returning(move |id| {
            Ok(ids
                .contains(&id)
                .then(|| MovieType::new(id, format!("type {id}"), Utc::now(), Utc::now())))
        });
        repo
    }

    fn genres_with(ids: &'static [i64]) -> MockGenreRepository {
        let mut repo = MockGenreRepository::new();
        repo.expect_find_by_id().returning(move |id| {
            Ok(ids
                .contains(&id)
                .then(|| Genre::new(id, format!("genre {id}"), Utc::now(), Utc::now())))
        });
        repo
    }

    fn service(
        movies: MockMovieRepository,
        types: MockMovieTypeRepository,
        genres: MockGenreRepository,
    ) -> MovieService {
        MovieService::new(Arc::new(movies), Arc::new(types), Arc::new(genres))
    }

    #[tokio::test]
    async fn test_create_movie_success() {
        let mut movies = MockMovieRepository::new();
        movies
            .expect_create()
            .withf(|m| m.name == "Avatar: The Way of Water" && m.price == 11.25)
            .times(1)
            .returning(|m| Ok(stored(1, &m)));

        let svc = service(movies, types_with(&[1, 2, 3]), genres_with(&[1]));

        let movie = svc.create_movie(avatar()).await.unwrap();

        assert_eq!(movie.id, 1);
        assert_eq!(movie.type_name.as_deref(), Some("New releases"));
    }

    #[tokio::test]
    async fn test_create_movie_unknown_type() {
        let mut movies = MockMovieRepository::new();
        movies.expect_create().times(0);

        let mut genres = MockGenreRepository::new();
        genres.expect_find_by_id().times(0);

        let svc = service(movies, types_with(&[2, 3]), genres);

        let err = svc.create_movie(avatar()).await.unwrap_err();

        assert!(matches!(err, AppError::NotFound { .. }));
        assert_eq!(err.to_string(), "type not found");
    }

    #[tokio::test]
    async fn test_create_movie_unknown_genre() {
        let mut movies = MockMovieRepository::new();
        movies.expect_create().times(0);

        let svc = service(movies, types_with(&[1]), genres_with(&[2]));

        let err = svc.create_movie(avatar()).await.unwrap_err();

        assert_eq!(err.to_string(), "genre not found");
    }

    #[tokio::test]
    async fn test_update_missing_movie_checks_nothing_else() {
        let mut movies = MockMovieRepository::new();
        movies.expect_find_by_id().times(1).returning(|_| Ok(None));
        movies.expect_update().times(0);

        let mut types = MockMovieTypeRepository::new();
        types.expect_find_by_id().times(0);

        let svc = service(movies, types, genres_with(&[1]));

        let err = svc.update_movie(5, avatar()).await.unwrap_err();

        assert_eq!(err.to_string(), "Movie with ID 5 not found");
    }

    #[tokio::test]
    async fn test_update_movie_success() {
        let mut movies = MockMovieRepository::new();
        movies
            .expect_find_by_id()
            .returning(|id| Ok(Some(stored(id, &avatar()))));
        movies
            .expect_update()
            .withf(|id, m| *id == 1 && m.price == 12.5)
            .times(1)
            .returning(|id, m| Ok(Some(stored(id, &m))));

        let svc = service(movies, types_with(&[1]), genres_with(&[1]));

        let mut changed = avatar();
        changed.price = 12.5;
        let movie = svc.update_movie(1, changed).await.unwrap();

        assert_eq!(movie.price, 12.5);
    }

    #[tokio::test]
    async fn test_delete_movie_missing() {
        let mut movies = MockMovieRepository::new();
        movies.expect_delete().times(1).returning(|_| Ok(false));

        let svc = service(
            movies,
            MockMovieTypeRepository::new(),
            MockGenreRepository::new(),
        );

        let result = svc.delete_movie(4).await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }
}
