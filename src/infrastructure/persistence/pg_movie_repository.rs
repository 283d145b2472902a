//! PostgreSQL implementation of the movie repository.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Movie, NewMovie};
use crate::domain::repositories::MovieRepository;
use crate::error::AppError;

/// PostgreSQL repository for the movie catalog.
///
/// Every read joins `movie_types` and `genres` so returned movies carry the
/// names of their type and genre. Writes go through a CTE so the inserted or
/// updated row comes back joined in the same statement.
pub struct PgMovieRepository {
    pool: Arc<PgPool>,
}

impl PgMovieRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct MovieRow {
    id: i64,
    name: String,
    overview: String,
    price: f64,
    type_id: i64,
    type_name: Option<String>,
    genre_id: i64,
    genre_name: Option<String>,
    release_date: NaiveDate,
}

impl From<MovieRow> for Movie {
    fn from(r: MovieRow) -> Self {
        Movie {
            id: r.id,
            name: r.name,
            overview: r.overview,
            price: r.price,
            type_id: r.type_id,
            type_name: r.type_name,
            genre_id: r.genre_id,
            genre_name: r.genre_name,
            release_date: r.release_date,
        }
    }
}

#[async_trait]
impl MovieRepository for PgMovieRepository {
    async fn create(&self, new_movie: NewMovie) -> Result<Movie, AppError> {
        let row = sqlx::query_as::<_, MovieRow>(
            r#"
            WITH m AS (
                INSERT INTO movies (name, overview, price, type_id, genre_id, release_date)
                VALUES ($1, $2, $3, $4, $5, $6)
                RETURNING id, name, overview, price, type_id, genre_id, release_date
            )
            SELECT m.id, m.name, m.overview, m.price,
                   m.type_id, t.name AS type_name,
                   m.genre_id, g.name AS genre_name,
                   m.release_date
            FROM m
            LEFT JOIN movie_types t ON t.id = m.type_id
            LEFT JOIN genres g ON g.id = m.genre_id
            "#,
        )
        .bind(new_movie.name)
        .bind(new_movie.overview)
        .bind(new_movie.price)
        .bind(new_movie.type_id)
        .bind(new_movie.genre_id)
        .bind(new_movie.release_date)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Movie>, AppError> {
        let row = sqlx::query_as::<_, MovieRow>(
            r#"
            SELECT m.id, m.name, m.overview, m.price,
                   m.type_id, t.name AS type_name,
                   m.genre_id, g.name AS genre_name,
                   m.release_date
            FROM movies m
            LEFT JOIN movie_types t ON t.id = m.type_id
            LEFT JOIN genres g ON g.id = m.genre_id
            WHERE m.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Movie::from))
    }

    async fn list(&self) -> Result<Vec<Movie>, AppError> {
        let rows = sqlx::query_as::<_, MovieRow>(
            r#"
            SELECT m.id, m.name, m.overview, m.price,
                   m.type_id, t.name AS type_name,
                   m.genre_id, g.name AS genre_name,
                   m.release_date
            FROM movies m
            LEFT JOIN movie_types t ON t.id = m.type_id
            LEFT JOIN genres g ON g.id = m.genre_id
            ORDER BY m.id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Movie::from).collect())
    }

    async fn update(&self, id: i64, movie: NewMovie) -> Result<Option<Movie>, AppError> {
        let row = sqlx::query_as::<_, MovieRow>(
            r#"
            WITH m AS (
                UPDATE movies SET
                    name         = $2,
                    overview     = $3,
                    price        = $4,
                    type_id      = $5,
                    genre_id     = $6,
                    release_date = $7
                WHERE id = $1
                RETURNING id, name, overview, price, type_id, genre_id, release_date
            )
            SELECT m.id, m.name, m.overview, m.price,
                   m.type_id, t.name AS type_name,
                   m.genre_id, g.name AS genre_name,
                   m.release_date
            FROM m
            LEFT JOIN movie_types t ON t.id = m.type_id
            LEFT JOIN genres g ON g.id = m.genre_id
            "#,
        )
        .bind(id)
        .bind(movie.name)
        .bind(movie.overview)
        .bind(movie.price)
        .bind(movie.type_id)
        .bind(movie.genre_id)
        .bind(movie.release_date)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Movie::from))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM movies WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
