//! PostgreSQL implementation of the movie type repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{MovieType, NewMovieType};
use crate::domain::repositories::MovieTypeRepository;
use crate::error::AppError;

/// PostgreSQL repository for movie types.
///
/// The initial migration seeds ids 1 to 3 and moves the sequence past them, so
/// types created here never collide with the pricing tiers.
pub struct PgMovieTypeRepository {
    pool: Arc<PgPool>,
}

impl PgMovieTypeRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct MovieTypeRow {
    id: i64,
    name: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<MovieTypeRow> for MovieType {
    fn from(r: MovieTypeRow) -> Self {
        MovieType::new(r.id, r.name, r.created_at, r.updated_at)
    }
}

#[async_trait]
impl MovieTypeRepository for PgMovieTypeRepository {
    async fn create(&self, new_type: NewMovieType) -> Result<MovieType, AppError> {
        let row = sqlx::query_as::<_, MovieTypeRow>(
            r#"
            INSERT INTO movie_types (name)
            VALUES ($1)
            RETURNING id, name, created_at, updated_at
            "#,
        )
        .bind(new_type.name)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<MovieType>, AppError> {
        let row = sqlx::query_as::<_, MovieTypeRow>(
            "SELECT id, name, created_at, updated_at FROM movie_types WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(MovieType::from))
    }

    async fn list(&self) -> Result<Vec<MovieType>, AppError> {
        let rows = sqlx::query_as::<_, MovieTypeRow>(
            "SELECT id, name, created_at, updated_at FROM movie_types ORDER BY id",
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(MovieType::from).collect())
    }

    async fn update(
        &self,
        id: i64,
        movie_type: NewMovieType,
    ) -> Result<Option<MovieType>, AppError> {
        let row = sqlx::query_as::<_, MovieTypeRow>(
            r#"
            UPDATE movie_types SET name = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING id, name, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(movie_type.name)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(MovieType::from))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM movie_types WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
