//! PostgreSQL implementation of the genre repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Genre, NewGenre};
use crate::domain::repositories::GenreRepository;
use crate::error::AppError;

pub struct PgGenreRepository {
    pool: Arc<PgPool>,
}

impl PgGenreRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct GenreRow {
    id: i64,
    name: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<GenreRow> for Genre {
    fn from(r: GenreRow) -> Self {
        Genre::new(r.id, r.name, r.created_at, r.updated_at)
    }
}

#[async_trait]
impl GenreRepository for PgGenreRepository {
    async fn create(&self, new_genre: NewGenre) -> Result<Genre, AppError> {
        let row = sqlx::query_as::<_, GenreRow>(
            r#"
            INSERT INTO genres (name)
            VALUES ($1)
            RETURNING id, name, created_at, updated_at
            "#,
        )
        .bind(new_genre.name)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Genre>, AppError> {
        let row = sqlx::query_as::<_, GenreRow>(
            "SELECT id, name, created_at, updated_at FROM genres WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Genre::from))
    }

    async fn list(&self) -> Result<Vec<Genre>, AppError> {
        let rows = sqlx::query_as::<_, GenreRow>(
            "SELECT id, name, created_at, updated_at FROM genres ORDER BY id",
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Genre::from).collect())
    }

    async fn update(&self, id: i64, genre: NewGenre) -> Result<Option<Genre>, AppError> {
        let row = sqlx::query_as::<_, GenreRow>(
            r#"
            UPDATE genres SET name = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING id, name, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(genre.name)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Genre::from))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM genres WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
