//! PostgreSQL implementation of the rental repository.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewRental, Rental, RentalLineItem};
use crate::domain::repositories::RentalRepository;
use crate::error::AppError;

/// PostgreSQL repository for rentals.
///
/// A booking is written in a single transaction: the rental row first, then
/// one `rental_movies` row per movie id in request order. Any failed insert
/// returns early and drops the transaction, which rolls it back.
pub struct PgRentalRepository {
    pool: Arc<PgPool>,
}

impl PgRentalRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct RentalRow {
    id: i64,
    user_id: i64,
    total: f64,
    start_date: NaiveDate,
    end_date: NaiveDate,
    created_at: DateTime<Utc>,
}

impl From<RentalRow> for Rental {
    fn from(r: RentalRow) -> Self {
        Rental {
            id: r.id,
            user_id: r.user_id,
            total: r.total,
            start_date: r.start_date,
            end_date: r.end_date,
            created_at: r.created_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct LineItemRow {
    id: i64,
    rental_id: i64,
    movie_id: i64,
}

#[async_trait]
impl RentalRepository for PgRentalRepository {
    async fn create_with_line_items(&self, new_rental: NewRental) -> Result<Rental, AppError> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, RentalRow>(
            r#"
            INSERT INTO rentals (user_id, total, start_date, end_date)
            VALUES ($1, $2, $3, $4)
            RETURNING id, user_id, total, start_date, end_date, created_at
            "#,
        )
        .bind(new_rental.user_id)
        .bind(new_rental.total)
        .bind(new_rental.start_date)
        .bind(new_rental.end_date)
        .fetch_one(&mut *tx)
        .await?;

        for &movie_id in &new_rental.movie_ids {
            sqlx::query("INSERT INTO rental_movies (rental_id, movie_id) VALUES ($1, $2)")
                .bind(row.id)
                .bind(movie_id)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Rental>, AppError> {
        let row = sqlx::query_as::<_, RentalRow>(
            r#"
            SELECT id, user_id, total, start_date, end_date, created_at
            FROM rentals
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Rental::from))
    }

    async fn list_line_items(&self, rental_id: i64) -> Result<Vec<RentalLineItem>, AppError> {
        let rows = sqlx::query_as::<_, LineItemRow>(
            r#"
            SELECT id, rental_id, movie_id
            FROM rental_movies
            WHERE rental_id = $1
            ORDER BY id
            "#,
        )
        .bind(rental_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| RentalLineItem {
                id: r.id,
                rental_id: r.rental_id,
                movie_id: r.movie_id,
            })
            .collect())
    }
}
