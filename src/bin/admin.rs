//! CLI administration tool for video-rental.
//!
//! Provides statistics, database operations and sample data seeding without
//! requiring HTTP API access.
//!
//! # Usage
//!
//! ```bash
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//!
//! # Apply migrations
//! cargo run --bin admin -- db migrate
//!
//! # Insert sample catalog data
//! cargo run --bin admin -- seed --yes
//! ```
//!
//! # Environment Variables
//!
//! Same database settings as the server: `DATABASE_URL` or `DB_*`.

use video_rental::config::{Config, mask_connection_string};
use video_rental::domain::entities::{NewGenre, NewMovie, NewUser};
use video_rental::server;
use video_rental::state::{AppState, Repositories};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing video-rental.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },

    /// Insert a sample user, two genres and two movies
    Seed {
        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,

    /// Apply pending migrations
    Migrate,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = Config::from_env()?;
    let pool = server::connect_pool(&config).await?;

    match cli.command {
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool, &config).await?,
        Commands::Seed { yes } => handle_seed(pool, yes).await?,
    }

    Ok(())
}

/// Displays system statistics.
///
/// Shows:
/// - Number of users, movies and rentals
/// - Summed rental revenue
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let users_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await?;

    let movies_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM movies")
        .fetch_one(pool)
        .await?;

    let rentals_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM rentals")
        .fetch_one(pool)
        .await?;

    let revenue: f64 =
        sqlx::query_scalar("SELECT COALESCE(SUM(total), 0)::DOUBLE PRECISION FROM rentals")
            .fetch_one(pool)
            .await?;

    println!(
        "  Users:    {}",
        users_count.to_string().bright_green().bold()
    );
    println!(
        "  Movies:   {}",
        movies_count.to_string().bright_green().bold()
    );
    println!(
        "  Rentals:  {}",
        rentals_count.to_string().bright_green().bold()
    );
    println!(
        "  Revenue:  {}",
        format!("{revenue:.2}").bright_green().bold()
    );
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool, config: &Config) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            let applied: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM _sqlx_migrations")
                .fetch_one(pool)
                .await
                .unwrap_or(0);

            println!(
                "  URL:        {}",
                mask_connection_string(&config.database_url).bright_white()
            );
            println!("  PostgreSQL: {}", version.bright_white());
            println!("  Migrations: {}", applied.to_string().bright_white());
            println!();
        }
        DbAction::Migrate => {
            println!("{}", "🛠  Applying migrations...".bright_blue());

            server::migrate(pool).await?;

            println!("{}", "✅ Migrations applied".green().bold());
        }
    }

    Ok(())
}

/// Seeds a sample catalog through the application services.
///
/// Inserts user "John Doe", genres "Science Fiction" and "Action", and two
/// movies: a new release priced 11.25 and an old movie priced 9.78.
async fn handle_seed(pool: PgPool, skip_confirm: bool) -> Result<()> {
    println!("{}", "🌱 Seed sample data".bright_blue().bold());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Insert sample user, genres and movies?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let state = AppState::new(Repositories::postgres(Arc::new(pool)));

    let user = state
        .user_service
        .create_user(NewUser {
            surname: "John".to_string(),
            lastname: "Doe".to_string(),
        })
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create user: {}", e))?;

    let sci_fi = state
        .genre_service
        .create_genre(NewGenre {
            name: "Science Fiction".to_string(),
        })
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create genre: {}", e))?;

    let action = state
        .genre_service
        .create_genre(NewGenre {
            name: "Action".to_string(),
        })
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create genre: {}", e))?;

    let movies = [
        NewMovie {
            name: "Avatar: The Way of Water".to_string(),
            overview: "Jake Sully lives with his newfound family formed on the extrasolar moon Pandora.".to_string(),
            price: 11.25,
            type_id: 1,
            genre_id: sci_fi.id,
            release_date: NaiveDate::from_ymd_opt(2022, 12, 15).context("invalid date")?,
        },
        NewMovie {
            name: "Rambo".to_string(),
            overview: "A former Green Beret is drawn into a rescue mission in Burma.".to_string(),
            price: 9.78,
            type_id: 3,
            genre_id: action.id,
            release_date: NaiveDate::from_ymd_opt(2008, 1, 25).context("invalid date")?,
        },
    ];

    println!("  User:   {} (id {})", user.full_name().cyan(), user.id);
    for new_movie in movies {
        let movie = state
            .movie_service
            .create_movie(new_movie)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to create movie: {}", e))?;

        println!(
            "  Movie:  {} (id {}, {})",
            movie.name.cyan(),
            movie.id,
            movie.type_name.unwrap_or_default().bright_black()
        );
    }

    println!();
    println!("{}", "✅ Sample data inserted".green().bold());
    println!();

    Ok(())
}
