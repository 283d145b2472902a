#![allow(dead_code)]

use async_trait::async_trait;
use axum::{Router, routing::get};
use axum_test::TestServer;
use chrono::{NaiveDate, Utc};
use serde_json::json;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use video_rental::api;
use video_rental::api::handlers::health_handler;
use video_rental::domain::entities::{
    Genre, Movie, MovieType, NewGenre, NewMovie, NewMovieType, NewRental, NewUser, Rental,
    RentalLineItem, User,
};
use video_rental::domain::repositories::{
    GenreRepository, HealthRepository, MovieRepository, MovieTypeRepository, RentalRepository,
    UserRepository,
};
use video_rental::error::AppError;
use video_rental::state::{AppState, Repositories};

#[derive(Default)]
struct Tables {
    next_id: i64,
    users: BTreeMap<i64, User>,
    genres: BTreeMap<i64, Genre>,
    movie_types: BTreeMap<i64, MovieType>,
    movies: BTreeMap<i64, Movie>,
    rentals: BTreeMap<i64, Rental>,
    line_items: Vec<RentalLineItem>,
}

impl Tables {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    fn joined(&self, movie: &Movie) -> Movie {
        Movie {
            type_name: self.movie_types.get(&movie.type_id).map(|t| t.name.clone()),
            genre_name: self.genres.get(&movie.genre_id).map(|g| g.name.clone()),
            ..movie.clone()
        }
    }
}

fn referenced(constraint: &str) -> AppError {
    AppError::conflict(
        "Record is referenced by other records",
        json!({ "constraint": constraint }),
    )
}

/// In-memory stand-in for the PostgreSQL schema.
///
/// Mirrors the foreign keys of the migration (restricting deletes of
/// referenced rows) and writes a rental with its line items all at once.
pub struct MemoryStore {
    tables: Mutex<Tables>,
    fail_rental_writes: AtomicBool,
    fail_reads: AtomicBool,
}

impl MemoryStore {
    /// Creates a store with the three seeded movie types.
    pub fn new() -> Arc<Self> {
        let mut tables = Tables {
            next_id: 100,
            ..Tables::default()
        };
        let now = Utc::now();
        for (id, name) in [(1, "New releases"), (2, "Regular movies"), (3, "Old movies")] {
            tables
                .movie_types
                .insert(id, MovieType::new(id, name.to_string(), now, now));
        }

        Arc::new(Self {
            tables: Mutex::new(tables),
            fail_rental_writes: AtomicBool::new(false),
            fail_reads: AtomicBool::new(false),
        })
    }

    fn tables(&self) -> MutexGuard<'_, Tables> {
        self.tables.lock().unwrap()
    }

    fn check_reads(&self) -> Result<(), AppError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(AppError::internal(
                "Database error: connection refused",
                serde_json::Value::Null,
            ));
        }
        Ok(())
    }

    /// Makes every following rental write fail as if the transaction aborted.
    pub fn fail_rental_writes(&self) {
        self.fail_rental_writes.store(true, Ordering::SeqCst);
    }

    /// Makes every following lookup fail with a database error.
    pub fn fail_reads(&self) {
        self.fail_reads.store(true, Ordering::SeqCst);
    }

    pub fn seed_user(&self, surname: &str, lastname: &str) -> User {
        let mut t = self.tables();
        let id = t.next_id();
        let now = Utc::now();
        let user = User::new(id, surname.to_string(), lastname.to_string(), now, now);
        t.users.insert(id, user.clone());
        user
    }

    pub fn seed_genre(&self, name: &str) -> Genre {
        let mut t = self.tables();
        let id = t.next_id();
        let now = Utc::now();
        let genre = Genre::new(id, name.to_string(), now, now);
        t.genres.insert(id, genre.clone());
        genre
    }

    pub fn seed_movie(&self, name: &str, price: f64, type_id: i64, genre_id: i64) -> Movie {
        let mut t = self.tables();
        let id = t.next_id();
        let movie = Movie {
            id,
            name: name.to_string(),
            overview: format!("{name} overview"),
            price,
            type_id,
            type_name: None,
            genre_id,
            genre_name: None,
            release_date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
        };
        t.movies.insert(id, movie.clone());
        t.joined(&movie)
    }

    pub fn rental_count(&self) -> usize {
        self.tables().rentals.len()
    }

    pub fn line_item_count(&self) -> usize {
        self.tables().line_items.len()
    }

    pub fn rentals(&self) -> Vec<Rental> {
        self.tables().rentals.values().cloned().collect()
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn create(&self, new_user: NewUser) -> Result<User, AppError> {
        Ok(self.seed_user(&new_user.surname, &new_user.lastname))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError> {
        self.check_reads()?;
        Ok(self.tables().users.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<User>, AppError> {
        Ok(self.tables().users.values().cloned().collect())
    }

    async fn update(&self, id: i64, user: NewUser) -> Result<Option<User>, AppError> {
        let mut t = self.tables();
        Ok(t.users.get_mut(&id).map(|u| {
            u.surname = user.surname;
            u.lastname = user.lastname;
            u.updated_at = Utc::now();
            u.clone()
        }))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let mut t = self.tables();
        if t.rentals.values().any(|r| r.user_id == id) {
            return Err(referenced("rentals_user_id_fkey"));
        }
        Ok(t.users.remove(&id).is_some())
    }
}

#[async_trait]
impl GenreRepository for MemoryStore {
    async fn create(&self, new_genre: NewGenre) -> Result<Genre, AppError> {
        Ok(self.seed_genre(&new_genre.name))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Genre>, AppError> {
        self.check_reads()?;
        Ok(self.tables().genres.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<Genre>, AppError> {
        Ok(self.tables().genres.values().cloned().collect())
    }

    async fn update(&self, id: i64, genre: NewGenre) -> Result<Option<Genre>, AppError> {
        let mut t = self.tables();
        Ok(t.genres.get_mut(&id).map(|g| {
            g.name = genre.name;
            g.updated_at = Utc::now();
            g.clone()
        }))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let mut t = self.tables();
        if t.movies.values().any(|m| m.genre_id == id) {
            return Err(referenced("movies_genre_id_fkey"));
        }
        Ok(t.genres.remove(&id).is_some())
    }
}

#[async_trait]
impl MovieTypeRepository for MemoryStore {
    async fn create(&self, new_type: NewMovieType) -> Result<MovieType, AppError> {
        let mut t = self.tables();
        let id = t.next_id();
        let now = Utc::now();
        let movie_type = MovieType::new(id, new_type.name, now, now);
        t.movie_types.insert(id, movie_type.clone());
        Ok(movie_type)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<MovieType>, AppError> {
        self.check_reads()?;
        Ok(self.tables().movie_types.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<MovieType>, AppError> {
        Ok(self.tables().movie_types.values().cloned().collect())
    }

    async fn update(
        &self,
        id: i64,
        movie_type: NewMovieType,
    ) -> Result<Option<MovieType>, AppError> {
        let mut t = self.tables();
        Ok(t.movie_types.get_mut(&id).map(|mt| {
            mt.name = movie_type.name;
            mt.updated_at = Utc::now();
            mt.clone()
        }))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let mut t = self.tables();
        if t.movies.values().any(|m| m.type_id == id) {
            return Err(referenced("movies_type_id_fkey"));
        }
        Ok(t.movie_types.remove(&id).is_some())
    }
}

#[async_trait]
impl MovieRepository for MemoryStore {
    async fn create(&self, new_movie: NewMovie) -> Result<Movie, AppError> {
        let mut t = self.tables();
        let id = t.next_id();
        let movie = Movie {
            id,
            name: new_movie.name,
            overview: new_movie.overview,
            price: new_movie.price,
            type_id: new_movie.type_id,
            type_name: None,
            genre_id: new_movie.genre_id,
            genre_name: None,
            release_date: new_movie.release_date,
        };
        t.movies.insert(id, movie.clone());
        Ok(t.joined(&movie))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Movie>, AppError> {
        self.check_reads()?;
        let t = self.tables();
        Ok(t.movies.get(&id).map(|m| t.joined(m)))
    }

    async fn list(&self) -> Result<Vec<Movie>, AppError> {
        let t = self.tables();
        Ok(t.movies.values().map(|m| t.joined(m)).collect())
    }

    async fn update(&self, id: i64, movie: NewMovie) -> Result<Option<Movie>, AppError> {
        let mut t = self.tables();
        let Some(stored) = t.movies.get_mut(&id) else {
            return Ok(None);
        };
        stored.name = movie.name;
        stored.overview = movie.overview;
        stored.price = movie.price;
        stored.type_id = movie.type_id;
        stored.genre_id = movie.genre_id;
        stored.release_date = movie.release_date;
        let stored = stored.clone();
        Ok(Some(t.joined(&stored)))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let mut t = self.tables();
        if t.line_items.iter().any(|li| li.movie_id == id) {
            return Err(referenced("rental_movies_movie_id_fkey"));
        }
        Ok(t.movies.remove(&id).is_some())
    }
}

#[async_trait]
impl RentalRepository for MemoryStore {
    async fn create_with_line_items(&self, new_rental: NewRental) -> Result<Rental, AppError> {
        if self.fail_rental_writes.load(Ordering::SeqCst) {
            return Err(AppError::internal(
                "Database error: transaction aborted",
                serde_json::Value::Null,
            ));
        }

        let mut t = self.tables();
        if !t.users.contains_key(&new_rental.user_id) {
            return Err(referenced("rentals_user_id_fkey"));
        }
        if new_rental
            .movie_ids
            .iter()
            .any(|id| !t.movies.contains_key(id))
        {
            return Err(referenced("rental_movies_movie_id_fkey"));
        }

        let id = t.next_id();
        let rental = Rental {
            id,
            user_id: new_rental.user_id,
            total: new_rental.total,
            start_date: new_rental.start_date,
            end_date: new_rental.end_date,
            created_at: Utc::now(),
        };
        t.rentals.insert(id, rental.clone());
        for movie_id in new_rental.movie_ids {
            let line_id = t.next_id();
            t.line_items.push(RentalLineItem {
                id: line_id,
                rental_id: id,
                movie_id,
            });
        }

        Ok(rental)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Rental>, AppError> {
        self.check_reads()?;
        Ok(self.tables().rentals.get(&id).cloned())
    }

    async fn list_line_items(&self, rental_id: i64) -> Result<Vec<RentalLineItem>, AppError> {
        Ok(self
            .tables()
            .line_items
            .iter()
            .filter(|li| li.rental_id == rental_id)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl HealthRepository for MemoryStore {
    async fn ping(&self) -> Result<(), AppError> {
        self.check_reads()
    }
}

pub fn create_test_state(store: Arc<MemoryStore>) -> AppState {
    AppState::new(Repositories {
        users: store.clone(),
        genres: store.clone(),
        movie_types: store.clone(),
        movies: store.clone(),
        rentals: store.clone(),
        health: store,
    })
}

/// Full API router over an in-memory store.
pub fn make_server(store: Arc<MemoryStore>) -> TestServer {
    let app = Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api::routes::routes())
        .with_state(create_test_state(store));
    TestServer::new(app).unwrap()
}

/// Store holding John Doe, two genres, "Avatar: The Way of Water"
/// (new release, 11.25) and "Rambo" (old movie, 9.78).
pub struct Catalog {
    pub store: Arc<MemoryStore>,
    pub user: User,
    pub sci_fi: Genre,
    pub action: Genre,
    pub avatar: Movie,
    pub rambo: Movie,
}

pub fn seeded_catalog() -> Catalog {
    let store = MemoryStore::new();
    let user = store.seed_user("John", "Doe");
    let sci_fi = store.seed_genre("Science Fiction");
    let action = store.seed_genre("Action");
    let avatar = store.seed_movie("Avatar: The Way of Water", 11.25, 1, sci_fi.id);
    let rambo = store.seed_movie("Rambo", 9.78, 3, action.id);

    Catalog {
        store,
        user,
        sci_fi,
        action,
        avatar,
        rambo,
    }
}
