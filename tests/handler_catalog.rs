mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};

// ─── GENRES ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_create_genre() {
    let server = common::make_server(common::MemoryStore::new());

    let response = server
        .post("/api/genres/create")
        .json(&json!({ "name": "Drama" }))
        .await;

    response.assert_status_ok();

    let body = response.json::<Value>();
    assert_eq!(body["message"], "Genre created successfully");
    assert_eq!(body["data"]["name"], "Drama");
}

#[tokio::test]
async fn test_create_genre_empty_name() {
    let server = common::make_server(common::MemoryStore::new());

    let response = server
        .post("/api/genres/create")
        .json(&json!({ "name": "" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_genres() {
    let catalog = common::seeded_catalog();
    let server = common::make_server(catalog.store.clone());

    let body = server.get("/api/genres").await.json::<Value>();

    assert_eq!(body["message"], "Genres found");
    let names: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|g| g["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["Science Fiction", "Action"]);
}

#[tokio::test]
async fn test_list_genres_empty() {
    let server = common::make_server(common::MemoryStore::new());

    let body = server.get("/api/genres").await.json::<Value>();

    assert_eq!(body["message"], "No genres found");
}

#[tokio::test]
async fn test_update_genre() {
    let catalog = common::seeded_catalog();
    let server = common::make_server(catalog.store.clone());

    let response = server
        .put(&format!("/api/genres/update/{}", catalog.sci_fi.id))
        .json(&json!({ "name": "Sci-Fi" }))
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["data"]["name"], "Sci-Fi");

    // Movies pick up the renamed genre
    let movie = server
        .get(&format!("/api/movies/{}", catalog.avatar.id))
        .await
        .json::<Value>();
    assert_eq!(movie["data"]["genre_name"], "Sci-Fi");
}

#[tokio::test]
async fn test_get_genre_not_found() {
    let server = common::make_server(common::MemoryStore::new());

    let response = server.get("/api/genres/8").await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(
        response.json::<Value>()["message"],
        "Genre with ID 8 not found"
    );
}

#[tokio::test]
async fn test_delete_unused_genre() {
    let store = common::MemoryStore::new();
    let genre = store.seed_genre("Western");
    let server = common::make_server(store);

    let response = server
        .delete(&format!("/api/genres/delete/{}", genre.id))
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>()["message"],
        "Genre deleted successfully"
    );
}

#[tokio::test]
async fn test_delete_genre_in_use() {
    let catalog = common::seeded_catalog();
    let server = common::make_server(catalog.store.clone());

    let response = server
        .delete(&format!("/api/genres/delete/{}", catalog.action.id))
        .await;

    response.assert_status(StatusCode::CONFLICT);
}

// ─── MOVIE TYPES ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_types_has_pricing_tiers() {
    let server = common::make_server(common::MemoryStore::new());

    let response = server.get("/api/types").await;

    response.assert_status_ok();

    let body = response.json::<Value>();
    assert_eq!(body["message"], "Types found");
    let types = body["data"].as_array().unwrap();
    assert_eq!(types.len(), 3);
    assert_eq!(types[0]["id"], 1);
    assert_eq!(types[0]["name"], "New releases");
    assert_eq!(types[1]["name"], "Regular movies");
    assert_eq!(types[2]["name"], "Old movies");
}

#[tokio::test]
async fn test_get_type() {
    let server = common::make_server(common::MemoryStore::new());

    let response = server.get("/api/types/3").await;

    response.assert_status_ok();

    let body = response.json::<Value>();
    assert_eq!(body["message"], "Type found");
    assert_eq!(body["data"]["name"], "Old movies");
}

#[tokio::test]
async fn test_create_and_rename_type() {
    let server = common::make_server(common::MemoryStore::new());

    let created = server
        .post("/api/types/create")
        .json(&json!({ "name": "Classics" }))
        .await;

    created.assert_status_ok();
    let body = created.json::<Value>();
    assert_eq!(body["message"], "Type created successfully");
    let id = body["data"]["id"].as_i64().unwrap();

    let updated = server
        .put(&format!("/api/types/update/{id}"))
        .json(&json!({ "name": "Golden age" }))
        .await;

    updated.assert_status_ok();
    assert_eq!(updated.json::<Value>()["message"], "Type updated successfully");
}

#[tokio::test]
async fn test_update_type_not_found() {
    let server = common::make_server(common::MemoryStore::new());

    let response = server
        .put("/api/types/update/404")
        .json(&json!({ "name": "Nothing" }))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(
        response.json::<Value>()["message"],
        "Type with ID 404 not found"
    );
}

#[tokio::test]
async fn test_delete_type_in_use() {
    let catalog = common::seeded_catalog();
    let server = common::make_server(catalog.store.clone());

    let response = server.delete("/api/types/delete/3").await;

    response.assert_status(StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_delete_type_invalid_id() {
    let server = common::make_server(common::MemoryStore::new());

    let response = server.delete("/api/types/delete/old").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert!(
        response.json::<Value>()["message"]
            .as_str()
            .unwrap()
            .starts_with("Invalid ID... ")
    );
}
