#![allow(clippy::unwrap_used)]

use axum_test::TestServer;
use rusqlite::Connection;
use serde_json::json;

use crate::{model::recipe::RecipeDto, router::setup_router};

mod browse;

pub fn setup_server() -> TestServer {
    let conn = Connection::open_in_memory().unwrap();
    larder_core::schema::migrate(&conn).unwrap();

    TestServer::builder()
        .save_cookies()
        .build(setup_router(conn))
        .unwrap()
}

pub async fn add_recipe(server: &TestServer, body: serde_json::Value) -> RecipeDto {
    let response = server.post("/recipes").json(&body).await;
    response.assert_status(axum::http::StatusCode::CREATED);
    response.json::<RecipeDto>()
}

/// Apple Pie (dessert, 60m), Beef Stew (main, 120m), Garden Salad (favorite, vegetarian)
pub async fn seed(server: &TestServer) {
    add_recipe(
        server,
        json!({ "name": "Apple Pie", "category": "dessert", "totalTime": 60 }),
    )
    .await;
    add_recipe(
        server,
        json!({ "name": "Beef Stew", "category": "main", "mealType": "dinner", "totalTime": 120 }),
    )
    .await;
    add_recipe(
        server,
        json!({
            "name": "Garden Salad",
            "category": "salad",
            "dietaryPreference": "vegetarian",
            "isFavorite": true
        }),
    )
    .await;
}

#[tokio::test]
async fn health_ping_ok() {
    let server = setup_server();

    server.get("/health/ping").await.assert_status_ok();
}

#[tokio::test]
async fn api_docs_served() {
    let server = setup_server();

    let response = server.get("/api.json").await;
    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert!(json["paths"]["/recipes"].is_object());
    assert!(json["paths"].get("/browse").is_none());
}
