use aide::{axum::ApiRouter, openapi::OpenApi};
use axum::{Extension, Router};
use browse::browse_routes;
use groups::group_routes;
use health::health_routes;
use openapi::{api_docs, docs_routes};
use recipes::recipe_routes;
use rusqlite::Connection;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tower_sessions::{MemoryStore, SessionManagerLayer};

use crate::state::AppState;

pub mod browse;
pub mod groups;
pub mod health;
pub mod openapi;
pub mod recipes;

pub fn setup_router(db: Connection) -> Router {
    aide::gen::on_error(|error| {
        tracing::warn!("OpenAPI generation: {error}");
    });

    aide::gen::extract_schemas(true);
    let mut api = OpenApi::default();

    let session_store = MemoryStore::default();
    let session_layer = SessionManagerLayer::new(session_store).with_secure(false);
    let app_state = AppState::new(db);

    // Browse routes read the session and stay out of the OpenAPI document
    ApiRouter::new()
        .merge(health_routes())
        .merge(recipe_routes())
        .merge(group_routes())
        .merge(browse_routes())
        .merge(docs_routes())
        .finish_api_with(&mut api, api_docs)
        .layer(Extension(Arc::new(api)))
        .layer(session_layer)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
