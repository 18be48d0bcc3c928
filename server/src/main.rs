#![deny(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

use dotenvy::dotenv;
use errors::ApplicationError;
use router::setup_router;
use std::path::PathBuf;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod errors;
mod model;
mod router;
mod state;

#[cfg(test)]
mod test;

#[tokio::main]
async fn main() -> Result<(), ApplicationError> {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

async fn run() -> Result<(), ApplicationError> {
    setup_tracing();

    let (host, port, db_path) = setup_env()?;

    if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            ApplicationError::Internal(format!("Failed to create data directory: {}", e))
        })?;
    }

    info!("Opening recipe database at {:?}", db_path);
    let conn = larder_core::open_db(&db_path)?;

    let app = setup_router(conn);

    let address = format!("{}:{}", host, port);
    info!("Starting server on {}", address);

    let listener = TcpListener::bind(address)
        .await
        .map_err(ApplicationError::from)?;

    info!(
        "Listening on: {}",
        listener.local_addr().map_err(ApplicationError::from)?
    );

    axum::serve(listener, app.into_make_service())
        .await
        .map_err(ApplicationError::CannotServe)?;
    Ok(())
}

fn setup_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!(
                    "{crate_name}=debug,larder_core=debug,tower_http=debug",
                    crate_name = env!("CARGO_CRATE_NAME")
                )
                .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn setup_env() -> Result<(String, String, PathBuf), ApplicationError> {
    dotenv().ok();

    let host = std::env::var("LARDER_HOST")
        .map_err(|e| ApplicationError::EnvError(e, "LARDER_HOST".to_string()))?;
    let port = std::env::var("LARDER_PORT")
        .map_err(|e| ApplicationError::EnvError(e, "LARDER_PORT".to_string()))?;
    let db_path =
        std::env::var("LARDER_DB_PATH").unwrap_or_else(|_| "./data/larder.db".to_string());

    Ok((host, port, PathBuf::from(db_path)))
}
