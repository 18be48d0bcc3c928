use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use schemars::JsonSchema;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("Missing environment variable {1}: {0}")]
    EnvError(std::env::VarError, String),
    #[error("Cannot open database: {0}")]
    Database(#[from] rusqlite::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Cannot serve: {0}")]
    CannotServe(std::io::Error),
    #[error("{0}")]
    Internal(String),
}

pub type RestResult<T> = Result<T, RestError>;

#[derive(Debug, Error)]
pub enum RestError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Internal(String),
}

/// JSON body of every error response
#[derive(Debug, Serialize, JsonSchema)]
pub struct ErrorBody {
    pub error: String,
}

impl From<larder_core::Error> for RestError {
    fn from(e: larder_core::Error) -> Self {
        use larder_core::Error;

        match e {
            Error::RecipeNotFound(_) | Error::GroupNotFound(_) => RestError::NotFound(e.to_string()),
            Error::UnknownQuickFilter(_) | Error::UnknownSortKey(_) | Error::UnknownDirection(_) => {
                RestError::BadRequest(e.to_string())
            }
            Error::Database(_) | Error::Serialization(_) => RestError::Internal(e.to_string()),
        }
    }
}

impl From<rusqlite::Error> for RestError {
    fn from(e: rusqlite::Error) -> Self {
        RestError::Internal(format!("Database error: {}", e))
    }
}

impl From<tower_sessions::session::Error> for RestError {
    fn from(e: tower_sessions::session::Error) -> Self {
        RestError::Internal(format!("Session error: {}", e))
    }
}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        let status = match self {
            RestError::NotFound(_) => StatusCode::NOT_FOUND,
            RestError::BadRequest(_) => StatusCode::BAD_REQUEST,
            RestError::Internal(_) => {
                error!("{}", self);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (
            status,
            Json(ErrorBody {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
