use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Unknown quick filter: {0}")]
    UnknownQuickFilter(String),
    #[error("Unknown sort key: {0}")]
    UnknownSortKey(String),
    #[error("Unknown sort direction: {0}")]
    UnknownDirection(String),
    #[error("Recipe {0} not found")]
    RecipeNotFound(i64),
    #[error("Group {0} not found")]
    GroupNotFound(i64),
}
