//! Error types for record-store operations.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("database error: {0}")]
    Sql(#[from] sqlx::Error),

    #[error("corrupt record payload: {0}")]
    Json(#[from] serde_json::Error),
}
