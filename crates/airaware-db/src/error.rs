//! Database error types.
//!
//! Every variant means the same thing to callers: storage could not
//! answer. Read-only listing code degrades these to an empty result.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, DbError>;

#[derive(Debug, Error)]
pub enum DbError {
    #[error("Could not connect to storage: {0}")]
    Connect(#[source] sqlx::Error),

    #[error("Query failed: {0}")]
    Query(#[from] sqlx::Error),

    #[error("No storage connection for this request")]
    NoConnection,
}
