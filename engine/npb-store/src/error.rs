//! Error types for the persistence layer

use thiserror::Error;

/// Result type alias for store operations
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors that can occur in the persistence layer
#[derive(Error, Debug)]
pub enum StoreError {
    /// Database errors (connection, statement, decode)
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A persisted row that violates the domain model (e.g. an unknown
    /// league label)
    #[error("corrupt row: {0}")]
    Corrupt(String),
}
