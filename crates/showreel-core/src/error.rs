//! Error types for Showreel

use thiserror::Error;

/// Main error type for portfolio editor operations
#[derive(Error, Debug)]
pub enum PortfolioError {
    /// Generic storage failure (bad path, missing table, etc.)
    #[error("Storage error: {0}")]
    Storage(String),

    /// Database creation/opening error
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    /// Transaction error
    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    /// Table error
    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    /// Storage operation error
    #[error("Storage operation error: {0}")]
    StorageOp(#[from] redb::StorageError),

    /// Commit error
    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    /// Stored or imported document could not be (de)serialized
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A document breaks an invariant the editor relies on
    #[error("Invalid document: {0}")]
    InvalidDocument(String),

    /// A local media file could not be turned into a session reference
    #[error("Media error: {0}")]
    Media(String),

    /// The text enhancement backend failed or returned nothing usable
    #[error("Enhancement error: {0}")]
    Enhancement(String),

    /// Edit mode was requested while the admin gate is locked
    #[error("Editing is not available while the admin gate is locked")]
    GateLocked,

    /// Invalid configuration file or value
    #[error("Config error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for PortfolioError {
    fn from(err: serde_json::Error) -> Self {
        PortfolioError::Serialization(err.to_string())
    }
}

/// Result type alias using PortfolioError
pub type PortfolioResult<T> = Result<T, PortfolioError>;
