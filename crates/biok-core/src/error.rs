//! Error types for the catalog library.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all catalog operations.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// No item matches the given ID
    #[error("Item with ID {id} not found")]
    ItemNotFound { id: String },
    /// An item with this ID is already stored
    #[error("Item with ID {id} already exists")]
    DuplicateItem { id: String },
    /// An ID prefix matched more than one item
    #[error("ID prefix '{prefix}' is ambiguous ({matches} items match)")]
    AmbiguousId { prefix: String, matches: usize },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// A backup document did not have the expected shape
    #[error("Invalid backup format: {0}")]
    InvalidBackup(String),
    /// A draw was requested while no item satisfies the constraints
    #[error("No candidates match the current constraints")]
    NoCandidates,
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating database errors with optional context.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    /// Create a new database error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> CatalogError {
        CatalogError::Database {
            message: self.message,
            source,
        }
    }
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> CatalogError {
        CatalogError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl CatalogError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Wraps a failed `spawn_blocking` join.
    pub(crate) fn join(err: tokio::task::JoinError) -> Self {
        Self::Configuration {
            message: format!("Task join error: {err}"),
        }
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| CatalogError::database(message).with_source(e))
    }
}

/// Result type alias for catalog operations
pub type Result<T> = std::result::Result<T, CatalogError>;
