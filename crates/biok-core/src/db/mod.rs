//! SQLite storage for catalog items and preferences.
//!
//! Items are kept in a single `items` table: the full JSON document plus the
//! columns needed for ordering and lookups (`category`, `created_at` in
//! milliseconds). Every multi-statement write runs in a transaction, so a
//! failed operation leaves the store unchanged.

use std::path::Path;

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod item_queries;
pub mod migrations;
pub mod preference_queries;
pub mod utils;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Opens the database at `path` and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}
