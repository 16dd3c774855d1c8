//! Builder for creating and configuring Catalog instances.

use std::path::{Path, PathBuf};

use log::info;
use tokio::task;

use super::Catalog;
use crate::{
    db::Database,
    error::{CatalogError, Result},
};

/// Builder for creating and configuring Catalog instances.
#[derive(Debug, Clone, Default)]
pub struct CatalogBuilder {
    database_path: Option<PathBuf>,
}

impl CatalogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses the XDG Base Directory specification:
    /// `$XDG_DATA_HOME/biok/biok.db` or `~/.local/share/biok/biok.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.database_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Builds the catalog, creating the database file and schema if needed.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::FileSystem` if the parent directory cannot be
    /// created, and `CatalogError::Database` if initialization fails.
    pub async fn build(self) -> Result<Catalog> {
        let db_path = match self.database_path {
            Some(path) => path,
            None => Self::default_database_path()?,
        };

        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| CatalogError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let init_path = db_path.clone();
        task::spawn_blocking(move || Database::new(&init_path).map(drop))
            .await
            .map_err(CatalogError::join)??;

        info!("Using catalog database at {}", db_path.display());
        Ok(Catalog::new(db_path))
    }

    /// Returns the default database path following the XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("biok")
            .place_data_file("biok.db")
            .map_err(|e| CatalogError::XdgDirectory(e.to_string()))
    }
}
