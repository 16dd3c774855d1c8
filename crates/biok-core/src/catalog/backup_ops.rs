//! Backup operations for the Catalog.

use jiff::Timestamp;
use log::info;

use super::Catalog;
use crate::{
    backup::{BackupDocument, ImportSummary},
    error::Result,
};

impl Catalog {
    /// Snapshots both collections into a backup document.
    pub async fn export_backup(&self) -> Result<BackupDocument> {
        let items = self.list_all_items().await?;
        Ok(BackupDocument::new(items, Timestamp::now()))
    }

    /// Validates a backup and restores its items.
    ///
    /// Items are upserted by ID in a single transaction: either every item
    /// is written or the store is left untouched.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::InvalidBackup` if the document is malformed;
    /// nothing is written in that case.
    pub async fn import_backup(&self, text: &str) -> Result<ImportSummary> {
        let document = BackupDocument::parse(text)?;
        let summary = ImportSummary {
            planes: document.planes.len(),
            comer: document.comer.len(),
        };

        let items = document.into_items();
        self.with_db(move |db| db.upsert_items(&items)).await?;

        info!("Restored {} items from backup", summary.total());
        Ok(summary)
    }
}
