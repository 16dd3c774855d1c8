//! Store operations for the Catalog.
//!
//! Each method runs exactly one blocking database call on the blocking pool
//! and propagates its error unchanged; nothing is retried.

use log::warn;
use tokio::task;

use super::Catalog;
use crate::{
    db::Database,
    error::{CatalogError, Result},
    models::{Category, Item},
};

impl Catalog {
    /// Runs `op` against a fresh connection on the blocking pool.
    pub(crate) async fn with_db<T, F>(&self, op: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut Database) -> Result<T> + Send + 'static,
    {
        let db_path = self.db_path.clone();
        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            op(&mut db)
        })
        .await
        .map_err(CatalogError::join)?
    }

    /// Stores an already validated item.
    pub async fn insert_item(&self, item: Item) -> Result<Item> {
        self.with_db(move |db| {
            db.insert_item(&item)?;
            Ok(item)
        })
        .await
    }

    /// Retrieves an item by its full ID.
    pub async fn get_item(&self, id: &str) -> Result<Option<Item>> {
        let id = id.to_string();
        self.with_db(move |db| db.get_item(&id)).await
    }

    /// Lists a category's items, newest first, propagating store errors.
    pub async fn list_items(&self, category: Category) -> Result<Vec<Item>> {
        self.with_db(move |db| db.list_items(category)).await
    }

    /// Lists a category's items, newest first. A store failure is logged
    /// and reads as an empty collection.
    pub async fn list_items_or_empty(&self, category: Category) -> Vec<Item> {
        match self.list_items(category).await {
            Ok(items) => items,
            Err(e) => {
                warn!("Failed to list {} items: {e}", category.as_str());
                Vec::new()
            }
        }
    }

    /// Lists the items of both categories.
    pub async fn list_all_items(&self) -> Result<Vec<Item>> {
        self.with_db(|db| db.list_all_items()).await
    }

    /// Replaces a stored item's mutable fields, keeping `id`, `created_at`
    /// and any completion stamp from the stored row.
    pub async fn update_item(&self, item: Item) -> Result<Item> {
        self.with_db(move |db| db.update_item(&item)).await
    }

    /// Permanently deletes an item. Returns whether it existed.
    pub async fn delete_item(&self, id: &str, category: Category) -> Result<bool> {
        let id = id.to_string();
        self.with_db(move |db| db.delete_item(&id, category)).await
    }

    /// Resolves a full ID from a unique prefix.
    pub async fn resolve_id(&self, prefix: &str) -> Result<String> {
        let prefix = prefix.to_string();
        self.with_db(move |db| db.resolve_id(&prefix)).await
    }
}
