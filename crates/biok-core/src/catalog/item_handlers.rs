//! Params-based item operations: validation, toggles, grouping and
//! statistics on top of the store operations.

use jiff::Timestamp;

use super::Catalog;
use crate::{
    error::{CatalogError, Result},
    models::{millis, Item, ItemGroups},
    params::{CreateItem, DeleteItem, ItemRef, ListItems, UpdateItem},
    stats::Statistics,
};

impl Catalog {
    /// Validates and stores a new item.
    ///
    /// Without an explicit author the default-author preference is used.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::InvalidInput` before any write when a
    /// submission rule fails.
    pub async fn create_item(&self, params: &CreateItem) -> Result<Item> {
        let params = params.clone();
        self.with_db(move |db| {
            let prefs = db.get_preferences()?;
            let item = params.into_item(prefs.default_author, Timestamp::now())?;
            db.insert_item(&item)?;
            Ok(item)
        })
        .await
    }

    pub async fn show_item(&self, params: &ItemRef) -> Result<Option<Item>> {
        self.get_item(&params.id).await
    }

    /// Applies an edit to a stored item.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::ItemNotFound` if the item does not exist and
    /// `CatalogError::InvalidInput` if the edited item is invalid.
    pub async fn edit_item(&self, params: &UpdateItem) -> Result<Item> {
        let params = params.clone();
        self.with_db(move |db| {
            let stored = db
                .get_item(&params.id)?
                .ok_or_else(|| CatalogError::ItemNotFound {
                    id: params.id.clone(),
                })?;
            let edited = params.apply(&stored)?;
            db.update_item(&edited)
        })
        .await
    }

    /// Lists a category grouped into active, pending and history sections.
    ///
    /// Store failures are logged and yield empty groups, like the catalog
    /// screen does.
    pub async fn list_grouped(&self, params: &ListItems) -> Result<ItemGroups> {
        let items = self.list_items_or_empty(params.category).await;
        Ok(ItemGroups::new(items, params.search.as_deref()))
    }

    /// Flips the favourite flag.
    pub async fn toggle_favorite(&self, params: &ItemRef) -> Result<Item> {
        self.modify_item(&params.id, Item::toggle_favorite).await
    }

    /// Flips the done flag, stamping or clearing `completed_at` and clearing
    /// the active flag.
    pub async fn toggle_done(&self, params: &ItemRef) -> Result<Item> {
        self.modify_item(&params.id, |item| {
            item.toggle_done(millis::truncate(Timestamp::now()))
        })
        .await
    }

    /// Permanently deletes an item after explicit confirmation.
    ///
    /// Returns the deleted item, or `None` if it did not exist.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::InvalidInput` if `confirmed` is false.
    pub async fn remove_item(&self, params: &DeleteItem) -> Result<Option<Item>> {
        if !params.confirmed {
            return Err(CatalogError::invalid_input("confirmed").with_reason(
                "Deletion is permanent and requires explicit confirmation",
            ));
        }

        let Some(item) = self.get_item(&params.id).await? else {
            return Ok(None);
        };
        self.delete_item(item.id(), item.category()).await?;
        Ok(Some(item))
    }

    /// Computes statistics and achievements over both categories.
    pub async fn statistics(&self) -> Result<Statistics> {
        let items = self.list_all_items().await?;
        Ok(Statistics::compute(&items))
    }

    async fn modify_item<F>(&self, id: &str, change: F) -> Result<Item>
    where
        F: FnOnce(&mut Item) + Send + 'static,
    {
        let id = id.to_string();
        self.with_db(move |db| {
            let mut item = db
                .get_item(&id)?
                .ok_or_else(|| CatalogError::ItemNotFound { id: id.clone() })?;
            change(&mut item);
            db.update_item(&item)
        })
        .await
    }
}
