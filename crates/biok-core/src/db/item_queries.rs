//! Item CRUD operations and queries.

use jiff::Timestamp;
use log::debug;
use rusqlite::{params, OptionalExtension, Transaction};

use super::utils::item_from_row;
use crate::{
    error::{CatalogError, DatabaseResultExt, Result},
    models::{millis, Category, Item},
};

const INSERT_ITEM_SQL: &str = "INSERT INTO items (id, category, title, created_at, updated_at, document) VALUES (?1, ?2, ?3, ?4, ?5, ?6)";
const UPSERT_ITEM_SQL: &str = "INSERT INTO items (id, category, title, created_at, updated_at, document) VALUES (?1, ?2, ?3, ?4, ?5, ?6)
    ON CONFLICT(id) DO UPDATE SET category = excluded.category, title = excluded.title, created_at = excluded.created_at, updated_at = excluded.updated_at, document = excluded.document";
const UPDATE_ITEM_SQL: &str =
    "UPDATE items SET title = ?1, updated_at = ?2, document = ?3 WHERE id = ?4";
const SELECT_ITEM_SQL: &str = "SELECT document FROM items WHERE id = ?1";
const CHECK_ITEM_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM items WHERE id = ?1)";
const LIST_ITEMS_SQL: &str =
    "SELECT document FROM items WHERE category = ?1 ORDER BY created_at DESC, rowid DESC";
const LIST_ALL_ITEMS_SQL: &str = "SELECT document FROM items ORDER BY created_at DESC, rowid DESC";
const DELETE_ITEM_SQL: &str = "DELETE FROM items WHERE id = ?1 AND category = ?2";
const MATCH_ID_PREFIX_SQL: &str =
    "SELECT id FROM items WHERE substr(id, 1, length(?1)) = ?1 LIMIT 2";
const COUNT_ID_PREFIX_SQL: &str =
    "SELECT COUNT(*) FROM items WHERE substr(id, 1, length(?1)) = ?1";

impl super::Database {
    /// Stores a new item.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::DuplicateItem` if an item with the same ID is
    /// already stored.
    pub fn insert_item(&mut self, item: &Item) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let exists: bool = tx
            .query_row(CHECK_ITEM_EXISTS_SQL, params![item.id()], |row| row.get(0))
            .db_context("Failed to check item existence")?;
        if exists {
            return Err(CatalogError::DuplicateItem {
                id: item.id().to_string(),
            });
        }

        write_item(&tx, INSERT_ITEM_SQL, item, Timestamp::now())?;
        tx.commit().db_context("Failed to commit transaction")?;

        debug!("Inserted {} item {}", item.category().as_str(), item.id());
        Ok(())
    }

    /// Retrieves an item by its full ID.
    pub fn get_item(&self, id: &str) -> Result<Option<Item>> {
        self.connection
            .query_row(SELECT_ITEM_SQL, params![id], |row| item_from_row(row, 0))
            .optional()
            .db_context("Failed to query item")
    }

    /// Lists a category's items, newest first.
    pub fn list_items(&self, category: Category) -> Result<Vec<Item>> {
        let mut stmt = self
            .connection
            .prepare(LIST_ITEMS_SQL)
            .db_context("Failed to prepare query")?;

        let items = stmt
            .query_map(params![category.as_str()], |row| item_from_row(row, 0))
            .db_context("Failed to query items")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to decode items")?;

        Ok(items)
    }

    /// Lists the items of both categories, newest first.
    pub fn list_all_items(&self) -> Result<Vec<Item>> {
        let mut stmt = self
            .connection
            .prepare(LIST_ALL_ITEMS_SQL)
            .db_context("Failed to prepare query")?;

        let items = stmt
            .query_map([], |row| item_from_row(row, 0))
            .db_context("Failed to query items")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to decode items")?;

        Ok(items)
    }

    /// Replaces a stored item's mutable fields.
    ///
    /// `id`, `created_at` and an existing completion stamp are taken from the
    /// stored row whatever `item` carries. Returns the item as written.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::ItemNotFound` if no item has this ID, and
    /// `CatalogError::InvalidInput` if the edit would change its category.
    pub fn update_item(&mut self, item: &Item) -> Result<Item> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let stored = tx
            .query_row(SELECT_ITEM_SQL, params![item.id()], |row| item_from_row(row, 0))
            .optional()
            .db_context("Failed to query item")?
            .ok_or_else(|| CatalogError::ItemNotFound {
                id: item.id().to_string(),
            })?;

        if stored.category() != item.category() {
            return Err(CatalogError::invalid_input("type").with_reason(format!(
                "Cannot turn a {} item into a {} item",
                stored.category().as_str(),
                item.category().as_str()
            )));
        }

        let now = millis::truncate(Timestamp::now());
        let mut updated = item.clone();
        updated.preserve_immutable(&stored, now);

        rewrite_item(&tx, &updated, now)?;
        tx.commit().db_context("Failed to commit transaction")?;

        Ok(updated)
    }

    /// Sets the active flag of a stored item, leaving every other field as
    /// stored.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::ItemNotFound` if no item has this ID.
    pub fn activate_item(&mut self, id: &str) -> Result<Item> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let mut item = tx
            .query_row(SELECT_ITEM_SQL, params![id], |row| item_from_row(row, 0))
            .optional()
            .db_context("Failed to query item")?
            .ok_or_else(|| CatalogError::ItemNotFound { id: id.to_string() })?;

        item.activate();
        rewrite_item(&tx, &item, Timestamp::now())?;
        tx.commit().db_context("Failed to commit transaction")?;

        debug!("Activated {} item {}", item.category().as_str(), item.id());
        Ok(item)
    }

    /// Permanently deletes an item of the given category.
    ///
    /// Returns whether a row was removed.
    pub fn delete_item(&mut self, id: &str, category: Category) -> Result<bool> {
        let affected = self
            .connection
            .execute(DELETE_ITEM_SQL, params![id, category.as_str()])
            .db_context("Failed to delete item")?;
        Ok(affected > 0)
    }

    /// Inserts or replaces every item inside a single transaction.
    ///
    /// Either all items are written or none are. Returns the number written.
    pub fn upsert_items(&mut self, items: &[Item]) -> Result<usize> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let now = Timestamp::now();
        for item in items {
            write_item(&tx, UPSERT_ITEM_SQL, item, now)?;
        }

        tx.commit().db_context("Failed to commit transaction")?;
        Ok(items.len())
    }

    /// Resolves a full item ID from an ID or a unique prefix of one.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::ItemNotFound` if nothing matches and
    /// `CatalogError::AmbiguousId` if more than one item does.
    pub fn resolve_id(&self, prefix: &str) -> Result<String> {
        let prefix = prefix.trim();
        if prefix.is_empty() {
            return Err(CatalogError::invalid_input("id").with_reason("ID must not be empty"));
        }

        let exists: bool = self
            .connection
            .query_row(CHECK_ITEM_EXISTS_SQL, params![prefix], |row| row.get(0))
            .db_context("Failed to check item existence")?;
        if exists {
            return Ok(prefix.to_string());
        }

        let mut stmt = self
            .connection
            .prepare(MATCH_ID_PREFIX_SQL)
            .db_context("Failed to prepare query")?;
        let mut matches = stmt
            .query_map(params![prefix], |row| row.get::<_, String>(0))
            .db_context("Failed to query item IDs")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read item IDs")?;

        match matches.len() {
            0 => Err(CatalogError::ItemNotFound {
                id: prefix.to_string(),
            }),
            1 => Ok(matches.remove(0)),
            _ => {
                let count: i64 = self
                    .connection
                    .query_row(COUNT_ID_PREFIX_SQL, params![prefix], |row| row.get(0))
                    .db_context("Failed to count item IDs")?;
                Err(CatalogError::AmbiguousId {
                    prefix: prefix.to_string(),
                    matches: count as usize,
                })
            }
        }
    }
}

fn write_item(tx: &Transaction<'_>, sql: &str, item: &Item, now: Timestamp) -> Result<()> {
    let document = serde_json::to_string(item)?;
    tx.execute(
        sql,
        params![
            item.id(),
            item.category().as_str(),
            item.title(),
            item.base().created_at.as_millisecond(),
            now.to_string(),
            document
        ],
    )
    .db_context("Failed to write item")?;
    Ok(())
}

fn rewrite_item(tx: &Transaction<'_>, item: &Item, now: Timestamp) -> Result<()> {
    let document = serde_json::to_string(item)?;
    tx.execute(
        UPDATE_ITEM_SQL,
        params![item.title(), now.to_string(), document, item.id()],
    )
    .db_context("Failed to update item")?;
    Ok(())
}
