//! Whole-store backup documents.
//!
//! A backup is one JSON object holding both collections:
//!
//! ```json
//! { "version": 1, "timestamp": 1700000000000, "planes": [], "comer": [] }
//! ```
//!
//! Parsing checks the top-level shape first and then reads items leniently:
//! unknown fields are ignored and an item without a `type` takes the one of
//! the collection it sits in. Any failure rejects the whole document.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{
    error::{CatalogError, Result},
    models::{Category, Item},
};

/// Format version written by [`BackupDocument::new`].
pub const BACKUP_VERSION: u32 = 1;

/// Serialized snapshot of both collections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackupDocument {
    pub version: u32,
    #[serde(with = "crate::models::millis")]
    pub timestamp: Timestamp,
    pub planes: Vec<Item>,
    pub comer: Vec<Item>,
}

/// How many items an import restored per collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ImportSummary {
    pub planes: usize,
    pub comer: usize,
}

impl ImportSummary {
    pub fn total(&self) -> usize {
        self.planes + self.comer
    }
}

impl BackupDocument {
    /// Builds a document from items of either category, taken at `timestamp`.
    pub fn new(items: impl IntoIterator<Item = Item>, timestamp: Timestamp) -> Self {
        let (planes, comer): (Vec<Item>, Vec<Item>) = items
            .into_iter()
            .partition(|item| item.category() == Category::Plan);

        Self {
            version: BACKUP_VERSION,
            timestamp,
            planes,
            comer,
        }
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parses and validates a backup document.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::InvalidBackup` if the text is not a JSON object
    /// with `planes` and `comer` arrays, or if any item cannot be read.
    pub fn parse(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text)
            .map_err(|_| CatalogError::InvalidBackup("not a JSON document".to_string()))?;
        let Value::Object(mut root) = value else {
            return Err(CatalogError::InvalidBackup(
                "top level must be an object".to_string(),
            ));
        };

        let planes = take_collection(&mut root, Category::Plan)?;
        let comer = take_collection(&mut root, Category::Comer)?;

        let version = root
            .get("version")
            .and_then(Value::as_u64)
            .map_or(BACKUP_VERSION, |v| v as u32);
        let timestamp = root
            .get("timestamp")
            .and_then(Value::as_i64)
            .and_then(|ms| Timestamp::from_millisecond(ms).ok())
            .unwrap_or(Timestamp::UNIX_EPOCH);

        Ok(Self {
            version,
            timestamp,
            planes,
            comer,
        })
    }

    pub fn len(&self) -> usize {
        self.planes.len() + self.comer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.planes.is_empty() && self.comer.is_empty()
    }

    /// All items of the document, plans first.
    pub fn into_items(self) -> Vec<Item> {
        let mut items = self.planes;
        items.extend(self.comer);
        items
    }
}

fn take_collection(root: &mut Map<String, Value>, category: Category) -> Result<Vec<Item>> {
    let key = category.collection();
    let entries = match root.remove(key) {
        Some(Value::Array(entries)) => entries,
        Some(_) => {
            return Err(CatalogError::InvalidBackup(format!(
                "'{key}' must be an array"
            )))
        }
        None => return Err(CatalogError::InvalidBackup(format!("missing '{key}'"))),
    };

    entries
        .into_iter()
        .enumerate()
        .map(|(idx, mut entry)| {
            if let Value::Object(fields) = &mut entry {
                fields
                    .entry("type")
                    .or_insert_with(|| Value::String(category.as_str().to_string()));
            }
            serde_json::from_value(entry).map_err(|e| {
                CatalogError::InvalidBackup(format!("item {idx} of '{key}' is invalid: {e}"))
            })
        })
        .collect()
}
