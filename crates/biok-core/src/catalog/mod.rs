//! High-level async API over the item store.
//!
//! [`Catalog`] is the single entry point used by interfaces. It owns no
//! connection: every operation opens the database on the blocking pool
//! through `tokio::task::spawn_blocking`, so callers never block the runtime.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Handlers     │    │   Operations    │    │    Database     │
//! │ (item_handlers, │───▶│ (item_ops,      │───▶│   (via db/)     │
//! │  decision_ops)  │    │  backup_ops)    │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!  validation, grouping   one blocking call      SQLite + JSON
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: creates [`Catalog`] instances and the database file
//! - [`item_ops`]: store operations (create, get, list, update, delete)
//! - [`item_handlers`]: params-based operations with validation and grouping
//! - [`decision_ops`]: candidate reports, draws and proposal acceptance
//! - [`backup_ops`]: export and import of the whole store
//! - [`preference_ops`]: default author and origin
//!
//! # Examples
//!
//! ```rust,no_run
//! use biok_core::{
//!     models::{Author, Category, PlanDuration, PlanLocation},
//!     params::{CreateItem, ItemDetails, ListItems},
//!     CatalogBuilder,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let catalog = CatalogBuilder::new()
//!     .with_database_path("/tmp/biok.db")
//!     .build()
//!     .await?;
//!
//! let item = catalog
//!     .create_item(&CreateItem {
//!         title: "Escape room".to_string(),
//!         author: Some(Author::Sergio),
//!         notes: None,
//!         links: vec![],
//!         time_las_carreras: 15,
//!         time_portu: 20,
//!         car_needed: false,
//!         is_favorite: false,
//!         details: ItemDetails::Plan {
//!             price: 22.0,
//!             location: PlanLocation::City,
//!             duration: PlanDuration::Short,
//!         },
//!     })
//!     .await?;
//!
//! let groups = catalog
//!     .list_grouped(&ListItems {
//!         category: Category::Plan,
//!         search: None,
//!     })
//!     .await?;
//! assert_eq!(groups.pending[0].id(), item.id());
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};

pub mod backup_ops;
pub mod builder;
pub mod decision_ops;
pub mod item_handlers;
pub mod item_ops;
pub mod preference_ops;

#[cfg(test)]
mod tests;

pub use builder::CatalogBuilder;

/// Main catalog interface for managing items and decisions.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub(crate) db_path: PathBuf,
}

impl Catalog {
    pub(crate) fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }

    /// Path of the SQLite file backing this catalog.
    pub fn database_path(&self) -> &Path {
        &self.db_path
    }
}
