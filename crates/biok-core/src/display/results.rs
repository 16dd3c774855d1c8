//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use super::models::short_id;
use crate::{backup::ImportSummary, models::Item};

/// Wrapper type for displaying the result of create operations.
///
/// # Examples
///
/// ```rust
/// use biok_core::{
///     display::CreateResult,
///     models::{Author, ComerItem, Item, ItemBase, PriceRange},
/// };
/// use jiff::Timestamp;
///
/// let item = Item::Comer(ComerItem {
///     base: ItemBase {
///         id: "5f0c".to_string(),
///         title: "Sidrería".to_string(),
///         created_by: Author::Sergio,
///         notes: None,
///         links: vec![],
///         time_las_carreras: 25,
///         time_portu: 30,
///         car_needed: true,
///         is_favorite: false,
///         is_done: false,
///         is_active: false,
///         completed_at: None,
///         created_at: Timestamp::now(),
///     },
///     price_range: PriceRange::Mid,
///     meal_types: vec![],
/// });
///
/// let output = CreateResult::new(item).to_string();
/// assert!(output.contains("Created comer item with ID: 5f0c"));
/// ```
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<Item> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Created {} item with ID: {}",
            self.resource.category(),
            self.resource.id()
        )?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of update operations, optionally
/// listing what changed.
pub struct UpdateResult<T> {
    pub resource: T,
    pub changes: Vec<String>,
}

impl<T> UpdateResult<T> {
    pub fn new(resource: T) -> Self {
        Self {
            resource,
            changes: Vec::new(),
        }
    }

    pub fn with_changes(resource: T, changes: Vec<String>) -> Self {
        Self { resource, changes }
    }
}

impl fmt::Display for UpdateResult<Item> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Updated {} item with ID: {}",
            self.resource.category(),
            self.resource.id()
        )?;

        if !self.changes.is_empty() {
            writeln!(f)?;
            writeln!(f, "Changes made:")?;
            for change in &self.changes {
                writeln!(f, "- {change}")?;
            }
        }

        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of delete operations.
pub struct DeleteResult<T> {
    pub resource: T,
}

impl<T> DeleteResult<T> {
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for DeleteResult<Item> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Deleted {} item '{}' (ID: {})",
            self.resource.category(),
            self.resource.title(),
            short_id(self.resource.id())
        )
    }
}

impl fmt::Display for ImportSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Imported {} items ({} planes, {} comer)",
            self.total(),
            self.planes,
            self.comer
        )
    }
}
