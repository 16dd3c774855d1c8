//! Parameter structures for catalog operations.
//!
//! These are plain data structures shared by every interface. They carry no
//! framework derives beyond serde; the CLI defines clap-derived wrappers and
//! converts them with `From` impls:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │───▶│  Core Params    │───▶│  Catalog ops    │
//! │  (clap derives) │    │ (minimal deps)  │    │  (validated)    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Turning a params value into an [`Item`] is where submission rules are
//! applied, so nothing invalid ever reaches the store.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    error::{CatalogError, Result},
    models::{
        millis, Author, Category, ComerItem, Item, ItemBase, Link, MealType, Origin, PlanDuration,
        PlanItem, PlanLocation, PriceRange,
    },
};

/// Parameters for operations addressing a single item.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemRef {
    /// The full ID of the item
    pub id: String,
}

/// Category-specific fields of a new item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ItemDetails {
    Plan {
        price: f64,
        location: PlanLocation,
        duration: PlanDuration,
    },
    Comer {
        price_range: PriceRange,
        #[serde(default)]
        meal_types: Vec<MealType>,
    },
}

impl ItemDetails {
    pub fn category(&self) -> Category {
        match self {
            ItemDetails::Plan { .. } => Category::Plan,
            ItemDetails::Comer { .. } => Category::Comer,
        }
    }
}

/// Parameters for creating a new item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateItem {
    pub title: String,
    /// Proposer; falls back to the default-author preference
    pub author: Option<Author>,
    pub notes: Option<String>,
    #[serde(default)]
    pub links: Vec<Link>,
    pub time_las_carreras: u32,
    pub time_portu: u32,
    #[serde(default)]
    pub car_needed: bool,
    #[serde(default)]
    pub is_favorite: bool,
    pub details: ItemDetails,
}

impl CreateItem {
    /// Builds a new validated item with a fresh ID.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::InvalidInput` if no author is known or any
    /// submission rule fails.
    pub fn into_item(self, default_author: Option<Author>, now: Timestamp) -> Result<Item> {
        let created_by = self.author.or(default_author).ok_or_else(|| {
            CatalogError::invalid_input("author")
                .with_reason("No author given and no default author is set")
        })?;

        let base = ItemBase {
            id: Uuid::new_v4().to_string(),
            title: self.title.trim().to_string(),
            created_by,
            notes: normalize_notes(self.notes),
            links: self.links,
            time_las_carreras: self.time_las_carreras,
            time_portu: self.time_portu,
            car_needed: self.car_needed,
            is_favorite: self.is_favorite,
            is_done: false,
            is_active: false,
            completed_at: None,
            created_at: millis::truncate(now),
        };

        let item = match self.details {
            ItemDetails::Plan {
                price,
                location,
                duration,
            } => Item::Plan(PlanItem {
                base,
                price,
                location,
                duration,
            }),
            ItemDetails::Comer {
                price_range,
                meal_types,
            } => Item::Comer(ComerItem {
                base,
                price_range,
                meal_types: dedup_meals(meal_types),
            }),
        };

        item.validate()?;
        Ok(item)
    }
}

/// Parameters for editing an item. Every `None` leaves the field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateItem {
    pub id: String,
    pub title: Option<String>,
    pub author: Option<Author>,
    /// New notes; an empty string removes them
    pub notes: Option<String>,
    /// Replaces the whole link list
    pub links: Option<Vec<Link>>,
    pub time_las_carreras: Option<u32>,
    pub time_portu: Option<u32>,
    pub car_needed: Option<bool>,
    pub is_favorite: Option<bool>,
    pub is_done: Option<bool>,
    pub price: Option<f64>,
    pub location: Option<PlanLocation>,
    pub duration: Option<PlanDuration>,
    pub price_range: Option<PriceRange>,
    pub meal_types: Option<Vec<MealType>>,
}

impl UpdateItem {
    /// Applies the changes to a copy of `stored`.
    ///
    /// Immutable fields are not touched here; the store restores them from
    /// the stored row on write.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::InvalidInput` when a field of the other
    /// category is given or the result breaks a submission rule.
    pub fn apply(&self, stored: &Item) -> Result<Item> {
        let mut item = stored.clone();

        {
            let base = item.base_mut();
            if let Some(title) = &self.title {
                base.title = title.trim().to_string();
            }
            if let Some(author) = self.author {
                base.created_by = author;
            }
            if let Some(notes) = &self.notes {
                base.notes = normalize_notes(Some(notes.clone()));
            }
            if let Some(links) = &self.links {
                base.links = links.clone();
            }
            if let Some(minutes) = self.time_las_carreras {
                base.time_las_carreras = minutes;
            }
            if let Some(minutes) = self.time_portu {
                base.time_portu = minutes;
            }
            if let Some(car) = self.car_needed {
                base.car_needed = car;
            }
            if let Some(fav) = self.is_favorite {
                base.is_favorite = fav;
            }
            if let Some(done) = self.is_done {
                base.is_done = done;
            }
        }

        match &mut item {
            Item::Plan(plan) => {
                self.reject_field(self.price_range.is_some(), "price_range", Category::Plan)?;
                self.reject_field(self.meal_types.is_some(), "meal_types", Category::Plan)?;
                if let Some(price) = self.price {
                    plan.price = price;
                }
                if let Some(location) = self.location {
                    plan.location = location;
                }
                if let Some(duration) = self.duration {
                    plan.duration = duration;
                }
            }
            Item::Comer(comer) => {
                self.reject_field(self.price.is_some(), "price", Category::Comer)?;
                self.reject_field(self.location.is_some(), "location", Category::Comer)?;
                self.reject_field(self.duration.is_some(), "duration", Category::Comer)?;
                if let Some(range) = self.price_range {
                    comer.price_range = range;
                }
                if let Some(meals) = &self.meal_types {
                    comer.meal_types = dedup_meals(meals.clone());
                }
            }
        }

        item.validate()?;
        Ok(item)
    }

    fn reject_field(&self, given: bool, field: &str, category: Category) -> Result<()> {
        if given {
            return Err(CatalogError::invalid_input(field).with_reason(format!(
                "Field does not apply to {} items",
                category.as_str()
            )));
        }
        Ok(())
    }
}

/// Parameters for listing a category's items.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListItems {
    pub category: Category,
    /// Case-insensitive substring matched against title and notes
    pub search: Option<String>,
}

/// Parameters for permanently deleting an item.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeleteItem {
    pub id: String,
    /// Deletion is refused unless this is set
    #[serde(default)]
    pub confirmed: bool,
}

/// Parameters for changing preferences. `None` keeps the current value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SetPreferences {
    pub default_author: Option<Author>,
    pub default_origin: Option<Origin>,
}

fn normalize_notes(notes: Option<String>) -> Option<String> {
    notes
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty())
}

fn dedup_meals(mut meals: Vec<MealType>) -> Vec<MealType> {
    meals.sort();
    meals.dedup();
    meals
}
