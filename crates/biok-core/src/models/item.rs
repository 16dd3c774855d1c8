//! Item model definition and state transitions.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{millis, Author, Category, MealType, Origin, PlanDuration, PlanLocation, PriceRange};
use crate::error::{CatalogError, Result};

/// Maximum length of the free-text notes, in characters.
pub const MAX_NOTES_CHARS: usize = 280;

/// A labelled external link attached to an item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Link {
    pub label: String,
    pub url: String,
}

impl Link {
    /// A link whose label is the URL itself.
    pub fn bare(url: impl Into<String>) -> Self {
        let url = url.into();
        Self {
            label: url.clone(),
            url,
        }
    }
}

impl std::str::FromStr for Link {
    type Err = String;

    /// Parses `label=url`, or a bare URL used as its own label.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err("Link must not be empty".to_string());
        }

        match s.split_once('=') {
            Some((label, url)) if !label.contains("://") && !url.trim().is_empty() => Ok(Self {
                label: label.trim().to_string(),
                url: url.trim().to_string(),
            }),
            _ => Ok(Self::bare(s)),
        }
    }
}

/// Fields shared by every item regardless of its category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ItemBase {
    /// Opaque unique identifier
    pub id: String,

    pub title: String,

    /// Who proposed the item
    pub created_by: Author,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<Link>,

    /// Travel time in minutes from Las Carreras
    #[serde(rename = "time_las_carreras")]
    pub time_las_carreras: u32,

    /// Travel time in minutes from Portu
    #[serde(rename = "time_portu")]
    pub time_portu: u32,

    #[serde(rename = "car_needed")]
    pub car_needed: bool,

    #[serde(default)]
    pub is_favorite: bool,

    #[serde(default)]
    pub is_done: bool,

    /// Accepted proposal that is reserved or in progress
    #[serde(default)]
    pub is_active: bool,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "millis::option"
    )]
    pub completed_at: Option<Timestamp>,

    #[serde(with = "millis")]
    pub created_at: Timestamp,
}

impl ItemBase {
    /// Travel time from the given origin.
    pub fn travel_minutes(&self, origin: Origin) -> u32 {
        match origin {
            Origin::LasCarreras => self.time_las_carreras,
            Origin::Portu => self.time_portu,
        }
    }

    /// Checks the submission rules shared by both categories.
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(CatalogError::invalid_input("title").with_reason("Title must not be empty"));
        }

        if let Some(notes) = &self.notes {
            let len = notes.chars().count();
            if len > MAX_NOTES_CHARS {
                return Err(CatalogError::invalid_input("notes").with_reason(format!(
                    "Notes are limited to {MAX_NOTES_CHARS} characters, got {len}"
                )));
            }
        }

        if let Some(link) = self.links.iter().find(|l| l.url.trim().is_empty()) {
            return Err(CatalogError::invalid_input("links")
                .with_reason(format!("Link '{}' has an empty URL", link.label)));
        }

        Ok(())
    }
}

/// An outing or activity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanItem {
    #[serde(flatten)]
    pub base: ItemBase,

    /// Exact price per person
    pub price: f64,

    pub location: PlanLocation,

    pub duration: PlanDuration,
}

/// A place to eat or have a drink.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ComerItem {
    #[serde(flatten)]
    pub base: ItemBase,

    #[serde(rename = "price_range")]
    pub price_range: PriceRange,

    /// Meal slots the place is good for
    #[serde(rename = "meal_type", default)]
    pub meal_types: Vec<MealType>,
}

impl ComerItem {
    /// Whether the place serves the given slot.
    pub fn serves(&self, meal: MealType) -> bool {
        self.meal_types.contains(&meal)
    }
}

/// A catalog entry, discriminated by its `type` field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Item {
    Plan(PlanItem),
    Comer(ComerItem),
}

impl Item {
    pub fn base(&self) -> &ItemBase {
        match self {
            Item::Plan(plan) => &plan.base,
            Item::Comer(comer) => &comer.base,
        }
    }

    pub fn base_mut(&mut self) -> &mut ItemBase {
        match self {
            Item::Plan(plan) => &mut plan.base,
            Item::Comer(comer) => &mut comer.base,
        }
    }

    pub fn id(&self) -> &str {
        &self.base().id
    }

    pub fn title(&self) -> &str {
        &self.base().title
    }

    pub fn category(&self) -> Category {
        match self {
            Item::Plan(_) => Category::Plan,
            Item::Comer(_) => Category::Comer,
        }
    }

    /// Checks the submission rules for this item.
    pub fn validate(&self) -> Result<()> {
        self.base().validate()?;

        if let Item::Plan(plan) = self {
            if !plan.price.is_finite() || plan.price < 0.0 {
                return Err(CatalogError::invalid_input("price")
                    .with_reason(format!("Price must be a non-negative number, got {}", plan.price)));
            }
        }

        Ok(())
    }

    /// Flips the done flag.
    ///
    /// Either direction clears the active flag. Becoming done stamps
    /// `completed_at` (never earlier than `created_at`); reopening clears it.
    pub fn toggle_done(&mut self, now: Timestamp) {
        let base = self.base_mut();
        if base.is_done {
            base.is_done = false;
            base.completed_at = None;
        } else {
            base.is_done = true;
            base.completed_at = Some(now.max(base.created_at));
        }
        base.is_active = false;
    }

    pub fn toggle_favorite(&mut self) {
        let base = self.base_mut();
        base.is_favorite = !base.is_favorite;
    }

    /// Sets the active flag as the result of accepting a proposal. The done
    /// flag is left untouched.
    pub fn activate(&mut self) {
        self.base_mut().is_active = true;
    }

    /// Copies the fields an edit may never change from the stored version.
    ///
    /// `id` and `created_at` always come from `stored`. An item that was done
    /// and stays done keeps its stored `completed_at`; one that becomes done
    /// through the edit is stamped with `now`, and one that is no longer done
    /// loses its stamp. A done item is never active.
    pub fn preserve_immutable(&mut self, stored: &Item, now: Timestamp) {
        let stored = stored.base();
        let base = self.base_mut();
        base.id = stored.id.clone();
        base.created_at = stored.created_at;

        base.completed_at = match (stored.is_done, base.is_done) {
            (true, true) => stored.completed_at.or(Some(now.max(base.created_at))),
            (false, true) => Some(now.max(base.created_at)),
            (_, false) => None,
        };

        if base.is_done {
            base.is_active = false;
        }
    }
}
