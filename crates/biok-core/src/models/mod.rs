//! Data models for catalog items.
//!
//! This module contains the domain models of the Biok catalog. An [`Item`] is
//! a tagged union over the two categories: each variant struct ([`PlanItem`],
//! [`ComerItem`]) flattens a shared [`ItemBase`] and adds its own fields, and
//! the serialized form carries a `type` discriminant (`"plan"` or `"comer"`).
//! Display implementations live in [`crate::display::models`].
//!
//! # State transitions
//!
//! Items move between three observable states:
//!
//! - **Pending**: neither done nor active
//! - **Active**: an accepted proposal (`is_active`), reserved or in progress
//! - **Done**: `is_done` with a `completed_at` stamp
//!
//! [`Item::toggle_done`] always clears `is_active`, and
//! [`Item::preserve_immutable`] keeps `id`, `created_at` and an existing
//! completion stamp intact across edits.
//!
//! # Examples
//!
//! ```rust
//! use biok_core::models::{
//!     Author, Category, Constraints, Item, ItemBase, Origin, PlanDuration, PlanItem,
//!     PlanLocation,
//! };
//! use jiff::Timestamp;
//!
//! let item = Item::Plan(PlanItem {
//!     base: ItemBase {
//!         id: "a".to_string(),
//!         title: "Picnic".to_string(),
//!         created_by: Author::Nerea,
//!         notes: None,
//!         links: vec![],
//!         time_las_carreras: 20,
//!         time_portu: 35,
//!         car_needed: true,
//!         is_favorite: false,
//!         is_done: false,
//!         is_active: false,
//!         completed_at: None,
//!         created_at: Timestamp::now(),
//!     },
//!     price: 0.0,
//!     location: PlanLocation::Nature,
//!     duration: PlanDuration::HalfDay,
//! });
//!
//! let mut constraints = Constraints::new(Category::Plan, Origin::LasCarreras);
//! assert!(constraints.admits(&item));
//!
//! constraints.car_available = false;
//! assert!(!constraints.admits(&item));
//! ```

pub mod enums;
pub mod filters;
pub mod groups;
pub mod item;
pub(crate) mod millis;
pub mod preferences;


pub use enums::{Author, Category, MealType, Origin, PlanDuration, PlanLocation, PriceRange};
pub use filters::{ComerConstraints, Constraints, ModeConstraints, PlanConstraints};
pub use groups::ItemGroups;
pub use item::{ComerItem, Item, ItemBase, Link, PlanItem, MAX_NOTES_CHARS};
pub use preferences::Preferences;
