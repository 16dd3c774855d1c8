//! Core library for Biok, a two-person helper for deciding what to do and
//! where to eat.
//!
//! Items live in two collections, plans (outings) and comer (places to eat).
//! A decision filters one collection through hard constraints and draws a
//! winner uniformly at random; accepting the proposal marks the item active.
//!
//! # Layers
//!
//! - **Models** ([`models`]): the tagged `Item` union, constraints, grouping
//! - **Decision engine** ([`decision`]): candidate pool, draw, reveal,
//!   proposal lifecycle
//! - **Storage** ([`db`]): SQLite-backed item store and preferences
//! - **Facade** ([`catalog`]): async [`Catalog`] running store calls on the
//!   blocking pool
//! - **Derived views** ([`stats`], [`backup`], [`display`])
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use biok_core::{models::Category, CatalogBuilder};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let catalog = CatalogBuilder::new()
//!     .with_database_path("biok.db")
//!     .build()
//!     .await?;
//!
//! let constraints = catalog.default_constraints(Category::Comer).await?;
//! let mut rng = StdRng::from_entropy();
//! let proposal = catalog.propose(&constraints, &mut rng).await?;
//! println!("{proposal}");
//!
//! let accepted = catalog.accept_proposal(proposal).await?;
//! assert!(accepted.base().is_active);
//! # Ok(())
//! # }
//! ```

pub mod backup;
pub mod catalog;
pub mod context;
pub mod db;
pub mod decision;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod stats;

pub use backup::{BackupDocument, ImportSummary};
pub use catalog::{Catalog, CatalogBuilder};
pub use context::{FetchTicket, ModeContext};
pub use db::Database;
pub use decision::{CandidateReport, Decision, Proposal, Reveal, RevealOutcome, RevealTiming};
pub use display::{CreateResult, DeleteResult, Items, OperationStatus, UpdateResult};
pub use error::{CatalogError, Result};
pub use models::{Category, Constraints, Item, ItemGroups, Preferences};
pub use stats::Statistics;
