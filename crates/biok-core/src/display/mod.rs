//! Display formatting for items, collections and operation results.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! newtype wrappers add context-specific formatting for collections and
//! operation outcomes. Everything renders as markdown, which the CLI either
//! prints verbatim or styles through its terminal renderer.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Wrappers &      │    │   Formatted     │
//! │  (Item, Stats)  │───▶│ Result Types    │───▶│    Output       │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: [`Items`] and the grouped catalog listing
//! - [`results`]: [`CreateResult`], [`UpdateResult`], [`DeleteResult`]
//! - [`status`]: one-line [`OperationStatus`] messages
//! - [`datetime`]: timestamps in the system timezone
//! - [`models`]: item cards, item lines and enum labels
//! - [`decision`]: constraints, candidate reports and proposals
//! - [`stats`]: statistics and achievement ladders
//!
//! ## Examples
//!
//! ```rust
//! use biok_core::display::OperationStatus;
//!
//! let status = OperationStatus::success("Backup written to biok.json");
//! assert_eq!(status.to_string(), "Success: Backup written to biok.json\n");
//! ```

pub mod collections;
pub mod datetime;
pub mod decision;
pub mod models;
pub mod results;
pub mod stats;
pub mod status;

pub use collections::Items;
pub use datetime::{LocalDate, LocalDateTime};
pub use models::{short_id, ItemLine};
pub use results::{CreateResult, DeleteResult, UpdateResult};
pub use status::OperationStatus;
