//! The decision engine: candidate pool, uniform draw, reveal and proposal.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   Constraints   │    │    Decision     │    │    Proposal     │
//! │ (filter items)  │───▶│ (uniform draw)  │───▶│ accept / reroll │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!                                 │
//!                                 ▼
//!                        Reveal (cosmetic,
//!                        cancellable timer)
//! ```
//!
//! Computing the winner is pure and synchronous; only the reveal involves
//! time, so the draw can be tested without waiting on timers.
//!
//! # Examples
//!
//! ```rust
//! use biok_core::decision::Decision;
//! use biok_core::models::{Category, Constraints, Origin};
//! use biok_core::CatalogError;
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let constraints = Constraints::new(Category::Comer, Origin::Portu);
//! let mut rng = StdRng::seed_from_u64(7);
//!
//! // Nothing to choose from: the draw is refused, nothing is fabricated.
//! let result = Decision::draw(&[], &constraints, &mut rng);
//! assert!(matches!(result, Err(CatalogError::NoCandidates)));
//! ```

pub mod proposal;
pub mod resolver;
pub mod reveal;

pub use proposal::{Accepted, Proposal};
pub use resolver::{CandidateReport, CandidateSet, ConstraintBounds, Decision};
pub use reveal::{Reveal, RevealOutcome, RevealTiming};
