//! Candidate pool computation and the uniform draw.

use rand::{seq::SliceRandom, Rng};

use crate::{
    error::{CatalogError, Result},
    models::{Category, Constraints, Item, ModeConstraints, Origin},
};

/// Travel-time slider bound used when no item exceeds it.
pub const MIN_TRAVEL_BOUND: u32 = 90;

/// Price slider bound used when no plan exceeds it.
pub const MIN_PRICE_BOUND: f64 = 100.0;

/// The items of a collection that satisfy a set of constraints, in store
/// order.
#[derive(Debug, Clone)]
pub struct CandidateSet<'a> {
    candidates: Vec<&'a Item>,
}

impl<'a> CandidateSet<'a> {
    /// Applies `constraints` to every item of the collection.
    pub fn collect(items: &'a [Item], constraints: &Constraints) -> Self {
        Self {
            candidates: items.iter().filter(|item| constraints.admits(item)).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Titles of every candidate, used by the reveal sequence.
    pub fn titles(&self) -> Vec<String> {
        self.candidates.iter().map(|item| item.title().to_string()).collect()
    }

    /// Picks one candidate, each with probability `1 / len`.
    ///
    /// Returns `None` without touching `rng` when the set is empty.
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&'a Item> {
        if self.candidates.is_empty() {
            return None;
        }
        self.candidates.choose(rng).copied()
    }
}

/// Outcome of a "decide now" action: the winner plus the pool the reveal
/// sequence shuffles through.
#[derive(Debug, Clone, PartialEq)]
pub struct Decision {
    pub winner: Item,
    pub pool: Vec<String>,
}

impl Decision {
    /// Draws a winner from the items admitted by `constraints`.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::NoCandidates` when nothing passes the filters.
    pub fn draw<R: Rng + ?Sized>(
        items: &[Item],
        constraints: &Constraints,
        rng: &mut R,
    ) -> Result<Self> {
        let candidates = CandidateSet::collect(items, constraints);
        let winner = candidates.draw(rng).ok_or(CatalogError::NoCandidates)?;

        Ok(Self {
            winner: winner.clone(),
            pool: candidates.titles(),
        })
    }
}

/// Upper bounds for the travel-time and price controls, widened to fit the
/// largest values present in the collection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstraintBounds {
    pub max_travel_minutes: u32,
    pub max_price: f64,
}

impl ConstraintBounds {
    pub fn from_items(items: &[Item], constraints: &Constraints) -> Self {
        Self {
            max_travel_minutes: travel_bound(items, constraints.origin),
            max_price: match constraints.mode {
                ModeConstraints::Plan(_) => price_bound(items),
                ModeConstraints::Comer(_) => MIN_PRICE_BOUND,
            },
        }
    }
}

/// Pool size and control bounds for a configuration, without drawing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CandidateReport {
    pub category: Category,
    pub count: usize,
    pub bounds: ConstraintBounds,
}

impl CandidateReport {
    pub fn new(items: &[Item], constraints: &Constraints) -> Self {
        Self {
            category: constraints.category(),
            count: CandidateSet::collect(items, constraints).len(),
            bounds: ConstraintBounds::from_items(items, constraints),
        }
    }
}

fn travel_bound(items: &[Item], origin: Origin) -> u32 {
    items
        .iter()
        .map(|item| item.base().travel_minutes(origin))
        .fold(MIN_TRAVEL_BOUND, u32::max)
}

fn price_bound(items: &[Item]) -> f64 {
    items
        .iter()
        .filter_map(|item| match item {
            Item::Plan(plan) => Some(plan.price),
            Item::Comer(_) => None,
        })
        .fold(MIN_PRICE_BOUND, f64::max)
}
