//! The proposal lifecycle of a single decision cycle.
//!
//! A drawn winner starts as a [`Proposal`]. Accepting consumes it and yields
//! the item to persist with `is_active` set; rerolling consumes it, persists
//! nothing and hands back the constraints for the next draw.

use crate::models::{Constraints, Item};

/// A winner that has been revealed but not yet committed.
#[derive(Debug, Clone, PartialEq)]
pub struct Proposal {
    item: Item,
    constraints: Constraints,
}

/// A committed proposal; terminal for the cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct Accepted {
    /// The proposed item with `is_active` set, ready to be persisted
    pub item: Item,
}

impl Proposal {
    pub fn new(item: Item, constraints: Constraints) -> Self {
        Self { item, constraints }
    }

    pub fn item(&self) -> &Item {
        &self.item
    }

    pub fn constraints(&self) -> &Constraints {
        &self.constraints
    }

    /// Commits the proposal. Only `is_active` changes; the done flag and its
    /// timestamp are kept as they were.
    pub fn accept(self) -> Accepted {
        let mut item = self.item;
        item.activate();
        Accepted { item }
    }

    /// Discards the proposal and returns the constraints it was drawn with.
    /// The rejected item stays eligible for future draws.
    pub fn reroll(self) -> Constraints {
        self.constraints
    }
}
