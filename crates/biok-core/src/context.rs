//! The current mode, passed explicitly instead of living in global state.
//!
//! Fetches are not cancelled when the user switches category mid-flight.
//! Instead every fetch takes a [`FetchTicket`] and its result is applied only
//! if the ticket still matches the context when the result arrives.

use log::debug;

use crate::models::Category;

/// Which collection the user is working with, plus a counter that changes
/// on every switch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeContext {
    category: Category,
    generation: u64,
}

/// Snapshot of a [`ModeContext`] taken when a fetch starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    category: Category,
    generation: u64,
}

impl FetchTicket {
    /// The collection the fetch is for.
    pub fn category(&self) -> Category {
        self.category
    }
}

impl ModeContext {
    pub fn new(category: Category) -> Self {
        Self {
            category,
            generation: 0,
        }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Switches to `category`. Outstanding tickets become stale even when
    /// switching to the category already selected.
    pub fn switch(&mut self, category: Category) {
        self.category = category;
        self.generation += 1;
    }

    /// Starts a fetch for the current category.
    pub fn ticket(&self) -> FetchTicket {
        FetchTicket {
            category: self.category,
            generation: self.generation,
        }
    }

    pub fn is_current(&self, ticket: &FetchTicket) -> bool {
        ticket.category == self.category && ticket.generation == self.generation
    }

    /// Returns `value` if `ticket` is still current, discarding it otherwise.
    pub fn settle<T>(&self, ticket: FetchTicket, value: T) -> Option<T> {
        if self.is_current(&ticket) {
            Some(value)
        } else {
            debug!(
                "Discarding stale {} fetch (generation {} != {})",
                ticket.category.as_str(),
                ticket.generation,
                self.generation
            );
            None
        }
    }
}
