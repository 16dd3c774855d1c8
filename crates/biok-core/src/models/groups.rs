//! Grouping of a category's items for the catalog listing.

use std::cmp::Reverse;

use super::Item;

/// A category's items split into the three catalog sections.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemGroups {
    /// Accepted proposals that are reserved or in progress
    pub active: Vec<Item>,
    /// Open items, favourites first
    pub pending: Vec<Item>,
    /// Done items, most recently completed first
    pub history: Vec<Item>,
}

impl ItemGroups {
    /// Groups `items` (expected in store order, newest first), keeping only
    /// those whose title or notes contain `search` (case-insensitive).
    pub fn new(items: Vec<Item>, search: Option<&str>) -> Self {
        let needle = search
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase);

        let mut groups = Self::default();
        for item in items {
            if let Some(needle) = &needle {
                if !matches_search(&item, needle) {
                    continue;
                }
            }

            let base = item.base();
            if base.is_done {
                groups.history.push(item);
            } else if base.is_active {
                groups.active.push(item);
            } else {
                groups.pending.push(item);
            }
        }

        // Both sorts are stable, so ties keep store order.
        groups.pending.sort_by_key(|item| !item.base().is_favorite);
        groups
            .history
            .sort_by_key(|item| Reverse(item.base().completed_at));
        groups
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty() && self.pending.is_empty() && self.history.is_empty()
    }

    pub fn len(&self) -> usize {
        self.active.len() + self.pending.len() + self.history.len()
    }
}

fn matches_search(item: &Item, needle: &str) -> bool {
    let base = item.base();
    base.title.to_lowercase().contains(needle)
        || base
            .notes
            .as_deref()
            .is_some_and(|notes| notes.to_lowercase().contains(needle))
}
