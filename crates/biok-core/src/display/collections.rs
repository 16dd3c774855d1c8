//! Display wrappers for groups of items.

use std::{fmt, ops::Index};

use super::models::ItemLine;
use crate::models::{Item, ItemGroups};

/// Newtype wrapper for displaying a flat list of items, one line each.
///
/// # Examples
///
/// ```rust
/// use biok_core::display::Items;
///
/// let items = Items(vec![]);
/// assert!(items.is_empty());
/// assert_eq!(items.to_string(), "No items found.\n");
/// ```
pub struct Items(pub Vec<Item>);

impl Items {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, index: usize) -> Option<&Item> {
        self.0.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.0.iter()
    }
}

impl Index<usize> for Items {
    type Output = Item;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for Items {
    type Item = Item;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl fmt::Display for Items {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No items found.");
        }
        for item in &self.0 {
            write!(f, "{}", ItemLine(item))?;
        }
        Ok(())
    }
}

impl fmt::Display for ItemGroups {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return writeln!(f, "No items found.");
        }

        let sections = [
            ("In progress", &self.active),
            ("Pending", &self.pending),
            ("History", &self.history),
        ];

        let mut first = true;
        for (title, items) in sections {
            if items.is_empty() {
                continue;
            }
            if !first {
                writeln!(f)?;
            }
            first = false;

            writeln!(f, "## {title} ({})", items.len())?;
            writeln!(f)?;
            for item in items {
                write!(f, "{}", ItemLine(item))?;
            }
        }
        Ok(())
    }
}
