//! Locally persisted user preferences.

use serde::{Deserialize, Serialize};

use super::{Author, Origin};

/// Defaults applied when creating items and building decide constraints.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Preferences {
    /// Proposer used when an item is created without an explicit author
    pub default_author: Option<Author>,

    /// Origin travel times are measured from when none is given
    pub default_origin: Option<Origin>,
}

impl Preferences {
    /// The origin to filter by, falling back to Las Carreras.
    pub fn origin(&self) -> Origin {
        self.default_origin.unwrap_or_default()
    }
}
