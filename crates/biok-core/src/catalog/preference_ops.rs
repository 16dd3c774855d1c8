//! Preference operations for the Catalog.

use super::Catalog;
use crate::{error::Result, models::Preferences, params::SetPreferences};

impl Catalog {
    pub async fn preferences(&self) -> Result<Preferences> {
        self.with_db(|db| db.get_preferences()).await
    }

    /// Merges the given values into the stored preferences and returns the
    /// result.
    pub async fn set_preferences(&self, params: &SetPreferences) -> Result<Preferences> {
        let params = params.clone();
        self.with_db(move |db| {
            let mut prefs = db.get_preferences()?;
            if let Some(author) = params.default_author {
                prefs.default_author = Some(author);
            }
            if let Some(origin) = params.default_origin {
                prefs.default_origin = Some(origin);
            }
            db.set_preferences(&prefs)?;
            Ok(prefs)
        })
        .await
    }

    /// Removes both defaults.
    pub async fn clear_preferences(&self) -> Result<()> {
        self.with_db(|db| db.set_preferences(&Preferences::default()))
            .await
    }
}
