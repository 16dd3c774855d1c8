//! Preference storage as key/value rows.

use rusqlite::params;

use crate::{
    error::{CatalogError, DatabaseResultExt, Result},
    models::{Author, Origin, Preferences},
};

const SELECT_PREFERENCES_SQL: &str = "SELECT key, value FROM preferences";
const UPSERT_PREFERENCE_SQL: &str = "INSERT INTO preferences (key, value) VALUES (?1, ?2)
    ON CONFLICT(key) DO UPDATE SET value = excluded.value";
const DELETE_PREFERENCE_SQL: &str = "DELETE FROM preferences WHERE key = ?1";

const DEFAULT_AUTHOR_KEY: &str = "default_author";
const DEFAULT_ORIGIN_KEY: &str = "default_origin";

impl super::Database {
    /// Loads the stored preferences. Missing keys read as unset.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Configuration` if a stored value is not
    /// recognized.
    pub fn get_preferences(&self) -> Result<Preferences> {
        let mut stmt = self
            .connection
            .prepare(SELECT_PREFERENCES_SQL)
            .db_context("Failed to prepare query")?;

        let rows = stmt
            .query_map([], |row| Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?)))
            .db_context("Failed to query preferences")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read preferences")?;

        let mut prefs = Preferences::default();
        for (key, value) in rows {
            match key.as_str() {
                DEFAULT_AUTHOR_KEY => {
                    prefs.default_author = Some(value.parse::<Author>().map_err(|message| {
                        CatalogError::Configuration { message }
                    })?);
                }
                DEFAULT_ORIGIN_KEY => {
                    prefs.default_origin = Some(value.parse::<Origin>().map_err(|message| {
                        CatalogError::Configuration { message }
                    })?);
                }
                _ => log::debug!("Ignoring unknown preference '{key}'"),
            }
        }

        Ok(prefs)
    }

    /// Replaces the stored preferences with `prefs`; unset fields are
    /// removed.
    pub fn set_preferences(&mut self, prefs: &Preferences) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let entries = [
            (DEFAULT_AUTHOR_KEY, prefs.default_author.map(|a| a.as_str())),
            (DEFAULT_ORIGIN_KEY, prefs.default_origin.map(|o| o.as_str())),
        ];
        for (key, value) in entries {
            match value {
                Some(value) => tx
                    .execute(UPSERT_PREFERENCE_SQL, params![key, value])
                    .db_context("Failed to store preference")?,
                None => tx
                    .execute(DELETE_PREFERENCE_SQL, params![key])
                    .db_context("Failed to remove preference")?,
            };
        }

        tx.commit().db_context("Failed to commit transaction")?;
        Ok(())
    }
}
