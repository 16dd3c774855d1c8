//! Row decoding helpers shared by the query modules.

use rusqlite::{types::Type, Row};

use crate::models::Item;

/// Wraps a decoding failure of column `idx` as a rusqlite conversion error.
pub(crate) fn conversion_error<E>(idx: usize, err: E) -> rusqlite::Error
where
    E: std::error::Error + Send + Sync + 'static,
{
    rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(err))
}

/// Decodes the JSON document stored in column `idx`.
pub(crate) fn item_from_row(row: &Row<'_>, idx: usize) -> rusqlite::Result<Item> {
    let document: String = row.get(idx)?;
    serde_json::from_str(&document).map_err(|e| conversion_error(idx, e))
}
