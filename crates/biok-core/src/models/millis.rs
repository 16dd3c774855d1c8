//! Serde adapters storing timestamps as UNIX milliseconds.
//!
//! Backups exchanged with the mobile app carry `createdAt` and
//! `completedAt` as millisecond integers, so items keep that encoding on the
//! wire while using [`jiff::Timestamp`] in memory.

use jiff::Timestamp;
use serde::{de::Error as _, Deserialize, Deserializer, Serializer};

/// Drops sub-millisecond precision so in-memory values equal what a
/// round trip through the wire format yields.
pub fn truncate(ts: Timestamp) -> Timestamp {
    Timestamp::from_millisecond(ts.as_millisecond()).unwrap_or(ts)
}

pub fn serialize<S: Serializer>(ts: &Timestamp, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_i64(ts.as_millisecond())
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Timestamp, D::Error> {
    let ms = i64::deserialize(deserializer)?;
    Timestamp::from_millisecond(ms).map_err(D::Error::custom)
}

/// Same encoding for optional timestamps; `null` and a missing field both
/// read as `None`.
pub mod option {
    use super::*;

    pub fn serialize<S: Serializer>(
        ts: &Option<Timestamp>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match ts {
            Some(ts) => serializer.serialize_some(&ts.as_millisecond()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Timestamp>, D::Error> {
        Option::<i64>::deserialize(deserializer)?
            .map(|ms| Timestamp::from_millisecond(ms).map_err(D::Error::custom))
            .transpose()
    }
}
