//! Helpers for partial-update payloads.

use serde::{Deserialize, Deserializer};

/// Keeps "field absent" (outer `None`) distinct from "field set to null"
/// (inner `None`) for optional nullable fields.
///
/// Use with `#[serde(default, deserialize_with = "double_option")]`.
pub fn double_option<'de, T, D>(de: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(de).map(Some)
}
