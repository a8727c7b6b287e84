//! Deserialization helpers for request bodies and query strings.

use chrono::NaiveTime;
use serde::{de, Deserialize, Deserializer};
use std::fmt;
use std::str::FromStr;

/// Treats a missing or blank value as `None`, otherwise parses it with `FromStr`.
///
/// Front-ends send `?tanggal=` when a filter is cleared.
pub fn empty_string_as_none<'de, D, T>(de: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    let opt = Option::<String>::deserialize(de)?;
    match opt.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => T::from_str(s).map_err(de::Error::custom).map(Some),
    }
}

/// Accepts `HH:MM` as well as `HH:MM:SS`.
pub fn optional_time<'de, D>(de: D) -> Result<Option<NaiveTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(de)?;
    match opt.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => NaiveTime::parse_from_str(s, "%H:%M:%S")
            .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M"))
            .map(Some)
            .map_err(|_| de::Error::custom(format!("invalid time '{s}', expected HH:MM"))),
    }
}
