//! Loaders turning input streams into entity collections

pub mod osm;
pub mod transit;

pub use osm::street_map_from_tags;
pub use transit::{bus_system_from_paths, bus_system_from_records};

use std::str::FromStr;

use crate::Error;

/// Parse a numeric field, naming it in the error on failure.
pub(crate) fn parse_number<T>(what: &str, text: &str) -> Result<T, Error>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    text.parse()
        .map_err(|e| Error::InvalidNumber(format!("{what} '{text}': {e}")))
}
