use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserialize, Deserializer};

/// Treat a missing or blank query parameter as `None`, otherwise parse it.
///
/// Browser forms submit empty inputs as `field=`, which would otherwise be a
/// parse error for numeric fields.
pub(crate) fn empty_string_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    <T as FromStr>::Err: fmt::Display,
{
    let value = Option::<String>::deserialize(deserializer)?;
    match value.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(v) => v.parse::<T>().map(Some).map_err(de::Error::custom),
    }
}
