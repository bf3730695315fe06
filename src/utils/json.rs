//! Serde helpers for payloads that write empty values as `null`.

use serde::{Deserialize, Deserializer};

/// Decodes `null` as `T::default()`. Pair with `#[serde(default)]` for absent keys.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
