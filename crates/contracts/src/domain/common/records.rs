//! Decoding of record lists where one bad record must not sink the rest.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Decode every element that fits `T`, logging and dropping the others.
pub fn decode_each<T: DeserializeOwned>(items: Vec<Value>, what: &str) -> Vec<T> {
    let total = items.len();
    let decoded: Vec<T> = items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| match serde_json::from_value::<T>(item) {
            Ok(record) => Some(record),
            Err(e) => {
                log::warn!("skipping {} #{}: {}", what, index, e);
                None
            }
        })
        .collect();
    if decoded.len() < total {
        log::warn!("{}: kept {} of {} records", what, decoded.len(), total);
    }
    decoded
}

/// `deserialize_with` helper for nested lists; `null` reads as empty.
pub fn skip_invalid<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let items = Option::<Vec<Value>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(decode_each(items, std::any::type_name::<T>()))
}
