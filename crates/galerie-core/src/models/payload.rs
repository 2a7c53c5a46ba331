//! Lenient decoders for the shapes the gallery API actually returns
//!
//! The backend is inconsistent: some detail endpoints wrap a single object in
//! an array, listings are sometimes bare arrays and sometimes envelopes, and
//! relations arrive either as nested objects or as bare ids.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A value that may arrive as a single object, a collection, or null
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> Default for OneOrMany<T> {
    fn default() -> Self {
        OneOrMany::Many(Vec::new())
    }
}

impl<'de, T> Deserialize<'de> for OneOrMany<T>
where
    T: DeserializeOwned,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        match value {
            Value::Null => Ok(OneOrMany::Many(Vec::new())),
            Value::Array(items) => items
                .into_iter()
                .map(|item| serde_json::from_value(item).map_err(serde::de::Error::custom))
                .collect::<Result<Vec<T>, _>>()
                .map(OneOrMany::Many),
            other => serde_json::from_value(other)
                .map(OneOrMany::One)
                .map_err(serde::de::Error::custom),
        }
    }
}

impl<T> OneOrMany<T> {
    /// Flatten into a vector, preserving order
    pub fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::One(item) => vec![item],
            OneOrMany::Many(items) => items,
        }
    }

    pub fn as_slice(&self) -> &[T] {
        match self {
            OneOrMany::One(item) => std::slice::from_ref(item),
            OneOrMany::Many(items) => items,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }
}

/// Collection response: a bare array or an envelope object
#[derive(Debug, Clone, PartialEq)]
pub struct ListPayload<T>(pub Vec<T>);

impl<'de, T> Deserialize<'de> for ListPayload<T>
where
    T: DeserializeOwned,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        const ENVELOPE_KEYS: &[&str] = &["results", "items", "data"];

        let value = Value::deserialize(deserializer)?;
        let items = match value {
            Value::Null => return Ok(ListPayload(Vec::new())),
            Value::Array(items) => items,
            Value::Object(mut map) => {
                let key = ENVELOPE_KEYS
                    .iter()
                    .find(|key| matches!(map.get(**key), Some(Value::Array(_))));
                match key {
                    Some(key) => match map.remove(*key) {
                        Some(Value::Array(items)) => items,
                        _ => Vec::new(),
                    },
                    None => {
                        return Err(serde::de::Error::custom(
                            "expected an array or an object with results/items/data",
                        ))
                    }
                }
            }
            _ => {
                return Err(serde::de::Error::custom(
                    "expected an array or an object with results/items/data",
                ))
            }
        };

        items
            .into_iter()
            .map(|item| serde_json::from_value(item).map_err(serde::de::Error::custom))
            .collect::<Result<Vec<T>, _>>()
            .map(ListPayload)
    }
}

impl<T> ListPayload<T> {
    pub fn into_inner(self) -> Vec<T> {
        self.0
    }
}

/// Decode a detail response body
///
/// Empty bodies, `null`, `[]` and `{}` mean "not found" and decode to `None`.
/// A one-element collection is unwrapped to its element.
pub fn decode_detail<T>(body: &str) -> Result<Option<T>, serde_json::Error>
where
    T: DeserializeOwned,
{
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let value: Value = serde_json::from_str(trimmed)?;
    let value = match value {
        Value::Null => return Ok(None),
        Value::Array(mut items) => {
            if items.is_empty() {
                return Ok(None);
            }
            if items.len() > 1 {
                tracing::debug!(count = items.len(), "detail payload had several entries, using the first");
            }
            items.swap_remove(0)
        }
        Value::Object(ref map) if map.is_empty() => return Ok(None),
        other => other,
    };

    if value.is_null() {
        return Ok(None);
    }

    serde_json::from_value(value).map(Some)
}

/// Lightweight link to another entity
///
/// Accepts a bare id (`5`, `"5"`) or an object carrying `id` plus `nom` or
/// `titre`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Reference {
    pub id: u64,
    pub label: Option<String>,
}

impl<'de> Deserialize<'de> for Reference {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        match value {
            Value::Number(n) => n
                .as_u64()
                .map(|id| Reference { id, label: None })
                .ok_or_else(|| serde::de::Error::custom("reference id must be a positive integer")),
            Value::String(s) => s
                .trim()
                .parse::<u64>()
                .map(|id| Reference { id, label: None })
                .map_err(serde::de::Error::custom),
            Value::Object(map) => {
                let id = map.get("id").and_then(value_as_id).unwrap_or_default();
                let label = ["nom", "titre", "title", "name"]
                    .iter()
                    .find_map(|key| map.get(*key).and_then(Value::as_str))
                    .map(str::to_string);
                Ok(Reference { id, label })
            }
            _ => Err(serde::de::Error::custom("unsupported reference shape")),
        }
    }
}

/// Accept ids encoded as numbers or numeric strings
pub fn value_as_id(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Serde helper for `id` fields that may be numbers or numeric strings
pub fn deserialize_id<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value_as_id(&value).unwrap_or_default())
}

/// Serde helper turning `null` into the type's default
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
