//! Lenient string fields.
//!
//! Frontmatter authors write `description: 2024` or `version: 1.0` and mean
//! text. These `deserialize_with` targets accept any YAML scalar and keep its
//! string form; sequences and mappings are still type errors.

use serde::de::{Error, Unexpected};
use serde::{Deserialize, Deserializer};
use serde_yaml::{Mapping, Value};
use std::collections::BTreeMap;

fn to_string<E: Error>(value: Value) -> Result<String, E> {
    match value {
        Value::Null => Ok(String::new()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Number(n) => Ok(n.to_string()),
        Value::String(s) => Ok(s),
        Value::Sequence(_) => Err(E::invalid_type(Unexpected::Seq, &"a string")),
        Value::Mapping(_) => Err(E::invalid_type(Unexpected::Map, &"a string")),
        Value::Tagged(tagged) => to_string(tagged.value),
    }
}

/// Any scalar as a string; null is empty.
pub fn string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    to_string(Value::deserialize(deserializer)?)
}

/// A sequence of scalars; null is an empty list.
pub fn string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Vec<Value>>::deserialize(deserializer)?
        .unwrap_or_default()
        .into_iter()
        .map(to_string)
        .collect()
}

/// A mapping with scalar keys and values; null is an empty map.
pub fn string_map<'de, D>(deserializer: D) -> Result<BTreeMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Mapping>::deserialize(deserializer)?
        .unwrap_or_default()
        .into_iter()
        .map(|(key, value)| Ok((to_string::<D::Error>(key)?, to_string::<D::Error>(value)?)))
        .collect()
}
