// SPDX-License-Identifier: Apache-2.0

//! Tolerant decoding for LLM-produced JSON.
//!
//! Model output is only loosely shaped: series arrive as arrays, as strings
//! holding an encoded array, or as something else entirely; labels arrive as
//! strings or numbers. Everything here degrades to an empty or default value
//! instead of failing the whole document.

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// A record that can be lifted out of one element of a loosely typed series.
pub trait SeriesItem: Sized {
    /// `index` is the element position, used for default labels.
    fn from_json(index: usize, value: &Value) -> Option<Self>;
}

/// Decodes an array, or a string containing a JSON array, into `T`s.
/// Elements that are not objects are skipped; any other shape yields an
/// empty series.
pub fn lenient_series<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: SeriesItem,
{
    let raw = Value::deserialize(deserializer)?;
    Ok(series_from_value(&raw))
}

#[must_use]
pub fn series_from_value<T: SeriesItem>(raw: &Value) -> Vec<T> {
    let decoded;
    let items = match raw {
        Value::Array(items) => items,
        Value::String(text) => match serde_json::from_str::<Value>(text) {
            Ok(Value::Array(items)) => {
                decoded = items;
                &decoded
            }
            _ => return Vec::new(),
        },
        _ => return Vec::new(),
    };
    items
        .iter()
        .enumerate()
        .filter_map(|(i, v)| T::from_json(i, v))
        .collect()
}

/// First of `keys` present as a string or number, rendered as text.
#[must_use]
pub fn first_label(obj: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|k| match obj.get(*k)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    })
}

/// First of `keys` present as a number or a numeric string.
#[must_use]
pub fn first_number(obj: &Map<String, Value>, keys: &[&str]) -> Option<f64> {
    keys.iter().find_map(|k| match obj.get(*k)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    })
}

pub(crate) fn deserialize_item<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: SeriesItem,
{
    let raw = Value::deserialize(deserializer)?;
    T::from_json(0, &raw).ok_or_else(|| serde::de::Error::custom("series item must be an object"))
}
