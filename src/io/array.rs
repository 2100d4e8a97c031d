//! # Array
//!
//! The Array-Format is JSON-like text describing either
//! - an **edge list** `[[u, v, w?], ...]` where every entry has at least two elements, or
//! - an **adjacency list** `[[...], [...], ...]` where entry `i` lists the neighbors of node `i`.
//!
//! The array may also be wrapped in an object; then the `edges` property is used, else the
//! `graph` property, else the first property holding an array.
//!
//! Input that is not valid JSON as a whole (e.g. a JavaScript snippet `const edges = [...];`)
//! is searched for the first balanced `[...]` and finally for an `edges = [...]` assignment.

use itertools::Itertools;
use serde_json::Value;

use super::*;
use crate::token::coerce_weight;

/// A GraphReader for the Array-Format
#[derive(Debug, Clone, Copy, Default)]
pub struct ArrayReader;

impl ArrayReader {
    /// Creates a new reader
    pub fn new() -> Self {
        Self
    }

    /// Extracts a JSON value from `raw`, trying the whole text, the first balanced
    /// `[...]` and an `edges = [...]` assignment in this order
    pub fn locate_json(&self, raw: &str) -> Result<Value> {
        let first_error = match serde_json::from_str(raw) {
            Ok(value) => return Ok(value),
            Err(err) => err,
        };

        if let Some(value) = first_balanced_array(raw).and_then(|s| serde_json::from_str(s).ok()) {
            debug!("parsed first balanced array of input");
            return Ok(value);
        }

        if let Some(value) = edges_assignment(raw).and_then(|s| serde_json::from_str(s).ok()) {
            debug!("parsed `edges = [...]` assignment of input");
            return Ok(value);
        }

        Err(ParseError::InvalidJson(first_error.to_string()))
    }

    /// Selects the array holding the graph from a parsed value
    fn select_array(&self, value: Value) -> Result<Vec<Value>> {
        match value {
            Value::Array(items) => Ok(items),
            Value::Object(mut map) => {
                // the map must not be mutated before the key is chosen, as removal reorders it
                let key = ["edges", "graph"]
                    .into_iter()
                    .map(str::to_string)
                    .chain(map.keys().cloned())
                    .find(|key| matches!(map.get(key), Some(Value::Array(_))))
                    .ok_or(ParseError::NoArrayProperty)?;

                debug!(%key, "selected array property");
                match map.remove(&key) {
                    Some(Value::Array(items)) => Ok(items),
                    _ => Err(ParseError::NoArrayProperty),
                }
            }
            _ => Err(ParseError::NoArrayProperty),
        }
    }
}

impl GraphReader for ArrayReader {
    fn try_read_graph(&self, raw: &str, builder: &mut GraphBuilder) -> Result<()> {
        let items = self.select_array(self.locate_json(raw)?)?;

        let is_edge_list = items
            .iter()
            .all(|x| matches!(x, Value::Array(entry) if entry.len() >= 2));

        if is_edge_list {
            for entry in items.iter().filter_map(Value::as_array) {
                let weight = entry.get(2).and_then(value_to_weight);
                builder.add_edge(&value_to_id(&entry[0]), &value_to_id(&entry[1]), weight);
            }
        } else if items.iter().all(Value::is_array) {
            for (u, neighbors) in items.iter().filter_map(Value::as_array).enumerate() {
                let from = u.to_string();
                for neighbor in neighbors {
                    let to = value_to_id(neighbor);
                    if to != from {
                        builder.add_edge(&from, &to, None);
                    }
                }
            }
        } else {
            return Err(ParseError::UnsupportedShape);
        }

        Ok(())
    }
}

/// Returns the first `[...]` substring with balanced brackets
fn first_balanced_array(raw: &str) -> Option<&str> {
    let start = raw.find('[')?;
    let mut depth = 0usize;

    for (i, c) in raw[start..].char_indices() {
        match c {
            '[' => depth += 1,
            ']' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&raw[start..=start + i]);
                }
            }
            _ => {}
        }
    }

    None
}

/// Returns the array tail of an `edges = [...]` assignment, i.e. everything from the
/// opening bracket up to the last closing bracket of the input
fn edges_assignment(raw: &str) -> Option<&str> {
    let end = raw.rfind(']')?;

    raw.match_indices("edges").find_map(|(i, name)| {
        let rest = raw[i + name.len()..].trim_start();
        let rest = rest.strip_prefix('=')?.trim_start();
        if !rest.starts_with('[') {
            return None;
        }

        let start = raw.len() - rest.len();
        (start < end).then(|| &raw[start..=end])
    })
}

/// Converts a JSON value into a node id the way it would be printed as a string
fn value_to_id(value: &Value) -> NodeId {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(x) => match x.as_i64() {
            Some(x) => x.to_string(),
            None => x.as_f64().map_or_else(|| x.to_string(), format_weight),
        },
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Array(items) => items
            .iter()
            .map(|x| match x {
                Value::Null => String::new(),
                x => value_to_id(x),
            })
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

/// Numbers are used as is; strings are parsed as numeric tokens; everything else is no weight
fn value_to_weight(value: &Value) -> Option<Weight> {
    match value {
        Value::Number(x) => x.as_f64(),
        Value::String(s) => coerce_weight(s),
        _ => None,
    }
}
