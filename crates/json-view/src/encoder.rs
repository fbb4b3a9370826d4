//! Normalization of view variables into plain `serde_json::Value` trees.
//!
//! Traversables are materialized here, recursively. Their nesting is bounded
//! by `max_depth`, which is how self-referencing iterables are reported
//! instead of recursing forever.

use serde::ser::Error as _;
use serde_json::{Map, Value};

use crate::error::ViewError;
use crate::variable::Variable;
use crate::variables::{Key, Variables};

/// Default nesting limit for materialized variables.
pub const DEFAULT_MAX_DEPTH: usize = 512;

#[derive(Debug, Clone, Copy)]
pub struct Encoder {
    max_depth: usize,
}

impl Default for Encoder {
    fn default() -> Self {
        Encoder {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl Encoder {
    pub fn new(max_depth: usize) -> Self {
        Encoder { max_depth }
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Encode a whole bag. An empty bag is an empty object.
    pub fn bag(&self, vars: &Variables) -> Result<Value, ViewError> {
        if vars.is_empty() {
            return Ok(Value::Object(Map::new()));
        }
        self.entries(vars.iter().map(|(k, v)| (k.clone(), v)), 1)
    }

    pub fn variable(&self, var: &Variable) -> Result<Value, ViewError> {
        self.encode(var, 1)
    }

    fn encode(&self, var: &Variable, depth: usize) -> Result<Value, ViewError> {
        if depth > self.max_depth {
            return Err(ViewError::Encoding(serde_json::Error::custom(format!(
                "maximum nesting depth of {} exceeded",
                self.max_depth
            ))));
        }
        match var {
            Variable::Value(v) => Ok(v.clone()),
            Variable::Serialize(s) => s.to_json().map_err(ViewError::from),
            Variable::Entity(e) => {
                let mut obj = Map::new();
                obj.insert("entity".to_string(), self.encode(e.entity(), depth + 1)?);
                obj.insert("id".to_string(), e.id().cloned().unwrap_or(Value::Null));
                Ok(Value::Object(obj))
            }
            Variable::Collection(c) => {
                let mut obj = Map::new();
                obj.insert(
                    "collection".to_string(),
                    self.encode(c.collection(), depth + 1)?,
                );
                obj.insert(
                    "collection_name".to_string(),
                    Value::String(c.collection_name().to_string()),
                );
                Ok(Value::Object(obj))
            }
            Variable::Traversable(t) => {
                let entries: Vec<(Key, Variable)> = t.traverse().collect();
                if entries.is_empty() {
                    return Ok(Value::Array(Vec::new()));
                }
                self.entries(entries.iter().map(|(k, v)| (k.clone(), v)), depth + 1)
            }
        }
    }

    /// Keys `0, 1, 2, ...` in order make an array; anything else an object.
    fn entries<'a, I>(&self, entries: I, depth: usize) -> Result<Value, ViewError>
    where
        I: Iterator<Item = (Key, &'a Variable)>,
    {
        let mut list = Vec::new();
        let mut object: Option<Map<String, Value>> = None;

        for (key, var) in entries {
            let value = self.encode(var, depth)?;
            if let Some(map) = object.as_mut() {
                map.insert(key.as_json_key(), value);
                continue;
            }
            match key {
                Key::Index(i) if i == list.len() => list.push(value),
                key => {
                    // List shape broken: earlier positions become "0", "1", ...
                    let mut map: Map<String, Value> = list
                        .drain(..)
                        .enumerate()
                        .map(|(i, v)| (i.to_string(), v))
                        .collect();
                    map.insert(key.as_json_key(), value);
                    object = Some(map);
                }
            }
        }

        Ok(match object {
            Some(map) => Value::Object(map),
            None => Value::Array(list),
        })
    }
}
