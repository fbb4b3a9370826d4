//! The variable bag a [`JsonModel`](crate::JsonModel) holds before rendering.
//!
//! Keys are either names (`"user"`) or list positions (`0`, `1`, ...). A bag
//! built only from consecutive positions encodes as a JSON array, anything
//! else as an object in insertion order.

use std::fmt;

use serde_json::{Map, Value};

use crate::variable::Variable;

/// A key in a [`Variables`] bag.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    /// Position in a list-shaped bag.
    Index(usize),
    /// Named slot.
    Name(String),
}

impl Key {
    /// The key as it appears in a JSON object.
    pub fn as_json_key(&self) -> String {
        match self {
            Key::Index(i) => i.to_string(),
            Key::Name(name) => name.clone(),
        }
    }

    fn is_name(&self, name: &str) -> bool {
        matches!(self, Key::Name(n) if n == name)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Index(i) => write!(f, "{}", i),
            Key::Name(name) => f.write_str(name),
        }
    }
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        Key::Name(name.to_string())
    }
}

impl From<String> for Key {
    fn from(name: String) -> Self {
        Key::Name(name)
    }
}

impl From<usize> for Key {
    fn from(index: usize) -> Self {
        Key::Index(index)
    }
}

/// Ordered key → [`Variable`] store.
///
/// Keys are unique. Replacing an existing key keeps its original position.
#[derive(Debug, Default)]
pub struct Variables {
    entries: Vec<(Key, Variable)>,
}

impl Variables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list-shaped bag keyed `0..n`.
    pub fn list<I, V>(items: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Variable>,
    {
        items
            .into_iter()
            .enumerate()
            .map(|(i, v)| (Key::Index(i), v.into()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: impl Into<Key>) -> Option<&Variable> {
        let key = key.into();
        self.entries.iter().find(|(k, _)| *k == key).map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: impl Into<Key>) -> bool {
        self.get(key).is_some()
    }

    /// Look up a named top-level slot.
    pub(crate) fn named(&self, name: &str) -> Option<&Variable> {
        self.entries
            .iter()
            .find(|(k, _)| k.is_name(name))
            .map(|(_, v)| v)
    }

    /// Insert or replace `key`, returning the previous value.
    pub fn insert(&mut self, key: impl Into<Key>, value: impl Into<Variable>) -> Option<Variable> {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    pub fn remove(&mut self, key: impl Into<Key>) -> Option<Variable> {
        let key = key.into();
        let pos = self.entries.iter().position(|(k, _)| *k == key)?;
        Some(self.entries.remove(pos).1)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Merge `other` into this bag.
    ///
    /// With `overwrite` every incoming key replaces the same key here;
    /// without it only keys absent from this bag are added.
    pub fn merge(&mut self, other: Variables, overwrite: bool) {
        for (key, value) in other.entries {
            if overwrite {
                self.insert(key, value);
            } else if !self.entries.iter().any(|(k, _)| *k == key) {
                self.entries.push((key, value));
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Key, &Variable)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &Key> {
        self.entries.iter().map(|(k, _)| k)
    }
}

impl<K, V> FromIterator<(K, V)> for Variables
where
    K: Into<Key>,
    V: Into<Variable>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut vars = Variables::new();
        for (k, v) in iter {
            vars.insert(k, v);
        }
        vars
    }
}

impl IntoIterator for Variables {
    type Item = (Key, Variable);
    type IntoIter = std::vec::IntoIter<(Key, Variable)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl From<Map<String, Value>> for Variables {
    fn from(map: Map<String, Value>) -> Self {
        map.into_iter().collect()
    }
}

/// A value that knows how to produce its own plain representation.
///
/// Handing `&T` to [`JsonModel::set_variables`](crate::JsonModel::set_variables)
/// calls [`json_serialize`](Self::json_serialize) once, at assignment time.
/// Implementations should be free of side effects.
pub trait JsonSerializable {
    fn json_serialize(&self) -> Variables;
}

/// Anything accepted by [`JsonModel::set_variables`](crate::JsonModel::set_variables).
pub trait IntoVariables {
    fn into_variables(self) -> Variables;
}

impl IntoVariables for Variables {
    fn into_variables(self) -> Variables {
        self
    }
}

impl IntoVariables for Map<String, Value> {
    fn into_variables(self) -> Variables {
        self.into()
    }
}

impl<K, V> IntoVariables for Vec<(K, V)>
where
    K: Into<Key>,
    V: Into<Variable>,
{
    fn into_variables(self) -> Variables {
        self.into_iter().collect()
    }
}

impl<K, V, const N: usize> IntoVariables for [(K, V); N]
where
    K: Into<Key>,
    V: Into<Variable>,
{
    fn into_variables(self) -> Variables {
        self.into_iter().collect()
    }
}

impl<T: JsonSerializable + ?Sized> IntoVariables for &T {
    fn into_variables(self) -> Variables {
        tracing::trace!("extracting variables from JsonSerializable value");
        self.json_serialize()
    }
}
