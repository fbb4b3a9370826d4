use std::fmt;

use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::hal::{Collection, Entity};
use crate::traversable::Traversable;

/// Object-safe view of a `serde::Serialize` value.
///
/// Lets the bag hold arbitrary serializable types and defer their encoding
/// (and any failure) to [`JsonModel::serialize`](crate::JsonModel::serialize).
pub trait Encodable {
    fn to_json(&self) -> serde_json::Result<Value>;
}

impl<T: Serialize> Encodable for T {
    fn to_json(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }
}

/// One slot of a [`Variables`](crate::Variables) bag.
pub enum Variable {
    /// Already-plain JSON.
    Value(Value),
    /// Any serializable value, encoded on demand.
    Serialize(Box<dyn Encodable + Send>),
    /// Single-resource wrapper.
    Entity(Entity),
    /// Multi-resource wrapper.
    Collection(Collection),
    /// Iterable value materialized at render time.
    Traversable(Box<dyn Traversable + Send>),
}

impl Variable {
    pub fn from_serialize<T>(value: T) -> Self
    where
        T: Serialize + Send + 'static,
    {
        Variable::Serialize(Box::new(value))
    }

    pub fn traversable<T>(value: T) -> Self
    where
        T: Traversable + Send + 'static,
    {
        Variable::Traversable(Box::new(value))
    }

    /// The plain JSON value, if this slot holds one.
    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Variable::Value(v) => Some(v),
            _ => None,
        }
    }
}

impl fmt::Debug for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variable::Value(v) => f.debug_tuple("Value").field(v).finish(),
            Variable::Serialize(_) => f.write_str("Serialize(..)"),
            Variable::Entity(e) => f.debug_tuple("Entity").field(e).finish(),
            Variable::Collection(c) => f.debug_tuple("Collection").field(c).finish(),
            Variable::Traversable(_) => f.write_str("Traversable(..)"),
        }
    }
}

impl From<Value> for Variable {
    fn from(value: Value) -> Self {
        Variable::Value(value)
    }
}

impl From<Entity> for Variable {
    fn from(entity: Entity) -> Self {
        Variable::Entity(entity)
    }
}

impl From<Collection> for Variable {
    fn from(collection: Collection) -> Self {
        Variable::Collection(collection)
    }
}

impl From<&str> for Variable {
    fn from(s: &str) -> Self {
        Variable::Value(Value::String(s.to_string()))
    }
}

impl From<String> for Variable {
    fn from(s: String) -> Self {
        Variable::Value(Value::String(s))
    }
}

impl From<bool> for Variable {
    fn from(b: bool) -> Self {
        Variable::Value(Value::Bool(b))
    }
}

impl From<i64> for Variable {
    fn from(n: i64) -> Self {
        Variable::Value(Value::from(n))
    }
}

impl From<i32> for Variable {
    fn from(n: i32) -> Self {
        Variable::Value(Value::from(n))
    }
}

impl From<u64> for Variable {
    fn from(n: u64) -> Self {
        Variable::Value(Value::from(n))
    }
}

// NaN and infinities have no JSON form; keep them so encoding reports it.
impl From<f64> for Variable {
    fn from(n: f64) -> Self {
        match serde_json::Number::from_f64(n) {
            Some(num) => Variable::Value(Value::Number(num)),
            None => Variable::Serialize(Box::new(NonFinite(n))),
        }
    }
}

struct NonFinite(f64);

impl Serialize for NonFinite {
    fn serialize<S: Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
        Err(serde::ser::Error::custom(format!(
            "cannot encode non-finite number {} as JSON",
            self.0
        )))
    }
}
