//! HAL resource wrappers.
//!
//! REST controllers place one of these under the `"payload"` key. The view
//! model renders only the wrapped data, never the wrapper itself.

use serde_json::Value;

use crate::variable::Variable;

/// A single resource and its identifier.
#[derive(Debug)]
pub struct Entity {
    entity: Box<Variable>,
    id: Option<Value>,
}

impl Entity {
    pub fn new(entity: impl Into<Variable>) -> Self {
        Entity {
            entity: Box::new(entity.into()),
            id: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<Value>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// The wrapped resource.
    pub fn entity(&self) -> &Variable {
        &self.entity
    }

    pub fn id(&self) -> Option<&Value> {
        self.id.as_ref()
    }

    pub fn into_entity(self) -> Variable {
        *self.entity
    }
}

/// A list of resources rendered under a collection name.
#[derive(Debug)]
pub struct Collection {
    collection: Box<Variable>,
    collection_name: String,
}

impl Collection {
    pub const DEFAULT_NAME: &'static str = "items";

    pub fn new(collection: impl Into<Variable>) -> Self {
        Collection {
            collection: Box::new(collection.into()),
            collection_name: Self::DEFAULT_NAME.to_string(),
        }
    }

    pub fn with_collection_name(mut self, name: impl Into<String>) -> Self {
        self.collection_name = name.into();
        self
    }

    /// The wrapped items.
    pub fn collection(&self) -> &Variable {
        &self.collection
    }

    pub fn collection_name(&self) -> &str {
        &self.collection_name
    }

    pub fn into_collection(self) -> Variable {
        *self.collection
    }
}
