//! The JSON view model returned by API handlers.
//!
//! ```rust
//! use json_view::JsonModel;
//! use serde_json::json;
//!
//! let mut model = JsonModel::new();
//! model
//!     .set_variables([("x", json!(1))], false)
//!     .set_jsonp_callback("cb");
//!
//! assert_eq!(model.serialize().unwrap(), r#"cb({"x":1});"#);
//! ```

use crate::config::ViewConfig;
use crate::encoder::Encoder;
use crate::error::ViewError;
use crate::json;
use crate::variable::Variable;
use crate::variables::{IntoVariables, Key, Variables};

/// Top-level key set by REST controllers.
pub const PAYLOAD_KEY: &str = "payload";

/// Top-level key set by documentation producers.
pub const DOCUMENTATION_KEY: &str = "documentation";

/// A JSON view model for API responses.
///
/// The model is always terminal: its output is a complete response body and
/// is never embedded in a layout.
#[derive(Debug, Default)]
pub struct JsonModel {
    variables: Variables,
    jsonp_callback: Option<String>,
    pretty_print: bool,
    encoder: Encoder,
}

/// What `serialize` ends up rendering.
enum Selected<'a> {
    Variables(&'a Variables),
    Payload(&'a Variable),
    Documentation(&'a Variable),
}

impl Selected<'_> {
    fn source(&self) -> &'static str {
        match self {
            Selected::Variables(_) => "variables",
            Selected::Payload(_) => PAYLOAD_KEY,
            Selected::Documentation(_) => DOCUMENTATION_KEY,
        }
    }
}

impl JsonModel {
    pub const TERMINAL: bool = true;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &ViewConfig) -> Self {
        JsonModel {
            pretty_print: config.pretty_print,
            encoder: Encoder::new(config.max_depth),
            ..Self::default()
        }
    }

    // ── Variables ──────────────────────────────────────────────

    /// Merge `variables` into the bag.
    ///
    /// A [`JsonSerializable`](crate::JsonSerializable) reference is converted
    /// first. With `overwrite` incoming keys replace existing ones; without
    /// it existing keys are kept.
    pub fn set_variables(&mut self, variables: impl IntoVariables, overwrite: bool) -> &mut Self {
        self.variables.merge(variables.into_variables(), overwrite);
        self
    }

    /// Set a single variable, replacing any previous value.
    pub fn set_variable(&mut self, key: impl Into<Key>, value: impl Into<Variable>) -> &mut Self {
        self.variables.insert(key, value);
        self
    }

    pub fn variable(&self, key: impl Into<Key>) -> Option<&Variable> {
        self.variables.get(key)
    }

    pub fn variables(&self) -> &Variables {
        &self.variables
    }

    pub fn clear_variables(&mut self) -> &mut Self {
        self.variables.clear();
        self
    }

    // ── Options ────────────────────────────────────────────────

    pub const fn is_terminal(&self) -> bool {
        Self::TERMINAL
    }

    pub fn set_jsonp_callback(&mut self, callback: impl Into<String>) -> &mut Self {
        self.jsonp_callback = Some(callback.into());
        self
    }

    pub fn jsonp_callback(&self) -> Option<&str> {
        self.jsonp_callback.as_deref()
    }

    pub fn is_jsonp(&self) -> bool {
        self.jsonp_callback.is_some()
    }

    pub fn set_pretty_print(&mut self, pretty: bool) -> &mut Self {
        self.pretty_print = pretty;
        self
    }

    pub fn set_max_depth(&mut self, max_depth: usize) -> &mut Self {
        self.encoder = Encoder::new(max_depth);
        self
    }

    // ── Rendering ──────────────────────────────────────────────

    fn select(&self) -> Selected<'_> {
        if let Some(payload) = self.variables.named(PAYLOAD_KEY) {
            let payload = match payload {
                Variable::Entity(entity) => entity.entity(),
                Variable::Collection(collection) => collection.collection(),
                other => other,
            };
            return Selected::Payload(payload);
        }
        if let Some(documentation) = self.variables.named(DOCUMENTATION_KEY) {
            return Selected::Documentation(documentation);
        }
        Selected::Variables(&self.variables)
    }

    /// Render the model to JSON, or JSONP when a callback is set.
    ///
    /// A `"payload"` variable takes precedence over `"documentation"`, and
    /// either replaces the whole bag. HAL wrappers under `"payload"` are
    /// unwrapped to their entity or collection.
    pub fn serialize(&self) -> Result<String, ViewError> {
        let selected = self.select();
        tracing::debug!(
            source = selected.source(),
            jsonp = self.is_jsonp(),
            "serializing json view model"
        );

        let value = match selected {
            Selected::Variables(vars) => self.encoder.bag(vars)?,
            Selected::Payload(var) | Selected::Documentation(var) => self.encoder.variable(var)?,
        };

        let text = if self.pretty_print {
            json::to_string_pretty(&value)?
        } else {
            json::to_string(&value)?
        };

        Ok(match &self.jsonp_callback {
            Some(callback) => json::wrap_jsonp(callback, &text),
            None => text,
        })
    }
}
