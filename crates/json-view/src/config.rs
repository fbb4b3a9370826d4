use serde::Deserialize;

use crate::encoder::DEFAULT_MAX_DEPTH;
use crate::jsonp;

/// View rendering configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct ViewConfig {
    /// Query parameter carrying the JSONP callback name (default: callback)
    pub jsonp_param: String,

    /// Indent JSON output (default: false)
    pub pretty_print: bool,

    /// Maximum nesting depth while materializing variables (default: 512)
    pub max_depth: usize,
}

impl Default for ViewConfig {
    fn default() -> Self {
        ViewConfig {
            jsonp_param: jsonp::DEFAULT_CALLBACK_PARAM.to_string(),
            pretty_print: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ViewConfig {
    /// Load configuration from environment variables (with .env support).
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        // Load .env file if present (ignore errors if missing)
        let _ = dotenvy::dotenv();

        Ok(ViewConfig {
            jsonp_param: std::env::var("JSONP_CALLBACK_PARAM")
                .ok()
                .filter(|p| !p.is_empty())
                .unwrap_or_else(|| jsonp::DEFAULT_CALLBACK_PARAM.to_string()),
            pretty_print: matches!(
                std::env::var("JSON_PRETTY_PRINT")
                    .unwrap_or_default()
                    .to_lowercase()
                    .as_str(),
                "true" | "1" | "yes"
            ),
            max_depth: std::env::var("JSON_MAX_DEPTH")
                .unwrap_or_else(|_| DEFAULT_MAX_DEPTH.to_string())
                .parse()
                .unwrap_or(DEFAULT_MAX_DEPTH),
        })
    }

    /// JSONP callback requested by `query`, if any.
    pub fn jsonp_callback(&self, query: &str) -> Option<String> {
        jsonp::callback_from_query(query, &self.jsonp_param)
    }
}
