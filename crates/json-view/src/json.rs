//! JSON text boundary for json-view.
//!
//! Every byte of response text goes through here: compact or pretty
//! encoding, and the JSONP envelope.

use serde::Serialize;

/// Re-export the underlying `Error` type so callers can pattern-match.
pub use serde_json::Error;

pub const CONTENT_TYPE_JSON: &str = "application/json";
pub const CONTENT_TYPE_JAVASCRIPT: &str = "application/javascript";

// ── Serialization ──────────────────────────────────────────────

#[inline]
pub fn to_string(value: &impl Serialize) -> Result<String, Error> {
    serde_json::to_string(value)
}

#[inline]
pub fn to_string_pretty(value: &impl Serialize) -> Result<String, Error> {
    serde_json::to_string_pretty(value)
}

// ── JSONP ──────────────────────────────────────────────────────

/// Wrap JSON text as `callback(json);`.
pub fn wrap_jsonp(callback: &str, json: &str) -> String {
    let mut out = String::with_capacity(callback.len() + json.len() + 3);
    out.push_str(callback);
    out.push('(');
    out.push_str(json);
    out.push_str(");");
    out
}
