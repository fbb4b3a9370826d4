//! JSONP callback discovery.

/// Query parameter browsers conventionally use to name the callback.
pub const DEFAULT_CALLBACK_PARAM: &str = "callback";

/// Pull the JSONP callback name out of a raw query string.
///
/// The last non-empty occurrence of `param` wins. Returns `None` when the
/// parameter is missing, empty, or the query cannot be decoded.
pub fn callback_from_query(query: &str, param: &str) -> Option<String> {
    let pairs: Vec<(String, String)> = serde_urlencoded::from_str(query).ok()?;
    pairs
        .into_iter()
        .filter(|(name, value)| name == param && !value.is_empty())
        .map(|(_, value)| value)
        .last()
}
