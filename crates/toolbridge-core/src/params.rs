//! Parameter and response mappings.
//!
//! The gateway works on untyped JSON objects; schema discipline lives in
//! the typed wrappers. [`ToolParams`] additionally carries the explicit
//! alias-normalization step that replaces ad hoc "try snake_case, then
//! camelCase" lookups: aliases are rewritten to their canonical key once,
//! at the dispatch boundary.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Response body returned by a tool: a string-keyed JSON object.
///
/// Shape is tool-specific and documented per wrapper; the gateway does not
/// enforce it at runtime.
pub type ToolResponse = Map<String, Value>;

/// A parameter mapping supplied by a caller per invocation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ToolParams(Map<String, Value>);

impl ToolParams {
    /// Create an empty parameter mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build parameters by serializing a typed input struct.
    ///
    /// Fails if the input does not serialize to a JSON object.
    pub fn from_serialize<T: Serialize>(input: &T) -> Result<Self, serde_json::Error> {
        match serde_json::to_value(input)? {
            Value::Object(map) => Ok(Self(map)),
            other => Err(serde::ser::Error::custom(format!(
                "tool parameters must serialize to a JSON object, got {other}"
            ))),
        }
    }

    /// Insert a parameter, replacing any existing value for the key.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.0.insert(key.into(), value);
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: Value) -> Self {
        self.insert(key, value);
        self
    }

    /// Look up a parameter value.
    pub fn value(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Look up a parameter as a string slice.
    pub fn str_value(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    /// Rewrite accepted alias keys to their canonical names.
    ///
    /// An alias never clobbers a canonical key that is already present.
    pub fn normalize(&mut self, aliases: &[(&str, &str)]) {
        for (alias, canonical) in aliases {
            if self.0.contains_key(*canonical) {
                continue;
            }
            if let Some(value) = self.0.remove(*alias) {
                self.0.insert((*canonical).to_string(), value);
            }
        }
    }

    /// Number of parameters.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the mapping is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Borrow the underlying map.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Consume into the underlying map.
    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for ToolParams {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn normalize_rewrites_aliases_to_canonical_keys() {
        let mut params = ToolParams::new().with("documentId", json!("abc123"));
        params.normalize(&[("documentId", "document_id")]);

        assert_eq!(params.str_value("document_id"), Some("abc123"));
        assert_eq!(params.value("documentId"), None);
    }

    #[test]
    fn normalize_never_clobbers_canonical_key() {
        let mut params = ToolParams::new()
            .with("record_id", json!("canonical"))
            .with("recordId", json!("alias"));
        params.normalize(&[("recordId", "record_id")]);

        assert_eq!(params.str_value("record_id"), Some("canonical"));
    }

    #[test]
    fn from_serialize_requires_an_object() {
        #[derive(Serialize)]
        struct Input {
            sheet_id: String,
        }

        let params = ToolParams::from_serialize(&Input {
            sheet_id: "abc123".into(),
        })
        .unwrap();
        assert_eq!(params.str_value("sheet_id"), Some("abc123"));

        assert!(ToolParams::from_serialize(&"just a string").is_err());
    }
}
