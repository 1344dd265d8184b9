//! Ordered request parameters and their wire encodings.

use serde_json::{Map, Value};

use crate::Result;
use crate::error::Error;

/// Request parameters with a stable insertion order.
///
/// Order matters for reproducible bodies and therefore reproducible
/// signatures, so this is a pair list rather than a map.
#[derive(Clone, Debug, Default)]
pub struct Params {
    entries: Vec<(String, String)>,
}

impl Params {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.push((key.into(), value.into()));
        self
    }

    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.push((key.into(), value.into()));
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    /// `key=value` pairs joined with `&`, percent-encoded.
    pub fn to_query(&self) -> Result<String> {
        serde_html_form::to_string(&self.entries)
            .map_err(|e| Error::validation(format!("unable to form-encode parameters: {e}")))
    }

    /// Compact JSON object in insertion order, no added whitespace.
    pub fn to_json(&self) -> Result<String> {
        let object: Map<String, Value> = self
            .entries
            .iter()
            .map(|(key, value)| (key.clone(), Value::String(value.clone())))
            .collect();
        serde_json::to_string(&Value::Object(object))
            .map_err(|e| Error::validation(format!("unable to JSON-encode parameters: {e}")))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}
