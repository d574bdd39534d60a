//! Query parameter bag.

use std::collections::BTreeMap;

use serde::Serialize;
use wasm_bindgen::JsValue;

use crate::core::error::DomError;

/// Key/value pairs split out of a query string.
///
/// Values are kept exactly as written (no percent-decoding). A key that
/// appears without `=` maps to `None`. When a key repeats, the last
/// occurrence wins.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Params(BTreeMap<String, Option<String>>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `key`, overwriting any earlier value.
    pub fn insert(&mut self, key: impl Into<String>, value: Option<String>) {
        self.0.insert(key.into(), value);
    }

    /// Value for `key`. Keys written without `=` return `None`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(|v| v.as_deref())
    }

    /// Whether `key` appeared in the query string at all.
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_deref()))
    }

    /// Convert to a plain JS object. Keys without a value become `undefined`.
    pub fn to_js(&self) -> Result<JsValue, DomError> {
        let serializer = serde_wasm_bindgen::Serializer::new().serialize_maps_as_objects(true);
        self.serialize(&serializer)
            .map_err(|e| DomError::Host(e.to_string()))
    }
}
