//! Attribute sets applied verbatim to elements.

use js_sys::{Array, Object};
use wasm_bindgen::JsValue;

use super::type_tag::is_object;

/// Ordered key/value pairs written with `setAttribute`.
///
/// Insertion order is kept so serialized markup lists attributes in the
/// order they were given. Keys and values are not validated.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Attributes(Vec<(String, String)>);

impl Attributes {
    /// Create an empty attribute set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Set `key` to `value`, replacing an earlier value for the same key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.0.push((key, value)),
        }
    }

    /// Value for `key`, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate over `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Read an attribute set from a JS value.
    ///
    /// Anything that is not a plain object yields an empty set. Values are
    /// stringified the way `setAttribute` would.
    pub fn from_js(value: &JsValue) -> Self {
        if !is_object(value) {
            return Self::new();
        }

        let mut attributes = Self::new();
        for entry in Object::entries(&Object::from(value.clone())).iter() {
            let pair = Array::from(&entry);
            if let Some(key) = pair.get(0).as_string() {
                attributes.insert(key, js_to_string(&pair.get(1)));
            }
        }
        attributes
    }
}

/// Stringify a JS value the way the host coerces attribute values.
fn js_to_string(value: &JsValue) -> String {
    if let Some(s) = value.as_string() {
        return s;
    }
    if let Some(b) = value.as_bool() {
        return b.to_string();
    }
    if let Some(n) = value.as_f64() {
        return n.to_string();
    }
    if value.is_null() {
        return "null".to_string();
    }
    if value.is_undefined() {
        return "undefined".to_string();
    }
    Object::from(value.clone())
        .to_string()
        .as_string()
        .unwrap_or_default()
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attributes = Self::new();
        for (k, v) in iter {
            attributes.insert(k, v);
        }
        attributes
    }
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for Attributes {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl<K: Into<String>, V: Into<String>> From<Vec<(K, V)>> for Attributes {
    fn from(pairs: Vec<(K, V)>) -> Self {
        pairs.into_iter().collect()
    }
}

/// What [`crate::anchor`] does beyond setting `href`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum AnchorTarget {
    /// Leave the host's default target.
    #[default]
    Default,
    /// Open in a new browsing context (`target="_blank"`).
    NewContext,
    /// Apply these attributes instead.
    Attributes(Attributes),
}

impl AnchorTarget {
    /// Decode the loosely typed `extra` argument of the JS API.
    ///
    /// Plain objects become attributes, other truthy values request a new
    /// context, falsy values keep the default.
    pub fn from_js(value: &JsValue) -> Self {
        if is_object(value) {
            Self::Attributes(Attributes::from_js(value))
        } else if value.is_truthy() {
            Self::NewContext
        } else {
            Self::Default
        }
    }
}

impl From<bool> for AnchorTarget {
    fn from(new_context: bool) -> Self {
        if new_context {
            Self::NewContext
        } else {
            Self::Default
        }
    }
}

impl From<Attributes> for AnchorTarget {
    fn from(attributes: Attributes) -> Self {
        Self::Attributes(attributes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order_kept() {
        let attrs = Attributes::from([("id", "foo"), ("class", "bar"), ("data-x", "1")]);
        let keys: Vec<_> = attrs.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["id", "class", "data-x"]);
    }

    #[test]
    fn test_insert_replaces_value() {
        let attrs = Attributes::new().with("id", "a").with("title", "t").with("id", "b");
        assert_eq!(attrs.len(), 2);
        assert_eq!(attrs.get("id"), Some("b"));
        assert_eq!(attrs.iter().next(), Some(("id", "b")));
    }

    #[test]
    fn test_anchor_target_from_bool() {
        assert_eq!(AnchorTarget::from(true), AnchorTarget::NewContext);
        assert_eq!(AnchorTarget::from(false), AnchorTarget::Default);
        assert_eq!(
            AnchorTarget::from(Attributes::from([("rel", "nofollow")])),
            AnchorTarget::Attributes(Attributes::from([("rel", "nofollow")]))
        );
    }
}
