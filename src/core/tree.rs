//! Attribute, class and tree manipulation.
//!
//! Class helpers work on the raw `class` attribute string, treating it as a
//! list of space-delimited tokens. The string-level helpers are exposed so
//! they can be used on markup that is not attached to a document.

use web_sys::{Element, Node};

use crate::config::SCRATCH_TAG;
use crate::core::error::DomError;
use crate::models::Attributes;
use crate::utils::dom;

/// Apply every attribute in `attributes` to `element`.
///
/// Returns the element for chaining.
pub fn set_attributes(element: &Element, attributes: &Attributes) -> Result<Element, DomError> {
    for (key, value) in attributes.iter() {
        element.set_attribute(key, value)?;
    }
    Ok(element.clone())
}

/// Whether `element` has class `name`.
pub fn has_class(element: &Element, name: &str) -> bool {
    class_list_contains(&element.class_name(), name)
}

/// Add class `name` to `element` unless it is already present.
pub fn add_class(element: &Element, name: &str) -> Element {
    if let Some(updated) = class_list_add(&element.class_name(), name) {
        element.set_class_name(&updated);
    }
    element.clone()
}

/// Remove every occurrence of class `name` from `element`.
pub fn remove_class(element: &Element, name: &str) -> Element {
    if let Some(updated) = class_list_remove(&element.class_name(), name) {
        element.set_class_name(&updated);
    }
    element.clone()
}

/// Whether `name` occurs as a whitespace-delimited token in `class_attr`.
pub fn class_list_contains(class_attr: &str, name: &str) -> bool {
    class_attr.split_ascii_whitespace().any(|token| token == name)
}

/// `class_attr` with `name` appended, or `None` if it is already present.
pub fn class_list_add(class_attr: &str, name: &str) -> Option<String> {
    if class_list_contains(class_attr, name) {
        return None;
    }
    Some(format!("{} {}", class_attr, name))
}

/// `class_attr` with every `name` token removed, or `None` if absent.
///
/// Tabs and line breaks become spaces; the result is trimmed.
pub fn class_list_remove(class_attr: &str, name: &str) -> Option<String> {
    let normalized: String = class_attr
        .chars()
        .map(|c| if matches!(c, '\t' | '\r' | '\n') { ' ' } else { c })
        .collect();
    if !class_list_contains(&normalized, name) {
        return None;
    }

    let mut padded = format!(" {} ", normalized);
    let token = format!(" {} ", name);
    while padded.contains(&token) {
        padded = padded.replacen(&token, " ", 1);
    }
    Some(padded.trim().to_string())
}

/// Append `child` as the last child of `parent`. Returns `parent`.
pub fn append(parent: &Element, child: &Node) -> Result<Element, DomError> {
    parent.append_child(child)?;
    Ok(parent.clone())
}

/// Detach `element` from its parent.
///
/// Fails with [`DomError::Detached`] when there is no parent.
pub fn remove(element: &Element) -> Result<(), DomError> {
    let parent = element.parent_node().ok_or(DomError::Detached)?;
    parent.remove_child(element)?;
    Ok(())
}

/// Look up an element by id in the current document.
pub fn element_by_id(id: &str) -> Option<Element> {
    dom::document().ok()?.get_element_by_id(id)
}

/// Serialized markup of `element` itself (its outer HTML).
///
/// The element is moved into a scratch container to be serialized and is
/// put back where it was when the container is released, including when
/// serialization fails.
pub fn html_contents(element: &Element) -> Result<String, DomError> {
    let scratch = Scratch::hold(element)?;
    Ok(scratch.container.inner_html())
}

/// Scratch container holding an element for serialization.
struct Scratch {
    container: Element,
    child: Node,
    origin: Option<(Node, Option<Node>)>,
}

impl Scratch {
    fn hold(element: &Element) -> Result<Self, DomError> {
        let origin = element
            .parent_node()
            .map(|parent| (parent, element.next_sibling()));
        let container = dom::document()?.create_element(SCRATCH_TAG)?;
        container.append_child(element)?;

        Ok(Self {
            container,
            child: element.clone().into(),
            origin,
        })
    }
}

impl Drop for Scratch {
    fn drop(&mut self) {
        let restored = match &self.origin {
            Some((parent, next)) => parent.insert_before(&self.child, next.as_ref()),
            None => self.container.remove_child(&self.child),
        };
        if restored.is_err() {
            dom::warn("html_contents: failed to release scratch container");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_list_contains() {
        assert!(class_list_contains("foo bar", "foo"));
        assert!(class_list_contains("foo bar", "bar"));
        assert!(!class_list_contains("foobar", "foo"));
        assert!(!class_list_contains("", "foo"));
    }

    #[test]
    fn test_class_list_contains_tab_separated() {
        assert!(class_list_contains("a\tfoo", "foo"));
        assert!(class_list_contains("foo\nbar", "bar"));
        assert!(class_list_contains("a\r\nfoo\tb", "foo"));
        assert_eq!(class_list_add("a\tfoo", "foo"), None);
    }

    #[test]
    fn test_class_list_add_is_idempotent() {
        let once = class_list_add("foo", "bar").unwrap();
        assert!(class_list_contains(&once, "bar"));
        assert_eq!(class_list_add(&once, "bar"), None);
        assert_eq!(once.split(' ').filter(|t| *t == "bar").count(), 1);
    }

    #[test]
    fn test_class_list_remove_all_occurrences() {
        let updated = class_list_remove("bar foo baz foo foo", "foo").unwrap();
        assert!(!class_list_contains(&updated, "foo"));
        assert_eq!(updated, "bar baz");
    }

    #[test]
    fn test_class_list_remove_normalizes_whitespace() {
        assert_eq!(class_list_remove("a\tfoo\nb", "foo").unwrap(), "a b");
        assert_eq!(class_list_remove("foo", "foo").unwrap(), "");
        assert_eq!(class_list_remove("a b", "foo"), None);
    }
}
