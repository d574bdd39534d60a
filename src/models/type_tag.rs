//! Host class-tag inspection.
//!
//! `Object.prototype.toString` reports the internal class of any JS value
//! (`[object Object]`, `[object Array]`, ...). Checks built on it tell a
//! plain object apart from arrays, functions and host objects, which a
//! `typeof` or shape check cannot.

use js_sys::{Function, Object, Reflect};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;

/// Internal class of a JS value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TypeTag {
    /// `[object Object]`
    Object,
    /// `[object Array]`
    Array,
    /// `[object Function]`
    Function,
    /// Any other class, e.g. `HTMLDivElement`, `Null`, `Number`.
    Other(String),
}

impl TypeTag {
    /// Parse the `[object Name]` string produced by `Object.prototype.toString`.
    pub fn from_class_string(class: &str) -> Self {
        let name = class
            .strip_prefix("[object ")
            .and_then(|rest| rest.strip_suffix(']'))
            .unwrap_or(class);

        match name {
            "Object" => Self::Object,
            "Array" => Self::Array,
            "Function" => Self::Function,
            other => Self::Other(other.to_string()),
        }
    }

    /// Read the class tag of `value`.
    pub fn of(value: &JsValue) -> Self {
        class_string(value)
            .map(|class| Self::from_class_string(&class))
            .unwrap_or_else(|| Self::Other(String::new()))
    }
}

/// Call `Object.prototype.toString` with `value` as receiver.
fn class_string(value: &JsValue) -> Option<String> {
    let prototype = Object::get_prototype_of(&Object::new());
    let to_string = Reflect::get(&prototype, &"toString".into())
        .ok()?
        .dyn_into::<Function>()
        .ok()?;
    to_string.call0(value).ok()?.as_string()
}

/// Whether `value` is exactly a plain object.
pub fn is_object(value: &JsValue) -> bool {
    TypeTag::of(value) == TypeTag::Object
}

/// Whether `value` is exactly an array.
pub fn is_array(value: &JsValue) -> bool {
    TypeTag::of(value) == TypeTag::Array
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_string_parsing() {
        assert_eq!(TypeTag::from_class_string("[object Object]"), TypeTag::Object);
        assert_eq!(TypeTag::from_class_string("[object Array]"), TypeTag::Array);
        assert_eq!(TypeTag::from_class_string("[object Function]"), TypeTag::Function);
        assert_eq!(
            TypeTag::from_class_string("[object HTMLDivElement]"),
            TypeTag::Other("HTMLDivElement".to_string())
        );
        assert_eq!(
            TypeTag::from_class_string("[object Null]"),
            TypeTag::Other("Null".to_string())
        );
    }
}
