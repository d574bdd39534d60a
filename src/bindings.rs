//! JavaScript-facing entry points.
//!
//! Thin `#[wasm_bindgen]` wrappers for the operations whose JS arguments
//! are loosely typed: attribute bags and the anchor `extra` switch arrive
//! as arbitrary values and are decoded here. Errors surface as JS `Error`
//! objects.

use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlAnchorElement, HtmlImageElement};

use crate::core::{element, query, tree};
use crate::models::{AnchorTarget, Attributes, is_array, is_object};

#[wasm_bindgen(js_name = createElement)]
pub fn create_element_js(tag: &str, attributes: JsValue) -> Result<Element, JsValue> {
    Ok(element::create_element(tag, &Attributes::from_js(&attributes))?)
}

#[wasm_bindgen(js_name = setAttributes)]
pub fn set_attributes_js(element: &Element, attributes: JsValue) -> Result<Element, JsValue> {
    Ok(tree::set_attributes(element, &Attributes::from_js(&attributes))?)
}

#[wasm_bindgen(js_name = image)]
pub fn image_js(url: &str, attributes: JsValue) -> Result<HtmlImageElement, JsValue> {
    Ok(element::image(url, &Attributes::from_js(&attributes))?)
}

#[wasm_bindgen(js_name = anchor)]
pub fn anchor_js(url: &str, extra: JsValue) -> Result<HtmlAnchorElement, JsValue> {
    Ok(element::anchor(url, &AnchorTarget::from_js(&extra))?)
}

/// Plain object of query parameters, or `undefined` when there are none.
#[wasm_bindgen(js_name = getParams)]
pub fn get_params_js(url: Option<String>) -> Result<JsValue, JsValue> {
    match query::get_params(url.as_deref()) {
        Ok(params) => Ok(params.to_js()?),
        Err(_) => Ok(JsValue::UNDEFINED),
    }
}

#[wasm_bindgen(js_name = isObject)]
pub fn is_object_js(value: &JsValue) -> bool {
    is_object(value)
}

#[wasm_bindgen(js_name = isArray)]
pub fn is_array_js(value: &JsValue) -> bool {
    is_array(value)
}
