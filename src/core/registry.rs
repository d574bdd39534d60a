//! Export table and namespace mixin.
//!
//! [`Registry`] lists every public operation under its JS-facing name,
//! including the `imageElement` / `anchorElement` aliases. A consumer that
//! keeps its own namespace can merge the table into it with
//! [`Registry::mixin`].

use std::borrow::Cow;
use std::collections::BTreeMap;

use wasm_bindgen::JsValue;
use web_sys::{Element, Event, EventTarget, HtmlAnchorElement, HtmlImageElement, Node, Text};

use crate::config::RESERVED_EXPORTS;
use crate::core::device::is_mobile_device;
use crate::core::element::{
    LoadCallback, PixelCallback, Wrapper, anchor, append_script, append_stylesheet,
    create_element, create_pixel, image, text_node, wrap,
};
use crate::core::error::{DomError, ParamsError};
use crate::core::query::{get_params, set_query_string_param};
use crate::core::text::{parse_hashtag, parse_url, parse_username, strip_tags};
use crate::core::tree::{
    add_class, append, element_by_id, has_class, html_contents, remove, remove_class,
    set_attributes,
};
use crate::models::{AnchorTarget, Attributes, Params, is_array, is_object};
use crate::utils::events::{EventListener, add_event};

/// Map of export name to operation.
pub type Exports = BTreeMap<&'static str, Export>;

/// A public operation, typed by its signature.
#[derive(Clone, Copy)]
pub enum Export {
    AddEvent(fn(&EventTarget, &str, Box<dyn FnMut(Event)>) -> Result<EventListener, DomError>),
    CreatePixel(fn(&str, Option<PixelCallback>) -> Result<String, DomError>),
    CreateElement(fn(&str, &Attributes) -> Result<Element, DomError>),
    TextNode(fn() -> Result<Text, DomError>),
    Image(fn(&str, &Attributes) -> Result<HtmlImageElement, DomError>),
    Anchor(fn(&str, &AnchorTarget) -> Result<HtmlAnchorElement, DomError>),
    Remove(fn(&Element) -> Result<(), DomError>),
    GetParams(fn(Option<&str>) -> Result<Params, ParamsError>),
    SetQueryStringParam(fn(&str, &str, &str) -> String),
    ParseHashtag(fn(&str, &str) -> String),
    ParseUsername(fn(&str, &str) -> String),
    ParseUrl(fn(&str) -> String),
    IsMobileDevice(fn(Option<&str>) -> bool),
    StripTags(for<'a> fn(&'a str) -> Cow<'a, str>),
    Wrap(fn(&str) -> Wrapper),
    Append(fn(&Element, &Node) -> Result<Element, DomError>),
    ElementById(fn(&str) -> Option<Element>),
    HasClass(fn(&Element, &str) -> bool),
    AddClass(fn(&Element, &str) -> Element),
    RemoveClass(fn(&Element, &str) -> Element),
    SetAttributes(fn(&Element, &Attributes) -> Result<Element, DomError>),
    AppendStylesheet(fn(&str, Option<LoadCallback>) -> Result<Element, DomError>),
    AppendScript(fn(&str, Option<LoadCallback>) -> Result<Element, DomError>),
    HtmlContents(fn(&Element) -> Result<String, DomError>),
    IsObject(fn(&JsValue) -> bool),
    IsArray(fn(&JsValue) -> bool),
    Mixin(fn(&Registry, &[&str], bool) -> Option<Exports>),
}

/// The library's export table.
///
/// Construct one per consumer; it holds no shared state.
#[derive(Clone)]
pub struct Registry {
    exports: Exports,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    pub fn new() -> Self {
        let exports = Exports::from([
            ("addEvent", Export::AddEvent(add_event::<Box<dyn FnMut(Event)>>)),
            ("createPixel", Export::CreatePixel(create_pixel)),
            ("createElement", Export::CreateElement(create_element)),
            ("textNode", Export::TextNode(text_node)),
            ("image", Export::Image(image)),
            ("imageElement", Export::Image(image)),
            ("anchor", Export::Anchor(anchor)),
            ("anchorElement", Export::Anchor(anchor)),
            ("remove", Export::Remove(remove)),
            ("getParams", Export::GetParams(get_params)),
            ("setQueryStringParam", Export::SetQueryStringParam(set_query_string_param)),
            ("parseHashtag", Export::ParseHashtag(parse_hashtag)),
            ("parseUsername", Export::ParseUsername(parse_username)),
            ("parseUrl", Export::ParseUrl(parse_url)),
            ("isMobileDevice", Export::IsMobileDevice(is_mobile_device)),
            ("stripTags", Export::StripTags(strip_tags)),
            ("wrap", Export::Wrap(wrap)),
            ("append", Export::Append(append)),
            ("elementById", Export::ElementById(element_by_id)),
            ("hasClass", Export::HasClass(has_class)),
            ("addClass", Export::AddClass(add_class)),
            ("removeClass", Export::RemoveClass(remove_class)),
            ("setAttributes", Export::SetAttributes(set_attributes)),
            ("appendStylesheet", Export::AppendStylesheet(append_stylesheet)),
            ("appendScript", Export::AppendScript(append_script)),
            ("htmlContents", Export::HtmlContents(html_contents)),
            ("isObject", Export::IsObject(is_object)),
            ("isArray", Export::IsArray(is_array)),
            ("_", Export::Mixin(Registry::mixin)),
        ]);
        Self { exports }
    }

    /// Look up an export by name.
    pub fn get(&self, name: &str) -> Option<Export> {
        self.exports.get(name).copied()
    }

    /// All export names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.exports.keys().copied()
    }

    /// Copy every export except the reserved names into a fresh map.
    ///
    /// `taken` lists the names already defined in the consumer's namespace.
    /// Unless `override_existing` is set, any collision aborts the whole
    /// merge and returns `None`; nothing is partially merged.
    pub fn mixin(&self, taken: &[&str], override_existing: bool) -> Option<Exports> {
        let mut merged = Exports::new();
        for (&name, &export) in &self.exports {
            if RESERVED_EXPORTS.contains(&name) {
                continue;
            }
            if !override_existing && taken.contains(&name) {
                return None;
            }
            merged.insert(name, export);
        }
        Some(merged)
    }
}
