//! Host global accessors.
//!
//! Provides safe, consistent access to the browser globals the library
//! works against. Nothing here panics when a global is missing.

use web_sys::{Document, HtmlElement, HtmlHeadElement, Navigator, Window};

use crate::core::error::DomError;

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get the current document.
pub fn document() -> Result<Document, DomError> {
    window()
        .ok_or(DomError::NoWindow)?
        .document()
        .ok_or(DomError::NoDocument)
}

/// Get the document `<head>`.
pub fn head() -> Result<HtmlHeadElement, DomError> {
    document()?.head().ok_or(DomError::NoHead)
}

/// Get the document `<body>`.
pub fn body() -> Result<HtmlElement, DomError> {
    document()?.body().ok_or(DomError::NoBody)
}

/// Get the navigator.
#[inline]
pub fn navigator() -> Option<Navigator> {
    Some(window()?.navigator())
}

/// Get the browser user-agent string.
pub fn user_agent() -> Option<String> {
    navigator()?.user_agent().ok()
}

/// Get the current location's query string without the leading `?`.
pub fn location_query() -> Option<String> {
    let search = window()?.location().search().ok()?;
    Some(search.strip_prefix('?').unwrap_or(&search).to_string())
}

/// Log a warning to the browser console.
pub fn warn(message: &str) {
    web_sys::console::warn_1(&message.into());
}
