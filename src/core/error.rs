//! Error types for the library.
//!
//! - [`DomError`] - failures raised by the host document or window
//! - [`ParamsError`] - reasons a query string could not be read

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Errors raised while touching the host document tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomError {
    /// Browser window not available
    #[error("browser window not available")]
    NoWindow,
    /// Window has no document attached
    #[error("document not available")]
    NoDocument,
    /// Document has no `<head>` element
    #[error("document has no head element")]
    NoHead,
    /// Document has no `<body>` element
    #[error("document has no body element")]
    NoBody,
    /// Element has no parent to be removed from
    #[error("element is not attached to a parent")]
    Detached,
    /// Resource failed to load
    #[error("failed to load {url}")]
    LoadFailed { url: String },
    /// Host call threw or returned an unexpected value
    #[error("host error: {0}")]
    Host(String),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        Self::Host(
            value
                .as_string()
                .unwrap_or_else(|| format!("{:?}", value)),
        )
    }
}

impl From<DomError> for JsValue {
    fn from(error: DomError) -> Self {
        js_sys::Error::new(&error.to_string()).into()
    }
}

/// Reasons [`crate::get_params`] has no parameters to return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParamsError {
    /// URL has no `?` component
    #[error("URL has no query string")]
    NoQuery,
    /// Query string is present but empty
    #[error("query string is empty")]
    Empty,
    /// No URL given and the current location could not be read
    #[error("current location not available")]
    NoLocation,
}
