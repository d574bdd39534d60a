//! Small DOM manipulation and string utilities for the browser.
//!
//! Every function is an independent operation over the host document or a
//! plain string. Functions that need the host return [`DomError`] when a
//! global is missing or a host call throws; the string utilities work
//! anywhere.
//!
//! Rust callers use the typed functions re-exported here. JS callers get
//! the [`bindings`] entry points, which decode loosely typed arguments
//! (attribute bags, the anchor `extra` flag) before delegating.
//!
//! ```ignore
//! use domu::{Attributes, add_class, append, create_element};
//!
//! let card = create_element("div", &Attributes::from([("id", "card")]))?;
//! add_class(&card, "highlight");
//! append(&domu::utils::dom::body()?, &card)?;
//! ```

pub mod bindings;
mod config;
pub mod core;
pub mod models;
pub mod utils;

pub use crate::core::device::{is_mobile_device, matches_user_agent};
pub use crate::core::element::{
    LoadCallback, PixelCallback, Wrapper, anchor, append_script, append_stylesheet,
    create_element, create_pixel, image, text_node, wrap,
};
pub use crate::core::error::{DomError, ParamsError};
pub use crate::core::query::{get_params, parse_params, set_query_string_param};
pub use crate::core::text::{link, parse_hashtag, parse_url, parse_username, strip_tags};
pub use crate::core::tree::{
    add_class, append, element_by_id, has_class, html_contents, remove, remove_class,
    set_attributes,
};
pub use crate::core::{Export, Exports, Registry};
pub use models::{AnchorTarget, Attributes, Device, Params, TypeTag, is_array, is_object};
pub use utils::events::{EventListener, add_event, add_event_once, on_completion, wait_for_load};
