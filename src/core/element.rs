//! Element factories.
//!
//! Every factory creates a fresh element in the current document. Script,
//! stylesheet and pixel tags are attached immediately; everything else is
//! returned detached for the caller to place.

use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlAnchorElement, HtmlImageElement, Node, Text};

use crate::config::{LOAD_EVENT, NEW_CONTEXT_TARGET, SCRIPT_TYPE, pixel, stylesheet};
use crate::core::error::DomError;
use crate::core::tree::set_attributes;
use crate::models::{AnchorTarget, Attributes};
use crate::utils::{dom, events};

/// Callback run once when a script or stylesheet finishes loading.
pub type LoadCallback = Box<dyn FnOnce(Event)>;

/// Callback run once when a tracking pixel settles.
///
/// Receives `Ok(())` on load or the host error event, plus the pixel URL.
pub type PixelCallback = Box<dyn FnOnce(Result<(), Event>, &str)>;

/// Function returned by [`wrap`].
pub type Wrapper = Box<dyn Fn(&Node) -> Result<Element, DomError>>;

/// Create an element of `tag` with `attributes` applied.
///
/// The tag name is not validated; the host rejects invalid names.
pub fn create_element(tag: &str, attributes: &Attributes) -> Result<Element, DomError> {
    let element = dom::document()?.create_element(tag)?;
    set_attributes(&element, attributes)?;
    Ok(element)
}

/// Create an `<img>` with `src` set to `url`, an empty `alt`, and `attributes` applied.
pub fn image(url: &str, attributes: &Attributes) -> Result<HtmlImageElement, DomError> {
    let img = new_image()?;
    img.set_src(url);
    img.set_alt("");
    set_attributes(&img, attributes)?;
    Ok(img)
}

/// Create an `<a>` pointing at `url`.
pub fn anchor(url: &str, target: &AnchorTarget) -> Result<HtmlAnchorElement, DomError> {
    let a = dom::document()?
        .create_element("a")?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|_| DomError::Host("created element is not an <a>".to_string()))?;
    a.set_href(url);

    match target {
        AnchorTarget::Default => {}
        AnchorTarget::NewContext => a.set_target(NEW_CONTEXT_TARGET),
        AnchorTarget::Attributes(attributes) => {
            set_attributes(&a, attributes)?;
        }
    }
    Ok(a)
}

/// Build a function that wraps a child in a new `tag` element.
///
/// ```ignore
/// let wrapped = domu::wrap("div")(&span)?; // <div><span></span></div>
/// ```
pub fn wrap(tag: &str) -> Wrapper {
    let tag = tag.to_string();
    Box::new(move |child: &Node| -> Result<Element, DomError> {
        let parent = dom::document()?.create_element(&tag)?;
        parent.append_child(child)?;
        Ok(parent)
    })
}

/// Create an empty text node.
pub fn text_node() -> Result<Text, DomError> {
    Ok(dom::document()?.create_text_node(""))
}

/// Append a stylesheet `<link>` for `url` to the document head.
///
/// `on_load` runs once if the stylesheet loads. Load failures are not
/// reported.
pub fn append_stylesheet(url: &str, on_load: Option<LoadCallback>) -> Result<Element, DomError> {
    let tag = create_element(
        "link",
        &Attributes::from([
            ("href", url),
            ("type", stylesheet::TYPE),
            ("rel", stylesheet::REL),
        ]),
    )?;
    attach_to_head(tag, on_load)
}

/// Append a `<script>` for `url` to the document head.
///
/// `on_load` runs once if the script loads.
pub fn append_script(url: &str, on_load: Option<LoadCallback>) -> Result<Element, DomError> {
    let tag = create_element("script", &Attributes::from([("src", url), ("type", SCRIPT_TYPE)]))?;
    attach_to_head(tag, on_load)
}

fn attach_to_head(tag: Element, on_load: Option<LoadCallback>) -> Result<Element, DomError> {
    if let Some(callback) = on_load {
        events::add_event_once(&tag, LOAD_EVENT, callback)?;
    }
    dom::head()?.append_child(&tag)?;
    Ok(tag)
}

/// Fire a request for `url` through a hidden 0x0 image appended to the body.
///
/// On load the image source is cleared and `callback` receives `Ok(())`;
/// on failure it receives the error event. The callback runs at most once.
/// There is no retry and no timeout. Returns `url`.
pub fn create_pixel(url: &str, callback: Option<PixelCallback>) -> Result<String, DomError> {
    let img = new_image()?;

    let style = img.style();
    style.set_property("visibility", pixel::VISIBILITY)?;
    style.set_property("width", pixel::WIDTH)?;
    style.set_property("height", pixel::HEIGHT)?;
    img.set_src(url);

    let pixel = img.clone();
    let pixel_url = url.to_string();
    events::on_completion(&img, move |outcome| {
        if outcome.is_ok() {
            pixel.set_src("");
        }
        match callback {
            Some(callback) => callback(outcome, &pixel_url),
            None if outcome.is_err() => dom::warn(&format!("pixel failed to load: {}", pixel_url)),
            None => {}
        }
    })?;

    dom::body()?.append_child(&img)?;
    Ok(url.to_string())
}

fn new_image() -> Result<HtmlImageElement, DomError> {
    dom::document()?
        .create_element("img")?
        .dyn_into::<HtmlImageElement>()
        .map_err(|_| DomError::Host("created element is not an <img>".to_string()))
}
