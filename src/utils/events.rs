//! Event listener registration.
//!
//! Two flavors are provided:
//! - [`EventListener`] keeps the listener attached for as long as the handle
//!   lives and detaches it on drop.
//! - [`add_event_once`] and [`on_completion`] hand a single-shot closure to
//!   the host, which keeps it alive until it fires.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Promise;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen_futures::JsFuture;
use web_sys::{AddEventListenerOptions, Event, EventTarget};

use crate::config::{ERROR_EVENT, LOAD_EVENT};
use crate::core::error::DomError;

/// A registered event listener.
///
/// The listener is removed from its target when the handle is dropped.
/// Call [`EventListener::forget`] to leave it attached for the lifetime of
/// the page.
pub struct EventListener {
    target: EventTarget,
    name: String,
    closure: Option<Closure<dyn FnMut(Event)>>,
}

impl EventListener {
    /// Event name this listener is registered for.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Leave the listener attached and leak its closure.
    pub fn forget(mut self) {
        if let Some(closure) = self.closure.take() {
            closure.forget();
        }
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        if let Some(closure) = self.closure.take() {
            let _ = self
                .target
                .remove_event_listener_with_callback(&self.name, closure.as_ref().unchecked_ref());
        }
    }
}

/// Bind `callback` to event `name` on `target` (bubbling phase).
pub fn add_event<F>(target: &EventTarget, name: &str, callback: F) -> Result<EventListener, DomError>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(callback) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref())?;

    Ok(EventListener {
        target: target.clone(),
        name: name.to_string(),
        closure: Some(closure),
    })
}

/// Bind a single-shot `callback` to event `name` on `target`.
///
/// The host detaches the listener after its first dispatch and owns the
/// closure until then; if the event never fires the closure is never
/// released.
pub fn add_event_once(
    target: &EventTarget,
    name: &str,
    callback: impl FnOnce(Event) + 'static,
) -> Result<(), DomError> {
    let function = Closure::once_into_js(callback);
    let options = AddEventListenerOptions::new();
    options.set_once(true);
    target.add_event_listener_with_callback_and_add_event_listener_options(
        name,
        function.unchecked_ref(),
        &options,
    )?;
    Ok(())
}

/// Register `callback` for whichever of `load` or `error` fires first.
///
/// The callback runs at most once. `Ok(())` means the resource loaded,
/// `Err(event)` carries the host error event.
pub fn on_completion(
    target: &EventTarget,
    callback: impl FnOnce(Result<(), Event>) + 'static,
) -> Result<(), DomError> {
    let slot = Rc::new(RefCell::new(Some(callback)));

    let on_load = Rc::clone(&slot);
    add_event_once(target, LOAD_EVENT, move |_| {
        let callback = on_load.borrow_mut().take();
        if let Some(callback) = callback {
            callback(Ok(()));
        }
    })?;

    add_event_once(target, ERROR_EVENT, move |event| {
        let callback = slot.borrow_mut().take();
        if let Some(callback) = callback {
            callback(Err(event));
        }
    })
}

/// Wait until `target` fires `load`, failing on `error`.
///
/// `url` only labels the error.
pub async fn wait_for_load(target: &EventTarget, url: &str) -> Result<(), DomError> {
    let mut registered = Ok(());
    let promise = Promise::new(&mut |resolve, reject| {
        registered = on_completion(target, move |outcome| {
            let _ = match outcome {
                Ok(()) => resolve.call0(&JsValue::NULL),
                Err(event) => reject.call1(&JsValue::NULL, &event),
            };
        });
    });
    registered?;

    JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|_| DomError::LoadFailed {
            url: url.to_string(),
        })
}
