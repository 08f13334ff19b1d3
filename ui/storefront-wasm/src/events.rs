//! Event listener plumbing.
//!
//! Every storefront handler lives for the whole page view, so closures are
//! leaked with `forget()` once attached.

use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::prelude::*;
use web_sys::EventTarget;

/// Attach `handler` to `event` on `target`.
pub fn listen<E, F>(target: &EventTarget, event: &str, handler: F)
where
    E: FromWasmAbi + 'static,
    F: FnMut(E) + 'static,
{
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    if let Err(e) = target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref()) {
        gloo_console::warn!(format!("could not bind {}", event), e);
    }
    cb.forget();
}

/// Like [`listen`], but registered as passive (scroll, resize).
pub fn listen_passive<F>(target: &EventTarget, event: &str, handler: F)
where
    F: FnMut(web_sys::Event) + 'static,
{
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web_sys::Event)>);
    let opts = web_sys::AddEventListenerOptions::new();
    opts.set_passive(true);
    if let Err(e) = target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        cb.as_ref().unchecked_ref(),
        &opts,
    ) {
        gloo_console::warn!(format!("could not bind {}", event), e);
    }
    cb.forget();
}
