//! Stateless page behaviors: price-range labels, lazy images, smooth
//! scrolling, the preloader overlay, and wishlist buttons.

use gloo_timers::future::TimeoutFuture;
use sf_core::page::{anchor_target, toggle_wishlist};
use wasm_bindgen::prelude::*;
use web_sys::{
    Element, Event, IntersectionObserver, IntersectionObserverEntry, MouseEvent,
    ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
};

use crate::dom;
use crate::events::listen;
use crate::state;
use crate::toast;

// ── Price-range slider ──

/// Mirror each price handle's value into its label as the handle moves.
pub fn bind_price_range() {
    for (handle_id, label_id) in [("price-min", "price-min-value"), ("price-max", "price-max-value")] {
        let (Some(handle), Some(label)) = (dom::by_id(handle_id), dom::by_id(label_id)) else {
            continue;
        };
        let h = handle.clone();
        listen(&handle, "input", move |_: Event| {
            if let Some(value) = dom::input_value(&h) {
                dom::set_text(&label, &value);
            }
        });
    }
}

// ── Lazy images ──

pub fn bind_lazy_images() {
    let images = dom::query_all(r#"img[loading="lazy"]"#);
    if images.is_empty() {
        return;
    }

    let cb = Closure::wrap(Box::new(
        |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let img = entry.target();
                reveal(&img);
                observer.unobserve(&img);
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    match IntersectionObserver::new(cb.as_ref().unchecked_ref()) {
        Ok(observer) => {
            for img in &images {
                observer.observe(img);
            }
        }
        Err(_) => {
            // No observer support: load everything now.
            images.iter().for_each(reveal);
        }
    }
    cb.forget();
}

/// Swap the staged `data-src` into `src`.
fn reveal(img: &Element) {
    if let Some(src) = dom::data(img, "src").filter(|s| !s.is_empty()) {
        let _ = img.set_attribute("src", &src);
    }
    dom::remove_class(img, "lazy");
}

// ── Smooth scroll ──

pub fn bind_smooth_scroll() {
    for anchor in dom::query_all(r##"a[href^="#"]"##) {
        let a = anchor.clone();
        listen(&anchor, "click", move |e: MouseEvent| {
            e.prevent_default();
            let href = a.get_attribute("href").unwrap_or_default();
            let Some(target) = anchor_target(&href).and_then(dom::query) else {
                return;
            };
            let opts = ScrollIntoViewOptions::new();
            opts.set_behavior(ScrollBehavior::Smooth);
            opts.set_block(ScrollLogicalPosition::Start);
            target.scroll_into_view_with_scroll_into_view_options(&opts);
        });
    }
}

// ── Preloader ──

pub const PRELOADER_ID: &str = "preloader";

/// Fade out and remove `#preloader` once the page has fully loaded.
pub fn bind_preloader() {
    if dom::by_id(PRELOADER_ID).is_none() {
        return;
    }
    if dom::document().ready_state() == "complete" {
        dismiss_preloader();
    } else {
        listen(&dom::window(), "load", |_: Event| dismiss_preloader());
    }
}

fn dismiss_preloader() {
    let Some(preloader) = dom::by_id(PRELOADER_ID) else {
        return;
    };
    let timings = state::config().preloader;
    wasm_bindgen_futures::spawn_local(async move {
        TimeoutFuture::new(timings.fade_delay_ms).await;
        dom::set_style(&preloader, "opacity", "0");
        TimeoutFuture::new(timings.remove_delay_ms).await;
        preloader.remove();
    });
}

// ── Wishlist ──

pub fn bind_wishlist() {
    for button in dom::query_all(".btn-wishlist") {
        let b = button.clone();
        listen(&button, "click", move |_: MouseEvent| {
            let view = toggle_wishlist(dom::has_class(&b, "active"));
            dom::toggle_class(&b, "active", view.active);
            b.set_inner_html(view.icon_html);
            toast::notify(view.message);
        });
    }
}
