//! Storefront WASM front-end.
//!
//! Progressive enhancement for server-rendered shop pages: mini-cart hover,
//! optimistic cart updates, the checkout wizard and a handful of cosmetic
//! behaviors. Each concern lives in its own module and binds only when its
//! elements are on the page.

pub mod animation;
pub mod api;
pub mod cart;
pub mod config;
pub mod dom;
pub mod events;
pub mod minicart;
pub mod page;
pub mod state;
pub mod toast;
pub mod wizard;

use std::rc::Rc;

use wasm_bindgen::prelude::*;

/// WASM entry point – called automatically when the module is instantiated.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Improve panic messages in the browser console
    console_error_panic_hook::set_once();

    if dom::document().ready_state() == "loading" {
        events::listen(&dom::document(), "DOMContentLoaded", |_: web_sys::Event| init());
    } else {
        init();
    }
    Ok(())
}

/// Main initialisation sequence.
fn init() {
    let cfg = config::load();
    let client = Rc::new(api::CartClient::new(
        config::csrf_token(&cfg.csrf_cookie),
        cfg.csrf_header.clone(),
    ));
    state::set_config(cfg);

    minicart::bind();
    cart::bind(&client);
    wizard::bind();

    page::bind_price_range();
    page::bind_lazy_images();
    page::bind_smooth_scroll();
    page::bind_preloader();
    page::bind_wishlist();

    gloo_console::log!("storefront ready");
}
