//! Startup configuration: the embedded `#storefrontConfig` blob and the
//! CSRF cookie.

use sf_api_types::CsrfToken;
use sf_core::StorefrontConfig;
use sf_core::csrf::token_from_cookies;
use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

use crate::dom;

pub const CONFIG_ID: &str = "storefrontConfig";

/// Read page overrides. A missing blob means defaults; a malformed one is
/// reported and ignored.
pub fn load() -> StorefrontConfig {
    let raw = dom::by_id(CONFIG_ID).map(|el| dom::text(&el));
    let Some(raw) = raw.filter(|r| !r.trim().is_empty()) else {
        return StorefrontConfig::default();
    };
    match StorefrontConfig::from_json(&raw) {
        Ok(cfg) => cfg,
        Err(e) => {
            gloo_console::warn!(format!("{}; using defaults", e));
            StorefrontConfig::default()
        }
    }
}

/// Read the CSRF cookie once. Pages for anonymous visitors may not set it;
/// requests then go out without the header and the server decides.
pub fn csrf_token(cookie_name: &str) -> Option<CsrfToken> {
    let cookies = dom::document()
        .dyn_into::<HtmlDocument>()
        .ok()
        .and_then(|d| d.cookie().ok())
        .unwrap_or_default();
    match token_from_cookies(&cookies, cookie_name) {
        Ok(token) => Some(token),
        Err(e) => {
            gloo_console::log!(e.to_string());
            None
        }
    }
}
