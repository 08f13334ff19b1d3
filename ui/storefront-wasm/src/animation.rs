//! Cosmetic feedback on add-to-cart buttons and the cart badge.

use gloo_timers::future::TimeoutFuture;
use web_sys::Element;

use crate::dom;
use crate::state;

const SPINNER: &str = r#"<div class="loading-spinner"></div>"#;
const CONFIRMED: &str = r#"<i class="fas fa-check"></i> Added!"#;

/// A button showing the in-flight spinner.
pub struct ButtonSpinner {
    button: Element,
    original: String,
    started_ms: f64,
}

impl ButtonSpinner {
    pub fn start(button: &Element) -> Self {
        let original = button.inner_html();
        button.set_inner_html(SPINNER);
        dom::set_disabled(button, true);
        Self {
            button: button.clone(),
            original,
            started_ms: js_sys::Date::now(),
        }
    }

    /// Keep the spinner for at least its configured time, then show the
    /// confirmation (on success) before restoring the original label.
    pub async fn finish(self, success: bool) {
        let timings = state::config().add_animation;
        let elapsed = (js_sys::Date::now() - self.started_ms).max(0.0) as u32;
        TimeoutFuture::new(timings.spinner_ms.saturating_sub(elapsed)).await;
        if success {
            self.button.set_inner_html(CONFIRMED);
            TimeoutFuture::new(timings.confirmed_ms).await;
        }
        self.button.set_inner_html(&self.original);
        dom::set_disabled(&self.button, false);
    }
}

/// Briefly scale the badge after its count changed.
pub fn pulse_badge(badge: &Element) {
    let ms = state::config().add_animation.badge_pulse_ms;
    dom::set_style(badge, "transform", "scale(1.2)");
    let badge = badge.clone();
    wasm_bindgen_futures::spawn_local(async move {
        TimeoutFuture::new(ms).await;
        dom::set_style(&badge, "transform", "scale(1)");
    });
}
