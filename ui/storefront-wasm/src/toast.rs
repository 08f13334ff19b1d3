//! Transient toast notifications in `#toastWrap`.

use gloo_timers::future::TimeoutFuture;
use sf_core::toast::{ToastSchedule, toast_markup};

use crate::dom;
use crate::state;

pub const CONTAINER_ID: &str = "toastWrap";

/// Show `message` (markup) for the configured display window, then remove it.
/// No-op when the page has no toast container.
pub fn notify(message: &str) {
    let Some(wrap) = dom::by_id(CONTAINER_ID) else {
        return;
    };
    let node = match dom::create_element("div") {
        Ok(node) => node,
        Err(e) => {
            gloo_console::warn!("toast node not created", e);
            return;
        }
    };
    node.set_class_name("toast-item");
    node.set_inner_html(&toast_markup(message));
    if let Err(e) = wrap.append_child(&node) {
        gloo_console::warn!("toast node not attached", e);
        return;
    }

    let schedule = ToastSchedule::from(&state::config().toast);
    wasm_bindgen_futures::spawn_local(async move {
        TimeoutFuture::new(schedule.until_shown_ms).await;
        dom::add_class(&node, "show");
        TimeoutFuture::new(schedule.until_hidden_ms).await;
        dom::remove_class(&node, "show");
        TimeoutFuture::new(schedule.until_removed_ms).await;
        node.remove();
    });
}
