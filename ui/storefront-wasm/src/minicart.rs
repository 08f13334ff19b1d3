//! Mini-cart hover panel.
//!
//! `#miniCartBtn` is the trigger, `#miniCart` the panel. Hovering either
//! opens the panel; leaving either closes it after a short delay unless the
//! pointer came back in the meantime.

use gloo_timers::callback::Timeout;
use sf_core::minicart::{TriggerRect, panel_position};
use web_sys::{Element, MouseEvent};

use crate::dom;
use crate::events::{listen, listen_passive};
use crate::state;

pub const TRIGGER_ID: &str = "miniCartBtn";
pub const PANEL_ID: &str = "miniCart";
const OPEN: &str = "open";

pub fn bind() {
    let (Some(trigger), Some(panel)) = (dom::by_id(TRIGGER_ID), dom::by_id(PANEL_ID)) else {
        return;
    };

    for target in [&trigger, &panel] {
        let p = panel.clone();
        listen(target, "mouseenter", move |_: MouseEvent| {
            state::with_mut(|s| s.mini_cart.enter());
            dom::add_class(&p, OPEN);
        });

        let p = panel.clone();
        listen(target, "mouseleave", move |_: MouseEvent| {
            let ticket = state::with_mut(|s| s.mini_cart.leave());
            let delay = state::with(|s| s.config.mini_cart.close_delay_ms);
            let p = p.clone();
            Timeout::new(delay, move || {
                if state::with_mut(|s| s.mini_cart.close_due(ticket)) {
                    dom::remove_class(&p, OPEN);
                }
            })
            .forget();
        });
    }

    let window = dom::window();
    for event in ["resize", "scroll"] {
        let t = trigger.clone();
        let p = panel.clone();
        listen_passive(&window, event, move |_| position(&t, &p));
    }
    position(&trigger, &panel);
}

fn position(trigger: &Element, panel: &Element) {
    let rect = trigger.get_bounding_client_rect();
    let window = dom::window();
    let body_width = dom::document()
        .body()
        .map_or(0.0, |b| f64::from(b.client_width()));
    let pos = panel_position(
        TriggerRect {
            bottom: rect.bottom(),
            right: rect.right(),
        },
        window.scroll_x().unwrap_or(0.0),
        window.scroll_y().unwrap_or(0.0),
        body_width,
        state::with(|s| s.config.mini_cart.offset_px),
    );
    dom::set_style(panel, "top", &pos.top_css());
    dom::set_style(panel, "right", &pos.right_css());
}
