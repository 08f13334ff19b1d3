//! Checkout wizard bindings.
//!
//! The `[data-wizard]` form holds every checkout field; `[data-prev]`,
//! `[data-next]` and `[data-submit]` drive it, and `.checkout-steps .step`
//! elements show progress. Visibility per step comes from
//! [`WizardStep::visibility`].

use sf_core::config::CheckoutGroups;
use sf_core::wizard::{WizardMove, WizardStep};
use web_sys::{Element, MouseEvent};

use crate::dom;
use crate::events::listen;
use crate::state;

#[derive(Clone)]
struct WizardElements {
    form: Element,
    indicators: Vec<Element>,
    prev: Option<Element>,
    next: Option<Element>,
    submit: Option<Element>,
}

impl WizardElements {
    fn bind() -> Option<Self> {
        Some(Self {
            form: dom::query("[data-wizard]")?,
            indicators: dom::query_all(".checkout-steps .step"),
            prev: dom::query("[data-prev]"),
            next: dom::query("[data-next]"),
            submit: dom::query("[data-submit]"),
        })
    }
}

pub fn bind() {
    let Some(els) = WizardElements::bind() else {
        return;
    };
    let groups = state::config().checkout;
    state::set_step(WizardStep::Contact);

    for (control, mv) in [(&els.prev, WizardMove::Prev), (&els.next, WizardMove::Next)] {
        let Some(control) = control else { continue };
        let els2 = els.clone();
        let groups2 = groups.clone();
        listen(control, "click", move |e: MouseEvent| {
            e.prevent_default();
            let step = state::step().apply(mv);
            state::set_step(step);
            render(&els2, &groups2, step);
        });
    }

    render(&els, &groups, WizardStep::Contact);
}

fn render(els: &WizardElements, groups: &CheckoutGroups, step: WizardStep) {
    let vis = step.visibility();

    for (i, indicator) in els.indicators.iter().enumerate() {
        dom::toggle_class(indicator, "active", step.indicator_active(i));
    }

    for field in dom::query_all_within(&els.form, "input,textarea,select") {
        if let Some(wrapper) = dom::closest(&field, &groups.any_wrapper) {
            dom::remove_class(&wrapper, &groups.hidden_class);
        }
    }
    if !vis.contact_fields {
        hide_group(&els.form, &groups.contact_selector(), &groups.contact_wrapper, &groups.hidden_class);
    }
    if !vis.payment_fields {
        hide_group(&els.form, &groups.payment_selector(), &groups.payment_wrapper, &groups.hidden_class);
    }

    if let Some(submit) = &els.submit {
        dom::set_hidden(submit, !vis.submit_visible);
    }
    if let Some(next) = &els.next {
        dom::set_hidden(next, !vis.next_visible);
    }
    if let Some(prev) = &els.prev {
        dom::set_disabled(prev, !vis.prev_enabled);
    }
}

fn hide_group(form: &Element, fields: &str, wrapper: &str, hidden_class: &str) {
    if fields.is_empty() {
        return;
    }
    for field in dom::query_all_within(form, fields) {
        if let Some(w) = dom::closest(&field, wrapper) {
            dom::add_class(&w, hidden_class);
        }
    }
}
