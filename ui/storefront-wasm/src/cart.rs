//! Add-to-cart and quantity-adjust handlers.
//!
//! DOM contract:
//! - `[data-add-to-cart]` buttons with `data-url` and `data-name`
//! - one `[data-add-to-cart-form]` form (product detail), `data-name` optional
//! - `.cart-table form` per row inside a `.cart-row`, submitted by buttons
//!   whose value is `increase` or `decrease`; the row holds `.qty-input`,
//!   a `[data-price]` element and a `.text-success` total cell
//! - `#cartTotal` for the cart-wide total, `#miniCartBtn .badge` for the count

use std::rc::Rc;

use sf_api_types::{AddToCartRequest, CartLineRequest, QuantityAction, RequestOutcome};
use sf_core::cart::{self, AddResolution, BadgeCount, Resolution};
use sf_core::money::{cart_total, format_money, parse_price, parse_quantity, row_total};
use sf_core::toast::display_name;
use wasm_bindgen::JsCast;
use web_sys::{Element, FormData, HtmlButtonElement, HtmlFormElement, MouseEvent, SubmitEvent};

use crate::animation::{self, ButtonSpinner};
use crate::api::CartClient;
use crate::dom;
use crate::events::listen;
use crate::state;
use crate::toast;

const BADGE: &str = "#miniCartBtn .badge";
const CART_TOTAL_ID: &str = "cartTotal";

pub fn bind(client: &Rc<CartClient>) {
    bind_add_buttons(client);
    bind_add_form(client);
    bind_quantity_forms(client);
}

// ── Add to cart ──

fn bind_add_buttons(client: &Rc<CartClient>) {
    for button in dom::query_all("[data-add-to-cart]") {
        let client = Rc::clone(client);
        let btn = button.clone();
        listen(&button, "click", move |e: MouseEvent| {
            e.prevent_default();
            let Some(url) = dom::data(&btn, "url").filter(|u| !u.is_empty()) else {
                gloo_console::warn!("add-to-cart button without data-url");
                return;
            };
            let name = display_name(dom::data(&btn, "name").as_deref()).to_owned();
            let spinner = ButtonSpinner::start(&btn);
            let client = Rc::clone(&client);
            wasm_bindgen_futures::spawn_local(async move {
                let outcome = client.post_form(&url, &AddToCartRequest::default()).await;
                let added = render_add(&name, &outcome);
                spinner.finish(added).await;
            });
        });
    }
}

fn bind_add_form(client: &Rc<CartClient>) {
    let Some(form) = dom::query("[data-add-to-cart-form]")
        .and_then(|f| f.dyn_into::<HtmlFormElement>().ok())
    else {
        return;
    };
    let client = Rc::clone(client);
    let f = form.clone();
    listen(&form, "submit", move |e: SubmitEvent| {
        e.prevent_default();
        let data = match FormData::new_with_form(&f) {
            Ok(data) => data,
            Err(err) => {
                gloo_console::warn!("add-to-cart form not readable", err);
                return;
            }
        };
        let url = f.action();
        let name = display_name(dom::data(&f, "name").as_deref()).to_owned();
        let client = Rc::clone(&client);
        wasm_bindgen_futures::spawn_local(async move {
            let outcome = client.post_form_data(&url, &data).await;
            render_add(&name, &outcome);
        });
    });
}

/// Toast the outcome and update the badge. Returns true when the item was added.
pub fn render_add(name: &str, outcome: &RequestOutcome) -> bool {
    let badge = dom::query(BADGE);
    let current = badge
        .as_ref()
        .map_or(BadgeCount::default(), |b| BadgeCount::parse(&dom::text(b)));
    let resolution = cart::resolve_add(name, current, outcome);
    toast::notify(resolution.toast());
    match resolution {
        AddResolution::Added { badge: count, .. } => {
            if let Some(badge) = badge {
                dom::set_text(&badge, &count.to_string());
                animation::pulse_badge(&badge);
            }
            true
        }
        AddResolution::Refused { .. } => {
            if let RequestOutcome::Failed(err) = outcome {
                gloo_console::warn!(format!("add to cart failed: {}", err));
            }
            false
        }
    }
}

// ── Quantity adjust ──

fn bind_quantity_forms(client: &Rc<CartClient>) {
    for form in dom::query_all(".cart-table form") {
        let Ok(form) = form.dyn_into::<HtmlFormElement>() else {
            continue;
        };
        let client = Rc::clone(client);
        let f = form.clone();
        listen(&form, "submit", move |e: SubmitEvent| {
            // Without a recognised submit button the browser handles the post.
            let Some(action) = submitter_action(&e) else {
                return;
            };
            let Some(row) = dom::closest(&f, ".cart-row") else {
                return;
            };
            e.prevent_default();

            let row_key = f.action();
            let shown = parse_quantity(qty_input(&row).and_then(|i| dom::input_value(&i)).as_deref());
            let ticket = state::with_mut(|s| s.ledger.begin(&row_key, shown, action));
            let client = Rc::clone(&client);
            wasm_bindgen_futures::spawn_local(async move {
                let outcome = client.post_form(&row_key, &CartLineRequest { action }).await;
                let resolution = state::with_mut(|s| s.ledger.complete(&ticket, &outcome));
                if settle_quantity(&row, &resolution) {
                    gloo_console::warn!(format!("cart update failed ({:?}), reloading", outcome));
                    dom::reload();
                }
            });
        });
    }
}

fn submitter_action(e: &SubmitEvent) -> Option<QuantityAction> {
    let value = e
        .submitter()
        .and_then(|s| s.dyn_into::<HtmlButtonElement>().ok())
        .map(|b| b.value())?;
    match cart::parse_action(&value) {
        Ok(action) => Some(action),
        Err(err) => {
            gloo_console::warn!(err.to_string());
            None
        }
    }
}

fn qty_input(row: &Element) -> Option<Element> {
    dom::query_within(row, ".qty-input")
}

fn row_price(row: &Element) -> f64 {
    let price_el = dom::query_within(row, "[data-price]");
    parse_price(price_el.and_then(|p| dom::data(&p, "price")).as_deref())
}

/// Render a settled quantity request into its row. Returns true when the
/// page must reload instead; the DOM is left untouched in that case.
pub fn settle_quantity(row: &Element, resolution: &Resolution) -> bool {
    match resolution {
        Resolution::Apply { quantity } => {
            apply_quantity(row, *quantity);
            false
        }
        Resolution::Superseded => false,
        Resolution::Reload => true,
    }
}

/// Write the confirmed quantity into the row, then refresh row and cart totals.
fn apply_quantity(row: &Element, quantity: u32) {
    let prefix = state::config().currency_prefix;
    if let Some(input) = qty_input(row).and_then(|i| i.dyn_into::<web_sys::HtmlInputElement>().ok()) {
        input.set_value(&quantity.to_string());
    }
    if let Some(cell) = dom::query_within(row, ".text-success") {
        dom::set_text(&cell, &format_money(&prefix, row_total(row_price(row), quantity)));
    }

    let rows = dom::query_all(".cart-row").into_iter().map(|r| {
        let qty = parse_quantity(qty_input(&r).and_then(|i| dom::input_value(&i)).as_deref());
        (row_price(&r), qty)
    });
    let sum = cart_total(rows);
    if let Some(total) = dom::by_id(CART_TOTAL_ID) {
        dom::set_text(&total, &format_money(&prefix, sum));
    }
}
