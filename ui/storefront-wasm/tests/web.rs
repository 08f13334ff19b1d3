//! Browser tests. Run with `wasm-pack test --headless --firefox ui/storefront-wasm`.

use gloo_timers::future::TimeoutFuture;
use sf_api_types::{QuantityAction, RequestOutcome};
use sf_core::cart::{CartLedger, Resolution};
use sf_core::toast::ADD_FAILED;
use storefront_wasm::{cart, dom, minicart, page, toast, wizard};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{HtmlButtonElement, HtmlElement, HtmlInputElement, MouseEvent};

wasm_bindgen_test_configure!(run_in_browser);

fn mount(html: &str) -> web_sys::Element {
    let host = dom::create_element("div").unwrap();
    host.set_inner_html(html);
    dom::document().body().unwrap().append_child(&host).unwrap();
    host
}

fn by_id<T: JsCast>(id: &str) -> T {
    dom::by_id(id).unwrap().dyn_into::<T>().unwrap()
}

fn click(id: &str) {
    by_id::<HtmlElement>(id).click();
}

fn mouse(id: &str, kind: &str) {
    let event = MouseEvent::new(kind).unwrap();
    dom::by_id(id).unwrap().dispatch_event(&event).unwrap();
}

fn text_of(id: &str) -> String {
    dom::text(&dom::by_id(id).unwrap())
}

fn hidden_wrappers(host: &web_sys::Element, selector: &str) -> usize {
    dom::query_all_within(host, selector)
        .iter()
        .filter(|el| dom::has_class(el, "d-none"))
        .count()
}

const CHECKOUT: &str = r#"
<ol class="checkout-steps"><li class="step"></li><li class="step"></li><li class="step"></li></ol>
<form data-wizard>
  <div class="mb-3"><input id="full_name"></div>
  <div class="mb-3"><input id="phone"></div>
  <div class="mb-3"><input id="address"></div>
  <div class="mb-3"><input id="city"></div>
  <div class="form-check"><input id="cod" type="radio"></div>
  <div class="form-check"><input id="card" type="radio"></div>
  <button type="button" id="wizPrev" data-prev>Back</button>
  <button type="button" id="wizNext" data-next>Next</button>
  <button type="submit" id="wizSubmit" data-submit>Place order</button>
</form>
"#;

#[wasm_bindgen_test]
fn wizard_walks_through_steps() {
    let host = mount(CHECKOUT);
    wizard::bind();

    let prev = by_id::<HtmlButtonElement>("wizPrev");
    let next = by_id::<HtmlElement>("wizNext");
    let submit = by_id::<HtmlElement>("wizSubmit");

    // Contact
    assert_eq!(hidden_wrappers(&host, ".mb-3"), 0);
    assert_eq!(hidden_wrappers(&host, ".form-check"), 2);
    assert!(submit.hidden());
    assert!(prev.disabled());
    assert!(!next.hidden());

    // Payment
    click("wizNext");
    assert_eq!(hidden_wrappers(&host, ".mb-3"), 4);
    assert_eq!(hidden_wrappers(&host, ".form-check"), 0);
    assert!(submit.hidden());
    assert!(!prev.disabled());

    // Review
    click("wizNext");
    assert_eq!(hidden_wrappers(&host, ".mb-3"), 4);
    assert_eq!(hidden_wrappers(&host, ".form-check"), 2);
    assert!(!submit.hidden());
    assert!(next.hidden());
    let lit = dom::query_all_within(&host, ".checkout-steps .step.active").len();
    assert_eq!(lit, 3);

    // Back to payment
    click("wizPrev");
    assert!(submit.hidden());
    assert!(!next.hidden());

    host.remove();
}

#[wasm_bindgen_test]
fn toast_is_appended_to_container() {
    let host = mount(r#"<div id="toastWrap"></div>"#);
    toast::notify("✅ Added <b>Widget</b> to cart");

    let wrap = dom::by_id(toast::CONTAINER_ID).unwrap();
    let items = dom::query_all_within(&wrap, ".toast-item .toast-body");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].inner_html(), "✅ Added <b>Widget</b> to cart");

    host.remove();
}

#[wasm_bindgen_test]
fn toast_without_container_is_noop() {
    assert!(dom::by_id(toast::CONTAINER_ID).is_none());
    toast::notify("nobody sees this");
}

#[wasm_bindgen_test]
fn price_labels_follow_handles() {
    let host = mount(
        r#"<input id="price-min" type="range" min="0" max="500" value="0">
           <span id="price-min-value">0</span>
           <input id="price-max" type="range" min="0" max="500" value="500">
           <span id="price-max-value">500</span>"#,
    );
    page::bind_price_range();

    let min = by_id::<HtmlInputElement>("price-min");
    min.set_value("120");
    let event = web_sys::Event::new("input").unwrap();
    min.unchecked_ref::<web_sys::EventTarget>()
        .dispatch_event(&event)
        .unwrap();

    assert_eq!(dom::text(&dom::by_id("price-min-value").unwrap()), "120");
    assert_eq!(dom::text(&dom::by_id("price-max-value").unwrap()), "500");

    host.remove();
}

const CART: &str = r#"
<table class="cart-table">
  <tr class="cart-row" id="rowA">
    <td><span data-price="2.50">$2.50</span></td>
    <td><input class="qty-input" id="qtyA" value="3"></td>
    <td class="text-success" id="cellA">$7.50</td>
  </tr>
  <tr class="cart-row" id="rowB">
    <td><span data-price="10">$10.00</span></td>
    <td><input class="qty-input" id="qtyB" value="1"></td>
    <td class="text-success" id="cellB">$10.00</td>
  </tr>
</table>
<strong id="cartTotal">$17.50</strong>
"#;

#[wasm_bindgen_test]
fn confirmed_quantity_updates_row_and_cart_totals() {
    let host = mount(CART);
    let row_a = dom::by_id("rowA").unwrap();
    let row_b = dom::by_id("rowB").unwrap();
    let mut ledger = CartLedger::new();

    let ticket = ledger.begin("/cart/update/1/", 3, QuantityAction::Increase);
    let applied = ledger.complete(&ticket, &RequestOutcome::from_status(200, String::new()));
    assert!(!cart::settle_quantity(&row_a, &applied));
    assert_eq!(by_id::<HtmlInputElement>("qtyA").value(), "4");
    assert_eq!(text_of("cellA"), "$10.00");
    assert_eq!(text_of("cellB"), "$10.00");
    assert_eq!(text_of("cartTotal"), "$20.00");

    // Decrease at 1 keeps the row and the cart total as they are.
    let ticket = ledger.begin("/cart/update/2/", 1, QuantityAction::Decrease);
    let applied = ledger.complete(&ticket, &RequestOutcome::from_status(200, String::new()));
    assert_eq!(applied, Resolution::Apply { quantity: 1 });
    assert!(!cart::settle_quantity(&row_b, &applied));
    assert_eq!(by_id::<HtmlInputElement>("qtyB").value(), "1");
    assert_eq!(text_of("cellB"), "$10.00");
    assert_eq!(text_of("cartTotal"), "$20.00");

    host.remove();
}

#[wasm_bindgen_test]
fn failed_quantity_update_asks_for_reload_and_leaves_dom() {
    let host = mount(CART);
    let row_a = dom::by_id("rowA").unwrap();

    assert!(!cart::settle_quantity(&row_a, &Resolution::Superseded));
    assert!(cart::settle_quantity(&row_a, &Resolution::Reload));
    assert_eq!(by_id::<HtmlInputElement>("qtyA").value(), "3");
    assert_eq!(text_of("cellA"), "$7.50");
    assert_eq!(text_of("cartTotal"), "$17.50");

    host.remove();
}

const BADGE_AND_TOASTS: &str = r#"
<a id="miniCartBtn"><span class="badge" id="badge">3</span></a>
<div id="toastWrap"></div>
"#;

fn toast_bodies() -> Vec<String> {
    let wrap = dom::by_id(toast::CONTAINER_ID).unwrap();
    dom::query_all_within(&wrap, ".toast-item .toast-body")
        .iter()
        .map(|t| t.inner_html())
        .collect()
}

#[wasm_bindgen_test]
fn added_item_bumps_badge_and_toasts() {
    let host = mount(BADGE_AND_TOASTS);

    let outcome = RequestOutcome::from_status(200, r#"{"success": true}"#.into());
    assert!(cart::render_add("Widget", &outcome));
    assert_eq!(text_of("badge"), "4");
    let badge = by_id::<HtmlElement>("badge");
    assert_eq!(badge.style().get_property_value("transform").unwrap(), "scale(1.2)");
    assert_eq!(toast_bodies(), ["✅ Added <b>Widget</b> to cart"]);

    host.remove();
}

#[wasm_bindgen_test]
fn refused_add_keeps_badge() {
    let host = mount(BADGE_AND_TOASTS);

    let login = RequestOutcome::from_status(200, "<!doctype html><title>Log in</title>".into());
    assert!(!cart::render_add("Widget", &login));
    assert!(!cart::render_add("Widget", &RequestOutcome::Failed("offline".into())));
    assert_eq!(text_of("badge"), "3");
    assert_eq!(toast_bodies(), [ADD_FAILED, ADD_FAILED]);

    host.remove();
}

#[wasm_bindgen_test]
async fn mini_cart_opens_on_hover_and_closes_after_delay() {
    let host = mount(
        r#"<a id="miniCartBtn">Cart</a>
           <div id="miniCart" class="mini-cart"></div>"#,
    );
    minicart::bind();
    let panel = dom::by_id(minicart::PANEL_ID).unwrap();

    mouse(minicart::TRIGGER_ID, "mouseenter");
    assert!(dom::has_class(&panel, "open"));

    // Moving from the trigger onto the panel cancels the pending close.
    mouse(minicart::TRIGGER_ID, "mouseleave");
    mouse(minicart::PANEL_ID, "mouseenter");
    TimeoutFuture::new(300).await;
    assert!(dom::has_class(&panel, "open"));

    mouse(minicart::PANEL_ID, "mouseleave");
    assert!(dom::has_class(&panel, "open"));
    TimeoutFuture::new(300).await;
    assert!(!dom::has_class(&panel, "open"));

    host.remove();
}

#[wasm_bindgen_test]
fn wishlist_button_toggles() {
    let host = mount(
        r#"<button class="btn-wishlist" id="wish"><i class="far fa-heart"></i></button>
           <div id="toastWrap"></div>"#,
    );
    page::bind_wishlist();
    let button = dom::by_id("wish").unwrap();

    click("wish");
    assert!(dom::has_class(&button, "active"));
    assert_eq!(button.inner_html(), r#"<i class="fas fa-heart"></i>"#);

    click("wish");
    assert!(!dom::has_class(&button, "active"));
    assert_eq!(button.inner_html(), r#"<i class="far fa-heart"></i>"#);
    assert_eq!(toast_bodies(), ["Added to wishlist", "Removed from wishlist"]);

    host.remove();
}
