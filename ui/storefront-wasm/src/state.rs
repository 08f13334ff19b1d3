//! Page-view state.
//!
//! Uses `RefCell`-wrapped `thread_local!` storage (WASM is single-threaded).
//! Everything here resets on navigation.

use sf_core::StorefrontConfig;
use sf_core::cart::CartLedger;
use sf_core::minicart::HoverPanel;
use sf_core::wizard::WizardStep;
use std::cell::RefCell;

#[derive(Debug, Default)]
pub struct AppState {
    pub config: StorefrontConfig,
    pub ledger: CartLedger,
    pub mini_cart: HoverPanel,
    pub step: WizardStep,
}

thread_local! {
    static STATE: RefCell<AppState> = RefCell::new(AppState::default());
}

/// Run a closure with shared read access to the state.
pub fn with<F, R>(f: F) -> R
where
    F: FnOnce(&AppState) -> R,
{
    STATE.with(|s| f(&s.borrow()))
}

/// Run a closure with mutable access to the state.
pub fn with_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut AppState) -> R,
{
    STATE.with(|s| f(&mut s.borrow_mut()))
}

// ── Convenience accessors ──

pub fn config() -> StorefrontConfig {
    with(|s| s.config.clone())
}

pub fn set_config(cfg: StorefrontConfig) {
    with_mut(|s| s.config = cfg);
}

pub fn step() -> WizardStep {
    with(|s| s.step)
}

pub fn set_step(step: WizardStep) {
    with_mut(|s| s.step = step);
}
