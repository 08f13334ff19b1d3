//! Browser-independent logic of the storefront front-end.
//!
//! The WASM crate owns the DOM, timers and `fetch`; every decision it makes
//! (what quantity to show, which checkout fields are visible, whether a
//! hover close still applies) lives here so it can be tested natively.

pub mod cart;
pub mod config;
pub mod csrf;
pub mod error;
pub mod minicart;
pub mod money;
pub mod page;
pub mod toast;
pub mod wizard;

pub use cart::{AddResolution, BadgeCount, CartLedger, Resolution, Ticket};
pub use config::StorefrontConfig;
pub use error::{Result, StorefrontError};
pub use wizard::{StepVisibility, WizardMove, WizardStep};
