//! Page-level configuration.
//!
//! Every field has a default matching the stock templates, so a page only
//! embeds the keys it wants to change:
//!
//! ```html
//! <script type="application/json" id="storefrontConfig">
//!   {"currencyPrefix": "€", "toast": {"displayMs": 4000}}
//! </script>
//! ```

use serde::{Deserialize, Serialize};

use crate::error::Result;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StorefrontConfig {
    pub csrf_cookie: String,
    pub csrf_header: String,
    pub currency_prefix: String,
    pub toast: ToastTimings,
    pub mini_cart: MiniCartSettings,
    pub preloader: PreloaderTimings,
    pub add_animation: AddAnimationTimings,
    pub checkout: CheckoutGroups,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            csrf_cookie: "csrftoken".to_owned(),
            csrf_header: "X-CSRFToken".to_owned(),
            currency_prefix: "$".to_owned(),
            toast: ToastTimings::default(),
            mini_cart: MiniCartSettings::default(),
            preloader: PreloaderTimings::default(),
            add_animation: AddAnimationTimings::default(),
            checkout: CheckoutGroups::default(),
        }
    }
}

impl StorefrontConfig {
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ToastTimings {
    /// Delay before the `show` class is added, so the CSS transition runs.
    pub show_delay_ms: u32,
    pub display_ms: u32,
    /// Time between removing `show` and detaching the node.
    pub removal_grace_ms: u32,
}

impl Default for ToastTimings {
    fn default() -> Self {
        Self {
            show_delay_ms: 10,
            display_ms: 2500,
            removal_grace_ms: 250,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MiniCartSettings {
    pub close_delay_ms: u32,
    /// Gap in px between the trigger's bottom edge and the panel.
    pub offset_px: f64,
}

impl Default for MiniCartSettings {
    fn default() -> Self {
        Self {
            close_delay_ms: 200,
            offset_px: 6.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PreloaderTimings {
    pub fade_delay_ms: u32,
    pub remove_delay_ms: u32,
}

impl Default for PreloaderTimings {
    fn default() -> Self {
        Self {
            fade_delay_ms: 500,
            remove_delay_ms: 300,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AddAnimationTimings {
    pub spinner_ms: u32,
    pub confirmed_ms: u32,
    pub badge_pulse_ms: u32,
}

impl Default for AddAnimationTimings {
    fn default() -> Self {
        Self {
            spinner_ms: 1000,
            confirmed_ms: 2000,
            badge_pulse_ms: 300,
        }
    }
}

/// Selectors for the checkout field groups toggled by the wizard.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CheckoutGroups {
    pub contact_fields: Vec<String>,
    /// Ancestor of each contact field that carries the `d-none` class.
    pub contact_wrapper: String,
    pub payment_fields: Vec<String>,
    pub payment_wrapper: String,
    /// Wrappers un-hidden on every transition before the step's rules apply.
    pub any_wrapper: String,
    pub hidden_class: String,
}

impl Default for CheckoutGroups {
    fn default() -> Self {
        Self {
            contact_fields: ["#full_name", "#phone", "#address", "#city"]
                .map(String::from)
                .to_vec(),
            contact_wrapper: ".mb-3".to_owned(),
            payment_fields: ["#cod", "#card"].map(String::from).to_vec(),
            payment_wrapper: ".form-check".to_owned(),
            any_wrapper: ".mb-3,.form-check".to_owned(),
            hidden_class: "d-none".to_owned(),
        }
    }
}

impl CheckoutGroups {
    pub fn contact_selector(&self) -> String {
        self.contact_fields.join(",")
    }

    pub fn payment_selector(&self) -> String {
        self.payment_fields.join(",")
    }
}
