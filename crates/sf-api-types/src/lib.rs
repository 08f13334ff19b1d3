use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Characters left bare in `application/x-www-form-urlencoded` values.
const FORM_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'*');

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum QuantityAction {
    Increase,
    Decrease,
}

impl QuantityAction {
    pub fn from_token(token: &str) -> Option<Self> {
        match token.trim() {
            "increase" => Some(Self::Increase),
            "decrease" => Some(Self::Decrease),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Increase => "increase",
            Self::Decrease => "decrease",
        }
    }

    pub fn delta(self) -> i64 {
        match self {
            Self::Increase => 1,
            Self::Decrease => -1,
        }
    }
}

impl fmt::Display for QuantityAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Anti-forgery token echoed back to the server on every mutating request.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CsrfToken(pub String);

impl CsrfToken {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Keep the token out of console dumps.
impl fmt::Debug for CsrfToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CsrfToken(***)")
    }
}

/// A request body sent as `application/x-www-form-urlencoded`.
pub trait FormBody {
    fn form_pairs(&self) -> Vec<(&'static str, String)>;

    fn encode(&self) -> String {
        encode_form(&self.form_pairs())
    }
}

pub fn encode_form(pairs: &[(&str, String)]) -> String {
    pairs
        .iter()
        .map(|(k, v)| {
            format!(
                "{}={}",
                utf8_percent_encode(k, FORM_ENCODE_SET),
                utf8_percent_encode(v, FORM_ENCODE_SET)
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

/// Body of the quick add-to-cart POST.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AddToCartRequest {
    pub quantity: u32,
}

impl Default for AddToCartRequest {
    fn default() -> Self {
        Self { quantity: 1 }
    }
}

impl FormBody for AddToCartRequest {
    fn form_pairs(&self) -> Vec<(&'static str, String)> {
        vec![("quantity", self.quantity.to_string())]
    }
}

/// Body of the cart line-item POST (`action=increase|decrease`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartLineRequest {
    pub action: QuantityAction,
}

impl FormBody for CartLineRequest {
    fn form_pairs(&self) -> Vec<(&'static str, String)> {
        vec![("action", self.action.as_str().to_owned())]
    }
}

/// JSON reply of the add-to-cart endpoint. Every field is optional; a server
/// that answers with HTML or an empty body yields `None` from `parse`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AddToCartResponse {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub cart_count: Option<u64>,
    #[serde(default)]
    pub message: Option<String>,
}

impl AddToCartResponse {
    pub fn parse(body: &str) -> Option<Self> {
        serde_json::from_str(body).ok()
    }
}

/// How a mutating request completed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestOutcome {
    /// 2xx response, with the raw body text.
    Accepted { status: u16, body: String },
    /// The server answered, but not with a 2xx.
    Rejected { status: u16 },
    /// The request never completed (network unreachable, aborted, CORS).
    Failed(String),
}

impl RequestOutcome {
    pub fn from_status(status: u16, body: String) -> Self {
        if (200..300).contains(&status) {
            Self::Accepted { status, body }
        } else {
            Self::Rejected { status }
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }
}
