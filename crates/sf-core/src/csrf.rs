//! Anti-forgery token lookup in a `document.cookie` string.

use percent_encoding::percent_decode_str;
use sf_api_types::CsrfToken;

use crate::error::{Result, StorefrontError};

/// Find cookie `name` in a `k=v; k2=v2` string and percent-decode its value.
///
/// Returns the first match. An empty value counts as absent.
pub fn token_from_cookies(cookies: &str, name: &str) -> Result<CsrfToken> {
    cookies
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, raw)| percent_decode_str(raw).decode_utf8_lossy().into_owned())
        .filter(|value| !value.is_empty())
        .map(CsrfToken)
        .ok_or_else(|| StorefrontError::MissingCsrfCookie(name.to_owned()))
}
