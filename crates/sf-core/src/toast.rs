//! Toast copy and display schedule.

use crate::config::ToastTimings;

pub const DEFAULT_ITEM_NAME: &str = "Item";
pub const ADD_FAILED: &str = "⚠️ Could not add to cart";
pub const WISHLIST_ADDED: &str = "Added to wishlist";
pub const WISHLIST_REMOVED: &str = "Removed from wishlist";

/// Escape text for interpolation into toast markup.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Display name from a `data-name` attribute; blank falls back to "Item".
pub fn display_name(raw: Option<&str>) -> &str {
    raw.map(str::trim)
        .filter(|n| !n.is_empty())
        .unwrap_or(DEFAULT_ITEM_NAME)
}

pub fn added_to_cart(name: &str) -> String {
    format!("✅ Added <b>{}</b> to cart", escape_html(name))
}

/// Failure copy, preferring the server's own explanation when it sent one.
pub fn add_refused(server_message: Option<&str>) -> String {
    match server_message.map(str::trim).filter(|m| !m.is_empty()) {
        Some(msg) => format!("⚠️ {}", escape_html(msg)),
        None => ADD_FAILED.to_owned(),
    }
}

/// Body markup of one toast node.
pub fn toast_markup(message: &str) -> String {
    format!(r#"<div class="toast-body">{}</div>"#, message)
}

/// The three waits a toast goes through, each relative to the previous one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToastSchedule {
    pub until_shown_ms: u32,
    pub until_hidden_ms: u32,
    pub until_removed_ms: u32,
}

impl From<&ToastTimings> for ToastSchedule {
    fn from(t: &ToastTimings) -> Self {
        Self {
            until_shown_ms: t.show_delay_ms,
            // display_ms counts from insertion, not from `show`.
            until_hidden_ms: t.display_ms.saturating_sub(t.show_delay_ms),
            until_removed_ms: t.removal_grace_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn added_message_wraps_name_in_bold() {
        assert_eq!(added_to_cart("Widget"), "✅ Added <b>Widget</b> to cart");
        assert!(added_to_cart("Widget").contains("Added <b>Widget</b> to cart"));
    }

    #[test]
    fn names_are_escaped() {
        assert_eq!(
            added_to_cart("<script>x</script> & co"),
            "✅ Added <b>&lt;script&gt;x&lt;/script&gt; &amp; co</b> to cart"
        );
    }

    #[test]
    fn display_name_fallback() {
        assert_eq!(display_name(Some("Lamp")), "Lamp");
        assert_eq!(display_name(Some("  ")), "Item");
        assert_eq!(display_name(None), "Item");
    }

    #[test]
    fn refused_copy() {
        assert_eq!(add_refused(None), ADD_FAILED);
        assert_eq!(add_refused(Some("")), ADD_FAILED);
        assert_eq!(add_refused(Some("Out of stock")), "⚠️ Out of stock");
    }

    #[test]
    fn default_schedule_totals_display_plus_grace() {
        let s = ToastSchedule::from(&ToastTimings::default());
        assert_eq!(s.until_shown_ms, 10);
        assert_eq!(s.until_shown_ms + s.until_hidden_ms, 2500);
        assert_eq!(s.until_removed_ms, 250);
    }

    #[test]
    fn schedule_never_underflows() {
        let t = ToastTimings {
            show_delay_ms: 50,
            display_ms: 20,
            removal_grace_ms: 0,
        };
        assert_eq!(ToastSchedule::from(&t).until_hidden_ms, 0);
    }
}
