//! Small stateless page behaviors: anchor targets and the wishlist button.

use crate::toast::{WISHLIST_ADDED, WISHLIST_REMOVED};

pub const WISHLIST_ICON_ACTIVE: &str = r#"<i class="fas fa-heart"></i>"#;
pub const WISHLIST_ICON_INACTIVE: &str = r#"<i class="far fa-heart"></i>"#;

/// Selector for a same-page anchor's target. A bare `#` has no target.
pub fn anchor_target(href: &str) -> Option<&str> {
    let href = href.trim();
    (href.starts_with('#') && href.len() > 1).then_some(href)
}

/// Rendering of the wishlist button after a click.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WishlistView {
    pub active: bool,
    pub icon_html: &'static str,
    pub message: &'static str,
}

pub fn toggle_wishlist(was_active: bool) -> WishlistView {
    let active = !was_active;
    if active {
        WishlistView {
            active,
            icon_html: WISHLIST_ICON_ACTIVE,
            message: WISHLIST_ADDED,
        }
    } else {
        WishlistView {
            active,
            icon_html: WISHLIST_ICON_INACTIVE,
            message: WISHLIST_REMOVED,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchors() {
        assert_eq!(anchor_target("#reviews"), Some("#reviews"));
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target(""), None);
        assert_eq!(anchor_target("/cart#top"), None);
    }

    #[test]
    fn wishlist_message_follows_new_state() {
        let on = toggle_wishlist(false);
        assert!(on.active);
        assert_eq!(on.message, "Added to wishlist");
        assert_eq!(on.icon_html, WISHLIST_ICON_ACTIVE);

        let off = toggle_wishlist(true);
        assert!(!off.active);
        assert_eq!(off.message, "Removed from wishlist");
        assert_eq!(off.icon_html, WISHLIST_ICON_INACTIVE);
    }
}
