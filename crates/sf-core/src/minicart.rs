//! Mini-cart hover panel model.
//!
//! Pointer-leave schedules a close; pointer-enter opens immediately and
//! invalidates any close scheduled before it. Each transition bumps a
//! generation counter, and a scheduled close only fires if no transition
//! happened since it was scheduled.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CloseTicket(u64);

#[derive(Debug, Default)]
pub struct HoverPanel {
    open: bool,
    generation: u64,
}

impl HoverPanel {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    fn is_open(&self) -> bool {
        self.open
    }

    pub fn enter(&mut self) {
        self.generation += 1;
        self.open = true;
    }

    pub fn leave(&mut self) -> CloseTicket {
        self.generation += 1;
        CloseTicket(self.generation)
    }

    /// Called when a scheduled close timer fires. Returns true when the
    /// panel should now be closed.
    pub fn close_due(&mut self, ticket: CloseTicket) -> bool {
        if ticket.0 != self.generation || !self.open {
            return false;
        }
        self.open = false;
        true
    }
}

/// Viewport-relative box of the trigger (`getBoundingClientRect`).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TriggerRect {
    pub bottom: f64,
    pub right: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanelPosition {
    pub top: f64,
    pub right: f64,
}

impl PanelPosition {
    pub fn top_css(&self) -> String {
        format!("{}px", self.top)
    }

    pub fn right_css(&self) -> String {
        format!("{}px", self.right)
    }
}

/// Place the panel just below the trigger, anchored to the page's right edge.
pub fn panel_position(
    trigger: TriggerRect,
    scroll_x: f64,
    scroll_y: f64,
    body_width: f64,
    offset: f64,
) -> PanelPosition {
    PanelPosition {
        top: trigger.bottom + scroll_y + offset,
        right: body_width - (trigger.right + scroll_x),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leave_then_timer_closes() {
        let mut panel = HoverPanel::new();
        panel.enter();
        let t = panel.leave();
        assert!(panel.is_open());
        assert!(panel.close_due(t));
        assert!(!panel.is_open());
    }

    #[test]
    fn reentry_cancels_pending_close() {
        let mut panel = HoverPanel::new();
        panel.enter();
        let t = panel.leave();
        panel.enter();
        assert!(!panel.close_due(t));
        assert!(panel.is_open());
    }

    #[test]
    fn moving_from_trigger_to_panel_keeps_it_open() {
        let mut panel = HoverPanel::new();
        panel.enter();
        let from_trigger = panel.leave();
        panel.enter();
        let from_panel = panel.leave();
        assert!(!panel.close_due(from_trigger));
        assert!(panel.close_due(from_panel));
    }

    #[test]
    fn close_on_closed_panel_is_noop() {
        let mut panel = HoverPanel::new();
        let t = panel.leave();
        assert!(!panel.close_due(t));
    }

    #[test]
    fn position_tracks_scroll() {
        let rect = TriggerRect {
            bottom: 40.0,
            right: 900.0,
        };
        let pos = panel_position(rect, 0.0, 120.0, 1000.0, 6.0);
        assert_eq!(pos.top, 166.0);
        assert_eq!(pos.right, 100.0);
        assert_eq!(pos.top_css(), "166px");
        assert_eq!(pos.right_css(), "100px");
    }
}
