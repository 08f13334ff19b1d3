//! Cart mutation bookkeeping.
//!
//! Two flows share this module:
//!
//! - **Add to cart**: one POST per click. [`resolve_add`] turns the request
//!   outcome into the toast to show and the badge value to render.
//! - **Quantity adjust**: per-row `increase` / `decrease`. [`CartLedger`]
//!   predicts the next quantity on click, numbers each request, and on
//!   completion tells the caller whether to write the prediction to the DOM,
//!   drop a superseded response, or reload the page.

use std::collections::HashMap;

use sf_api_types::{AddToCartResponse, QuantityAction, RequestOutcome};
use tracing::debug;

use crate::error::{Result, StorefrontError};
use crate::money;
use crate::toast;

/// Next displayed quantity for a row. Never below 1.
pub fn next_quantity(prev: u32, action: QuantityAction) -> u32 {
    let next = i64::from(prev) + action.delta();
    next.clamp(1, i64::from(u32::MAX)) as u32
}

pub fn parse_action(token: &str) -> Result<QuantityAction> {
    QuantityAction::from_token(token).ok_or_else(|| StorefrontError::UnknownAction(token.to_owned()))
}

// ── Badge ──

/// The item count rendered in the mini-cart badge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BadgeCount(pub u64);

impl BadgeCount {
    /// Read the badge's text. Blank or non-numeric text reads as 0.
    pub fn parse(text: &str) -> Self {
        let n = money::parse_int(text).unwrap_or(0).max(0);
        Self(n as u64)
    }

    pub fn incremented(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl std::fmt::Display for BadgeCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What the add-to-cart flow renders once its request settles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AddResolution {
    Added { toast: String, badge: BadgeCount },
    Refused { toast: String },
}

impl AddResolution {
    pub fn toast(&self) -> &str {
        match self {
            Self::Added { toast, .. } | Self::Refused { toast } => toast,
        }
    }
}

/// Decide toast and badge for a settled add-to-cart request.
///
/// The add endpoint always answers with JSON, so only a 2xx carrying a JSON
/// body counts. `success: false` refuses, and a `cart_count` replaces the
/// badge; without one the current badge is bumped by one. A 2xx that is not
/// JSON (a followed redirect to the login page) refuses, as does anything
/// else.
pub fn resolve_add(name: &str, current: BadgeCount, outcome: &RequestOutcome) -> AddResolution {
    let body = match outcome {
        RequestOutcome::Accepted { body, .. } => body,
        RequestOutcome::Rejected { status } => {
            debug!(status, "add to cart rejected");
            return AddResolution::Refused {
                toast: toast::add_refused(None),
            };
        }
        RequestOutcome::Failed(err) => {
            debug!(%err, "add to cart failed");
            return AddResolution::Refused {
                toast: toast::add_refused(None),
            };
        }
    };

    let Some(reply) = AddToCartResponse::parse(body) else {
        debug!(len = body.len(), "add to cart answered without JSON");
        return AddResolution::Refused {
            toast: toast::add_refused(None),
        };
    };
    if reply.success == Some(false) {
        return AddResolution::Refused {
            toast: toast::add_refused(reply.message.as_deref()),
        };
    }
    let badge = reply
        .cart_count
        .map(BadgeCount)
        .unwrap_or_else(|| current.incremented());
    AddResolution::Added {
        toast: toast::added_to_cart(name),
        badge,
    }
}

// ── Quantity ledger ──

/// Handle for one in-flight quantity request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ticket {
    pub row: String,
    pub seq: u64,
    /// Quantity to display if this request turns out to be the latest.
    pub quantity: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// Write `quantity` to the row and recompute totals.
    Apply { quantity: u32 },
    /// A newer request for the same row is outstanding or already applied.
    Superseded,
    /// Server state is unknown; reload the page.
    Reload,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct RowLedger {
    predicted: u32,
    issued: u64,
    in_flight: usize,
}

/// Per-row sequence numbers and predictions, keyed by the row's form action.
#[derive(Debug, Default)]
pub struct CartLedger {
    rows: HashMap<String, RowLedger>,
}

impl CartLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a click. `dom_quantity` is what the row's input shows now;
    /// it seeds the prediction only when nothing is in flight for the row,
    /// so rapid clicks build on each other instead of on a stale input.
    pub fn begin(&mut self, row: &str, dom_quantity: u32, action: QuantityAction) -> Ticket {
        let entry = self.rows.entry(row.to_owned()).or_default();
        if entry.in_flight == 0 {
            entry.predicted = dom_quantity.max(1);
        }
        entry.predicted = next_quantity(entry.predicted, action);
        entry.issued += 1;
        entry.in_flight += 1;
        Ticket {
            row: row.to_owned(),
            seq: entry.issued,
            quantity: entry.predicted,
        }
    }

    /// Settle a ticket. Any failed or non-2xx request reloads; otherwise only
    /// the most recently issued ticket of the row is applied.
    pub fn complete(&mut self, ticket: &Ticket, outcome: &RequestOutcome) -> Resolution {
        let Some(entry) = self.rows.get_mut(&ticket.row) else {
            return Resolution::Reload;
        };
        entry.in_flight = entry.in_flight.saturating_sub(1);

        if !outcome.is_accepted() {
            return Resolution::Reload;
        }
        if ticket.seq != entry.issued {
            debug!(row = %ticket.row, seq = ticket.seq, latest = entry.issued, "superseded quantity response");
            return Resolution::Superseded;
        }
        Resolution::Apply {
            quantity: ticket.quantity,
        }
    }

    #[cfg(test)]
    fn in_flight(&self, row: &str) -> usize {
        self.rows.get(row).map_or(0, |r| r.in_flight)
    }
}
