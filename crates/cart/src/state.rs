use serde::Serialize;

use pyroshop_core::{Entity, Money, ProductId};

use crate::line::CartLine;

/// Cart contents plus derived totals.
///
/// `subtotal` and `item_count` are pure functions of `lines`; they are
/// recomputed wholesale whenever a new state is built and are never adjusted
/// incrementally.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct CartState {
    lines: Vec<CartLine>,
    subtotal: Money,
    item_count: u64,
}

impl CartState {
    /// The canonical empty cart.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a state from lines, computing the derived totals.
    ///
    /// Callers inside the crate guarantee the line invariants (positive
    /// quantities, unique ids); see [`crate::line::validate_lines`].
    pub(crate) fn from_lines(lines: Vec<CartLine>) -> Self {
        let subtotal: Money = lines.iter().map(CartLine::line_total).sum();
        let item_count: u64 = lines.iter().map(|l| u64::from(l.quantity())).sum();
        Self {
            lines,
            subtotal,
            item_count,
        }
    }

    /// Line items in display (first-add) order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn line(&self, id: &ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.id() == id)
    }

    pub fn contains(&self, id: &ProductId) -> bool {
        self.line(id).is_some()
    }

    /// Σ price × quantity.
    pub fn subtotal(&self) -> Money {
        self.subtotal
    }

    /// Σ quantity.
    pub fn item_count(&self) -> u64 {
        self.item_count
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
