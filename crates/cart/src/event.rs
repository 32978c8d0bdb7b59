use chrono::{DateTime, Utc};

use pyroshop_events::Event;

use crate::action::CartAction;
use crate::state::CartState;

/// Which transition produced a [`CartChanged`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartActionKind {
    ItemAdded,
    ItemRemoved,
    QuantitySet,
    Cleared,
    Hydrated,
}

impl From<&CartAction> for CartActionKind {
    fn from(action: &CartAction) -> Self {
        match action {
            CartAction::AddItem(_) => CartActionKind::ItemAdded,
            CartAction::RemoveItem(_) => CartActionKind::ItemRemoved,
            CartAction::SetQuantity { .. } => CartActionKind::QuantitySet,
            CartAction::ClearCart => CartActionKind::Cleared,
            CartAction::Hydrate(_) => CartActionKind::Hydrated,
        }
    }
}

/// Published after every committed cart transition, carrying the full new state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartChanged {
    pub action: CartActionKind,
    pub state: CartState,
    pub occurred_at: DateTime<Utc>,
}

impl Event for CartChanged {
    fn event_type(&self) -> &'static str {
        match self.action {
            CartActionKind::ItemAdded => "cart.item_added",
            CartActionKind::ItemRemoved => "cart.item_removed",
            CartActionKind::QuantitySet => "cart.quantity_set",
            CartActionKind::Cleared => "cart.cleared",
            CartActionKind::Hydrated => "cart.hydrated",
        }
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
}
