use serde::Serialize;

use pyroshop_cart::CartState;
use pyroshop_core::Money;

/// Flat tax rate applied at checkout (GST).
pub const TAX_PERCENT: u32 = 18;

/// Price breakdown shown on the cart and checkout pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OrderSummary {
    pub item_count: u64,
    pub subtotal: Money,
    pub tax: Money,
    pub total: Money,
}

impl OrderSummary {
    pub fn from_cart(cart: &CartState) -> Self {
        let subtotal = cart.subtotal();
        let tax = subtotal.percent(TAX_PERCENT);
        Self {
            item_count: cart.item_count(),
            subtotal,
            tax,
            total: subtotal.saturating_add(tax),
        }
    }
}
