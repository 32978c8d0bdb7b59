//! Placing an order.

use std::time::Duration;

use chrono::{DateTime, Utc};

use pyroshop_cart::{CartLine, CartStorage, CartStore};
use pyroshop_core::OrderId;

use crate::error::CheckoutError;
use crate::shipping::{PaymentDetails, ShippingDetails};
use crate::summary::OrderSummary;

/// What the customer sees after a successful checkout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderConfirmation {
    pub order_id: OrderId,
    pub summary: OrderSummary,
    pub lines: Vec<CartLine>,
    pub shipping: ShippingDetails,
    pub payment_method: String,
    pub placed_at: DateTime<Utc>,
}

impl OrderConfirmation {
    pub fn reference(&self) -> String {
        self.order_id.reference()
    }
}

/// Simulated checkout with a fixed processing delay.
#[derive(Debug, Clone, Copy)]
pub struct Checkout {
    processing_delay: Duration,
}

impl Default for Checkout {
    fn default() -> Self {
        Self::new(Duration::from_secs(2))
    }
}

impl Checkout {
    pub fn new(processing_delay: Duration) -> Self {
        Self { processing_delay }
    }

    pub fn processing_delay(&self) -> Duration {
        self.processing_delay
    }

    /// Validate, "process" the payment, then clear the cart.
    ///
    /// Failures (empty cart, invalid shipping form) leave the cart untouched.
    /// Once validation passes the order always succeeds.
    pub async fn place_order<S: CartStorage>(
        &self,
        cart: &mut CartStore<S>,
        shipping: ShippingDetails,
        payment: &PaymentDetails,
    ) -> Result<OrderConfirmation, CheckoutError> {
        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }
        shipping.validate()?;

        let summary = OrderSummary::from_cart(cart.state());
        let lines = cart.lines().to_vec();

        if !self.processing_delay.is_zero() {
            tokio::time::sleep(self.processing_delay).await;
        }

        let confirmation = OrderConfirmation {
            order_id: OrderId::new(),
            summary,
            lines,
            shipping,
            payment_method: payment.masked_card(),
            placed_at: Utc::now(),
        };

        tracing::info!(
            order = %confirmation.reference(),
            items = summary.item_count,
            total = summary.total.amount(),
            "order placed"
        );

        cart.clear_cart();
        Ok(confirmation)
    }
}
