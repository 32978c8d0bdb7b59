//! Simulated checkout.
//!
//! There is no payment gateway: placing an order validates the shipping form,
//! waits a fixed processing delay, and always succeeds by clearing the cart.

pub mod error;
pub mod identity;
pub mod order;
pub mod shipping;
pub mod summary;

pub use error::CheckoutError;
pub use identity::{AnonymousIdentity, CurrentUser, IdentityProvider, StaticIdentity};
pub use order::{Checkout, OrderConfirmation};
pub use shipping::{PaymentDetails, ShippingDetails};
pub use summary::{OrderSummary, TAX_PERCENT};
