//! Lifecycle root.
//!
//! The storefront owns exactly one cart store for the session. Views never
//! reach it through globals: they get a subscription at construction and the
//! storefront performs mutations on their behalf.

use std::sync::Arc;

use pyroshop_cart::{CartChanged, CartStorage, CartStore, FileStorage, Notifier, TracingNotifier};
use pyroshop_catalog::{CatalogQuery, Product, ProductSource, StaticCatalog};
use pyroshop_checkout::{
    Checkout, CheckoutError, IdentityProvider, OrderConfirmation, PaymentDetails, ShippingDetails,
};
use pyroshop_core::{DomainError, DomainResult, ProductId};
use pyroshop_events::Subscription;

use crate::config::StorefrontConfig;

pub struct Storefront<S: CartStorage> {
    catalog: StaticCatalog,
    cart: CartStore<S>,
    identity: Arc<dyn IdentityProvider>,
    checkout: Checkout,
}

impl Storefront<FileStorage> {
    /// File-backed storefront using the mock catalog and logging notices.
    pub fn from_config(config: &StorefrontConfig, identity: Arc<dyn IdentityProvider>) -> Self {
        tracing::info!(data_dir = %config.data_dir.display(), "opening storefront");
        Self::new(
            StaticCatalog::mock(),
            FileStorage::new(&config.data_dir),
            Arc::new(TracingNotifier),
            identity,
            Checkout::new(config.checkout_delay),
        )
    }
}

impl<S: CartStorage> Storefront<S> {
    pub fn new(
        catalog: StaticCatalog,
        storage: S,
        notifier: Arc<dyn Notifier>,
        identity: Arc<dyn IdentityProvider>,
        checkout: Checkout,
    ) -> Self {
        Self {
            catalog,
            cart: CartStore::open(storage, notifier),
            identity,
            checkout,
        }
    }

    pub fn catalog(&self) -> &StaticCatalog {
        &self.catalog
    }

    pub fn browse(&self, query: &CatalogQuery) -> Vec<&Product> {
        query.apply(self.catalog.products())
    }

    pub fn cart(&self) -> &CartStore<S> {
        &self.cart
    }

    pub fn subscribe(&self) -> Subscription<CartChanged> {
        self.cart.subscribe()
    }

    /// "Add to cart" button. Disabled for out-of-stock products.
    pub fn add_to_cart(&mut self, id: &ProductId) -> DomainResult<()> {
        let product = self.catalog.get(id)?;
        if !product.in_stock() {
            return Err(DomainError::validation(format!(
                "{} is out of stock",
                product.name()
            )));
        }
        self.cart.add_item(product);
        Ok(())
    }

    /// "+" control on a cart line. Returns `false` when the control is
    /// disabled (no such line, or the line is at its stock ceiling).
    pub fn increment(&mut self, id: &ProductId) -> bool {
        let Some(line) = self.cart.state().line(id) else {
            return false;
        };
        if line.at_stock_limit() {
            return false;
        }
        let next = i64::from(line.quantity()) + 1;
        self.cart.set_quantity(id, next);
        true
    }

    /// "−" control on a cart line. Going below one removes the line.
    pub fn decrement(&mut self, id: &ProductId) -> bool {
        let Some(line) = self.cart.state().line(id) else {
            return false;
        };
        let next = i64::from(line.quantity()) - 1;
        self.cart.set_quantity(id, next);
        true
    }

    /// Quantity input on a cart line, capped at the advisory stock ceiling.
    ///
    /// Only a value below one removes the line; a positive request never drops
    /// under one, even when the product has since run out of stock.
    pub fn set_quantity(&mut self, id: &ProductId, quantity: i64) {
        if quantity < 1 {
            self.cart.set_quantity(id, quantity);
            return;
        }
        let ceiling = self
            .cart
            .state()
            .line(id)
            .map(|line| i64::from(line.product().stock()))
            .unwrap_or(i64::MAX);
        self.cart.set_quantity(id, quantity.min(ceiling).max(1));
    }

    pub fn remove(&mut self, id: &ProductId) {
        self.cart.remove_item(id);
    }

    pub fn clear_cart(&mut self) {
        self.cart.clear_cart();
    }

    /// Shipping form prefilled from the signed-in user.
    pub fn shipping_form(&self) -> ShippingDetails {
        ShippingDetails::prefilled(self.identity.as_ref())
    }

    pub async fn place_order(
        &mut self,
        shipping: ShippingDetails,
        payment: &PaymentDetails,
    ) -> Result<OrderConfirmation, CheckoutError> {
        self.checkout
            .place_order(&mut self.cart, shipping, payment)
            .await
    }
}
