//! The owned cart store: reducer + derived reads + subscriptions + persistence.

use std::sync::Arc;

use chrono::Utc;

use pyroshop_catalog::Product;
use pyroshop_core::{Money, ProductId, Reducer};
use pyroshop_events::{EventBus, InMemoryEventBus, Subscription};

use crate::action::CartAction;
use crate::event::{CartActionKind, CartChanged};
use crate::line::{CartLine, validate_lines};
use crate::notify::{Notice, Notifier};
use crate::snapshot;
use crate::state::CartState;
use crate::storage::CartStorage;

/// Storage key the cart is mirrored under.
pub const CART_STORAGE_KEY: &str = "pyro-shop-cart";

/// Single-session cart.
///
/// The store is the only writer of its state. Every mutation runs the reducer,
/// commits the new state, publishes a [`CartChanged`] to subscribers and then
/// mirrors the full line list into storage. Storage failures are logged and
/// never surface to callers; no operation returns an error.
///
/// ## Usage Pattern
///
/// ```ignore
/// let mut store = CartStore::open(FileStorage::new(dir), Arc::new(TracingNotifier));
/// let badge = store.subscribe();
///
/// store.add_item(&product);
/// assert_eq!(store.item_count(), 1);
/// ```
pub struct CartStore<S: CartStorage> {
    state: CartState,
    storage: S,
    key: String,
    notifier: Arc<dyn Notifier>,
    bus: Arc<InMemoryEventBus<CartChanged>>,
}

impl<S: CartStorage> core::fmt::Debug for CartStore<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CartStore")
            .field("key", &self.key)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl<S: CartStorage> CartStore<S> {
    /// Open the store under [`CART_STORAGE_KEY`], hydrating from storage.
    pub fn open(storage: S, notifier: Arc<dyn Notifier>) -> Self {
        Self::open_with_key(storage, CART_STORAGE_KEY, notifier)
    }

    /// Open the store under a custom key.
    ///
    /// Hydration happens here, before the caller can issue any mutation. A
    /// missing, unreadable or malformed snapshot yields the empty cart.
    pub fn open_with_key(storage: S, key: impl Into<String>, notifier: Arc<dyn Notifier>) -> Self {
        let mut store = Self {
            state: CartState::empty(),
            storage,
            key: key.into(),
            notifier,
            bus: Arc::new(InMemoryEventBus::new()),
        };

        let lines = store.load_persisted();
        store.hydrate(lines);
        store
    }

    fn load_persisted(&self) -> Vec<CartLine> {
        let text = match self.storage.load(&self.key) {
            Ok(Some(text)) => text,
            Ok(None) => return Vec::new(),
            Err(err) => {
                tracing::warn!(key = %self.key, error = %err, "failed to read persisted cart; starting empty");
                return Vec::new();
            }
        };

        match snapshot::decode(&text) {
            Ok(lines) => lines,
            Err(err) => {
                tracing::warn!(key = %self.key, error = %err, "discarding malformed persisted cart");
                Vec::new()
            }
        }
    }

    pub fn state(&self) -> &CartState {
        &self.state
    }

    pub fn lines(&self) -> &[CartLine] {
        self.state.lines()
    }

    pub fn subtotal(&self) -> Money {
        self.state.subtotal()
    }

    pub fn item_count(&self) -> u64 {
        self.state.item_count()
    }

    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// Receive a [`CartChanged`] for every transition committed from now on.
    pub fn subscribe(&self) -> Subscription<CartChanged> {
        self.bus.subscribe()
    }

    /// Add one unit of `product`.
    pub fn add_item(&mut self, product: &Product) {
        self.dispatch(CartAction::AddItem(product.clone()));
        self.notifier
            .notify(Notice::success(format!("{} added to cart!", product.name())));
    }

    /// Remove the product's line entirely; absent ids are a no-op.
    pub fn remove_item(&mut self, id: &ProductId) {
        let removed = self.state.line(id).map(|line| line.name().to_string());
        self.dispatch(CartAction::RemoveItem(id.clone()));
        if let Some(name) = removed {
            self.notifier
                .notify(Notice::success(format!("{name} removed from cart!")));
        }
    }

    /// Set a line's quantity. Non-positive quantities remove the line.
    pub fn set_quantity(&mut self, id: &ProductId, quantity: i64) {
        if quantity <= 0 {
            self.remove_item(id);
            return;
        }
        self.dispatch(CartAction::SetQuantity {
            id: id.clone(),
            quantity,
        });
    }

    pub fn clear_cart(&mut self) {
        self.dispatch(CartAction::ClearCart);
        self.notifier.notify(Notice::success("Cart cleared!"));
    }

    /// Replace the whole cart with previously persisted lines.
    ///
    /// Structurally invalid input is discarded and the cart becomes empty.
    pub fn hydrate(&mut self, lines: Vec<CartLine>) {
        if let Err(err) = validate_lines(&lines) {
            tracing::warn!(error = %err, "discarding invalid cart lines during hydration");
        }
        self.dispatch(CartAction::Hydrate(lines));
    }

    fn dispatch(&mut self, action: CartAction) {
        let kind = CartActionKind::from(&action);
        self.state = self.state.reduce(&action);

        tracing::debug!(
            action = ?kind,
            lines = self.state.lines().len(),
            item_count = self.state.item_count(),
            subtotal = self.state.subtotal().amount(),
            "cart transition committed"
        );

        let changed = CartChanged {
            action: kind,
            state: self.state.clone(),
            occurred_at: Utc::now(),
        };
        if let Err(err) = self.bus.publish(changed) {
            tracing::error!(error = ?err, "failed to publish cart change");
        }

        self.persist();
    }

    fn persist(&self) {
        let result = snapshot::encode(self.state.lines(), Utc::now())
            .and_then(|text| self.storage.save(&self.key, &text));
        if let Err(err) = result {
            tracing::error!(key = %self.key, error = %err, "failed to persist cart");
        }
    }
}
