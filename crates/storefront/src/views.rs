//! Text views that re-render from published cart states.

use pyroshop_cart::{CartChanged, CartState, CartStorage, CartStore};
use pyroshop_checkout::{OrderSummary, TAX_PERCENT};
use pyroshop_events::Subscription;

/// A view owns a subscription and a copy of the last state it rendered.
pub trait View {
    /// Pull pending updates. Returns `true` if anything changed.
    fn refresh(&mut self) -> bool;

    fn render(&self) -> String;
}

/// Item-count badge in the header.
#[derive(Debug)]
pub struct CartBadge {
    subscription: Subscription<CartChanged>,
    item_count: u64,
}

impl CartBadge {
    pub fn new<S: CartStorage>(store: &CartStore<S>) -> Self {
        Self {
            subscription: store.subscribe(),
            item_count: store.item_count(),
        }
    }

    pub fn item_count(&self) -> u64 {
        self.item_count
    }
}

impl View for CartBadge {
    fn refresh(&mut self) -> bool {
        match self.subscription.drain().pop() {
            Some(latest) => {
                self.item_count = latest.state.item_count();
                true
            }
            None => false,
        }
    }

    fn render(&self) -> String {
        if self.item_count == 0 {
            "Cart".to_string()
        } else {
            format!("Cart ({})", self.item_count)
        }
    }
}

/// Full cart page: lines, per-line totals and the order summary.
#[derive(Debug)]
pub struct CartPage {
    subscription: Subscription<CartChanged>,
    state: CartState,
}

impl CartPage {
    pub fn new<S: CartStorage>(store: &CartStore<S>) -> Self {
        Self {
            subscription: store.subscribe(),
            state: store.state().clone(),
        }
    }

    pub fn state(&self) -> &CartState {
        &self.state
    }
}

impl View for CartPage {
    fn refresh(&mut self) -> bool {
        match self.subscription.drain().pop() {
            Some(latest) => {
                self.state = latest.state;
                true
            }
            None => false,
        }
    }

    fn render(&self) -> String {
        if self.state.is_empty() {
            return "Your cart is empty\n".to_string();
        }

        let mut out = format!("Shopping Cart ({} items)\n", self.state.item_count());
        for line in self.state.lines() {
            let unit = if line.quantity() == 1 { "item" } else { "items" };
            out.push_str(&format!(
                "  {:<24} {} x {} = {} ({} {unit})",
                line.name(),
                line.price(),
                line.quantity(),
                line.line_total(),
                line.quantity(),
            ));
            if line.at_stock_limit() {
                out.push_str(" [max stock]");
            }
            out.push('\n');
        }

        let summary = OrderSummary::from_cart(&self.state);
        out.push_str(&format!("  Subtotal: {}\n", summary.subtotal));
        out.push_str("  Shipping: Free\n");
        out.push_str(&format!("  Tax ({TAX_PERCENT}%): {}\n", summary.tax));
        out.push_str(&format!("  Total: {}\n", summary.total));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use pyroshop_cart::{MemoryStorage, NoopNotifier};
    use pyroshop_catalog::{Product, ProductSource, StaticCatalog};
    use pyroshop_core::{Money, ProductId};

    fn id(raw: &str) -> ProductId {
        ProductId::new(raw).unwrap()
    }

    #[test]
    fn badge_follows_the_store() {
        let catalog = StaticCatalog::mock();
        let mut store = CartStore::open(MemoryStorage::new(), Arc::new(NoopNotifier));
        let mut badge = CartBadge::new(&store);
        assert_eq!(badge.render(), "Cart");
        assert!(!badge.refresh());

        store.add_item(catalog.get(&id("1")).unwrap());
        store.add_item(catalog.get(&id("1")).unwrap());

        assert!(badge.refresh());
        assert_eq!(badge.item_count(), 2);
        assert_eq!(badge.render(), "Cart (2)");
    }

    #[test]
    fn cart_page_renders_lines_and_summary() {
        let catalog = StaticCatalog::mock();
        let mut store = CartStore::open(MemoryStorage::new(), Arc::new(NoopNotifier));
        let mut page = CartPage::new(&store);
        assert_eq!(page.render(), "Your cart is empty\n");

        store.add_item(catalog.get(&id("1")).unwrap());
        store.add_item(catalog.get(&id("2")).unwrap());
        store.add_item(catalog.get(&id("1")).unwrap());
        page.refresh();

        let rendered = page.render();
        assert!(rendered.contains("Shopping Cart (3 items)"));
        assert!(rendered.contains("Golden Sparklers"));
        assert!(rendered.contains("= ₹598 (2 items)"));
        assert!(rendered.contains("Subtotal: ₹1,197"));
        assert!(rendered.contains("Tax (18%): ₹215"));
        assert!(rendered.contains("Total: ₹1,412"));
    }

    #[test]
    fn cart_page_flags_lines_at_their_stock_limit() {
        let last_one = Product::new(id("7"), "Last Fountain", Money::new(100))
            .unwrap()
            .with_stock(1);
        let mut store = CartStore::open(MemoryStorage::new(), Arc::new(NoopNotifier));
        let mut page = CartPage::new(&store);

        store.add_item(&last_one);
        page.refresh();

        let rendered = page.render();
        assert!(rendered.starts_with("Shopping Cart (1 items)\n"));
        assert!(rendered.contains("= ₹100 (1 item) [max stock]\n"));
        assert!(rendered.ends_with("  Total: ₹118\n"));
    }
}
