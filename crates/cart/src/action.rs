//! Cart actions and the pure reducer over them.

use pyroshop_catalog::Product;
use pyroshop_core::{Entity, ProductId, Reducer};

use crate::line::{CartLine, validate_lines};
use crate::state::CartState;

/// Every transition the cart supports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartAction {
    /// Increment the product's line, or append a new line with quantity 1.
    AddItem(Product),
    /// Delete the product's line; absent ids are a no-op.
    RemoveItem(ProductId),
    /// Replace a line's quantity; `quantity <= 0` removes the line.
    SetQuantity { id: ProductId, quantity: i64 },
    /// Reset to the empty cart.
    ClearCart,
    /// Replace the whole cart from a persisted line list.
    Hydrate(Vec<CartLine>),
}

impl Reducer for CartState {
    type Action = CartAction;

    fn reduce(&self, action: &Self::Action) -> Self {
        match action {
            CartAction::AddItem(product) => self.add_item(product),
            CartAction::RemoveItem(id) => self.remove_item(id),
            CartAction::SetQuantity { id, quantity } => self.set_quantity(id, *quantity),
            CartAction::ClearCart => CartState::empty(),
            CartAction::Hydrate(lines) => hydrate(lines),
        }
    }
}

impl CartState {
    fn add_item(&self, product: &Product) -> CartState {
        let id = product.id();
        let lines = if self.contains(id) {
            self.lines()
                .iter()
                .map(|line| {
                    if line.id() == id {
                        line.with_quantity(line.quantity().saturating_add(1))
                    } else {
                        line.clone()
                    }
                })
                .collect()
        } else {
            let mut lines = self.lines().to_vec();
            lines.push(CartLine::first(product.clone()));
            lines
        };

        CartState::from_lines(lines)
    }

    fn remove_item(&self, id: &ProductId) -> CartState {
        let lines = self
            .lines()
            .iter()
            .filter(|line| line.id() != id)
            .cloned()
            .collect();
        CartState::from_lines(lines)
    }

    fn set_quantity(&self, id: &ProductId, quantity: i64) -> CartState {
        if quantity <= 0 {
            return self.reduce(&CartAction::RemoveItem(id.clone()));
        }

        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        let lines = self
            .lines()
            .iter()
            .map(|line| {
                if line.id() == id {
                    line.with_quantity(quantity)
                } else {
                    line.clone()
                }
            })
            .collect();
        CartState::from_lines(lines)
    }
}

fn hydrate(lines: &[CartLine]) -> CartState {
    match validate_lines(lines) {
        Ok(()) => CartState::from_lines(lines.to_vec()),
        Err(_) => CartState::empty(),
    }
}
