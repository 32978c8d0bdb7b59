use serde::{Deserialize, Serialize};

use pyroshop_catalog::Product;
use pyroshop_core::{DomainError, Entity, Money, ProductId};

/// A product plus a quantity within the cart.
///
/// Serialized flat: the product's fields followed by `quantity`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    #[serde(flatten)]
    product: Product,
    quantity: u32,
}

impl CartLine {
    /// A line must hold at least one unit.
    pub fn new(product: Product, quantity: u32) -> Result<Self, DomainError> {
        if quantity == 0 {
            return Err(DomainError::validation("cart line quantity must be at least 1"));
        }
        Ok(Self { product, quantity })
    }

    pub(crate) fn first(product: Product) -> Self {
        Self {
            product,
            quantity: 1,
        }
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn name(&self) -> &str {
        self.product.name()
    }

    pub fn price(&self) -> Money {
        self.product.price()
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub(crate) fn with_quantity(&self, quantity: u32) -> Self {
        Self {
            product: self.product.clone(),
            quantity,
        }
    }

    /// Unit price times quantity.
    pub fn line_total(&self) -> Money {
        self.product.price().times(self.quantity)
    }

    /// True once the line has reached the product's advisory stock ceiling.
    pub fn at_stock_limit(&self) -> bool {
        self.quantity >= self.product.stock()
    }
}

impl Entity for CartLine {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        self.product.id()
    }
}

/// Structural validation for a line sequence coming from outside the reducer.
///
/// Every line needs a positive quantity and product ids must be unique.
pub fn validate_lines(lines: &[CartLine]) -> Result<(), DomainError> {
    for (i, line) in lines.iter().enumerate() {
        if line.quantity == 0 {
            return Err(DomainError::invariant(format!(
                "line {} has zero quantity",
                line.id()
            )));
        }
        if lines[..i].iter().any(|other| other.id() == line.id()) {
            return Err(DomainError::invariant(format!(
                "duplicate line for product {}",
                line.id()
            )));
        }
    }
    Ok(())
}
