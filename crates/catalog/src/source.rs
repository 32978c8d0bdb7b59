//! Product sources.

use pyroshop_core::{DomainError, DomainResult, Entity, Money, ProductId};

use crate::product::Product;

/// Supplies product records to the rest of the storefront.
pub trait ProductSource {
    /// All products, in catalog ("featured") order.
    fn products(&self) -> &[Product];

    fn find(&self, id: &ProductId) -> Option<&Product> {
        self.products().iter().find(|p| p.id() == id)
    }

    /// Like [`find`](ProductSource::find), but an unknown id is an error.
    fn get(&self, id: &ProductId) -> DomainResult<&Product> {
        self.find(id).ok_or_else(DomainError::not_found)
    }

    /// Distinct category labels, in first-seen order.
    fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for product in self.products() {
            if !seen.contains(&product.category()) {
                seen.push(product.category());
            }
        }
        seen
    }
}

/// In-memory catalog backed by a fixed product list.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    products: Vec<Product>,
}

impl StaticCatalog {
    /// Build a catalog; product ids must be unique.
    pub fn new(products: Vec<Product>) -> DomainResult<Self> {
        for (i, product) in products.iter().enumerate() {
            if products[..i].iter().any(|p| p.id() == product.id()) {
                return Err(DomainError::invariant(format!(
                    "duplicate product id in catalog: {}",
                    product.id()
                )));
            }
        }
        Ok(Self { products })
    }

    /// The storefront's mock fireworks range.
    pub fn mock() -> Self {
        let entries: [(&str, &str, u64, &str, &str, u32); 6] = [
            ("1", "Golden Sparklers", 299, "Premium golden sparklers perfect for celebrations", "sparklers", 50),
            ("2", "Sky Rocket Deluxe", 599, "High-flying rockets with colorful bursts", "rockets", 25),
            ("3", "Fountain of Joy", 449, "Beautiful ground fountain with multi-color effects", "fountains", 30),
            ("4", "Thunder Crackers", 199, "Traditional crackers with loud sound effects", "crackers", 100),
            ("5", "Rainbow Sparklers", 349, "Multi-colored sparklers for magical moments", "sparklers", 75),
            ("6", "Mega Rocket Pack", 899, "Pack of 5 premium rockets for grand displays", "rockets", 15),
        ];

        let products = entries
            .into_iter()
            .filter_map(|(id, name, price, description, category, stock)| {
                let id = ProductId::new(id).ok()?;
                let product = Product::new(id, name, Money::new(price)).ok()?;
                Some(
                    product
                        .with_description(description)
                        .with_category(category)
                        .with_image("/api/placeholder/300/300")
                        .with_stock(stock),
                )
            })
            .collect();

        Self { products }
    }
}

impl ProductSource for StaticCatalog {
    fn products(&self) -> &[Product] {
        &self.products
    }
}
