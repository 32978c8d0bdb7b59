use serde::{Deserialize, Serialize};

use pyroshop_core::{DomainError, Entity, Money, ProductId};

/// Catalog entry.
///
/// Immutable once built; the cart copies it into its lines verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    price: Money,
    #[serde(default)]
    image: String,
    description: String,
    category: String,
    stock: u32,
}

impl Product {
    /// Build a product with empty description, category and image.
    ///
    /// The display name must not be blank.
    pub fn new(id: ProductId, name: impl Into<String>, price: Money) -> Result<Self, DomainError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("product name must not be empty"));
        }

        Ok(Self {
            id,
            name,
            price,
            image: String::new(),
            description: String::new(),
            category: String::new(),
            stock: 0,
        })
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    pub fn with_stock(mut self, stock: u32) -> Self {
        self.stock = stock;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Money {
        self.price
    }

    pub fn image(&self) -> &str {
        &self.image
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// Advisory stock ceiling. Only UI controls enforce it.
    pub fn stock(&self) -> u32 {
        self.stock
    }

    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
