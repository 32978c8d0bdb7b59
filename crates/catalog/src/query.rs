//! Browsing queries: search, category filter, sort.

use crate::product::Product;

/// Sort order for product listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Catalog order.
    #[default]
    Featured,
    PriceLow,
    PriceHigh,
    Name,
}

/// A product listing request.
#[derive(Debug, Clone, Default)]
pub struct CatalogQuery {
    /// Case-insensitive substring matched against name and description.
    pub search: Option<String>,
    /// Exact category label; `None` lists every category.
    pub category: Option<String>,
    pub sort: SortOrder,
}

impl CatalogQuery {
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn sorted(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }

    fn matches(&self, product: &Product) -> bool {
        let category_ok = self
            .category
            .as_deref()
            .is_none_or(|c| product.category() == c);

        let search_ok = match self.search.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(term) => {
                let term = term.to_lowercase();
                product.name().to_lowercase().contains(&term)
                    || product.description().to_lowercase().contains(&term)
            }
        };

        category_ok && search_ok
    }

    /// Run the query. Sorting is stable, so ties keep catalog order.
    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        let mut hits: Vec<&Product> = products.iter().filter(|p| self.matches(p)).collect();

        match self.sort {
            SortOrder::Featured => {}
            SortOrder::PriceLow => hits.sort_by_key(|p| p.price()),
            SortOrder::PriceHigh => hits.sort_by(|a, b| b.price().cmp(&a.price())),
            SortOrder::Name => hits.sort_by(|a, b| a.name().cmp(b.name())),
        }

        hits
    }
}
