//! Product catalog (static, read-only).
//!
//! The catalog owns product records; everything downstream (cart, checkout,
//! views) treats them as opaque value objects.

pub mod product;
pub mod query;
pub mod source;

pub use product::Product;
pub use query::{CatalogQuery, SortOrder};
pub use source::{ProductSource, StaticCatalog};
