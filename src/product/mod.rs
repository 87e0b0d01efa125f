//! Products, the catalog and the stock adjustment operations.

mod catalog;
mod domain;
mod draft;
mod seed;

pub use catalog::{Catalog, CatalogSummary};
pub use domain::{
    FULL_STOCK_LEVEL, LOW_STOCK_THRESHOLD, Product, ProductId, ProductName, StockStatus,
    stock_level_percent,
};
pub use draft::{CATEGORIES, DEFAULT_CATEGORY, NewProduct, ProductDraft, ProductEdit};
pub use seed::{load_catalog_file, seed_products};
