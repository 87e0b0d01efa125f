//! Stock management: adjusting stock counts, editing products and adding products.

mod adjust_endpoint;
mod create;
mod edit;
mod stock_page;

pub use adjust_endpoint::{AdjustStockForm, adjust_stock_endpoint};
pub use create::{create_product_endpoint, get_new_product_page};
pub use edit::{EditProductForm, get_edit_product_page, update_product_endpoint};
pub use stock_page::{STOCK_ADJUSTMENTS, StockState, get_stock_page};
