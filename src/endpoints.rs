//! The API endpoints URIs.
//!
//! For endpoints that take a parameter, e.g., '/api/products/{product_id}', use [format_endpoint].

use std::fmt::Display;

/// The root route which redirects to the point of sale page.
pub const ROOT: &str = "/";
/// The point of sale page with the product grid and the cart.
pub const POS_VIEW: &str = "/pos";
/// The read-only inventory overview.
pub const INVENTORY_VIEW: &str = "/inventory";
/// The page for adjusting stock and editing products.
pub const STOCK_VIEW: &str = "/stock";
/// The page for adding a product to the catalog.
pub const NEW_PRODUCT_VIEW: &str = "/stock/new";
/// The page for editing a product.
pub const EDIT_PRODUCT_VIEW: &str = "/stock/{product_id}/edit";
/// The admin dashboard.
pub const ADMIN_VIEW: &str = "/admin";
/// The alert for admin sections that have not been built yet.
pub const COMING_SOON: &str = "/admin/coming_soon/{section}";
/// The page to display when an internal server error occurs.
pub const INTERNAL_ERROR_VIEW: &str = "/error";

/// The route for static files such as the favicon.
pub const STATIC: &str = "/static";

/// The route to request a cup of coffee (experimental).
pub const COFFEE: &str = "/api/coffee";
/// The route to add one unit of a product to the cart.
pub const CART_ITEMS: &str = "/api/cart/items";
/// The route to change the quantity of, or remove, a cart line.
pub const CART_ITEM: &str = "/api/cart/items/{product_id}";
/// The route to empty the cart.
pub const CART: &str = "/api/cart";
/// The route to pay for the cart.
pub const CHECKOUT: &str = "/api/checkout";
/// The route to add a product.
pub const PRODUCTS: &str = "/api/products";
/// The route to update a product.
pub const PRODUCT: &str = "/api/products/{product_id}";
/// The route to adjust the stock of a product.
pub const PRODUCT_STOCK: &str = "/api/products/{product_id}/stock";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// Endpoints have at most one parameter, written as `{name}`. If there is no
/// parameter, `endpoint_path` is returned unchanged.
pub fn format_endpoint(endpoint_path: &str, id: impl Display) -> String {
    match (endpoint_path.find('{'), endpoint_path.find('}')) {
        (Some(start), Some(end)) if start < end => format!(
            "{}{id}{}",
            &endpoint_path[..start],
            &endpoint_path[end + 1..]
        ),
        _ => endpoint_path.to_owned(),
    }
}

/// Append a search query to `endpoint_path`, leaving it unchanged for a blank search.
pub fn with_search_query(endpoint_path: &str, search_term: &str) -> String {
    let search_term = search_term.trim();

    if search_term.is_empty() {
        return endpoint_path.to_owned();
    }

    match serde_urlencoded::to_string([("q", search_term)]) {
        Ok(query) => format!("{endpoint_path}?{query}"),
        Err(error) => {
            tracing::warn!("could not encode search term {search_term:?}: {error}");
            endpoint_path.to_owned()
        }
    }
}

#[cfg(test)]
mod format_endpoint_tests {
    use crate::endpoints::{self, format_endpoint, with_search_query};

    #[test]
    fn replaces_parameter() {
        assert_eq!(
            format_endpoint(endpoints::PRODUCT_STOCK, 7),
            "/api/products/7/stock"
        );
        assert_eq!(format_endpoint(endpoints::CART_ITEM, 3), "/api/cart/items/3");
        assert_eq!(
            format_endpoint(endpoints::COMING_SOON, "sales_reports"),
            "/admin/coming_soon/sales_reports"
        );
    }

    #[test]
    fn leaves_endpoints_without_parameters() {
        assert_eq!(format_endpoint(endpoints::CART, 1), endpoints::CART);
    }

    #[test]
    fn encodes_search_query() {
        assert_eq!(
            with_search_query(endpoints::STOCK_VIEW, "fish & chips"),
            "/stock?q=fish+%26+chips"
        );
        assert_eq!(with_search_query(endpoints::STOCK_VIEW, "  "), "/stock");
    }
}

// These tests are here so that we know the routes will parse as URIs when axum registers them.
#[cfg(test)]
mod endpoints_are_uris_tests {
    use axum::http::Uri;

    use crate::endpoints;

    #[track_caller]
    fn assert_endpoint_is_valid_uri(uri: &str) {
        assert!(uri.parse::<Uri>().is_ok(), "{uri} is not a valid URI");
    }

    #[test]
    fn endpoints_are_valid_uris() {
        assert_endpoint_is_valid_uri(endpoints::ROOT);
        assert_endpoint_is_valid_uri(endpoints::POS_VIEW);
        assert_endpoint_is_valid_uri(endpoints::INVENTORY_VIEW);
        assert_endpoint_is_valid_uri(endpoints::STOCK_VIEW);
        assert_endpoint_is_valid_uri(endpoints::NEW_PRODUCT_VIEW);
        assert_endpoint_is_valid_uri(endpoints::EDIT_PRODUCT_VIEW);
        assert_endpoint_is_valid_uri(endpoints::ADMIN_VIEW);
        assert_endpoint_is_valid_uri(endpoints::COMING_SOON);
        assert_endpoint_is_valid_uri(endpoints::INTERNAL_ERROR_VIEW);
        assert_endpoint_is_valid_uri(endpoints::STATIC);

        assert_endpoint_is_valid_uri(endpoints::COFFEE);
        assert_endpoint_is_valid_uri(endpoints::CART_ITEMS);
        assert_endpoint_is_valid_uri(endpoints::CART_ITEM);
        assert_endpoint_is_valid_uri(endpoints::CART);
        assert_endpoint_is_valid_uri(endpoints::CHECKOUT);
        assert_endpoint_is_valid_uri(endpoints::PRODUCTS);
        assert_endpoint_is_valid_uri(endpoints::PRODUCT);
        assert_endpoint_is_valid_uri(endpoints::PRODUCT_STOCK);
    }
}
