//! The shopping cart, its panel on the point of sale page and its endpoints.

mod core;
mod endpoints;
mod view;

pub use core::{Cart, CartItem, CartTotals, TAX_RATE};
pub use endpoints::{
    AddToCartForm, CartState, QuantityForm, add_to_cart_endpoint, checkout_endpoint,
    clear_cart_endpoint, remove_cart_item_endpoint, update_cart_item_endpoint,
};
pub use view::{CART_ID, cart_view};
