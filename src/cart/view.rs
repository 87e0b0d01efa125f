//! The cart panel shown next to the product grid.

use maud::{Markup, html};

use crate::{
    cart::CartItem,
    endpoints::{self, format_endpoint},
    html::{BUTTON_PRIMARY_STYLE, BUTTON_SECONDARY_STYLE, LINK_STYLE, format_currency},
    register::Register,
};

/// The element ID that cart actions target.
pub const CART_ID: &str = "cart";

const QUANTITY_BUTTON_STYLE: &str = "w-8 h-8 rounded-full flex items-center justify-center \
    bg-gray-100 text-gray-700 hover:enabled:bg-gray-200 disabled:opacity-50 \
    disabled:cursor-not-allowed dark:bg-gray-700 dark:text-gray-200";

/// Render the cart lines, the totals and the checkout buttons.
///
/// The whole panel is replaced after every cart action. The increase button
/// of a line is disabled once the register has no more units of it to sell.
pub fn cart_view(register: &Register) -> Markup {
    let cart = register.cart();
    let totals = cart.totals();
    let cart_target = format!("#{CART_ID}");

    html!(
        aside
            id=(CART_ID)
            class="flex flex-col w-full lg:w-96 bg-white border-l border-gray-200
                dark:bg-gray-800 dark:border-gray-700"
            hx-target=(cart_target)
            hx-swap="outerHTML"
            hx-target-error="#alert-container"
        {
            div class="flex items-center justify-between p-4 border-b border-gray-200 dark:border-gray-700"
            {
                h2 class="text-lg font-bold text-gray-800 dark:text-white"
                {
                    "CART"
                    @if !cart.is_empty() {
                        span class="ml-2 text-sm font-normal text-gray-500 dark:text-gray-400"
                        {
                            "(" (cart.item_count()) ")"
                        }
                    }
                }

                @if !cart.is_empty() {
                    button
                        type="button"
                        hx-delete=(endpoints::CART)
                        aria-label="Clear cart"
                        class="text-sm text-red-600 hover:text-red-700 dark:text-red-400"
                    {
                        "Clear"
                    }
                }
            }

            div class="flex-1 overflow-y-auto p-4"
            {
                @if cart.is_empty() {
                    div class="py-12 text-center text-gray-500 dark:text-gray-400"
                    {
                        p { "Your cart is empty" }
                        p class="text-sm" { "Add items to get started" }
                    }
                } @else {
                    ul class="space-y-3"
                    {
                        @for item in cart.items() {
                            (cart_line_view(item, register.remaining(item.product.id)))
                        }
                    }
                }
            }

            div class="p-4 space-y-2 border-t border-gray-200 dark:border-gray-700"
            {
                dl class="space-y-1 text-sm text-gray-700 dark:text-gray-300"
                {
                    div class="flex justify-between"
                    {
                        dt { "Subtotal" }
                        dd data-total="subtotal" { (format_currency(totals.subtotal)) }
                    }

                    div class="flex justify-between"
                    {
                        dt { "Tax (8.5%)" }
                        dd data-total="tax" { (format_currency(totals.tax)) }
                    }

                    div class="flex justify-between text-lg font-bold text-gray-900 dark:text-white"
                    {
                        dt { "Total" }
                        dd data-total="grand-total" { (format_currency(totals.grand_total)) }
                    }
                }

                div class="grid grid-cols-2 gap-3 pt-2"
                {
                    button
                        type="button"
                        hx-delete=(endpoints::CART)
                        disabled[cart.is_empty()]
                        class=(BUTTON_SECONDARY_STYLE)
                    {
                        "CANCEL"
                    }

                    button
                        type="button"
                        hx-post=(endpoints::CHECKOUT)
                        disabled[cart.is_empty()]
                        class=(BUTTON_PRIMARY_STYLE)
                    {
                        "PAY"
                    }
                }

                a
                    href=(endpoints::STOCK_VIEW)
                    class={ (LINK_STYLE) " block pt-2 text-center text-sm" }
                {
                    "Manage Stock"
                }
            }
        }
    )
}

fn cart_line_view(item: &CartItem, remaining: u32) -> Markup {
    let item_endpoint = format_endpoint(endpoints::CART_ITEM, item.product.id);
    let quantity_values = |quantity: u32| serde_json::json!({ "quantity": quantity }).to_string();

    html!(
        li
            data-product-id=(item.product.id)
            class="p-3 rounded-lg bg-gray-50 dark:bg-gray-700"
        {
            div class="flex items-start justify-between"
            {
                div
                {
                    p class="font-medium text-gray-800 dark:text-white" { (item.product.name) }
                    p class="text-xs text-gray-600 dark:text-gray-400"
                    {
                        (format_currency(item.product.price)) " each"
                    }
                }

                button
                    type="button"
                    hx-delete=(item_endpoint)
                    aria-label={ "Remove " (item.product.name) }
                    class="text-gray-400 hover:text-red-600"
                {
                    "×"
                }
            }

            div class="flex items-center justify-between mt-2"
            {
                div class="flex items-center gap-3"
                {
                    button
                        type="button"
                        hx-put=(item_endpoint)
                        hx-vals=(quantity_values(item.quantity.saturating_sub(1)))
                        disabled[item.quantity <= 1]
                        aria-label="Decrease quantity"
                        class=(QUANTITY_BUTTON_STYLE)
                    {
                        "−"
                    }

                    span data-quantity class="w-6 text-center font-medium" { (item.quantity) }

                    button
                        type="button"
                        hx-put=(item_endpoint)
                        hx-vals=(quantity_values(item.quantity + 1))
                        disabled[remaining == 0]
                        aria-label="Increase quantity"
                        class=(QUANTITY_BUTTON_STYLE)
                    {
                        "+"
                    }
                }

                span class="font-semibold text-gray-800 dark:text-white"
                {
                    (format_currency(item.line_total()))
                }
            }
        }
    )
}
