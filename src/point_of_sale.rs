//! The point of sale page: the product grid and the cart.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    AppState, Error,
    cart::{CART_ID, cart_view},
    endpoints,
    html::{base, format_currency},
    navigation::NavBar,
    register::Register,
};

/// The element ID of the product grid, used for out-of-band swaps.
pub const PRODUCT_GRID_ID: &str = "product-grid";

/// The state needed for the point of sale page.
#[derive(Debug, Clone)]
pub struct PointOfSaleState {
    pub register: Arc<Mutex<Register>>,
}

impl FromRef<AppState> for PointOfSaleState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            register: state.register.clone(),
        }
    }
}

/// Render the point of sale page.
pub async fn get_point_of_sale_page(
    State(state): State<PointOfSaleState>,
) -> Result<Response, Error> {
    let register = state
        .register
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire register lock: {error}"))
        .map_err(|_| Error::StateLockError)?;

    Ok(point_of_sale_view(&register).into_response())
}

fn point_of_sale_view(register: &Register) -> Markup {
    let nav_bar = NavBar::new(endpoints::POS_VIEW).into_html();

    let content = html!(
        (nav_bar)

        div class="flex flex-col lg:flex-row min-h-screen pb-24 lg:pb-0"
        {
            main class="flex-1"
            {
                header class="px-6 pt-6"
                {
                    h1 class="text-2xl font-bold text-gray-800 dark:text-white" { "Point of Sale" }
                    p class="text-gray-600 text-sm dark:text-gray-400" { "Touch to select items" }
                }

                (product_grid_view(register, false))
            }

            (cart_view(register))
        }
    );

    base("Register", &[], &content)
}

/// Render a button for every product in the catalog.
///
/// Products with no units left to sell are disabled. Set `out_of_band` when
/// the grid is sent alongside a cart update so htmx swaps it in place.
pub fn product_grid_view(register: &Register, out_of_band: bool) -> Markup {
    let cart_target = format!("#{CART_ID}");

    html!(
        div
            id=(PRODUCT_GRID_ID)
            hx-swap-oob=[out_of_band.then_some("true")]
            class="grid grid-cols-2 sm:grid-cols-3 gap-4 p-6"
        {
            @for product in register.catalog().products() {
                @let units_left = register.remaining(product.id);
                @let sellable = units_left > 0;

                button
                    type="button"
                    hx-post=(endpoints::CART_ITEMS)
                    hx-vals=(serde_json::json!({ "product_id": product.id }).to_string())
                    hx-target=(cart_target)
                    hx-swap="outerHTML"
                    hx-target-error="#alert-container"
                    disabled[!sellable]
                    data-product-id=(product.id)
                    class={
                        "relative h-24 rounded-xl border-2 font-medium text-sm "
                        @if sellable {
                            "border-gray-200 bg-white text-gray-800 hover:border-blue-300 \
                            hover:shadow-lg dark:bg-gray-800 dark:border-gray-700 dark:text-white"
                        } @else {
                            "border-gray-100 bg-gray-50 text-gray-400 cursor-not-allowed \
                            dark:bg-gray-900 dark:border-gray-800"
                        }
                    }
                {
                    div class="flex flex-col items-center justify-center h-full p-2"
                    {
                        span class="text-center leading-tight" { (product.name) }
                        span class="text-xs opacity-75 mt-1" { (format_currency(product.price)) }

                        @if sellable {
                            span class="text-xs text-gray-500 dark:text-gray-400" { (units_left) " left" }
                        }
                    }

                    @if !sellable {
                        div
                            class="absolute inset-0 rounded-xl flex items-center justify-center
                                bg-gray-200/50 dark:bg-gray-800/50"
                        {
                            span class="text-xs font-semibold text-gray-500" { "OUT OF STOCK" }
                        }
                    }
                }
            }
        }
    )
}
