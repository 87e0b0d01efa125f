//! The stock management page.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Query, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    AppState, Error,
    endpoints::{self, format_endpoint, with_search_query},
    html::{
        BUTTON_SMALL_STYLE, CARD_STYLE, PAGE_CONTAINER_STYLE, SearchQuery, base, dollar_input_styles,
        format_currency, page_header, search_form,
    },
    inventory_page::status_badge,
    navigation::NavBar,
    product::{Catalog, Product, ProductId},
    register::Register,
};

/// The stock changes offered for each product, with their button labels.
pub const STOCK_ADJUSTMENTS: [(i64, &str); 5] =
    [(-1, "Remove"), (1, "Add"), (5, "+5"), (10, "+10"), (25, "+25")];

/// The state needed for the stock management page and endpoints.
#[derive(Debug, Clone)]
pub struct StockState {
    pub register: Arc<Mutex<Register>>,
}

impl FromRef<AppState> for StockState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            register: state.register.clone(),
        }
    }
}

/// The element ID of a product's card on the stock page.
pub(crate) fn stock_card_id(product_id: ProductId) -> String {
    format!("product-{product_id}")
}

/// Render the stock management page, filtered by the `q` query parameter.
pub async fn get_stock_page(
    State(state): State<StockState>,
    Query(query): Query<SearchQuery>,
) -> Result<Response, Error> {
    let register = state
        .register
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire register lock: {error}"))
        .map_err(|_| Error::StateLockError)?;

    Ok(stock_view(register.catalog(), &query.q).into_response())
}

fn stock_view(catalog: &Catalog, search_term: &str) -> Markup {
    let nav_bar = NavBar::new(endpoints::STOCK_VIEW).into_html();
    let products = catalog.search(search_term);

    let add_product_link = html!(
        a
            href=(endpoints::NEW_PRODUCT_VIEW)
            class="px-4 py-2 bg-blue-600 text-white rounded-lg hover:bg-blue-700"
        {
            "Add Product"
        }
    );

    let content = html!(
        (nav_bar)

        (page_header(
            endpoints::POS_VIEW,
            "Stock Management",
            "Add, edit, and manage your product inventory",
            Some(add_product_link),
        ))

        div class={ (PAGE_CONTAINER_STYLE) " gap-6 pb-24" }
        {
            (search_form(endpoints::STOCK_VIEW, search_term))

            @if products.is_empty() {
                p class="py-12 text-center text-gray-500 dark:text-gray-400"
                {
                    "No products match \"" (search_term.trim()) "\""
                }
            } @else {
                div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4"
                {
                    @for product in products {
                        (stock_card(product, search_term))
                    }
                }
            }
        }
    );

    // The edit form is swapped into the page, so it needs the price input styles up front.
    base("Stock", &[dollar_input_styles()], &content)
}

/// A product card with its stock count and the stock adjustment buttons.
///
/// `search_term` is carried to the edit form so saving returns to the same
/// filtered list.
pub(crate) fn stock_card(product: &Product, search_term: &str) -> Markup {
    let card_id = stock_card_id(product.id);
    let card_target = format!("#{card_id}");
    let stock_endpoint = format_endpoint(endpoints::PRODUCT_STOCK, product.id);
    let edit_endpoint = with_search_query(
        &format_endpoint(endpoints::EDIT_PRODUCT_VIEW, product.id),
        search_term,
    );

    html!(
        article
            id=(card_id)
            data-product-id=(product.id)
            class={ (CARD_STYLE) " p-6" }
        {
            div class="flex items-start justify-between mb-4"
            {
                div
                {
                    h3 class="font-semibold text-gray-800 dark:text-white" { (product.name) }
                    p class="text-sm text-gray-600 dark:text-gray-400"
                    {
                        (format_currency(product.price))
                        @if let Some(category) = &product.category {
                            " · " (category)
                        }
                    }
                }

                a
                    href=(edit_endpoint)
                    hx-get=(edit_endpoint)
                    hx-target=(card_target)
                    hx-swap="outerHTML"
                    class="text-sm text-blue-600 hover:text-blue-700 dark:text-blue-400"
                {
                    "Edit"
                }
            }

            div class="flex items-center justify-between mb-4"
            {
                div
                {
                    div class="text-sm text-gray-600 dark:text-gray-400" { "Current Stock" }
                    div data-stock class="text-2xl font-bold text-gray-900 dark:text-white" { (product.available()) }
                }

                (status_badge(product))
            }

            div
                class="flex gap-2"
                hx-target=(card_target)
                hx-swap="outerHTML"
                hx-target-error="#alert-container"
            {
                @for (delta, label) in STOCK_ADJUSTMENTS {
                    button
                        type="button"
                        hx-post=(stock_endpoint)
                        hx-vals=(serde_json::json!({ "delta": delta, "q": search_term.trim() }).to_string())
                        disabled[delta < 0 && product.available() == 0]
                        data-delta=(delta)
                        class={ (BUTTON_SMALL_STYLE) " disabled:opacity-50 disabled:cursor-not-allowed" }
                    {
                        (label)
                    }
                }
            }
        }
    )
}
