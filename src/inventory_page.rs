//! The read-only inventory overview.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Query, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    AppState, Error, endpoints,
    html::{
        CARD_STYLE, PAGE_CONTAINER_STYLE, SearchQuery, base, format_currency, page_header,
        search_form, stat_card,
    },
    navigation::NavBar,
    product::{Catalog, Product, StockStatus, stock_level_percent},
    register::Register,
};

/// The state needed for the inventory page.
#[derive(Debug, Clone)]
pub struct InventoryPageState {
    pub register: Arc<Mutex<Register>>,
}

impl FromRef<AppState> for InventoryPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            register: state.register.clone(),
        }
    }
}

/// Render the inventory overview, filtered by the `q` query parameter.
pub async fn get_inventory_page(
    State(state): State<InventoryPageState>,
    Query(query): Query<SearchQuery>,
) -> Result<Response, Error> {
    let register = state
        .register
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire register lock: {error}"))
        .map_err(|_| Error::StateLockError)?;

    Ok(inventory_view(register.catalog(), &query.q).into_response())
}

/// The colours for a stock status: the badge and the level bar.
pub(crate) fn status_styles(status: StockStatus) -> (&'static str, &'static str) {
    match status {
        StockStatus::OutOfStock => (
            "bg-red-100 text-red-800 dark:bg-red-900 dark:text-red-300",
            "bg-red-500",
        ),
        StockStatus::LowStock => (
            "bg-yellow-100 text-yellow-800 dark:bg-yellow-900 dark:text-yellow-300",
            "bg-yellow-500",
        ),
        StockStatus::InStock => (
            "bg-green-100 text-green-800 dark:bg-green-900 dark:text-green-300",
            "bg-green-500",
        ),
    }
}

/// The stock status badge shown on product cards.
pub(crate) fn status_badge(product: &Product) -> Markup {
    let status = product.stock_status();
    let (badge_style, _) = status_styles(status);

    html!(
        span
            data-stock-status=(status.label())
            class={ "px-2 py-1 text-xs font-medium rounded-full " (badge_style) }
        {
            (status.label())
        }
    )
}

fn inventory_view(catalog: &Catalog, search_term: &str) -> Markup {
    let nav_bar = NavBar::new(endpoints::INVENTORY_VIEW).into_html();
    let summary = catalog.summary();
    let products = catalog.search(search_term);

    let content = html!(
        (nav_bar)

        (page_header(
            endpoints::POS_VIEW,
            "Inventory Overview",
            "View current stock levels and product information",
            None,
        ))

        div class={ (PAGE_CONTAINER_STYLE) " gap-6 pb-24" }
        {
            div class="grid grid-cols-2 md:grid-cols-4 gap-4"
            {
                (stat_card(&summary.total.to_string(), "Total Products", "text-blue-600"))
                (stat_card(&summary.in_stock.to_string(), "In Stock", "text-green-600"))
                (stat_card(&summary.low_stock.to_string(), "Low Stock", "text-yellow-600"))
                (stat_card(&summary.out_of_stock.to_string(), "Out of Stock", "text-red-600"))
            }

            (search_form(endpoints::INVENTORY_VIEW, search_term))

            @if products.is_empty() {
                p class="py-12 text-center text-gray-500 dark:text-gray-400"
                {
                    "No products match \"" (search_term.trim()) "\""
                }
            } @else {
                div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4"
                {
                    @for product in products {
                        (inventory_card(product))
                    }
                }
            }
        }
    );

    base("Inventory", &[], &content)
}

fn inventory_card(product: &Product) -> Markup {
    let status = product.stock_status();
    let (_, bar_style) = status_styles(status);
    let level = stock_level_percent(product.available());

    html!(
        article data-product-id=(product.id) class={ (CARD_STYLE) " p-6" }
        {
            div class="flex items-start justify-between mb-4"
            {
                div
                {
                    h3 class="font-semibold text-gray-800 dark:text-white" { (product.name) }
                    p class="text-sm text-gray-600 dark:text-gray-400"
                    {
                        (product.category.as_deref().unwrap_or("Uncategorized"))
                    }
                }

                (status_badge(product))
            }

            div class="flex items-center justify-between mb-2"
            {
                span class="text-lg font-bold text-gray-900 dark:text-white" { (format_currency(product.price)) }

                div class="text-right"
                {
                    div class="text-sm text-gray-600 dark:text-gray-400" { "Current Stock" }
                    div data-stock class="text-xl font-bold text-gray-900 dark:text-white" { (product.available()) }
                }
            }

            div class="w-full h-2 bg-gray-200 rounded-full dark:bg-gray-700"
            {
                div
                    class={ "h-2 rounded-full " (bar_style) }
                    style={ "width: " (level) "%" }
                {}
            }

            p class="mt-1 text-xs text-gray-500 dark:text-gray-400" { (status.caption()) }
        }
    )
}

#[cfg(test)]
mod inventory_page_tests {
    use std::sync::{Arc, Mutex};

    use axum::extract::{Query, State};
    use scraper::{Html, Selector};

    use crate::{
        html::SearchQuery,
        inventory_page::{InventoryPageState, get_inventory_page},
        product::{Catalog, seed_products},
        register::{Register, StockReservation},
        test_utils::{assert_status_ok, assert_valid_html, parse_html_document},
    };

    fn get_state() -> InventoryPageState {
        InventoryPageState {
            register: Arc::new(Mutex::new(Register::new(
                Catalog::new(seed_products()),
                StockReservation::OnAdd,
            ))),
        }
    }

    async fn render(search_term: &str) -> Html {
        let response = get_inventory_page(
            State(get_state()),
            Query(SearchQuery {
                q: search_term.to_owned(),
            }),
        )
        .await
        .unwrap();

        assert_status_ok(&response);
        let html = parse_html_document(response).await;
        assert_valid_html(&html);
        html
    }

    fn card_names(html: &Html) -> Vec<String> {
        html.select(&Selector::parse("article[data-product-id] h3").unwrap())
            .map(|h3| h3.text().collect())
            .collect()
    }

    #[tokio::test]
    async fn shows_summary_counts() {
        let html = render("").await;

        let values = html
            .select(&Selector::parse("div.text-2xl").unwrap())
            .map(|value| value.text().collect::<String>())
            .collect::<Vec<_>>();

        assert_eq!(values, vec!["13", "12", "3", "1"]);
        assert_eq!(card_names(&html).len(), 13);
    }

    #[tokio::test]
    async fn filters_by_category() {
        let html = render("dessert").await;

        assert_eq!(card_names(&html), vec!["Chocolate Cake", "Ice Cream"]);
    }

    #[tokio::test]
    async fn shows_stock_status_and_level() {
        let html = render("Steak").await;

        let card = html
            .select(&Selector::parse("article[data-product-id]").unwrap())
            .next()
            .expect("no product card");
        let text = card.text().collect::<String>();

        assert!(text.contains("Low Stock"), "{text}");
        assert!(text.contains("Running low"), "{text}");
        let bar = card
            .select(&Selector::parse("[style]").unwrap())
            .next()
            .expect("no stock level bar");
        assert_eq!(bar.value().attr("style"), Some("width: 8%"));
    }

    #[tokio::test]
    async fn says_when_nothing_matches() {
        let html = render("lobster").await;

        assert!(card_names(&html).is_empty());
        let text = html.root_element().text().collect::<String>();
        assert!(text.contains("No products match \"lobster\""));
    }
}
