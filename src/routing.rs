//! Application router configuration.

use axum::{
    Router,
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::{delete, get, post, put},
};
use tower_http::services::ServeDir;

use crate::{
    AppState,
    admin_page::{get_admin_page, get_coming_soon_alert},
    cart::{
        add_to_cart_endpoint, checkout_endpoint, clear_cart_endpoint, remove_cart_item_endpoint,
        update_cart_item_endpoint,
    },
    endpoints,
    error_pages::{get_404_not_found, get_internal_server_error_page},
    inventory_page::get_inventory_page,
    point_of_sale::get_point_of_sale_page,
    stock::{
        adjust_stock_endpoint, create_product_endpoint, get_edit_product_page,
        get_new_product_page, get_stock_page, update_product_endpoint,
    },
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    let page_routes = Router::new()
        .route(endpoints::ROOT, get(get_index_page))
        .route(endpoints::POS_VIEW, get(get_point_of_sale_page))
        .route(endpoints::INVENTORY_VIEW, get(get_inventory_page))
        .route(endpoints::STOCK_VIEW, get(get_stock_page))
        .route(endpoints::NEW_PRODUCT_VIEW, get(get_new_product_page))
        .route(endpoints::EDIT_PRODUCT_VIEW, get(get_edit_product_page))
        .route(endpoints::ADMIN_VIEW, get(get_admin_page))
        .route(endpoints::COMING_SOON, get(get_coming_soon_alert))
        .route(
            endpoints::INTERNAL_ERROR_VIEW,
            get(get_internal_server_error_page),
        );

    let api_routes = Router::new()
        .route(endpoints::COFFEE, get(get_coffee))
        .route(endpoints::CART_ITEMS, post(add_to_cart_endpoint))
        .route(
            endpoints::CART_ITEM,
            put(update_cart_item_endpoint).delete(remove_cart_item_endpoint),
        )
        .route(endpoints::CART, delete(clear_cart_endpoint))
        .route(endpoints::CHECKOUT, post(checkout_endpoint))
        .route(endpoints::PRODUCTS, post(create_product_endpoint))
        .route(endpoints::PRODUCT, put(update_product_endpoint))
        .route(endpoints::PRODUCT_STOCK, post(adjust_stock_endpoint));

    page_routes
        .merge(api_routes)
        .nest_service(endpoints::STATIC, ServeDir::new("static/"))
        .fallback(get_404_not_found)
        .with_state(state)
}

/// Attempt to get a cup of coffee from the server.
async fn get_coffee() -> Response {
    (StatusCode::IM_A_TEAPOT, Html("I'm a teapot")).into_response()
}

/// The root path '/' redirects to the point of sale page.
async fn get_index_page() -> Redirect {
    Redirect::to(endpoints::POS_VIEW)
}


#[cfg(test)]
mod router_tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use scraper::{Html, Selector};
    use serde::Serialize;

    use crate::{
        AppState,
        endpoints::{self, format_endpoint},
        product::{Catalog, seed_products},
        register::StockReservation,
        routing::build_router,
    };

    const BURGER_DELUXE: i64 = 1;

    #[derive(Serialize)]
    struct ProductIdForm {
        product_id: i64,
    }

    #[derive(Serialize)]
    struct DeltaForm {
        delta: i64,
    }

    fn get_test_server(reservation: StockReservation) -> TestServer {
        let state = AppState::new(Catalog::new(seed_products()), reservation);

        TestServer::try_new(build_router(state)).expect("Could not create test server.")
    }

    #[track_caller]
    fn stock_shown_on_stock_page(html: &str, product_id: i64) -> String {
        let html = Html::parse_document(html);
        let selector = Selector::parse(&format!("#product-{product_id} [data-stock]")).unwrap();

        html.select(&selector)
            .next()
            .expect("no stock count")
            .text()
            .collect()
    }

    #[tokio::test]
    async fn coffee_is_a_teapot() {
        let server = get_test_server(StockReservation::OnAdd);

        server
            .get(endpoints::COFFEE)
            .await
            .assert_status(StatusCode::IM_A_TEAPOT);
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let server = get_test_server(StockReservation::OnAdd);

        server
            .get("/lobster")
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn every_page_renders() {
        let server = get_test_server(StockReservation::OnAdd);

        for page in [
            endpoints::POS_VIEW.to_owned(),
            endpoints::INVENTORY_VIEW.to_owned(),
            format!("{}?q=salad", endpoints::STOCK_VIEW),
            endpoints::NEW_PRODUCT_VIEW.to_owned(),
            format_endpoint(endpoints::EDIT_PRODUCT_VIEW, BURGER_DELUXE),
            endpoints::ADMIN_VIEW.to_owned(),
        ] {
            server.get(&page).await.assert_status_ok();
        }

        server
            .get(endpoints::INTERNAL_ERROR_VIEW)
            .await
            .assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn selling_a_product_updates_stock_page() {
        let server = get_test_server(StockReservation::OnAdd);

        server
            .post(endpoints::CART_ITEMS)
            .form(&ProductIdForm {
                product_id: BURGER_DELUXE,
            })
            .await
            .assert_status_ok();
        server.post(endpoints::CHECKOUT).await.assert_status_ok();

        let stock_page = server.get(endpoints::STOCK_VIEW).await;
        assert_eq!(
            stock_shown_on_stock_page(&stock_page.text(), BURGER_DELUXE),
            "24"
        );
    }

    #[tokio::test]
    async fn stock_only_leaves_on_checkout_when_configured() {
        let server = get_test_server(StockReservation::OnCheckout);

        server
            .post(endpoints::CART_ITEMS)
            .form(&ProductIdForm {
                product_id: BURGER_DELUXE,
            })
            .await
            .assert_status_ok();

        let stock_page = server.get(endpoints::STOCK_VIEW).await;
        assert_eq!(
            stock_shown_on_stock_page(&stock_page.text(), BURGER_DELUXE),
            "25"
        );

        server.post(endpoints::CHECKOUT).await.assert_status_ok();

        let stock_page = server.get(endpoints::STOCK_VIEW).await;
        assert_eq!(
            stock_shown_on_stock_page(&stock_page.text(), BURGER_DELUXE),
            "24"
        );
    }

    #[tokio::test]
    async fn restocking_makes_product_sellable() {
        let server = get_test_server(StockReservation::OnAdd);
        let greek_salad = 9;

        server
            .post(&format_endpoint(endpoints::PRODUCT_STOCK, greek_salad))
            .form(&DeltaForm { delta: 5 })
            .await
            .assert_status_ok();

        let page = server.get(endpoints::POS_VIEW).await;
        let html = Html::parse_document(&page.text());
        let button = html
            .select(&Selector::parse("#product-grid button[data-product-id=\"9\"]").unwrap())
            .next()
            .expect("no button for Greek Salad");
        assert!(button.value().attr("disabled").is_none());
    }
}
