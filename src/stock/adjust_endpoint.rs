//! The endpoint behind the Remove/Add/+5/+10/+25 buttons on a stock card.

use axum::{
    Form,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::{
    Error,
    product::ProductId,
    stock::stock_page::{StockState, stock_card},
};

/// The form sent by the stock adjustment buttons.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdjustStockForm {
    /// The change in units, stock never goes below zero.
    pub delta: i64,
    /// The search on the stock page, kept so the card's edit link returns to it.
    #[serde(default)]
    pub q: String,
}

/// Change a product's stock and respond with its re-rendered card.
pub async fn adjust_stock_endpoint(
    Path(product_id): Path<ProductId>,
    State(state): State<StockState>,
    Form(form): Form<AdjustStockForm>,
) -> Response {
    let mut register = match state.register.lock() {
        Ok(register) => register,
        Err(error) => {
            tracing::error!("could not acquire register lock: {error}");
            return Error::StateLockError.into_alert_response();
        }
    };

    match register.catalog_mut().adjust_stock(product_id, form.delta) {
        Ok(product) => stock_card(product, &form.q).into_response(),
        Err(error) => error.into_alert_response(),
    }
}

#[cfg(test)]
mod adjust_stock_endpoint_tests {
    use std::sync::{Arc, Mutex};

    use axum::{
        Form,
        extract::{Path, State},
        http::StatusCode,
        response::IntoResponse,
    };
    use scraper::Selector;

    use crate::{
        product::{Catalog, seed_products},
        register::{Register, StockReservation},
        stock::{AdjustStockForm, StockState, adjust_stock_endpoint},
        test_utils::{assert_status_ok, assert_valid_html, parse_html_fragment},
    };

    const STEAK_DINNER: i64 = 10;

    fn get_state() -> StockState {
        StockState {
            register: Arc::new(Mutex::new(Register::new(
                Catalog::new(seed_products()),
                StockReservation::OnAdd,
            ))),
        }
    }

    fn stock_of(state: &StockState, product_id: i64) -> Option<u32> {
        state
            .register
            .lock()
            .unwrap()
            .catalog()
            .get(product_id)
            .and_then(|product| product.stock)
    }

    #[tokio::test]
    async fn adds_stock_and_renders_card() {
        let state = get_state();

        let response = adjust_stock_endpoint(
            Path(STEAK_DINNER),
            State(state.clone()),
            Form(AdjustStockForm {
                delta: 10,
                q: "steak".to_owned(),
            }),
        )
        .await
        .into_response();

        assert_status_ok(&response);
        let html = parse_html_fragment(response).await;
        assert_valid_html(&html);
        let stock = html
            .select(&Selector::parse("#product-10 [data-stock]").unwrap())
            .next()
            .expect("no stock count")
            .text()
            .collect::<String>();
        assert_eq!(stock, "14");
        let status = html
            .select(&Selector::parse("[data-stock-status]").unwrap())
            .next()
            .expect("no status badge");
        assert_eq!(status.value().attr("data-stock-status"), Some("In Stock"));
        assert_eq!(stock_of(&state, STEAK_DINNER), Some(14));
        let edit = html
            .select(&Selector::parse("a[hx-get]").unwrap())
            .next()
            .expect("no edit link");
        assert_eq!(edit.value().attr("hx-get"), Some("/stock/10/edit?q=steak"));
    }

    #[tokio::test]
    async fn clamps_at_zero() {
        let state = get_state();

        adjust_stock_endpoint(
            Path(STEAK_DINNER),
            State(state.clone()),
            Form(AdjustStockForm {
                delta: -25,
                q: String::new(),
            }),
        )
        .await;

        let register = state.register.lock().unwrap();
        let steak = register.catalog().get(STEAK_DINNER).unwrap();
        assert_eq!(steak.stock, Some(0));
        assert!(!steak.in_stock);
    }

    #[tokio::test]
    async fn unknown_product_is_not_found() {
        let response = adjust_stock_endpoint(
            Path(999),
            State(get_state()),
            Form(AdjustStockForm {
                delta: 1,
                q: String::new(),
            }),
        )
        .await
        .into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
