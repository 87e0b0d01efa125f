//! The endpoints that change the cart and take payment.
//!
//! Every endpoint responds with the re-rendered cart panel and an
//! out-of-band copy of the product grid, so the units left for each product
//! stay in step with the cart.

use std::sync::{Arc, Mutex, MutexGuard};

use axum::{
    Form,
    extract::{FromRef, Path, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use serde::{Deserialize, Serialize};

use crate::{
    AppState, Error,
    alert::Alert,
    cart::cart_view,
    html::format_currency,
    payment::PaymentProcessor,
    point_of_sale::product_grid_view,
    product::ProductId,
    register::{Register, SelectOutcome},
};

/// The state needed for the cart endpoints.
#[derive(Debug, Clone)]
pub struct CartState {
    pub register: Arc<Mutex<Register>>,
    pub payment_processor: Arc<dyn PaymentProcessor>,
}

impl FromRef<AppState> for CartState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            register: state.register.clone(),
            payment_processor: state.payment_processor.clone(),
        }
    }
}

/// The form sent by a product button on the point of sale grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddToCartForm {
    pub product_id: ProductId,
}

/// The form sent by the +/- buttons on a cart line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuantityForm {
    pub quantity: i64,
}

fn lock(state: &CartState) -> Result<MutexGuard<'_, Register>, Error> {
    state
        .register
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire register lock: {error}"))
        .map_err(|_| Error::StateLockError)
}

fn register_update_view(register: &Register, alert: Option<Alert>) -> Markup {
    html!(
        (cart_view(register))
        (product_grid_view(register, true))

        @if let Some(alert) = alert {
            (alert.into_oob_html())
        }
    )
}

/// Add one unit of a product to the cart.
pub async fn add_to_cart_endpoint(
    State(state): State<CartState>,
    Form(form): Form<AddToCartForm>,
) -> Response {
    let mut register = match lock(&state) {
        Ok(register) => register,
        Err(error) => return error.into_alert_response(),
    };

    let Some((name, has_stock)) = register
        .catalog()
        .get(form.product_id)
        .map(|product| (product.name.to_string(), product.is_sellable()))
    else {
        return Error::ProductNotFound(form.product_id).into_alert_response();
    };

    let alert = match register.select_product(form.product_id) {
        SelectOutcome::Added => None,
        // Only possible when stock leaves at checkout and the cart holds every unit.
        SelectOutcome::Unavailable if has_stock => Some(Alert::Error {
            message: format!("No more {name} available"),
            details: "Every unit in stock is already in the cart.".to_owned(),
        }),
        SelectOutcome::Unavailable => Some(Alert::Error {
            message: format!("{name} is out of stock"),
            details: "Restock it from the stock management page to sell more.".to_owned(),
        }),
    };

    register_update_view(&register, alert).into_response()
}

/// Set the quantity of a cart line, a quantity of zero or less removes it.
pub async fn update_cart_item_endpoint(
    Path(product_id): Path<ProductId>,
    State(state): State<CartState>,
    Form(form): Form<QuantityForm>,
) -> Response {
    let mut register = match lock(&state) {
        Ok(register) => register,
        Err(error) => return error.into_alert_response(),
    };

    register.set_quantity(product_id, form.quantity);

    register_update_view(&register, None).into_response()
}

/// Take a line out of the cart.
pub async fn remove_cart_item_endpoint(
    Path(product_id): Path<ProductId>,
    State(state): State<CartState>,
) -> Response {
    let mut register = match lock(&state) {
        Ok(register) => register,
        Err(error) => return error.into_alert_response(),
    };

    register.remove(product_id);

    register_update_view(&register, None).into_response()
}

/// Empty the cart without selling anything.
pub async fn clear_cart_endpoint(State(state): State<CartState>) -> Response {
    let mut register = match lock(&state) {
        Ok(register) => register,
        Err(error) => return error.into_alert_response(),
    };

    register.clear();

    register_update_view(&register, None).into_response()
}

/// Charge the cart's grand total and start a new sale.
pub async fn checkout_endpoint(State(state): State<CartState>) -> Response {
    let mut register = match lock(&state) {
        Ok(register) => register,
        Err(error) => return error.into_alert_response(),
    };

    match register.checkout(state.payment_processor.as_ref()) {
        Ok(receipt) => {
            let alert = receipt.map(|receipt| Alert::Success {
                message: format!(
                    "Processing payment of {}",
                    format_currency(receipt.amount)
                ),
                details: "Thank you for your purchase!".to_owned(),
            });

            register_update_view(&register, alert).into_response()
        }
        Err(error) => {
            tracing::warn!("checkout failed: {error}");
            error.into_alert_response()
        }
    }
}
