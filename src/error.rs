//! Defines the app level error type and conversions to rendered HTML pages and alerts.
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{
    alert::Alert,
    error_pages::{InternalServerError, NotFoundError},
    product::ProductId,
};

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The product ID does not refer to a product in the catalog.
    #[error("the product ID {0} does not refer to a product in the catalog")]
    ProductNotFound(ProductId),

    /// An empty string was used as a product name.
    #[error("Product name cannot be empty")]
    EmptyProductName,

    /// The product form was submitted without a price.
    #[error("Price is required")]
    MissingPrice,

    /// The price is not a number, or is negative.
    #[error("\"{0}\" is not a valid price")]
    InvalidPrice(String),

    /// The stock count is not a whole number.
    #[error("\"{0}\" is not a valid stock count")]
    InvalidStock(String),

    /// The catalog file could not be loaded.
    ///
    /// Only raised at start up, the message describes what was wrong with the file.
    #[error("could not load the catalog: {0}")]
    InvalidCatalog(String),

    /// The payment gateway declined the payment.
    #[error("the payment was declined: {0}")]
    PaymentDeclined(String),

    /// The requested resource was not found.
    #[error("the requested resource could not be found")]
    NotFound,

    /// Could not acquire the lock on the register state.
    ///
    /// This happens when a previous request panicked while holding the lock.
    #[error("could not acquire the register lock")]
    StateLockError,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::NotFound | Error::ProductNotFound(_) => NotFoundError.into_response(),
            Error::StateLockError => InternalServerError.into_response(),
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                InternalServerError.into_response()
            }
        }
    }
}

impl Error {
    /// Convert the error into an HTTP response with an HTML alert.
    pub fn into_alert_response(self) -> Response {
        let (status_code, alert) = match self {
            Error::ProductNotFound(product_id) => (
                StatusCode::NOT_FOUND,
                Alert::Error {
                    message: "Could not find product".to_owned(),
                    details: format!(
                        "There is no product with the ID {product_id}. \
                        Try refreshing the page to see the current catalog."
                    ),
                },
            ),
            Error::NotFound => (
                StatusCode::NOT_FOUND,
                Alert::Error {
                    message: "Not found".to_owned(),
                    details: "The requested resource could not be found.".to_owned(),
                },
            ),
            error @ (Error::EmptyProductName
            | Error::MissingPrice
            | Error::InvalidPrice(_)
            | Error::InvalidStock(_)) => (
                StatusCode::BAD_REQUEST,
                Alert::Error {
                    message: "Invalid product details".to_owned(),
                    details: error.to_string(),
                },
            ),
            Error::PaymentDeclined(reason) => (
                StatusCode::PAYMENT_REQUIRED,
                Alert::Error {
                    message: "Payment declined".to_owned(),
                    details: format!("{reason}. The cart has not been cleared."),
                },
            ),
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Alert::Error {
                        message: "Something went wrong".to_owned(),
                        details:
                            "An unexpected error occurred, check the server logs for more details."
                                .to_owned(),
                    },
                )
            }
        };

        (status_code, alert.into_html()).into_response()
    }
}
