//! A point of sale system for a small restaurant.
//!
//! The library provides a web server that directly serves HTML pages: a
//! register with a product grid and cart, an inventory overview, stock
//! management and an admin dashboard. All state is held in memory.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum_server::Handle;
use tokio::signal;

mod admin_page;
mod alert;
mod cart;
mod endpoints;
mod error;
mod error_pages;
mod html;
mod inventory_page;
mod logging;
mod navigation;
mod payment;
mod point_of_sale;
mod product;
mod register;
mod routing;
mod state;
mod stock;

#[cfg(test)]
mod test_utils;

pub use cart::{Cart, CartItem, CartTotals, TAX_RATE};
pub use error::Error;
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use payment::{MockPaymentProcessor, PaymentProcessor, PaymentReceipt};
pub use product::{Catalog, Product, ProductId, ProductName, load_catalog_file, seed_products};
pub use register::{Register, SelectOutcome, StockReservation};
pub use routing::build_router;
pub use state::AppState;

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {error}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(error) => {
                tracing::error!("failed to install signal handler: {error}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}
