//! Implements a struct that holds the state of the web server.

use std::sync::{Arc, Mutex};

use crate::{
    payment::{MockPaymentProcessor, PaymentProcessor},
    product::Catalog,
    register::{Register, StockReservation},
};

/// The state of the web server.
///
/// There is a single register shared by every client, there are no sessions.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The catalog and the cart.
    pub register: Arc<Mutex<Register>>,

    /// The gateway that takes payment at checkout.
    pub payment_processor: Arc<dyn PaymentProcessor>,
}

impl AppState {
    /// Create a new [AppState] that charges payments with the [MockPaymentProcessor].
    pub fn new(catalog: Catalog, reservation: StockReservation) -> Self {
        Self::with_payment_processor(catalog, reservation, Arc::new(MockPaymentProcessor))
    }

    /// Create a new [AppState] that charges payments with `payment_processor`.
    pub fn with_payment_processor(
        catalog: Catalog,
        reservation: StockReservation,
        payment_processor: Arc<dyn PaymentProcessor>,
    ) -> Self {
        Self {
            register: Arc::new(Mutex::new(Register::new(catalog, reservation))),
            payment_processor,
        }
    }
}
