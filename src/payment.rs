//! The payment gateway used at checkout.
//!
//! Only a mock gateway exists; card handling is out of scope for the demo.

use std::fmt::Debug;

use time::OffsetDateTime;

use crate::Error;

/// Confirmation that a payment went through.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentReceipt {
    /// The amount charged in dollars.
    pub amount: f64,
    /// When the payment went through, in UTC.
    pub processed_at: OffsetDateTime,
}

/// Something that can take payment for a sale.
pub trait PaymentProcessor: Debug + Send + Sync {
    /// Charge the customer `amount` dollars.
    ///
    /// # Errors
    ///
    /// Implementations return an error if the payment is declined.
    fn process_payment(&self, amount: f64) -> Result<PaymentReceipt, Error>;
}

/// A payment gateway that approves every payment.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockPaymentProcessor;

impl PaymentProcessor for MockPaymentProcessor {
    fn process_payment(&self, amount: f64) -> Result<PaymentReceipt, Error> {
        tracing::info!("Processing payment of ${amount:.2}");

        Ok(PaymentReceipt {
            amount,
            processed_at: OffsetDateTime::now_utc(),
        })
    }
}
