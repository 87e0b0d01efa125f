//! The till: the catalog and cart together, kept in step with each other.
//!
//! The cart on its own knows nothing about stock. The [Register] applies a
//! [StockReservation] policy that decides when cart contents are taken out of
//! the catalog's stock.

use crate::{
    Error,
    cart::Cart,
    payment::{PaymentProcessor, PaymentReceipt},
    product::{Catalog, ProductId},
};

/// When units in the cart are taken out of stock.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum StockReservation {
    /// Stock is decremented as soon as a unit is added to the cart and
    /// returned if the unit is taken out of the cart before checkout.
    #[default]
    OnAdd,
    /// Stock is only decremented when the sale is paid for.
    OnCheckout,
}

/// The result of selecting a product on the point of sale grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    /// One unit was added to the cart.
    Added,
    /// The product does not exist or has no units left, the cart is unchanged.
    Unavailable,
}

/// The state of a single point of sale terminal.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Register {
    catalog: Catalog,
    cart: Cart,
    reservation: StockReservation,
}

impl Register {
    /// Create a register with an empty cart.
    pub fn new(catalog: Catalog, reservation: StockReservation) -> Self {
        Self {
            catalog,
            cart: Cart::new(),
            reservation,
        }
    }

    /// The products for sale and their stock.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The catalog for stock management.
    ///
    /// Stock changed through here does not affect units already in the cart.
    pub fn catalog_mut(&mut self) -> &mut Catalog {
        &mut self.catalog
    }

    /// The items about to be bought.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// When cart contents are taken out of stock.
    pub fn reservation(&self) -> StockReservation {
        self.reservation
    }

    /// The number of units of a product that can still go into the cart.
    pub fn remaining(&self, product_id: ProductId) -> u32 {
        let available = self
            .catalog
            .get(product_id)
            .filter(|product| product.is_sellable())
            .map_or(0, |product| product.available());

        match self.reservation {
            StockReservation::OnAdd => available,
            StockReservation::OnCheckout => {
                available.saturating_sub(self.cart.quantity_of(product_id))
            }
        }
    }

    /// Add one unit of a product to the cart if there is any left to sell.
    pub fn select_product(&mut self, product_id: ProductId) -> SelectOutcome {
        if self.remaining(product_id) == 0 {
            tracing::debug!("product {product_id} is not available, the cart is unchanged");
            return SelectOutcome::Unavailable;
        }

        let Some(product) = self.catalog.get(product_id) else {
            return SelectOutcome::Unavailable;
        };

        self.cart.add(product);
        self.reserve(product_id, 1);

        SelectOutcome::Added
    }

    /// Set the quantity of a cart line, removing it if `quantity` is zero or negative.
    ///
    /// Increases are limited to the units left to sell. Products not in the
    /// cart are ignored.
    pub fn set_quantity(&mut self, product_id: ProductId, quantity: i64) {
        let current = self.cart.quantity_of(product_id);

        if current == 0 {
            return;
        }

        let requested = quantity.clamp(0, u32::MAX as i64) as u32;

        if requested > current {
            let extra = (requested - current).min(self.remaining(product_id));
            self.cart.update_quantity(product_id, (current + extra) as i64);
            self.reserve(product_id, extra);
        } else {
            self.cart.update_quantity(product_id, requested as i64);
            self.release(product_id, current - requested);
        }
    }

    /// Take a line out of the cart.
    pub fn remove(&mut self, product_id: ProductId) {
        let quantity = self.cart.quantity_of(product_id);
        self.cart.remove(product_id);
        self.release(product_id, quantity);
    }

    /// Empty the cart without selling anything.
    pub fn clear(&mut self) {
        let lines: Vec<_> = self
            .cart
            .items()
            .iter()
            .map(|item| (item.product.id, item.quantity))
            .collect();

        self.cart.clear();

        for (product_id, quantity) in lines {
            self.release(product_id, quantity);
        }
    }

    /// Charge the cart's grand total and empty the cart.
    ///
    /// Returns `None` without charging anything if the cart is empty.
    ///
    /// # Errors
    ///
    /// Returns the processor's error if the payment fails. The cart and stock
    /// are left unchanged in that case.
    pub fn checkout(
        &mut self,
        processor: &dyn PaymentProcessor,
    ) -> Result<Option<PaymentReceipt>, Error> {
        if self.cart.is_empty() {
            return Ok(None);
        }

        let receipt = processor.process_payment(self.cart.totals().grand_total)?;

        if self.reservation == StockReservation::OnCheckout {
            for item in self.cart.items() {
                if let Err(error) = self
                    .catalog
                    .adjust_stock(item.product.id, -(item.quantity as i64))
                {
                    tracing::error!("could not take sold units out of stock: {error}");
                }
            }
        }

        tracing::info!(
            "sold {} items for ${:.2} at {}",
            self.cart.item_count(),
            receipt.amount,
            receipt.processed_at
        );
        self.cart.clear();

        Ok(Some(receipt))
    }

    fn reserve(&mut self, product_id: ProductId, quantity: u32) {
        if self.reservation == StockReservation::OnAdd && quantity > 0 {
            self.adjust(product_id, -(quantity as i64));
        }
    }

    fn release(&mut self, product_id: ProductId, quantity: u32) {
        if self.reservation == StockReservation::OnAdd && quantity > 0 {
            self.adjust(product_id, quantity as i64);
        }
    }

    fn adjust(&mut self, product_id: ProductId, delta: i64) {
        if let Err(error) = self.catalog.adjust_stock(product_id, delta) {
            tracing::error!("could not reconcile stock with the cart: {error}");
        }
    }
}
