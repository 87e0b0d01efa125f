//! The shopping cart and its derived totals.

use crate::product::{Product, ProductId};

/// The sales tax rate applied to the cart subtotal (8.5%).
pub const TAX_RATE: f64 = 0.085;

/// A product in the cart and how many units of it are being bought.
#[derive(Debug, Clone, PartialEq)]
pub struct CartItem {
    /// The product as it was when first added to the cart.
    pub product: Product,
    /// Always at least one.
    pub quantity: u32,
}

impl CartItem {
    /// The price of the line before tax.
    pub fn line_total(&self) -> f64 {
        self.product.price * self.quantity as f64
    }
}

/// The amounts owed for the items in a cart.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CartTotals {
    /// The sum of price × quantity over every line.
    pub subtotal: f64,
    /// [TAX_RATE] applied to the subtotal.
    pub tax: f64,
    /// The subtotal plus tax.
    pub grand_total: f64,
}

/// The items a customer is about to buy.
///
/// Every operation is total: unknown product IDs are ignored and invalid
/// quantities remove the line. The cart never changes stock levels.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// The cart lines in the order they were first added.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Whether there are no lines in the cart.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The total number of units across all lines.
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    /// The quantity of `product_id` in the cart, zero if it is not in the cart.
    pub fn quantity_of(&self, product_id: ProductId) -> u32 {
        self.items
            .iter()
            .find(|item| item.product.id == product_id)
            .map_or(0, |item| item.quantity)
    }

    /// Add one unit of `product`, creating a new line if needed.
    pub fn add(&mut self, product: &Product) {
        match self
            .items
            .iter_mut()
            .find(|item| item.product.id == product.id)
        {
            Some(item) => item.quantity += 1,
            None => self.items.push(CartItem {
                product: product.clone(),
                quantity: 1,
            }),
        }
    }

    /// Set the quantity of a line, removing it if `quantity` is zero or negative.
    pub fn update_quantity(&mut self, product_id: ProductId, quantity: i64) {
        if quantity <= 0 {
            self.remove(product_id);
            return;
        }

        let quantity = quantity.min(u32::MAX as i64) as u32;

        if let Some(item) = self
            .items
            .iter_mut()
            .find(|item| item.product.id == product_id)
        {
            item.quantity = quantity;
        }
    }

    /// Remove the line for `product_id`, if any.
    pub fn remove(&mut self, product_id: ProductId) {
        self.items.retain(|item| item.product.id != product_id);
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Derive the subtotal, tax and grand total from the current lines.
    pub fn totals(&self) -> CartTotals {
        let subtotal = self.items.iter().map(CartItem::line_total).sum::<f64>();
        let tax = subtotal * TAX_RATE;

        CartTotals {
            subtotal,
            tax,
            grand_total: subtotal + tax,
        }
    }
}

#[cfg(test)]
mod cart_tests {
    use crate::{
        cart::{Cart, TAX_RATE},
        product::{Product, ProductName},
    };

    fn product(id: i64, price: f64) -> Product {
        Product {
            id,
            name: ProductName::new_unchecked(&format!("Product {id}")),
            price,
            category: None,
            in_stock: true,
            stock: Some(10),
        }
    }

    #[track_caller]
    fn assert_close(got: f64, want: f64) {
        assert!(
            (got - want).abs() < 1e-9,
            "want {want}, got {got} (difference {})",
            (got - want).abs()
        );
    }

    #[test]
    fn adding_twice_increments_quantity() {
        let mut cart = Cart::new();
        let burger = product(1, 12.99);

        cart.add(&burger);
        cart.add(&burger);

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.quantity_of(1), 2);
    }

    #[test]
    fn lines_keep_insertion_order() {
        let mut cart = Cart::new();

        cart.add(&product(3, 1.0));
        cart.add(&product(1, 1.0));
        cart.add(&product(3, 1.0));

        let ids: Vec<_> = cart.items().iter().map(|item| item.product.id).collect();
        assert_eq!(ids, vec![3, 1]);
        assert_eq!(cart.item_count(), 3);
    }

    #[test]
    fn update_quantity_sets_quantity() {
        let mut cart = Cart::new();
        cart.add(&product(1, 2.0));

        cart.update_quantity(1, 5);

        assert_eq!(cart.quantity_of(1), 5);
    }

    #[test]
    fn update_quantity_to_zero_or_negative_removes_line() {
        let mut cart = Cart::new();
        cart.add(&product(1, 2.0));
        cart.add(&product(2, 2.0));

        cart.update_quantity(1, 0);
        cart.update_quantity(2, -3);

        assert!(cart.is_empty());
    }

    #[test]
    fn update_quantity_ignores_unknown_products() {
        let mut cart = Cart::new();
        cart.add(&product(1, 2.0));
        let before = cart.clone();

        cart.update_quantity(7, 4);

        assert_eq!(cart, before);
    }

    #[test]
    fn remove_and_clear() {
        let mut cart = Cart::new();
        cart.add(&product(1, 2.0));
        cart.add(&product(2, 3.0));

        cart.remove(1);
        assert_eq!(cart.quantity_of(1), 0);
        assert_eq!(cart.quantity_of(2), 1);

        cart.clear();
        assert!(cart.is_empty());
    }

    #[test]
    fn empty_cart_totals_are_zero() {
        let totals = Cart::new().totals();

        assert_eq!(totals.subtotal, 0.0);
        assert_eq!(totals.tax, 0.0);
        assert_eq!(totals.grand_total, 0.0);
    }

    #[test]
    fn totals_match_lines_after_mixed_operations() {
        let mut cart = Cart::new();
        let products = [product(1, 12.99), product(2, 9.99), product(3, 2.99)];

        cart.add(&products[0]);
        cart.add(&products[1]);
        cart.add(&products[2]);
        cart.add(&products[0]);
        cart.update_quantity(2, 4);
        cart.remove(3);
        cart.add(&products[2]);
        cart.update_quantity(1, -1);

        let want_subtotal: f64 = cart
            .items()
            .iter()
            .map(|item| item.product.price * item.quantity as f64)
            .sum();
        let totals = cart.totals();

        assert_close(totals.subtotal, 9.99 * 4.0 + 2.99);
        assert_close(totals.subtotal, want_subtotal);
        assert_close(totals.tax, want_subtotal * TAX_RATE);
        assert_close(totals.grand_total, want_subtotal * 1.085);
    }

    #[test]
    fn burger_deluxe_twice() {
        let mut cart = Cart::new();
        let burger = product(1, 12.99);

        cart.add(&burger);
        cart.add(&burger);
        let totals = cart.totals();

        assert_close(totals.subtotal, 25.98);
        assert_eq!(format!("{:.2}", totals.tax), "2.21");
        assert_eq!(format!("{:.2}", totals.grand_total), "28.19");
    }
}
