//! The in-memory product list and the stock adjustment operations.

use crate::{
    Error,
    product::{NewProduct, Product, ProductEdit, ProductId, StockStatus},
};

/// Stock counts across the whole catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CatalogSummary {
    /// Every product in the catalog.
    pub total: usize,
    /// Products with at least one unit, including those running low.
    pub in_stock: usize,
    /// Products with fewer than [LOW_STOCK_THRESHOLD](crate::product::LOW_STOCK_THRESHOLD) units.
    pub low_stock: usize,
    /// Products with no units left.
    pub out_of_stock: usize,
}

/// The products available in the store, in display order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Create a catalog from `products`.
    ///
    /// The in-stock flag of every product with tracked stock is brought in
    /// line with its stock count.
    pub fn new(products: Vec<Product>) -> Self {
        let products = products
            .into_iter()
            .map(|mut product| {
                if let Some(stock) = product.stock {
                    product.set_stock(stock);
                }
                product
            })
            .collect();

        Self { products }
    }

    /// Every product, in display order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// The product with the ID `id`, if there is one.
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    fn get_mut(&mut self, id: ProductId) -> Result<&mut Product, Error> {
        self.products
            .iter_mut()
            .find(|product| product.id == id)
            .ok_or(Error::ProductNotFound(id))
    }

    /// Change the stock of a product by `delta` units.
    ///
    /// The stock never goes below zero and the in-stock flag is set to
    /// whether any units remain. Untracked stock counts as zero.
    ///
    /// # Errors
    ///
    /// Returns [Error::ProductNotFound] if `id` is not in the catalog.
    pub fn adjust_stock(&mut self, id: ProductId, delta: i64) -> Result<&Product, Error> {
        let product = self.get_mut(id)?;
        let new_stock = (product.available() as i64)
            .saturating_add(delta)
            .clamp(0, u32::MAX as i64) as u32;
        product.set_stock(new_stock);

        tracing::debug!("adjusted stock of product {id} by {delta}, now {new_stock} units");

        Ok(product)
    }

    /// Replace the name, price and category of a product.
    ///
    /// # Errors
    ///
    /// Returns [Error::ProductNotFound] if `id` is not in the catalog.
    pub fn edit_product(&mut self, id: ProductId, edit: ProductEdit) -> Result<&Product, Error> {
        let product = self.get_mut(id)?;
        product.name = edit.name;
        product.price = edit.price;
        product.category = edit.category;

        Ok(product)
    }

    /// Add a product to the end of the catalog.
    ///
    /// The new product gets the ID one greater than the largest existing ID.
    pub fn add_product(&mut self, new_product: NewProduct) -> &Product {
        let id = self
            .products
            .iter()
            .map(|product| product.id)
            .max()
            .unwrap_or(0)
            + 1;

        let mut product = Product {
            id,
            name: new_product.name,
            price: new_product.price,
            category: new_product.category,
            in_stock: false,
            stock: None,
        };
        product.set_stock(new_product.stock);

        tracing::info!("added product {id} \"{}\"", product.name);

        self.products.push(product);
        &self.products[self.products.len() - 1]
    }

    /// The products whose name or category contains `term`, ignoring case.
    ///
    /// A blank term matches every product.
    pub fn search(&self, term: &str) -> Vec<&Product> {
        let term = term.trim().to_lowercase();

        self.products
            .iter()
            .filter(|product| {
                term.is_empty()
                    || product.name.as_ref().to_lowercase().contains(&term)
                    || product
                        .category
                        .as_ref()
                        .is_some_and(|category| category.to_lowercase().contains(&term))
            })
            .collect()
    }

    /// Count the products by stock status.
    pub fn summary(&self) -> CatalogSummary {
        self.products
            .iter()
            .fold(CatalogSummary::default(), |mut summary, product| {
                summary.total += 1;
                match product.stock_status() {
                    StockStatus::OutOfStock => summary.out_of_stock += 1,
                    StockStatus::LowStock => {
                        summary.in_stock += 1;
                        summary.low_stock += 1;
                    }
                    StockStatus::InStock => summary.in_stock += 1,
                }
                summary
            })
    }
}


#[cfg(test)]
mod edit_and_add_tests {
    use crate::{
        Error,
        product::{Catalog, NewProduct, ProductEdit, ProductName, seed_products},
    };

    #[test]
    fn edit_replaces_descriptive_fields_only() {
        let mut catalog = Catalog::new(seed_products());
        let before = catalog.get(1).unwrap().clone();

        let product = catalog
            .edit_product(
                1,
                ProductEdit {
                    name: ProductName::new_unchecked("Burger Supreme"),
                    price: 13.49,
                    category: Some("Main".to_owned()),
                },
            )
            .unwrap();

        assert_eq!(product.name.as_ref(), "Burger Supreme");
        assert_eq!(product.price, 13.49);
        assert_eq!(product.stock, before.stock);
        assert_eq!(product.in_stock, before.in_stock);
    }

    #[test]
    fn edit_missing_product() {
        let mut catalog = Catalog::new(seed_products());

        let got = catalog.edit_product(
            99,
            ProductEdit {
                name: ProductName::new_unchecked("Nope"),
                price: 1.0,
                category: None,
            },
        );

        assert_eq!(got, Err(Error::ProductNotFound(99)));
    }

    #[test]
    fn add_assigns_next_id() {
        let mut catalog = Catalog::new(seed_products());

        let product = catalog.add_product(NewProduct {
            name: ProductName::new_unchecked("Lemonade"),
            price: 3.5,
            category: Some("Beverage".to_owned()),
            stock: 0,
        });

        assert_eq!(product.id, 14);
        assert_eq!(product.stock, Some(0));
        assert!(!product.in_stock);
        assert_eq!(catalog.products().len(), 14);
    }

    #[test]
    fn add_to_empty_catalog_starts_at_one() {
        let mut catalog = Catalog::default();

        let product = catalog.add_product(NewProduct {
            name: ProductName::new_unchecked("Lemonade"),
            price: 3.5,
            category: None,
            stock: 4,
        });

        assert_eq!(product.id, 1);
        assert!(product.in_stock);
    }
}
