//! Typed drafts for the add and edit product forms.

use serde::{Deserialize, Serialize};

use crate::{Error, product::ProductName};

/// The categories offered by the product forms.
pub const CATEGORIES: [&str; 6] = ["Main", "Appetizer", "Salad", "Pizza", "Dessert", "Beverage"];

/// The category given to new products when none is chosen.
pub const DEFAULT_CATEGORY: &str = "Main";

/// The raw form fields for adding or editing a product.
///
/// Nothing is validated until [ProductDraft::commit_new] or
/// [ProductDraft::commit_edit] is called.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub name: String,
    pub price: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub stock: String,
}

/// A validated product that has not been given an ID yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: ProductName,
    pub price: f64,
    pub category: Option<String>,
    pub stock: u32,
}

/// The validated replacement values for a product's descriptive fields.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductEdit {
    pub name: ProductName,
    pub price: f64,
    pub category: Option<String>,
}

impl ProductDraft {
    /// Validate the draft as a new product.
    ///
    /// A blank category becomes [DEFAULT_CATEGORY] and a blank stock field
    /// means zero units. Negative stock is clamped to zero.
    ///
    /// # Errors
    ///
    /// Returns [Error::EmptyProductName], [Error::MissingPrice],
    /// [Error::InvalidPrice] or [Error::InvalidStock].
    pub fn commit_new(&self) -> Result<NewProduct, Error> {
        let name = ProductName::new(&self.name)?;
        let price = parse_price(&self.price)?;
        let stock = parse_stock(&self.stock)?;
        let category = match self.category.trim() {
            "" => DEFAULT_CATEGORY.to_owned(),
            category => category.to_owned(),
        };

        Ok(NewProduct {
            name,
            price,
            category: Some(category),
            stock,
        })
    }

    /// Validate the draft as an edit of an existing product.
    ///
    /// The stock field is ignored. A blank category clears the category.
    ///
    /// # Errors
    ///
    /// Returns [Error::EmptyProductName], [Error::MissingPrice] or [Error::InvalidPrice].
    pub fn commit_edit(&self) -> Result<ProductEdit, Error> {
        let name = ProductName::new(&self.name)?;
        let price = parse_price(&self.price)?;
        let category = match self.category.trim() {
            "" => None,
            category => Some(category.to_owned()),
        };

        Ok(ProductEdit {
            name,
            price,
            category,
        })
    }
}

fn parse_price(text: &str) -> Result<f64, Error> {
    let text = text.trim();

    if text.is_empty() {
        return Err(Error::MissingPrice);
    }

    match text.parse::<f64>() {
        Ok(price) if price.is_finite() && price >= 0.0 => Ok(price),
        _ => Err(Error::InvalidPrice(text.to_owned())),
    }
}

fn parse_stock(text: &str) -> Result<u32, Error> {
    let text = text.trim();

    if text.is_empty() {
        return Ok(0);
    }

    text.parse::<i64>()
        .map(|stock| stock.clamp(0, u32::MAX as i64) as u32)
        .map_err(|_| Error::InvalidStock(text.to_owned()))
}
