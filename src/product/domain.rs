//! Core product domain types.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::Error;

/// Identifier for a product in the catalog.
pub type ProductId = i64;

/// Products with fewer than this many units are considered low on stock.
pub const LOW_STOCK_THRESHOLD: u32 = 10;

/// The stock level at which the stock level bar is drawn full.
pub const FULL_STOCK_LEVEL: u32 = 50;

/// A validated, non-empty product name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct ProductName(String);

impl ProductName {
    /// Create a product name.
    ///
    /// # Errors
    ///
    /// This function will return an [Error::EmptyProductName] if `name` is empty or only whitespace.
    pub fn new(name: &str) -> Result<Self, Error> {
        let name = name.trim();

        if name.is_empty() {
            Err(Error::EmptyProductName)
        } else {
            Ok(Self(name.to_string()))
        }
    }

    /// Create a product name without validation.
    ///
    /// The caller should ensure that the string is not empty.
    pub fn new_unchecked(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl AsRef<str> for ProductName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for ProductName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProductName::new(s)
    }
}

impl TryFrom<String> for ProductName {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        ProductName::new(&value)
    }
}

impl From<ProductName> for String {
    fn from(value: ProductName) -> Self {
        value.0
    }
}

impl Display for ProductName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A sellable catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique within a catalog.
    pub id: ProductId,
    /// The name shown on the product grid and receipts.
    pub name: ProductName,
    /// The unit price in dollars.
    pub price: f64,
    /// The menu section, e.g. "Main" or "Dessert".
    #[serde(default)]
    pub category: Option<String>,
    /// Whether the product can currently be sold.
    ///
    /// Kept equal to `stock > 0` whenever stock is tracked.
    pub in_stock: bool,
    /// The number of units available, `None` if stock is not tracked.
    #[serde(default)]
    pub stock: Option<u32>,
}

impl Product {
    /// The number of units available for sale.
    ///
    /// Untracked stock counts as zero units.
    pub fn available(&self) -> u32 {
        self.stock.unwrap_or(0)
    }

    /// Whether the product can be added to a cart.
    pub fn is_sellable(&self) -> bool {
        self.in_stock && self.available() > 0
    }

    /// How well stocked the product is.
    pub fn stock_status(&self) -> StockStatus {
        StockStatus::from_stock(self.available())
    }

    /// Set the stock to `stock` units and update the in-stock flag to match.
    pub(crate) fn set_stock(&mut self, stock: u32) {
        self.stock = Some(stock);
        self.in_stock = stock > 0;
    }
}

/// How well stocked a product is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockStatus {
    /// No units left.
    OutOfStock,
    /// Fewer than [LOW_STOCK_THRESHOLD] units left.
    LowStock,
    /// Plenty of units left.
    InStock,
}

impl StockStatus {
    /// The status for a product with `stock` units.
    pub fn from_stock(stock: u32) -> Self {
        if stock == 0 {
            StockStatus::OutOfStock
        } else if stock < LOW_STOCK_THRESHOLD {
            StockStatus::LowStock
        } else {
            StockStatus::InStock
        }
    }

    /// The badge text shown for the status.
    pub fn label(self) -> &'static str {
        match self {
            StockStatus::OutOfStock => "Out of Stock",
            StockStatus::LowStock => "Low Stock",
            StockStatus::InStock => "In Stock",
        }
    }

    /// The caption shown under the stock level bar.
    pub fn caption(self) -> &'static str {
        match self {
            StockStatus::OutOfStock => "Needs restocking",
            StockStatus::LowStock => "Running low",
            StockStatus::InStock => "Well stocked",
        }
    }
}

/// The width of the stock level bar as a percentage.
pub fn stock_level_percent(stock: u32) -> u32 {
    (stock.saturating_mul(100) / FULL_STOCK_LEVEL).min(100)
}

#[cfg(test)]
mod product_name_tests {
    use crate::{Error, product::ProductName};

    #[test]
    fn new_trims_whitespace() {
        let name = ProductName::new("  Coffee ").unwrap();

        assert_eq!(name.as_ref(), "Coffee");
    }

    #[test]
    fn new_fails_on_empty_string() {
        assert_eq!(ProductName::new(""), Err(Error::EmptyProductName));
        assert_eq!(ProductName::new("   "), Err(Error::EmptyProductName));
    }
}

#[cfg(test)]
mod stock_status_tests {
    use crate::product::{StockStatus, domain::stock_level_percent};

    #[test]
    fn status_thresholds() {
        assert_eq!(StockStatus::from_stock(0), StockStatus::OutOfStock);
        assert_eq!(StockStatus::from_stock(1), StockStatus::LowStock);
        assert_eq!(StockStatus::from_stock(9), StockStatus::LowStock);
        assert_eq!(StockStatus::from_stock(10), StockStatus::InStock);
    }

    #[test]
    fn level_percent_is_capped() {
        assert_eq!(stock_level_percent(0), 0);
        assert_eq!(stock_level_percent(25), 50);
        assert_eq!(stock_level_percent(50), 100);
        assert_eq!(stock_level_percent(500), 100);
    }
}
