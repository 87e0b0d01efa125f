//! The catalog the store opens with.

use std::{fs, path::Path};

use crate::{
    Error,
    product::{Product, ProductName},
};

/// The built-in catalog used when no catalog file is given.
pub fn seed_products() -> Vec<Product> {
    let seed: [(&str, f64, &str, u32); 13] = [
        ("Burger Deluxe", 12.99, "Main", 25),
        ("Caesar Salad", 9.99, "Salad", 18),
        ("Fish & Chips", 14.99, "Main", 12),
        ("Pasta Primavera", 11.99, "Main", 15),
        ("Chicken Wings", 8.99, "Appetizer", 30),
        ("Margherita Pizza", 16.99, "Pizza", 8),
        ("Grilled Salmon", 18.99, "Main", 6),
        ("Chocolate Cake", 6.99, "Dessert", 20),
        ("Greek Salad", 8.99, "Salad", 0),
        ("Steak Dinner", 24.99, "Main", 4),
        ("Garlic Bread", 4.99, "Appetizer", 40),
        ("Ice Cream", 4.99, "Dessert", 22),
        ("Coffee", 2.99, "Beverage", 50),
    ];

    seed.into_iter()
        .zip(1..)
        .map(|((name, price, category, stock), id)| Product {
            id,
            name: ProductName::new_unchecked(name),
            price,
            category: Some(category.to_owned()),
            in_stock: stock > 0,
            stock: Some(stock),
        })
        .collect()
}

/// Read a catalog from a JSON file containing an array of products.
///
/// # Errors
///
/// Returns [Error::InvalidCatalog] if the file cannot be read, is not valid
/// JSON, or contains duplicate product IDs or negative prices.
pub fn load_catalog_file(path: &Path) -> Result<Vec<Product>, Error> {
    let text = fs::read_to_string(path).map_err(|error| {
        Error::InvalidCatalog(format!("could not read {}: {error}", path.display()))
    })?;

    parse_catalog(&text)
}

fn parse_catalog(text: &str) -> Result<Vec<Product>, Error> {
    let products: Vec<Product> = serde_json::from_str(text)
        .map_err(|error| Error::InvalidCatalog(format!("invalid catalog JSON: {error}")))?;

    let mut ids: Vec<_> = products.iter().map(|product| product.id).collect();
    ids.sort_unstable();
    if let Some(pair) = ids.windows(2).find(|pair| pair[0] == pair[1]) {
        return Err(Error::InvalidCatalog(format!(
            "the product ID {} is used more than once",
            pair[0]
        )));
    }

    if let Some(product) = products
        .iter()
        .find(|product| !product.price.is_finite() || product.price < 0.0)
    {
        return Err(Error::InvalidCatalog(format!(
            "the product \"{}\" has an invalid price",
            product.name
        )));
    }

    Ok(products)
}


#[cfg(test)]
mod parse_catalog_tests {
    use crate::{Error, product::seed::parse_catalog};

    #[test]
    fn parses_products() {
        let text = r#"[
            {"id": 1, "name": "Tea", "price": 2.5, "category": "Beverage", "inStock": true, "stock": 3},
            {"id": 2, "name": "Scone", "price": 3.0, "inStock": false}
        ]"#;

        let products = parse_catalog(text).unwrap();

        assert_eq!(products.len(), 2);
        assert_eq!(products[0].stock, Some(3));
        assert_eq!(products[1].category, None);
        assert_eq!(products[1].stock, None);
    }

    #[test]
    fn rejects_duplicate_ids() {
        let text = r#"[
            {"id": 1, "name": "Tea", "price": 2.5, "inStock": true},
            {"id": 1, "name": "Scone", "price": 3.0, "inStock": true}
        ]"#;

        assert!(matches!(parse_catalog(text), Err(Error::InvalidCatalog(_))));
    }

    #[test]
    fn rejects_empty_names() {
        let text = r#"[{"id": 1, "name": " ", "price": 2.5, "inStock": true}]"#;

        assert!(matches!(parse_catalog(text), Err(Error::InvalidCatalog(_))));
    }

    #[test]
    fn rejects_negative_prices() {
        let text = r#"[{"id": 1, "name": "Tea", "price": -2.5, "inStock": true}]"#;

        assert!(matches!(parse_catalog(text), Err(Error::InvalidCatalog(_))));
    }
}
