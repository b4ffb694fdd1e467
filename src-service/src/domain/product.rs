//! Product Entity

use serde::{Deserialize, Serialize};

/// A purchasable product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub price: f64,
}

/// Catalog inserted into an empty database.
///
/// Order matters: ids are assigned in insertion order and the page's
/// add-to-cart buttons refer to them.
pub fn default_catalog() -> Vec<(&'static str, f64)> {
    vec![
        ("Nike Free RN", 149.99),
        ("Nike Free RN", 149.99),
        ("Nike Free TR", 129.99),
        ("Nike Free TR", 129.99),
        ("Nike GS Pink", 129.99),
        ("Nike Get 5", 129.99),
        ("New Mens Shoes", 79.99),
        ("New Sneaker 2", 99.99),
        ("New Sneaker 3", 89.99),
    ]
}
