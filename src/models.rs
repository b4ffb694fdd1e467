//! Frontend Models
//!
//! Data structures matching the cart service's JSON.

use serde::{Deserialize, Serialize};

/// One cart line (matches `GET /get_cart` elements)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    /// Service-assigned line id
    pub id: u32,
    /// Product behind the line, when the service reports it
    #[serde(default)]
    pub product_id: Option<u32>,
    pub name: String,
    #[serde(rename = "price")]
    pub unit_price: f64,
    pub quantity: u32,
}

impl CartItem {
    pub fn line_total(&self) -> f64 {
        self.unit_price * f64::from(self.quantity)
    }
}

/// A complete cart snapshot in server order.
///
/// Totals are derived from `items` on every call and never stored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CartState {
    items: Vec<CartItem>,
}

impl CartState {
    pub fn new(items: Vec<CartItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Σ unit price × quantity
    pub fn total(&self) -> f64 {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Σ quantity; wider than a line's quantity
    pub fn count(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    pub fn find_product(&self, product_id: u32) -> Option<&CartItem> {
        self.items.iter().find(|item| item.product_id == Some(product_id))
    }
}

/// Body of `POST /add_to_cart`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AddToCartArgs {
    pub product_id: u32,
    pub quantity: u32,
}

/// `{"message": ...}` reply of write endpoints
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Reply of `POST /place_order`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OrderPlaced {
    pub message: String,
    pub order_id: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: u32, name: &str, price: f64, quantity: u32) -> CartItem {
        CartItem { id, product_id: None, name: name.into(), unit_price: price, quantity }
    }

    #[test]
    fn test_decode_service_payload() {
        let json = r#"[
            {"id": 1, "product_id": 4, "name": "Shoe", "price": 49.99, "quantity": 2},
            {"id": 2, "name": "Sock", "price": 9.5, "quantity": 1}
        ]"#;
        let state: CartState = serde_json::from_str(json).unwrap();

        assert_eq!(state.items().len(), 2);
        assert_eq!(state.items()[0].product_id, Some(4));
        assert_eq!(state.items()[1].product_id, None);
        assert_eq!(state.items()[1].unit_price, 9.5);
    }

    #[test]
    fn test_totals_are_derived() {
        let state = CartState::new(vec![item(1, "Shoe", 49.99, 2), item(2, "Sock", 9.5, 1)]);
        assert_eq!(state.count(), 3);
        assert_eq!(format!("{:.2}", state.total()), "109.48");
    }

    #[test]
    fn test_empty_totals() {
        let state = CartState::default();
        assert!(state.is_empty());
        assert_eq!(state.count(), 0);
        assert_eq!(state.total(), 0.0);
    }

    #[test]
    fn test_count_of_huge_lines_does_not_overflow() {
        let state = CartState::new(vec![
            item(1, "Shoe", 49.99, 3_000_000_000),
            item(2, "Sock", 9.5, 3_000_000_000),
        ]);
        assert_eq!(state.count(), 6_000_000_000);
    }

    #[test]
    fn test_add_args_wire_shape() {
        let body = serde_json::to_value(AddToCartArgs { product_id: 7, quantity: 1 }).unwrap();
        assert_eq!(body, serde_json::json!({"product_id": 7, "quantity": 1}));
    }
}
