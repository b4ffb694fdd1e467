//! Order Entities

use serde::{Deserialize, Serialize};

/// A line of a placed order, priced at purchase time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub name: String,
    pub quantity: u32,
    pub price: f64,
}

/// A placed order as returned by `GET /get_orders`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub order_id: u32,
    /// Human readable, e.g. "March 04, 2025"
    pub date: String,
    pub status: String,
    pub total_price: f64,
    pub items: Vec<OrderLine>,
}

/// Response of `POST /place_order`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderPlaced {
    pub message: String,
    pub order_id: u32,
}
