//! Order handlers

use axum::extract::State;
use axum::Json;

use super::AppState;
use crate::domain::{DomainError, Order, OrderPlaced, DEFAULT_USER_ID};

/// `POST /place_order`
pub async fn place_order(State(state): State<AppState>) -> Result<Json<OrderPlaced>, DomainError> {
    let order_id = state.orders.place(DEFAULT_USER_ID).await?;
    Ok(Json(OrderPlaced {
        message: "Order placed successfully!".into(),
        order_id,
    }))
}

/// `GET /get_orders`
pub async fn get_orders(State(state): State<AppState>) -> Result<Json<Vec<Order>>, DomainError> {
    Ok(Json(state.orders.list(DEFAULT_USER_ID).await?))
}
