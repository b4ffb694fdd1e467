//! Cart handlers

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;

use super::{AppState, MessageBody};
use crate::domain::{AddToCartRequest, CartLine, DomainError, DEFAULT_USER_ID};

/// `GET /get_cart`
pub async fn get_cart(State(state): State<AppState>) -> Result<Json<Vec<CartLine>>, DomainError> {
    let lines = state.carts.list(DEFAULT_USER_ID).await?;
    Ok(Json(lines))
}

/// `POST /add_to_cart`
pub async fn add_to_cart(
    State(state): State<AppState>,
    body: Result<Json<AddToCartRequest>, JsonRejection>,
) -> Result<Json<MessageBody>, DomainError> {
    // A body that is not JSON at all counts as missing fields
    let Json(request) = body.map_err(|e| {
        tracing::debug!(error = %e, "Unreadable add_to_cart body");
        DomainError::InvalidInput("Missing product_id or quantity".into())
    })?;
    let (product_id, quantity) = request.validate()?;

    state.carts.add(DEFAULT_USER_ID, product_id, quantity).await?;
    tracing::info!(product_id, quantity, "Added to cart");
    Ok(Json(MessageBody::new("Item added to cart successfully")))
}
