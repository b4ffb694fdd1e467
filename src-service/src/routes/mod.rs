//! Routes Layer
//!
//! HTTP handlers that bridge the storefront page to the repositories.

mod cart_routes;
mod order_routes;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::domain::DomainError;
use crate::repository::{CartRepository, DbState, OrderRepository};

pub use cart_routes::*;
pub use order_routes::*;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub carts: CartRepository,
    pub orders: OrderRepository,
}

impl AppState {
    pub fn new(db: &DbState) -> Self {
        Self {
            carts: CartRepository::new(db.connection()),
            orders: OrderRepository::new(db.connection()),
        }
    }
}

/// `{"message": ...}` body used by every write endpoint and every error
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageBody {
    pub message: String,
}

impl MessageBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

impl IntoResponse for DomainError {
    fn into_response(self) -> Response {
        let status = match &self {
            DomainError::NotFound(_) => StatusCode::NOT_FOUND,
            DomainError::InvalidInput(_) | DomainError::Conflict(_) => StatusCode::BAD_REQUEST,
            DomainError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self, "Request failed");
            MessageBody::new("Internal server error")
        } else {
            tracing::debug!(error = %self, "Request rejected");
            MessageBody::new(self.message())
        };

        (status, Json(body)).into_response()
    }
}

/// Build the service router.
///
/// CORS is open to any origin: the page is served separately from the service.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/get_cart", get(get_cart))
        .route("/add_to_cart", post(add_to_cart))
        .route("/place_order", post(place_order))
        .route("/get_orders", get(get_orders))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
