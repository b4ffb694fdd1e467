//! Cart Service Client
//!
//! The network boundary. Everything the page knows about the cart comes
//! through this trait.

mod http;

use async_trait::async_trait;

use crate::error::CartError;
use crate::models::{CartState, MessageResponse, OrderPlaced};

pub use http::HttpCartClient;

/// Requests against the remote cart service.
///
/// Implementations never touch the cart store: callers re-read to learn
/// the new state. Nothing here retries; `add_item` is additive and a retry
/// could add twice.
#[async_trait(?Send)]
pub trait CartApi {
    /// `GET /get_cart`. Fails with [`CartError::CartUnavailable`].
    async fn read_cart(&self) -> Result<CartState, CartError>;

    /// `POST /add_to_cart`. Fails with [`CartError::CartWriteFailed`].
    async fn add_item(&self, product_id: u32, quantity: u32) -> Result<MessageResponse, CartError>;

    /// `POST /place_order`. Fails with [`CartError::OrderFailed`].
    async fn place_order(&self) -> Result<OrderPlaced, CartError>;
}
