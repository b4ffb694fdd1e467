//! Cart Errors
//!
//! Every cart failure ends at the handler that triggered it and becomes a
//! notice; none of them escape to the page.

use thiserror::Error;

/// Shown when an add-to-cart write fails, whatever the cause
pub const ADD_FAILED_NOTICE: &str =
    "Failed to add item to cart. Please check your backend connection.";
/// Shown in the panel when the cart could not be read
pub const CART_FAILED_NOTICE: &str = "Failed to load cart. Please try again.";
/// Shown when an add-to-cart control has no usable product id
pub const MISSING_PRODUCT_NOTICE: &str = "This product can't be added to the cart.";
/// Fallback when the service rejects an order without a message
pub const ORDER_FAILED_NOTICE: &str = "Failed to place order. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartError {
    /// Read failed (transport, non-200 status or undecodable body)
    #[error("cart unavailable: {0}")]
    CartUnavailable(String),
    /// Write failed (transport or non-200 status)
    #[error("cart write failed: {0}")]
    CartWriteFailed(String),
    /// The add-to-cart control is misconfigured; nothing was sent
    #[error("add-to-cart control has no product id")]
    MissingProductId,
    /// Order rejected or not delivered; carries the text to show
    #[error("order failed: {0}")]
    OrderFailed(String),
}

impl CartError {
    /// User-facing text for this failure
    pub fn notice(&self) -> &str {
        match self {
            CartError::CartUnavailable(_) => CART_FAILED_NOTICE,
            CartError::CartWriteFailed(_) => ADD_FAILED_NOTICE,
            CartError::MissingProductId => MISSING_PRODUCT_NOTICE,
            CartError::OrderFailed(message) => message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_failures_share_one_notice() {
        let transport = CartError::CartWriteFailed("Network error: connection refused".into());
        let status = CartError::CartWriteFailed("HTTP 500".into());
        assert_eq!(transport.notice(), status.notice());
        assert_eq!(status.notice(), ADD_FAILED_NOTICE);
    }

    #[test]
    fn test_order_notice_is_service_message() {
        let err = CartError::OrderFailed("Your cart is empty. Nothing to order.".into());
        assert_eq!(err.notice(), "Your cart is empty. Nothing to order.");
    }
}
