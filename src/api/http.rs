//! HTTP implementation of [`CartApi`] over `reqwest`.

use async_trait::async_trait;
use reqwest::StatusCode;

use super::CartApi;
use crate::config::ApiConfig;
use crate::error::{CartError, ORDER_FAILED_NOTICE};
use crate::models::{AddToCartArgs, CartState, MessageResponse, OrderPlaced};

/// Cart client talking to the service at `config.base_url`
#[derive(Debug, Clone)]
pub struct HttpCartClient {
    config: ApiConfig,
    client: reqwest::Client,
}

impl HttpCartClient {
    pub fn new(config: ApiConfig) -> Self {
        Self { config, client: reqwest::Client::new() }
    }
}

#[async_trait(?Send)]
impl CartApi for HttpCartClient {
    async fn read_cart(&self) -> Result<CartState, CartError> {
        let resp = self
            .client
            .get(self.config.endpoint("/get_cart"))
            .send()
            .await
            .map_err(|e| CartError::CartUnavailable(format!("Network error: {e}")))?;

        if resp.status() != StatusCode::OK {
            return Err(CartError::CartUnavailable(format!("HTTP error! Status: {}", resp.status())));
        }

        let state: CartState = resp
            .json()
            .await
            .map_err(|e| CartError::CartUnavailable(format!("Parse error: {e}")))?;
        tracing::debug!(lines = state.items().len(), "Read cart");
        Ok(state)
    }

    async fn add_item(&self, product_id: u32, quantity: u32) -> Result<MessageResponse, CartError> {
        let resp = self
            .client
            .post(self.config.endpoint("/add_to_cart"))
            .json(&AddToCartArgs { product_id, quantity })
            .send()
            .await
            .map_err(|e| CartError::CartWriteFailed(format!("Network error: {e}")))?;

        if resp.status() != StatusCode::OK {
            return Err(CartError::CartWriteFailed(format!("HTTP error! Status: {}", resp.status())));
        }

        resp.json()
            .await
            .map_err(|e| CartError::CartWriteFailed(format!("Parse error: {e}")))
    }

    async fn place_order(&self) -> Result<OrderPlaced, CartError> {
        let resp = self
            .client
            .post(self.config.endpoint("/place_order"))
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "Order request not delivered");
                CartError::OrderFailed(ORDER_FAILED_NOTICE.into())
            })?;

        if resp.status() != StatusCode::OK {
            let status = resp.status();
            // The service explains rejections (e.g. empty cart) in a message body
            let message = match resp.json::<MessageResponse>().await {
                Ok(body) => body.message,
                Err(_) => ORDER_FAILED_NOTICE.to_string(),
            };
            tracing::warn!(%status, %message, "Order rejected");
            return Err(CartError::OrderFailed(message));
        }

        resp.json()
            .await
            .map_err(|e| CartError::OrderFailed(format!("{ORDER_FAILED_NOTICE} ({e})")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ADD_FAILED_NOTICE;
    use crate::store::{CartSnapshot, CartStore};
    use axum::http::StatusCode as AxumStatus;
    use axum::routing::{get, post};
    use axum::Router;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use storefront_service::{start, RunningService, ServiceConfig};

    async fn spawn_service() -> (RunningService, HttpCartClient) {
        let service = start(&ServiceConfig::ephemeral()).await.expect("Failed to start service");
        let client = HttpCartClient::new(ApiConfig::new(service.base_url()));
        (service, client)
    }

    /// Base URL nothing listens on
    async fn dead_endpoint() -> ApiConfig {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        ApiConfig::new(format!("http://{addr}"))
    }

    /// Service whose `/add_to_cart` always answers 500; counts `/get_cart` hits
    async fn failing_writes() -> (ApiConfig, Arc<AtomicUsize>) {
        let reads = Arc::new(AtomicUsize::new(0));
        let counter = reads.clone();
        let app = Router::new()
            .route("/add_to_cart", post(|| async { AxumStatus::INTERNAL_SERVER_ERROR }))
            .route(
                "/get_cart",
                get(move || {
                    let counter = counter.clone();
                    async move {
                        counter.fetch_add(1, Ordering::SeqCst);
                        "[]"
                    }
                }),
            );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, app).await });
        (ApiConfig::new(format!("http://{addr}")), reads)
    }

    #[tokio::test]
    async fn test_read_empty_cart() {
        let (_service, client) = spawn_service().await;
        let state = client.read_cart().await.expect("Read failed");
        assert!(state.is_empty());
    }

    #[tokio::test]
    async fn test_add_then_read_increments_by_one() {
        let (_service, client) = spawn_service().await;

        client.add_item(5, 1).await.unwrap();
        let before = client.read_cart().await.unwrap();
        let before_qty = before.find_product(5).map(|item| item.quantity).unwrap_or(0);

        let reply = client.add_item(5, 1).await.expect("Add failed");
        assert_eq!(reply.message, "Item added to cart successfully");

        let after = client.read_cart().await.unwrap();
        let line = after.find_product(5).expect("Product missing after add");
        assert_eq!(line.quantity, before_qty + 1);
        assert_eq!(line.name, "Nike GS Pink");
        assert_eq!(after.count(), before.count() + 1);
    }

    #[tokio::test]
    async fn test_count_of_billions_in_cart() {
        let (_service, client) = spawn_service().await;

        client.add_item(1, 3_000_000_000).await.unwrap();
        client.add_item(2, 3_000_000_000).await.unwrap();

        let state = client.read_cart().await.expect("Read failed");
        assert_eq!(state.count(), 6_000_000_000);
    }

    #[tokio::test]
    async fn test_add_unknown_product_is_write_failure() {
        let (_service, client) = spawn_service().await;
        let result = client.add_item(404, 1).await;
        assert!(matches!(result, Err(CartError::CartWriteFailed(_))));
    }

    #[tokio::test]
    async fn test_add_answered_with_500_is_write_failure() {
        let (config, _) = failing_writes().await;
        let client = HttpCartClient::new(config);

        let err = client.add_item(1, 1).await.unwrap_err();
        assert_eq!(
            err,
            CartError::CartWriteFailed("HTTP error! Status: 500 Internal Server Error".into())
        );
        assert_eq!(err.notice(), ADD_FAILED_NOTICE);
    }

    #[tokio::test]
    async fn test_add_flow_on_500_skips_read_and_keeps_store() {
        let (config, reads) = failing_writes().await;
        let client = HttpCartClient::new(config);
        let store = CartStore::new();

        let err = crate::cart::add_to_cart(&client, store, Some("1")).await.unwrap_err();

        assert_eq!(err.notice(), ADD_FAILED_NOTICE);
        assert_eq!(reads.load(Ordering::SeqCst), 0);
        assert_eq!(store.snapshot_untracked(), CartSnapshot::default());
    }

    #[tokio::test]
    async fn test_non_success_read_is_unavailable() {
        let (service, _) = spawn_service().await;
        let client = HttpCartClient::new(ApiConfig::new(format!("{}/missing", service.base_url())));
        assert!(matches!(client.read_cart().await, Err(CartError::CartUnavailable(_))));
    }

    #[tokio::test]
    async fn test_transport_failures() {
        let client = HttpCartClient::new(dead_endpoint().await);
        assert!(matches!(client.read_cart().await, Err(CartError::CartUnavailable(_))));
        assert!(matches!(client.add_item(1, 1).await, Err(CartError::CartWriteFailed(_))));
        assert_eq!(
            client.place_order().await,
            Err(CartError::OrderFailed(ORDER_FAILED_NOTICE.into()))
        );
    }

    #[tokio::test]
    async fn test_place_order_reports_service_message() {
        let (_service, client) = spawn_service().await;

        let result = client.place_order().await;
        assert_eq!(
            result,
            Err(CartError::OrderFailed("Your cart is empty. Nothing to order.".into()))
        );

        client.add_item(1, 1).await.unwrap();
        let placed = client.place_order().await.expect("Order failed");
        assert_eq!(placed.message, "Order placed successfully!");
        assert!(client.read_cart().await.unwrap().is_empty());
    }
}
