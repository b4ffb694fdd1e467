//! Cart Flows
//!
//! The click → request → store chains behind the add-to-cart controls and
//! the cart panel. Each flow is a linear async task; suspension happens only
//! at the client calls. Components run them with `spawn_local` and turn the
//! returned errors into notices.

use leptos::prelude::*;

use crate::api::CartApi;
use crate::error::CartError;
use crate::models::OrderPlaced;
use crate::store::{CartSnapshot, CartStore};

/// Read the cart and replace the store with the result.
///
/// A failed read is logged and stored as [`CartSnapshot::Unavailable`], which
/// the badge and the panel render; callers have nothing left to handle.
/// Concurrent syncs are not fenced: whichever resolves last wins.
pub async fn sync_cart<A: CartApi + ?Sized>(api: &A, store: CartStore) {
    let snapshot = match api.read_cart().await {
        Ok(state) => CartSnapshot::Loaded(state),
        Err(e) => {
            tracing::error!(error = %e, "Error fetching cart");
            CartSnapshot::Unavailable
        }
    };
    store.replace(snapshot);
}

/// Product id from an add-to-cart control's `data-product-id` attribute
pub fn parse_product_id(attr: Option<&str>) -> Result<u32, CartError> {
    attr.map(str::trim)
        .and_then(|raw| raw.parse::<u32>().ok())
        .ok_or(CartError::MissingProductId)
}

/// Add one unit of the control's product, then refresh the store.
///
/// Returns the service's confirmation message. On a write failure the store
/// is left untouched and no read is issued.
pub async fn add_to_cart<A: CartApi + ?Sized>(
    api: &A,
    store: CartStore,
    product_attr: Option<&str>,
) -> Result<String, CartError> {
    let product_id = parse_product_id(product_attr).inspect_err(|_| {
        tracing::error!(attr = ?product_attr, "Product ID not found on this button.");
    })?;

    let reply = api.add_item(product_id, 1).await.inspect_err(|e| {
        tracing::error!(product_id, error = %e, "Add to cart failed");
    })?;
    tracing::info!(product_id, message = %reply.message, "Added to cart");

    // The write stands even if the read-back fails
    sync_cart(api, store).await;
    Ok(reply.message)
}

/// Show the panel and load a fresh snapshot into it
pub async fn open_cart<A: CartApi + ?Sized>(
    api: &A,
    store: CartStore,
    panel_open: RwSignal<bool>,
) {
    panel_open.set(true);
    sync_cart(api, store).await;
}

/// Hide the panel. In-flight reads still land in the store.
pub fn close_cart(panel_open: RwSignal<bool>) {
    panel_open.set(false);
}

/// Place an order for the whole cart, then refresh the store
pub async fn place_order<A: CartApi + ?Sized>(api: &A, store: CartStore) -> Result<OrderPlaced, CartError> {
    let placed = api.place_order().await?;
    tracing::info!(order_id = placed.order_id, "Order placed");
    sync_cart(api, store).await;
    Ok(placed)
}
