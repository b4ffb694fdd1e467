//! Storefront Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::api::HttpCartClient;
use crate::config::ApiConfig;
use crate::store::CartStore;

/// Page-wide cart state provided via context
#[derive(Clone, Copy)]
pub struct StorefrontContext {
    /// Last known cart snapshot
    pub store: CartStore,
    /// Whether the cart overlay is shown
    pub panel_open: RwSignal<bool>,
    config: StoredValue<ApiConfig>,
}

impl StorefrontContext {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            store: CartStore::new(),
            panel_open: RwSignal::new(false),
            config: StoredValue::new(config),
        }
    }

    /// Client for the configured cart service
    pub fn client(&self) -> HttpCartClient {
        HttpCartClient::new(self.config.get_value())
    }
}

/// Get the storefront context
pub fn use_storefront() -> StorefrontContext {
    expect_context::<StorefrontContext>()
}
