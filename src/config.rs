//! Frontend Configuration
//!
//! The cart service location. Fixed at build time through
//! `STOREFRONT_API_BASE`; a browser bundle has no runtime environment.

/// Where the cart service listens when nothing else is configured
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:5000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Absolute base URL without trailing slash
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }

    pub fn from_build_env() -> Self {
        Self::new(option_env!("STOREFRONT_API_BASE").unwrap_or(DEFAULT_API_BASE))
    }

    /// Absolute URL of a service path such as `/get_cart`
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}
