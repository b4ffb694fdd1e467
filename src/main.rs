//! Storefront Frontend Entry Point

mod api;
mod app;
mod cart;
mod components;
mod config;
mod context;
mod delivery;
mod error;
mod logging;
mod models;
mod nav;
mod notify;
mod render;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init();
    tracing::info!(api = %config::ApiConfig::from_build_env().base_url, "Storefront starting");
    mount_to_body(App);
}
