//! Cart Badge Component
//!
//! Item counter next to the cart icon.

use leptos::prelude::*;

use crate::context::use_storefront;
use crate::render::badge_count;

#[component]
pub fn CartBadge() -> impl IntoView {
    let ctx = use_storefront();

    view! {
        <span id="cart-counter" class="cart-counter">
            {move || badge_count(&ctx.store.snapshot())}
        </span>
    }
}
