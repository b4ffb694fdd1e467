//! Add To Cart Button Component
//!
//! Link-styled control carrying the product in `data-product-id`.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::cart;
use crate::context::use_storefront;
use crate::notify::alert;

/// Adds one unit of `product_id` to the cart and alerts the outcome.
///
/// Without a `product_id` the click only reports a local error.
#[component]
pub fn AddToCartButton(
    #[prop(optional)] product_id: Option<u32>,
    #[prop(into)] class: String,
    children: Children,
) -> impl IntoView {
    let ctx = use_storefront();

    let on_click = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        let attr = ev
            .current_target()
            .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
            .and_then(|el| el.get_attribute("data-product-id"));

        spawn_local(async move {
            match cart::add_to_cart(&ctx.client(), ctx.store, attr.as_deref()).await {
                Ok(message) => alert(&message),
                Err(e) => alert(e.notice()),
            }
        });
    };

    view! {
        <a
            href="#"
            class=class
            data-product-id=product_id.map(|id| id.to_string())
            on:click=on_click
        >
            {children()}
        </a>
    }
}
