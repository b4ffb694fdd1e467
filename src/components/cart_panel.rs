//! Cart Panel Component
//!
//! Slide-in overlay listing the cart rows, the total and the order button.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::cart;
use crate::context::use_storefront;
use crate::notify::alert;
use crate::render::{self, CartRow, PanelBody};

#[component]
pub fn CartPanel() -> impl IntoView {
    let ctx = use_storefront();
    let view_model = Memo::new(move |_| render::panel(&ctx.store.snapshot()));
    let (ordering, set_ordering) = signal(false);

    let on_place_order = move |_| {
        if ordering.get_untracked() {
            return;
        }
        set_ordering.set(true);
        spawn_local(async move {
            match cart::place_order(&ctx.client(), ctx.store).await {
                Ok(placed) => alert(&placed.message),
                Err(e) => alert(e.notice()),
            }
            set_ordering.set(false);
        });
    };

    view! {
        <div
            id="cart-overlay"
            class=move || if ctx.panel_open.get() { "cart-overlay show-cart" } else { "cart-overlay" }
        >
            <div class="cart-panel">
                <div class="cart-header">
                    <h3>"Your Cart"</h3>
                    <button id="cart-close" class="cart-close" on:click=move |_| cart::close_cart(ctx.panel_open)>
                        "×"
                    </button>
                </div>

                <div id="cart-items" class="cart-items">
                    {move || match view_model.get().body {
                        PanelBody::Rows(rows) => rows
                            .into_iter()
                            .map(|row| view! { <CartRowView row=row /> })
                            .collect_view()
                            .into_any(),
                        body => {
                            let message = body.message().unwrap_or_default();
                            view! { <p class="cart-empty-message">{message}</p> }.into_any()
                        }
                    }}
                </div>

                <div class="cart-footer">
                    <div class="cart-total">
                        "Total: "
                        <span id="cart-total-price">{move || view_model.get().total}</span>
                    </div>
                    <button
                        id="place-order-btn"
                        class="place-order-btn"
                        disabled=move || ordering.get()
                        on:click=on_place_order
                    >
                        "Place Order"
                    </button>
                </div>
            </div>
        </div>
    }
}

/// One line of the cart panel
#[component]
fn CartRowView(row: CartRow) -> impl IntoView {
    let ctx = use_storefront();
    let product_id = row.product_id;

    let on_increment = move |_| {
        let attr = product_id.map(|id| id.to_string());
        spawn_local(async move {
            if let Err(e) = cart::add_to_cart(&ctx.client(), ctx.store, attr.as_deref()).await {
                alert(e.notice());
            }
        });
    };

    view! {
        <div class="cart-item" data-item-id=row.id.to_string()>
            <img src=row.image_url alt=row.name.clone() class="cart-item-img" />
            <div class="cart-item-info">
                <h4>{row.name}</h4>
                <span>{row.unit_price}</span>
                <span class="cart-item-line-total">{row.line_total}</span>
            </div>
            <div class="cart-item-actions">
                <button disabled=product_id.is_none() on:click=on_increment>"+"</button>
                <span>{row.quantity}</span>
                // No service endpoint removes single units
                <button disabled=true>"-"</button>
            </div>
        </div>
    }
}
