//! Truck Button Component
//!
//! Checkout button playing the delivery animation. Each instance owns its
//! own [`DeliveryAnimation`].

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::delivery::{DeliveryAnimation, TimeoutScheduler};

#[component]
pub fn TruckButton(#[prop(into, default = "Complete Order".to_string())] label: String) -> impl IntoView {
    let animation = DeliveryAnimation::new();
    let state = animation.state();

    let on_click = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        spawn_local(async move {
            let press = animation.click(&TimeoutScheduler).await;
            tracing::debug!(?press, "Truck button clicked");
        });
    };

    view! {
        <button
            class=move || state.with(|s| s.phase.button_class())
            style=move || state.with(|s| s.visuals.button_style())
            on:click=on_click
        >
            <span class="default">{label}</span>
            <span class="success">
                "Order Placed"
                <svg viewBox="0 0 12 10">
                    <polyline points="1.5 6 4.5 9 10.5 1"></polyline>
                </svg>
            </span>
            <div class="truck" style=move || state.with(|s| s.visuals.truck_style())>
                <div class="wheel"></div>
                <div class="back"></div>
                <div class="front"></div>
                <div class="box" style=move || state.with(|s| s.visuals.box_style())></div>
            </div>
        </button>
    }
}
