//! Storefront App
//!
//! Single page with the catalog sections, the checkout button and the cart
//! overlay.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::cart;
use crate::components::{AddToCartButton, CartPanel, SiteHeader, TruckButton};
use crate::config::ApiConfig;
use crate::context::StorefrontContext;

/// A product card on the page. `id` is the service's product id.
struct Showcase {
    id: u32,
    name: &'static str,
    price: &'static str,
    image: &'static str,
}

const FEATURED: [Showcase; 4] = [
    Showcase { id: 1, name: "Nike Free RN", price: "$149.99", image: "https://i.postimg.cc/k4Zj2mXv/featured3.png" },
    Showcase { id: 2, name: "Nike Free RN", price: "$149.99", image: "https://i.postimg.cc/k4Zj2mXv/featured3.png" },
    Showcase { id: 3, name: "Nike Free TR", price: "$129.99", image: "https://i.postimg.cc/k4Zj2mXv/featured3.png" },
    Showcase { id: 4, name: "Nike Free TR", price: "$129.99", image: "https://i.postimg.cc/k4Zj2mXv/featured3.png" },
];

const WOMEN: [Showcase; 2] = [
    Showcase { id: 5, name: "Nike GS Pink", price: "$129.99", image: "https://i.postimg.cc/k4Zj2mXv/featured3.png" },
    Showcase { id: 6, name: "Nike Get 5", price: "$129.99", image: "https://i.postimg.cc/k4Zj2mXv/featured3.png" },
];

const NEW_ARRIVALS: [Showcase; 3] = [
    Showcase { id: 7, name: "New Mens Shoes", price: "$79.99", image: "https://i.postimg.cc/k4Zj2mXv/featured3.png" },
    Showcase { id: 8, name: "New Sneaker 2", price: "$99.99", image: "https://i.postimg.cc/k4Zj2mXv/featured3.png" },
    Showcase { id: 9, name: "New Sneaker 3", price: "$89.99", image: "https://i.postimg.cc/k4Zj2mXv/featured3.png" },
];

#[component]
pub fn App() -> impl IntoView {
    let ctx = StorefrontContext::new(ApiConfig::from_build_env());
    provide_context(ctx);

    // Badge shows the service's count from the first paint on
    Effect::new(move |_| {
        spawn_local(async move {
            cart::sync_cart(&ctx.client(), ctx.store).await;
        });
    });

    view! {
        <SiteHeader />

        <main class="l-main">
            <section id="home" class="home">
                <div class="home-container bd-grid">
                    <div class="home-sneaker">
                        <img src="https://i.postimg.cc/k4Zj2mXv/featured3.png" alt="" class="home-img" />
                    </div>
                    <div class="home-data">
                        <span class="home-new">"New in"</span>
                        <h1 class="home-title">"YEEZY BOOST" <br /> "SPLY - 350"</h1>
                        <p class="home-description">"Explore the new collection of sneakers"</p>
                        <a href="#featured" class="button">"Explore now"</a>
                    </div>
                </div>
            </section>

            <section id="featured" class="featured section">
                <h2 class="section-title">"FEATURED"</h2>
                <div class="featured-container bd-grid">
                    {FEATURED.iter().map(card_light).collect_view()}
                </div>
            </section>

            <section id="women" class="women section">
                <h2 class="section-title">"WOMEN SNEAKERS"</h2>
                <div class="women-container bd-grid">
                    {WOMEN.iter().map(card_light).collect_view()}
                </div>
            </section>

            <section id="new" class="new section">
                <h2 class="section-title">"NEW COLLECTION"</h2>
                <div class="new-container">
                    {NEW_ARRIVALS
                        .iter()
                        .map(|p| view! {
                            <div class="new-sneaker">
                                <div class="sneaker-circle"></div>
                                <img src=p.image alt=p.name class="sneaker-img" />
                                <span class="sneaker-name">{p.name}</span>
                                <span class="sneaker-price">{p.price}</span>
                                <AddToCartButton product_id=p.id class="button">"Add to Cart"</AddToCartButton>
                            </div>
                        })
                        .collect_view()}
                </div>
            </section>

            <section id="checkout" class="checkout section">
                <h2 class="section-title">"CHECKOUT"</h2>
                <div class="checkout-container bd-grid">
                    <TruckButton />
                </div>
            </section>
        </main>

        <CartPanel />
    }
}

/// Light-styled catalog card
fn card_light(p: &Showcase) -> impl IntoView {
    view! {
        <article class="sneaker">
            <div class="sneaker-sale">"Sale"</div>
            <img src=p.image alt=p.name class="sneaker-img" />
            <span class="sneaker-name">{p.name}</span>
            <span class="sneaker-price">{p.price}</span>
            <AddToCartButton product_id=p.id class="button-light">
                "Add to Cart " <i class="bx bx-right-arrow-alt button-icon"></i>
            </AddToCartButton>
        </article>
    }
}
