//! Site Header Component
//!
//! Fixed header with the section links, the mobile menu toggle and the cart
//! icon. Scrolling updates the header background and the active link.

use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::cart;
use crate::components::CartBadge;
use crate::context::use_storefront;
use crate::nav::{self, SectionBounds};

/// `(section id, link label)` in page order
const NAV_LINKS: [(&str, &str); 5] = [
    ("home", "Home"),
    ("featured", "Featured"),
    ("women", "Women"),
    ("new", "New"),
    ("checkout", "Checkout"),
];

/// Measure every `section[id]` currently in the document
fn section_bounds() -> Vec<SectionBounds> {
    let Ok(nodes) = document().query_selector_all("section[id]") else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<web_sys::HtmlElement>().ok())
        .map(|el| SectionBounds {
            id: el.id(),
            top: f64::from(el.offset_top()),
            height: f64::from(el.offset_height()),
        })
        .collect()
}

#[component]
pub fn SiteHeader() -> impl IntoView {
    let ctx = use_storefront();
    let (menu_open, set_menu_open) = signal(false);
    let (scrolled, set_scrolled) = signal(false);
    let (active, set_active) = signal::<Option<String>>(Some("home".to_string()));

    let handle = window_event_listener(ev::scroll, move |_| {
        let scroll_y = window().scroll_y().unwrap_or_default();
        set_scrolled.set(nav::header_is_scrolled(scroll_y));
        let sections = section_bounds();
        set_active.set(nav::active_section(scroll_y, &sections).map(str::to_string));
    });
    on_cleanup(move || handle.remove());

    let on_cart = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        spawn_local(async move {
            cart::open_cart(&ctx.client(), ctx.store, ctx.panel_open).await;
        });
    };

    view! {
        <header id="header" class=move || if scrolled.get() { "l-header scroll-header" } else { "l-header" }>
            <nav class="nav bd-grid">
                <a href="#home" class="nav-logo">"Sneakers"</a>

                <div id="nav-menu" class=move || if menu_open.get() { "nav-menu show" } else { "nav-menu" }>
                    <ul class="nav-list">
                        {NAV_LINKS
                            .into_iter()
                            .map(|(id, label)| {
                                let is_active = move || active.with(|a| a.as_deref() == Some(id));
                                view! {
                                    <li class="nav-item">
                                        <a
                                            href=format!("#{id}")
                                            class=move || if is_active() { "nav-link active" } else { "nav-link" }
                                            on:click=move |_| set_menu_open.set(false)
                                        >
                                            {label}
                                        </a>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>

                <div class="nav-shop" on:click=on_cart>
                    <i class="bx bx-shopping-bag"></i>
                    <CartBadge />
                </div>

                <div id="nav-toggle" class="nav-toggle" on:click=move |_| set_menu_open.update(|open| *open = !*open)>
                    <i class="bx bx-grid-alt"></i>
                </div>
            </nav>
        </header>
    }
}
