//! UI Components

mod add_to_cart_button;
mod cart_badge;
mod cart_panel;
mod site_header;
mod truck_button;

pub use add_to_cart_button::AddToCartButton;
pub use cart_badge::CartBadge;
pub use cart_panel::CartPanel;
pub use site_header::SiteHeader;
pub use truck_button::TruckButton;
