//! Cart Rendering
//!
//! Pure projections of a [`CartSnapshot`] into what the badge and the cart
//! panel display. Components only map these values onto DOM nodes, so the
//! same snapshot always renders the same output.

use crate::error::CART_FAILED_NOTICE;
use crate::models::CartItem;
use crate::store::CartSnapshot;

pub const EMPTY_CART_MESSAGE: &str = "Your cart is empty.";
pub const ITEM_IMAGE_PLACEHOLDER: &str = "https://i.postimg.cc/k4Zj2mXv/featured3.png";

/// `$` amount with two decimals
pub fn format_price(amount: f64) -> String {
    format!("${amount:.2}")
}

/// Badge counter value: total quantity, or 0 when the cart is unknown
pub fn badge_count(snapshot: &CartSnapshot) -> u64 {
    match snapshot {
        CartSnapshot::Loaded(state) => state.count(),
        CartSnapshot::Unavailable => 0,
    }
}

/// One visible cart row
#[derive(Debug, Clone, PartialEq)]
pub struct CartRow {
    pub id: u32,
    /// Target of the row's "+" control, if known
    pub product_id: Option<u32>,
    pub name: String,
    pub image_url: &'static str,
    pub unit_price: String,
    pub quantity: u32,
    pub line_total: String,
}

impl From<&CartItem> for CartRow {
    fn from(item: &CartItem) -> Self {
        Self {
            id: item.id,
            product_id: item.product_id,
            name: item.name.clone(),
            image_url: ITEM_IMAGE_PLACEHOLDER,
            unit_price: format_price(item.unit_price),
            quantity: item.quantity,
            line_total: format_price(item.line_total()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PanelBody {
    Empty,
    Failed,
    Rows(Vec<CartRow>),
}

impl PanelBody {
    /// Placeholder text shown instead of rows
    pub fn message(&self) -> Option<&'static str> {
        match self {
            PanelBody::Empty => Some(EMPTY_CART_MESSAGE),
            PanelBody::Failed => Some(CART_FAILED_NOTICE),
            PanelBody::Rows(_) => None,
        }
    }
}

/// Everything the cart panel shows
#[derive(Debug, Clone, PartialEq)]
pub struct PanelView {
    pub body: PanelBody,
    pub total: String,
}

pub fn panel(snapshot: &CartSnapshot) -> PanelView {
    match snapshot {
        CartSnapshot::Unavailable => PanelView { body: PanelBody::Failed, total: format_price(0.0) },
        CartSnapshot::Loaded(state) if state.is_empty() => {
            PanelView { body: PanelBody::Empty, total: format_price(0.0) }
        }
        CartSnapshot::Loaded(state) => PanelView {
            body: PanelBody::Rows(state.items().iter().map(CartRow::from).collect()),
            total: format_price(state.total()),
        },
    }
}
