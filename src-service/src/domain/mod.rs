//! Domain Layer
//!
//! Contains the cart service entities and errors.
//! This layer has NO storage or HTTP dependencies (except serde for serialization).

mod error;
mod product;
mod cart;
mod order;

pub use error::{DomainError, DomainResult};
pub use product::{Product, default_catalog};
pub use cart::{CartLine, AddToCartRequest};
pub use order::{Order, OrderLine, OrderPlaced};

/// The service has no accounts; every request acts on this user.
pub const DEFAULT_USER_ID: u32 = 1;
