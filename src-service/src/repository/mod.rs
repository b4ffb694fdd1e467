//! Repository Layer
//!
//! SQLite data access for products, carts and orders.

mod db;
mod product_repo;
mod cart_repo;
mod order_repo;


pub use db::{init_db, seed_catalog, DbState};
pub use cart_repo::CartRepository;
pub use order_repo::OrderRepository;
