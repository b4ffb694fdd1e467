//! Product Lookups
//!
//! Products are read-only to the service; they are only ever looked up
//! while another repository holds the connection lock.

use rusqlite::{Connection, OptionalExtension};

use crate::domain::{DomainResult, Product};

pub(super) fn find_product(conn: &Connection, id: u32) -> DomainResult<Option<Product>> {
    let product = conn
        .query_row(
            "SELECT id, name, price FROM products WHERE id = ?1",
            [id],
            |row| {
                Ok(Product {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    price: row.get(2)?,
                })
            },
        )
        .optional()?;
    Ok(product)
}
