//! Cart Repository
//!
//! One cart row per (user, product); adding an existing product grows its quantity.

use rusqlite::{Connection, OptionalExtension};
use std::sync::Arc;
use tokio::sync::Mutex;

use super::product_repo::find_product;
use crate::domain::{CartLine, DomainError, DomainResult};

/// SQLite implementation of the cart
#[derive(Clone)]
pub struct CartRepository {
    conn: Arc<Mutex<Connection>>,
}

impl CartRepository {
    pub fn new(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    /// Add `quantity` of a product to the user's cart
    pub async fn add(&self, user_id: u32, product_id: u32, quantity: u32) -> DomainResult<()> {
        let mut conn = self.conn.lock().await;
        let tx = conn.transaction()?;

        if find_product(&tx, product_id)?.is_none() {
            return Err(DomainError::NotFound("Product not found".into()));
        }

        let existing: Option<(u32, u32)> = tx
            .query_row(
                "SELECT id, quantity FROM cart_items WHERE user_id = ?1 AND product_id = ?2",
                [user_id, product_id],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .optional()?;

        match existing {
            Some((id, current)) => {
                // Stored quantities must stay readable as u32
                let total = current
                    .checked_add(quantity)
                    .ok_or_else(|| DomainError::InvalidInput("Quantity too large".into()))?;
                tx.execute("UPDATE cart_items SET quantity = ?1 WHERE id = ?2", [total, id])?;
            }
            None => {
                tx.execute(
                    "INSERT INTO cart_items (user_id, product_id, quantity) VALUES (?1, ?2, ?3)",
                    [user_id, product_id, quantity],
                )?;
            }
        }

        tx.commit()?;
        Ok(())
    }

    /// Cart lines of a user in insertion order
    pub async fn list(&self, user_id: u32) -> DomainResult<Vec<CartLine>> {
        let conn = self.conn.lock().await;
        list_lines(&conn, user_id)
    }
}

/// Cart lines joined with their products; rows whose product vanished are skipped
pub(super) fn list_lines(conn: &Connection, user_id: u32) -> DomainResult<Vec<CartLine>> {
    let mut stmt = conn.prepare(
        "SELECT c.id, p.id, p.name, p.price, c.quantity
         FROM cart_items c
         JOIN products p ON p.id = c.product_id
         WHERE c.user_id = ?1
         ORDER BY c.id",
    )?;
    let lines = stmt
        .query_map([user_id], |row| {
            Ok(CartLine {
                id: row.get(0)?,
                product_id: row.get(1)?,
                name: row.get(2)?,
                price: row.get(3)?,
                quantity: row.get(4)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(lines)
}
