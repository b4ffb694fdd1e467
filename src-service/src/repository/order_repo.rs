//! Order Repository
//!
//! Placing an order converts the whole cart into an order in one transaction.

use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::Connection;
use std::sync::Arc;
use tokio::sync::Mutex;

use super::cart_repo::list_lines;
use crate::domain::{DomainError, DomainResult, Order, OrderLine};

/// SQLite implementation of orders
#[derive(Clone)]
pub struct OrderRepository {
    conn: Arc<Mutex<Connection>>,
}

impl OrderRepository {
    pub fn new(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    /// Turn the user's cart into an order and empty the cart.
    ///
    /// Prices are captured at purchase time. Returns the new order id.
    pub async fn place(&self, user_id: u32) -> DomainResult<u32> {
        let mut conn = self.conn.lock().await;
        let tx = conn.transaction()?;

        let lines = list_lines(&tx, user_id)?;
        if lines.is_empty() {
            return Err(DomainError::Conflict("Your cart is empty. Nothing to order.".into()));
        }

        let total: f64 = lines.iter().map(|l| l.price * f64::from(l.quantity)).sum();
        tx.execute(
            "INSERT INTO orders (user_id, order_date, status, total_price) VALUES (?1, ?2, 'Processing', ?3)",
            rusqlite::params![user_id, Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true), total],
        )?;
        let order_id = u32::try_from(tx.last_insert_rowid())
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        for line in &lines {
            tx.execute(
                "INSERT INTO order_items (order_id, product_id, quantity, price_at_purchase) VALUES (?1, ?2, ?3, ?4)",
                rusqlite::params![order_id, line.product_id, line.quantity, line.price],
            )?;
        }
        tx.execute("DELETE FROM cart_items WHERE user_id = ?1", [user_id])?;

        tx.commit()?;
        tracing::info!(order_id, lines = lines.len(), total, "Order placed");
        Ok(order_id)
    }

    /// Orders of a user, newest first
    pub async fn list(&self, user_id: u32) -> DomainResult<Vec<Order>> {
        let conn = self.conn.lock().await;

        let mut stmt = conn.prepare(
            "SELECT id, order_date, status, total_price FROM orders
             WHERE user_id = ?1
             ORDER BY order_date DESC, id DESC",
        )?;
        let headers = stmt
            .query_map([user_id], |row| {
                Ok((
                    row.get::<_, u32>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, f64>(3)?,
                ))
            })?
            .collect::<Result<Vec<_>, _>>()?;

        let mut orders = Vec::with_capacity(headers.len());
        for (order_id, order_date, status, total_price) in headers {
            orders.push(Order {
                order_id,
                date: display_date(&order_date),
                status,
                total_price,
                items: order_lines(&conn, order_id)?,
            });
        }
        Ok(orders)
    }
}

fn order_lines(conn: &Connection, order_id: u32) -> DomainResult<Vec<OrderLine>> {
    let mut stmt = conn.prepare(
        "SELECT p.name, oi.quantity, oi.price_at_purchase
         FROM order_items oi
         JOIN products p ON p.id = oi.product_id
         WHERE oi.order_id = ?1
         ORDER BY oi.id",
    )?;
    let lines = stmt
        .query_map([order_id], |row| {
            Ok(OrderLine {
                name: row.get(0)?,
                quantity: row.get(1)?,
                price: row.get(2)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(lines)
}

/// "2025-03-04T10:00:00.000000Z" -> "March 04, 2025"; unparsable dates pass through
fn display_date(stored: &str) -> String {
    DateTime::parse_from_rfc3339(stored)
        .map(|d| d.format("%B %d, %Y").to_string())
        .unwrap_or_else(|_| stored.to_string())
}

#[cfg(test)]
mod tests {
    use super::display_date;

    #[test]
    fn test_display_date() {
        assert_eq!(display_date("2025-03-04T10:00:00+00:00"), "March 04, 2025");
        assert_eq!(display_date("yesterday"), "yesterday");
    }
}
