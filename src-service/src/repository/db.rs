//! Database Connection and Setup
//!
//! Manages the SQLite connection, migrations and the initial catalog.

use rusqlite::Connection;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::{default_catalog, DomainResult};

/// Shared SQLite connection
#[derive(Clone)]
pub struct DbState {
    conn: Arc<Mutex<Connection>>,
}

impl DbState {
    /// Handle to the shared connection
    pub fn connection(&self) -> Arc<Mutex<Connection>> {
        self.conn.clone()
    }
}

/// Open (or create) the database at `db_path` and run migrations.
///
/// `:memory:` opens a private in-memory database.
pub async fn init_db(db_path: &Path) -> DomainResult<DbState> {
    let conn = if db_path == Path::new(":memory:") {
        Connection::open_in_memory()?
    } else {
        Connection::open(db_path)?
    };

    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    run_migrations(&conn)?;

    Ok(DbState { conn: Arc::new(Mutex::new(conn)) })
}

/// Insert the default catalog if there are no products yet.
///
/// Returns the number of products inserted.
pub async fn seed_catalog(db: &DbState) -> DomainResult<usize> {
    let conn = db.conn.lock().await;
    let existing: i64 = conn.query_row("SELECT COUNT(*) FROM products", [], |row| row.get(0))?;
    if existing > 0 {
        return Ok(0);
    }

    let catalog = default_catalog();
    let mut stmt = conn.prepare("INSERT INTO products (name, price) VALUES (?1, ?2)")?;
    for (name, price) in &catalog {
        stmt.execute(rusqlite::params![name, price])?;
    }
    tracing::info!(count = catalog.len(), "Seeded product catalog");
    Ok(catalog.len())
}

/// Run database migrations
fn run_migrations(conn: &Connection) -> DomainResult<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS products (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            price REAL NOT NULL
        );

        CREATE TABLE IF NOT EXISTS cart_items (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id INTEGER NOT NULL,
            product_id INTEGER NOT NULL REFERENCES products(id),
            quantity INTEGER NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_cart_items_user ON cart_items(user_id);

        CREATE TABLE IF NOT EXISTS orders (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id INTEGER NOT NULL,
            order_date TEXT NOT NULL,
            status TEXT NOT NULL DEFAULT 'Processing',
            total_price REAL NOT NULL
        );

        CREATE TABLE IF NOT EXISTS order_items (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            order_id INTEGER NOT NULL REFERENCES orders(id),
            product_id INTEGER NOT NULL REFERENCES products(id),
            quantity INTEGER NOT NULL,
            price_at_purchase REAL NOT NULL
        );",
    )?;
    Ok(())
}
