//! Storefront Cart Service
//!
//! Layered architecture:
//! - domain: Core entities and business rules
//! - repository: SQLite data access
//! - routes: HTTP handlers

use std::net::SocketAddr;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

pub mod config;
pub mod domain;
pub mod repository;
pub mod routes;

pub use config::ServiceConfig;
pub use routes::{router, AppState};

use repository::{init_db, seed_catalog};

/// A service bound to its listener and serving in the background
pub struct RunningService {
    pub addr: SocketAddr,
    pub handle: JoinHandle<std::io::Result<()>>,
}

impl RunningService {
    /// Base URL clients should use, e.g. `http://127.0.0.1:5000`
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }
}

/// Open the database, bind the listener and start serving
pub async fn start(config: &ServiceConfig) -> anyhow::Result<RunningService> {
    let db = init_db(&config.db).await?;
    if !config.no_seed {
        seed_catalog(&db).await?;
    }

    let listener = TcpListener::bind(config.bind).await?;
    let addr = listener.local_addr()?;
    let app = router(AppState::new(&db));

    tracing::info!(%addr, db = %config.db.display(), "Cart service listening");
    let handle = tokio::spawn(async move { axum::serve(listener, app).await });

    Ok(RunningService { addr, handle })
}
