//! Service Configuration
//!
//! Command line flags with environment fallbacks.

use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Cart service for the storefront page
#[derive(Debug, Clone, Parser)]
#[command(name = "storefront-service", version, about)]
pub struct ServiceConfig {
    /// Address to listen on
    #[arg(long, env = "STOREFRONT_BIND", default_value = "127.0.0.1:5000")]
    pub bind: SocketAddr,

    /// SQLite database file (`:memory:` for a throwaway database)
    #[arg(long, env = "STOREFRONT_DB", default_value = "site.db")]
    pub db: PathBuf,

    /// Do not insert the default catalog into an empty database
    #[arg(long)]
    pub no_seed: bool,
}

impl ServiceConfig {
    /// Throwaway configuration: in-memory database on an ephemeral port
    pub fn ephemeral() -> Self {
        Self {
            bind: SocketAddr::from(([127, 0, 0, 1], 0)),
            db: PathBuf::from(":memory:"),
            no_seed: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServiceConfig::parse_from(["storefront-service"]);
        assert_eq!(config.bind, "127.0.0.1:5000".parse().unwrap());
        assert_eq!(config.db, PathBuf::from("site.db"));
        assert!(!config.no_seed);
    }

    #[test]
    fn test_flags() {
        let config = ServiceConfig::parse_from([
            "storefront-service",
            "--bind",
            "0.0.0.0:8080",
            "--db",
            ":memory:",
            "--no-seed",
        ]);
        assert_eq!(config.bind.port(), 8080);
        assert_eq!(config.db, PathBuf::from(":memory:"));
        assert!(config.no_seed);
    }
}
