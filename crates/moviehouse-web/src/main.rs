//! Server entry point.
//!
//! Parses flags, initializes tracing, and hands off to the bootstrap
//! composition root.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use moviehouse_web::{ServerConfig, start_server};

/// Server-rendered movie CRUD site.
#[derive(Parser, Debug)]
#[command(name = "moviehouse", version, about)]
struct Cli {
    /// Port to listen on.
    #[arg(long, env = "MOVIEHOUSE_PORT")]
    port: Option<u16>,

    /// Path to the SQLite database file.
    #[arg(long, env = "MOVIEHOUSE_DB")]
    db: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables before clap reads them
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let cli = Cli::parse();

    let mut config = ServerConfig::with_defaults();
    if let Some(port) = cli.port {
        config.port = port;
    }
    if let Some(db) = cli.db {
        config.db_path = db;
    }

    start_server(config).await
}
