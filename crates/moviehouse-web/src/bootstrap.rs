//! Web server bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the web adapter. All concrete implementations are instantiated
//! here.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use moviehouse_core::{Renderer, Repos};
use moviehouse_db::{CoreFactory, setup_database};

use crate::views::TeraRenderer;

/// Default HTTP port when neither flag nor env var is set.
pub const DEFAULT_PORT: u16 = 8360;

/// Server configuration for the web adapter.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port for the HTTP server.
    pub port: u16,
    /// Path to the `SQLite` database file.
    pub db_path: PathBuf,
}

impl ServerConfig {
    /// Create config from environment with fallback defaults.
    ///
    /// Reads `MOVIEHOUSE_PORT` and `MOVIEHOUSE_DB` when set.
    pub fn with_defaults() -> Self {
        let port = std::env::var("MOVIEHOUSE_PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_PORT);
        let db_path = std::env::var("MOVIEHOUSE_DB")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("moviehouse.db"));

        Self { port, db_path }
    }
}

/// Application context for the web adapter.
///
/// Holds the handler dependencies: the repository container and the
/// renderer, both as trait objects supplied at construction.
pub struct WebContext {
    /// Repository container (movies + comments).
    pub repos: Repos,
    /// Template renderer.
    pub renderer: Arc<dyn Renderer>,
}

impl WebContext {
    /// Create a context from explicit collaborators.
    ///
    /// Tests use this to swap in their own repositories or renderer.
    pub fn new(repos: Repos, renderer: Arc<dyn Renderer>) -> Self {
        Self { repos, renderer }
    }
}

/// Bootstrap the web server context.
///
/// Opens the database, builds the repositories, and constructs the
/// renderer.
pub async fn bootstrap(config: &ServerConfig) -> Result<WebContext> {
    tracing::info!(
        db_path = %config.db_path.display(),
        port = config.port,
        "moviehouse bootstrap"
    );

    let pool = setup_database(&config.db_path).await?;
    let repos = CoreFactory::build_repos(pool);
    let renderer: Arc<dyn Renderer> = Arc::new(TeraRenderer::new()?);

    Ok(WebContext::new(repos, renderer))
}

/// Start the web server with the given configuration.
pub async fn start_server(config: ServerConfig) -> Result<()> {
    use tokio::net::TcpListener;

    let ctx = bootstrap(&config).await?;
    let app = crate::routes::create_router(ctx);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&addr).await?;

    tracing::info!("moviehouse listening on http://{addr}");

    axum::serve(listener, app).await?;
    Ok(())
}
