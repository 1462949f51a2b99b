//! Server Implementation
//!
//! Router assembly and the listen loop

use std::net::SocketAddr;
use std::path::Path;

use axum::{Router, middleware, routing::any};
use tower_http::services::{ServeDir, ServeFile};

use crate::core::{Config, Result};
use crate::middleware::logging_middleware;
use crate::proxy::{self, ProxyState};

/// Build the gateway router
///
/// ```text
/// /api, /api/*   -> backend (login rewritten, prefix optionally stripped)
/// /auth/*        -> backend
/// /health        -> backend
/// everything else -> STATIC_DIR, unknown paths fall back to index.html
/// ```
pub fn build_router(config: &Config) -> Result<Router> {
    let state = ProxyState::new(config)?;

    let index = Path::new(&config.static_dir).join("index.html");
    let assets = ServeDir::new(&config.static_dir).fallback(ServeFile::new(index));

    let router = Router::new()
        .route("/api", any(proxy::forward))
        .route("/api/{*path}", any(proxy::forward))
        .route("/auth/{*path}", any(proxy::forward))
        .route("/health", any(proxy::forward))
        .with_state(state)
        .fallback_service(assets)
        .layer(middleware::from_fn(logging_middleware));

    Ok(router)
}

/// HTTP Server
pub struct Server {
    config: Config,
}

impl Server {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub async fn run(&self) -> Result<()> {
        let router = build_router(&self.config)?;

        let addr = SocketAddr::from(([0, 0, 0, 0], self.config.port));
        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!(
            %addr,
            backend = %self.config.backend_url,
            static_dir = %self.config.static_dir,
            "HR gateway listening"
        );

        let shutdown = async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("Shutting down...");
        };

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown)
            .await?;

        Ok(())
    }
}
