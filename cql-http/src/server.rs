// Copyright 2025 The cqlweb Authors
// Licensed under the Apache License, Version 2.0

use axum::{routing::get, Router};
use cql_common::Result;
use std::future::Future;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

use super::handlers::{
    cql_get_handler, cql_post_handler, health_handler, index_handler, meta_handler, AppState,
};

/// Build the application router
pub fn router(state: Arc<AppState>, static_dir: &Path) -> Router {
    Router::new()
        // Console page
        .route("/", get(index_handler))
        // Query relay
        .route("/api/cql", get(cql_get_handler).post(cql_post_handler))
        // Schema tree
        .route("/api/meta", get(meta_handler))
        // Health check
        .route("/api/health", get(health_handler))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub struct HttpServer {
    addr: String,
    state: Arc<AppState>,
    static_dir: PathBuf,
}

impl HttpServer {
    pub fn new(addr: impl Into<String>, state: Arc<AppState>, static_dir: PathBuf) -> Self {
        Self {
            addr: addr.into(),
            state,
            static_dir,
        }
    }

    /// Serve until `shutdown` resolves, then drain in-flight requests.
    pub async fn serve<F>(self, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let app = router(self.state, &self.static_dir);

        let listener = tokio::net::TcpListener::bind(&self.addr).await?;

        info!("HTTP server listening on {}", self.addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await?;

        info!("HTTP server stopped");

        Ok(())
    }
}
