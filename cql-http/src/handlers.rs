// Copyright 2025 The cqlweb Authors
// Licensed under the Apache License, Version 2.0

use axum::{
    extract::{Form, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use cql_catalog::SchemaFetcher;
use cql_common::constants::SERVICE_NAME;
use cql_common::version::BuildInfo;
use cql_common::{CatalogVersion, CqlError, RowSource};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::error;

use crate::page::INDEX_HTML;
use crate::relay::{ErrorPayload, QueryRelay};

pub struct AppState {
    pub relay: QueryRelay,
    pub fetcher: SchemaFetcher,
}

impl AppState {
    /// Relay and schema fetcher sharing one row source
    pub fn new(source: Arc<dyn RowSource>, catalog_version: CatalogVersion) -> Self {
        Self {
            relay: QueryRelay::new(source.clone()),
            fetcher: SchemaFetcher::new(source, catalog_version),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct QueryParams {
    pub query: Option<String>,
}

// GET /api/cql?query=...
pub async fn cql_get_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<QueryParams>,
) -> Response {
    relay_query(&state, params.query).await
}

// POST /api/cql (form body)
pub async fn cql_post_handler(
    State(state): State<Arc<AppState>>,
    Form(params): Form<QueryParams>,
) -> Response {
    relay_query(&state, params.query).await
}

async fn relay_query(state: &AppState, query: Option<String>) -> Response {
    let query = query.unwrap_or_default();

    match state.relay.execute(&query).await {
        Ok(rows) => (StatusCode::OK, Json(rows)).into_response(),
        Err(e) => error_response(StatusCode::BAD_REQUEST, &e),
    }
}

// GET /api/meta
pub async fn meta_handler(State(state): State<Arc<AppState>>) -> Response {
    match state.fetcher.fetch().await {
        Ok(tree) => (StatusCode::OK, Json(tree)).into_response(),
        Err(e) => {
            error!("Failed to build schema tree: {}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, &e)
        }
    }
}

/// Body of `/api/health`
#[derive(Debug, Serialize)]
pub struct HealthReport {
    pub status: &'static str,
    pub service: &'static str,
    pub catalog_version: CatalogVersion,
    #[serde(flatten)]
    pub build: BuildInfo,
}

// Health check handler
pub async fn health_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthReport {
            status: "healthy",
            service: SERVICE_NAME,
            catalog_version: state.fetcher.version(),
            build: BuildInfo::current(),
        }),
    )
}

pub async fn index_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}

fn error_response(status: StatusCode, err: &CqlError) -> Response {
    (status, Json(ErrorPayload::new(err.to_string()))).into_response()
}
