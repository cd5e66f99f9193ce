// Copyright 2025 The cqlweb Authors
// Licensed under the Apache License, Version 2.0

//! Query relay: pass a statement through to the store unchanged

use cql_common::{CqlError, Result, Row, RowSource};
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, warn};

/// Error body returned in place of rows
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorPayload {
    pub status: &'static str,
    pub message: String,
}

impl ErrorPayload {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: "error",
            message: message.into(),
        }
    }
}

#[derive(Clone)]
pub struct QueryRelay {
    source: Arc<dyn RowSource>,
}

impl QueryRelay {
    pub fn new(source: Arc<dyn RowSource>) -> Self {
        Self { source }
    }

    /// Execute `query` as given. A blank statement is rejected before it
    /// reaches the store.
    pub async fn execute(&self, query: &str) -> Result<Vec<Row>> {
        if query.trim().is_empty() {
            return Err(CqlError::InvalidArgument("query must not be empty".to_string()));
        }

        info!("Relaying query: {}", query);

        self.source.query(query).await.map_err(|e| {
            warn!("Query failed: {}", e);
            e
        })
    }
}
