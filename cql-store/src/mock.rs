// Copyright 2025 The cqlweb Authors
// Licensed under the Apache License, Version 2.0

//! Mock Store for Testing
//!
//! An in-memory `RowSource` that answers queries from canned responses,
//! keyed by the exact query text. Used by tests and for running the
//! console without a cluster.

use async_trait::async_trait;
use cql_common::{CqlError, Result, Row, RowSource};
use parking_lot::Mutex;
use serde_json::Value;
use std::collections::HashMap;

#[derive(Debug, Clone)]
enum MockResponse {
    Rows(Vec<Row>),
    Error(String),
}

/// Mock store that simulates cluster responses
#[derive(Debug, Default)]
pub struct MockStore {
    /// Canned responses by query text
    responses: Mutex<HashMap<String, MockResponse>>,
    /// When set, every query fails with this connection error
    unavailable: Option<String>,
    /// Statements executed so far, in order
    executed: Mutex<Vec<String>>,
}

impl MockStore {
    /// Create a new mock store; unknown queries return no rows
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every query fails, as if the cluster were unreachable
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self {
            unavailable: Some(message.into()),
            ..Self::default()
        }
    }

    /// Answer `query` with `rows`
    pub fn with_rows(self, query: impl Into<String>, rows: Vec<Row>) -> Self {
        self.set_rows(query, rows);
        self
    }

    /// Answer `query` with a store-side error
    pub fn with_error(self, query: impl Into<String>, message: impl Into<String>) -> Self {
        self.responses
            .lock()
            .insert(query.into(), MockResponse::Error(message.into()));
        self
    }

    pub fn set_rows(&self, query: impl Into<String>, rows: Vec<Row>) {
        self.responses
            .lock()
            .insert(query.into(), MockResponse::Rows(rows));
    }

    /// Statements executed so far
    pub fn executed(&self) -> Vec<String> {
        self.executed.lock().clone()
    }

    /// Build a row from a JSON object literal
    pub fn row(value: Value) -> Row {
        match value {
            Value::Object(map) => map,
            other => {
                let mut map = Row::new();
                map.insert("value".to_string(), other);
                map
            }
        }
    }
}

#[async_trait]
impl RowSource for MockStore {
    async fn query(&self, cql: &str) -> Result<Vec<Row>> {
        self.executed.lock().push(cql.to_string());

        if let Some(message) = &self.unavailable {
            return Err(CqlError::ConnectionError(message.clone()));
        }

        match self.responses.lock().get(cql) {
            Some(MockResponse::Rows(rows)) => Ok(rows.clone()),
            Some(MockResponse::Error(message)) => Err(CqlError::QueryError(message.clone())),
            // Unknown queries return an empty result set
            None => Ok(Vec::new()),
        }
    }
}
