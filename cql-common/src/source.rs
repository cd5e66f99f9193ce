// Copyright 2025 The cqlweb Authors
// Licensed under the Apache License, Version 2.0

//! Row source abstraction
//!
//! Everything that needs rows from the cluster (the query relay and the
//! schema fetcher) goes through this trait, so the HTTP layer and the
//! catalog pipeline can run against a live session or an in-memory mock.

use async_trait::async_trait;

use crate::types::Row;
use crate::Result;

#[async_trait]
pub trait RowSource: Send + Sync {
    /// Execute a CQL statement verbatim and return every row it produced.
    async fn query(&self, cql: &str) -> Result<Vec<Row>>;
}
