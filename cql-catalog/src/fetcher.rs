// Copyright 2025 The cqlweb Authors
// Licensed under the Apache License, Version 2.0

//! Schema Fetcher - read the cluster's schema catalog into a `SchemaTree`
//!
//! Runs the configured catalog layout's query against a `RowSource`,
//! adapts each row into a `ColumnDescriptor` and aggregates them. Either
//! the whole catalog is read and folded, or the caller gets an error; a
//! partial tree is never returned.

use cql_common::{CatalogVersion, CqlError, Result, RowSource};
use std::sync::Arc;
use tracing::{debug, warn};

use crate::catalog::{aggregate, SchemaTree};
use crate::descriptor::CatalogLayout;
use crate::keyspace::is_internal_keyspace;

/// Schema catalog reader for one cluster
#[derive(Clone)]
pub struct SchemaFetcher {
    source: Arc<dyn RowSource>,
    version: CatalogVersion,
}

impl SchemaFetcher {
    pub fn new(source: Arc<dyn RowSource>, version: CatalogVersion) -> Self {
        Self { source, version }
    }

    pub fn version(&self) -> CatalogVersion {
        self.version
    }

    pub fn layout(&self) -> &'static CatalogLayout {
        CatalogLayout::for_version(self.version)
    }

    /// Read and aggregate the whole catalog.
    ///
    /// A failing source yields `CqlError::CatalogRead`; a row missing one of
    /// its fields yields `CqlError::MalformedRow`. Rows of internal keyspaces
    /// are dropped before their remaining fields are checked.
    pub async fn fetch(&self) -> Result<SchemaTree> {
        let layout = self.layout();
        debug!(catalog = %self.version, query = layout.query, "reading schema catalog");

        let rows = self.source.query(layout.query).await.map_err(|e| {
            warn!("Schema catalog query failed: {}", e);
            match e {
                CqlError::QueryError(msg) | CqlError::ConnectionError(msg) => {
                    CqlError::CatalogRead(msg)
                }
                other => CqlError::CatalogRead(other.to_string()),
            }
        })?;

        let mut descriptors = Vec::with_capacity(rows.len());
        for (index, row) in rows.iter().enumerate() {
            let keyspace = layout.keyspace_of(index, row)?;
            if is_internal_keyspace(keyspace, self.version) {
                continue;
            }
            descriptors.push(layout.describe(index, row)?);
        }

        Ok(aggregate(descriptors, self.version))
    }
}
