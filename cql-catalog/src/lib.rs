// Copyright 2025 The cqlweb Authors
// Licensed under the Apache License, Version 2.0

//! Schema catalog module
//!
//! This crate turns the flat, one-row-per-column schema catalog of a
//! Cassandra-compatible cluster into a keyspace -> table -> column tree:
//! - Column type/role normalization for both catalog representations
//! - Row adapters for the legacy (V3) and system_schema (V4) catalogs
//! - Aggregation with internal keyspace filtering
//! - Fetching the catalog through a `RowSource`

pub mod column;
pub mod descriptor;
pub mod table;
pub mod keyspace;
pub mod catalog;
pub mod fetcher;

pub use column::{normalize, normalize_validator, ColumnInfo, ColumnKind};
pub use descriptor::{CatalogLayout, ColumnDescriptor};
pub use table::TableInfo;
pub use keyspace::{is_internal_keyspace, KeyspaceInfo};
pub use catalog::{aggregate, SchemaTree};
pub use fetcher::SchemaFetcher;
