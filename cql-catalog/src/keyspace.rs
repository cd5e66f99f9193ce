// Copyright 2025 The cqlweb Authors
// Licensed under the Apache License, Version 2.0

//! Keyspace definitions and internal keyspace filtering

use cql_common::constants::{DSE_KEYSPACE_PREFIX, SYSTEM_KEYSPACE_PREFIX};
use cql_common::CatalogVersion;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::table::TableInfo;

/// A keyspace and its tables, ordered by table name
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyspaceInfo {
    /// Keyspace name
    #[serde(skip)]
    pub name: String,

    /// Tables (table_name -> table)
    #[serde(flatten)]
    pub tables: BTreeMap<String, TableInfo>,
}

impl KeyspaceInfo {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tables: BTreeMap::new(),
        }
    }

    /// Get the table, creating an empty one if absent
    pub fn table_entry(&mut self, table_name: String) -> &mut TableInfo {
        self.tables
            .entry(table_name)
            .or_insert_with_key(|name| TableInfo::new(name.clone()))
    }

    pub fn get_table(&self, table_name: &str) -> Option<&TableInfo> {
        self.tables.get(table_name)
    }

    pub fn table_count(&self) -> usize {
        self.tables.len()
    }
}

/// Whether a keyspace is internal to the cluster and must stay out of the
/// schema tree. Legacy (DSE-era) catalogs also hide `dse_*` keyspaces.
pub fn is_internal_keyspace(keyspace_name: &str, version: CatalogVersion) -> bool {
    if keyspace_name.starts_with(SYSTEM_KEYSPACE_PREFIX) {
        return true;
    }
    version == CatalogVersion::V3 && keyspace_name.starts_with(DSE_KEYSPACE_PREFIX)
}
