// Copyright 2025 The cqlweb Authors
// Licensed under the Apache License, Version 2.0

//! Schema tree and catalog aggregation

use cql_common::CatalogVersion;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

use crate::column::{normalize, ColumnInfo};
use crate::descriptor::ColumnDescriptor;
use crate::keyspace::{is_internal_keyspace, KeyspaceInfo};
use crate::table::TableInfo;

/// keyspace -> table -> column tree, rebuilt on every request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SchemaTree {
    keyspaces: BTreeMap<String, KeyspaceInfo>,
}

impl SchemaTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the keyspace, creating an empty one if absent
    pub fn keyspace_entry(&mut self, keyspace_name: String) -> &mut KeyspaceInfo {
        self.keyspaces
            .entry(keyspace_name)
            .or_insert_with_key(|name| KeyspaceInfo::new(name.clone()))
    }

    pub fn get_keyspace(&self, keyspace_name: &str) -> Option<&KeyspaceInfo> {
        self.keyspaces.get(keyspace_name)
    }

    pub fn get_table(&self, keyspace_name: &str, table_name: &str) -> Option<&TableInfo> {
        self.get_keyspace(keyspace_name)?.get_table(table_name)
    }

    pub fn get_column(
        &self,
        keyspace_name: &str,
        table_name: &str,
        column_name: &str,
    ) -> Option<&ColumnInfo> {
        self.get_table(keyspace_name, table_name)?.get_column(column_name)
    }

    pub fn keyspace_names(&self) -> Vec<&str> {
        self.keyspaces.keys().map(|name| name.as_str()).collect()
    }

    pub fn keyspaces(&self) -> impl Iterator<Item = &KeyspaceInfo> {
        self.keyspaces.values()
    }

    pub fn len(&self) -> usize {
        self.keyspaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keyspaces.is_empty()
    }

    fn sort_columns(&mut self) {
        for keyspace in self.keyspaces.values_mut() {
            for table in keyspace.tables.values_mut() {
                table.sort_columns();
            }
        }
    }
}

/// Fold flat catalog rows into a schema tree.
///
/// Rows from internal keyspaces are dropped whole. Every other row is
/// normalized and merged; a repeated (keyspace, table, column) triple
/// overwrites the earlier one. Once all rows are in, each table's columns
/// are ordered known-role first.
pub fn aggregate<I>(rows: I, version: CatalogVersion) -> SchemaTree
where
    I: IntoIterator<Item = ColumnDescriptor>,
{
    let mut tree = SchemaTree::new();
    let mut rows_read = 0usize;
    let mut rows_excluded = 0usize;

    for row in rows {
        rows_read += 1;

        if is_internal_keyspace(&row.keyspace_name, version) {
            rows_excluded += 1;
            continue;
        }

        let info = normalize(&row.raw_type, &row.raw_role, version);
        if !info.kind.is_known() {
            debug!(
                keyspace = %row.keyspace_name,
                table = %row.table_name,
                column = %row.column_name,
                role = %row.raw_role,
                "unrecognised column role"
            );
        }

        tree.keyspace_entry(row.keyspace_name)
            .table_entry(row.table_name)
            .upsert_column(row.column_name, info);
    }

    tree.sort_columns();

    debug!(
        catalog = %version,
        rows_read,
        rows_excluded,
        keyspaces = tree.len(),
        tables = tree.keyspaces().map(KeyspaceInfo::table_count).sum::<usize>(),
        "aggregated schema catalog"
    );

    tree
}
