// Copyright 2025 The cqlweb Authors
// Licensed under the Apache License, Version 2.0

//! Catalog row adapters
//!
//! A `CatalogLayout` knows the fixed query for one catalog representation
//! and which result columns carry the keyspace, table, column, type and
//! role. Both layouts produce the same `ColumnDescriptor`, so the
//! aggregator never has to care which catalog the rows came from.

use cql_common::{CatalogVersion, CqlError, Result, Row};
use serde_json::Value;

/// One flat catalog row, before normalization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDescriptor {
    pub keyspace_name: String,
    pub table_name: String,
    pub column_name: String,
    /// Type name (V4) or validator class (V3)
    pub raw_type: String,
    /// Column kind literal
    pub raw_role: String,
}

impl ColumnDescriptor {
    pub fn new(
        keyspace_name: impl Into<String>,
        table_name: impl Into<String>,
        column_name: impl Into<String>,
        raw_type: impl Into<String>,
        raw_role: impl Into<String>,
    ) -> Self {
        Self {
            keyspace_name: keyspace_name.into(),
            table_name: table_name.into(),
            column_name: column_name.into(),
            raw_type: raw_type.into(),
            raw_role: raw_role.into(),
        }
    }
}

/// Query and column mapping for one catalog representation
#[derive(Debug)]
pub struct CatalogLayout {
    pub version: CatalogVersion,
    pub query: &'static str,
    keyspace_field: &'static str,
    table_field: &'static str,
    column_field: &'static str,
    type_field: &'static str,
    role_field: &'static str,
}

/// Cassandra 2.x `system.schema_columns`
pub static LEGACY_LAYOUT: CatalogLayout = CatalogLayout {
    version: CatalogVersion::V3,
    query: "SELECT keyspace_name, columnfamily_name, column_name, validator, type FROM system.schema_columns",
    keyspace_field: "keyspace_name",
    table_field: "columnfamily_name",
    column_field: "column_name",
    type_field: "validator",
    role_field: "type",
};

/// Cassandra 3.0+ `system_schema.columns`
pub static SYSTEM_SCHEMA_LAYOUT: CatalogLayout = CatalogLayout {
    version: CatalogVersion::V4,
    query: "SELECT keyspace_name, table_name, column_name, kind, type FROM system_schema.columns",
    keyspace_field: "keyspace_name",
    table_field: "table_name",
    column_field: "column_name",
    type_field: "type",
    role_field: "kind",
};

impl CatalogLayout {
    pub fn for_version(version: CatalogVersion) -> &'static CatalogLayout {
        match version {
            CatalogVersion::V3 => &LEGACY_LAYOUT,
            CatalogVersion::V4 => &SYSTEM_SCHEMA_LAYOUT,
        }
    }

    /// Keyspace of the row at `index`, checked on its own so excluded rows
    /// can be dropped before the remaining fields are validated.
    pub fn keyspace_of<'a>(&self, index: usize, row: &'a Row) -> Result<&'a str> {
        text_field(row, self.keyspace_field, index)
    }

    /// Adapt the row at `index` into a descriptor.
    ///
    /// Every field is required and must be text; anything else is reported
    /// as `CqlError::MalformedRow`.
    pub fn describe(&self, index: usize, row: &Row) -> Result<ColumnDescriptor> {
        Ok(ColumnDescriptor {
            keyspace_name: text_field(row, self.keyspace_field, index)?.to_string(),
            table_name: text_field(row, self.table_field, index)?.to_string(),
            column_name: text_field(row, self.column_field, index)?.to_string(),
            raw_type: text_field(row, self.type_field, index)?.to_string(),
            raw_role: text_field(row, self.role_field, index)?.to_string(),
        })
    }
}

fn text_field<'a>(row: &'a Row, field: &str, index: usize) -> Result<&'a str> {
    match row.get(field) {
        Some(Value::String(s)) => Ok(s),
        None | Some(Value::Null) => Err(CqlError::MalformedRow {
            index,
            reason: format!("missing field '{}'", field),
        }),
        Some(other) => Err(CqlError::MalformedRow {
            index,
            reason: format!("field '{}' is not text: {}", field, other),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(value: Value) -> Row {
        match value {
            Value::Object(map) => map,
            _ => unreachable!("test rows are objects"),
        }
    }

    #[test]
    fn test_layout_selection() {
        assert_eq!(CatalogLayout::for_version(CatalogVersion::V3).version, CatalogVersion::V3);
        assert!(CatalogLayout::for_version(CatalogVersion::V3).query.contains("system.schema_columns"));
        assert!(CatalogLayout::for_version(CatalogVersion::V4).query.contains("system_schema.columns"));
    }

    #[test]
    fn test_describe_v4_row() {
        let r = row(json!({
            "keyspace_name": "app",
            "table_name": "users",
            "column_name": "id",
            "kind": "partition_key",
            "type": "uuid",
        }));

        let d = SYSTEM_SCHEMA_LAYOUT.describe(0, &r).unwrap();
        assert_eq!(d, ColumnDescriptor::new("app", "users", "id", "uuid", "partition_key"));
    }

    #[test]
    fn test_describe_v3_row() {
        let r = row(json!({
            "keyspace_name": "app",
            "columnfamily_name": "users",
            "column_name": "id",
            "validator": "org.apache.cassandra.db.marshal.UUIDType",
            "type": "partition_key",
        }));

        let d = LEGACY_LAYOUT.describe(0, &r).unwrap();
        assert_eq!(d.table_name, "users");
        assert_eq!(d.raw_type, "org.apache.cassandra.db.marshal.UUIDType");
        assert_eq!(d.raw_role, "partition_key");
    }

    #[test]
    fn test_missing_field_is_malformed() {
        let r = row(json!({
            "keyspace_name": "app",
            "table_name": "users",
            "column_name": "id",
            "type": "uuid",
        }));

        match SYSTEM_SCHEMA_LAYOUT.describe(4, &r) {
            Err(CqlError::MalformedRow { index, reason }) => {
                assert_eq!(index, 4);
                assert!(reason.contains("'kind'"));
            }
            other => panic!("expected malformed row, got {:?}", other),
        }
    }

    #[test]
    fn test_null_and_non_text_fields_are_malformed() {
        let null_type = row(json!({
            "keyspace_name": "app", "table_name": "t", "column_name": "c",
            "kind": "regular", "type": null,
        }));
        assert!(SYSTEM_SCHEMA_LAYOUT.describe(0, &null_type).is_err());

        let numeric = row(json!({
            "keyspace_name": "app", "table_name": "t", "column_name": 7,
            "kind": "regular", "type": "int",
        }));
        let err = SYSTEM_SCHEMA_LAYOUT.describe(1, &numeric).unwrap_err();
        assert!(err.to_string().contains("not text"));
    }

    #[test]
    fn test_keyspace_of_ignores_other_fields() {
        let r = row(json!({"keyspace_name": "system_auth"}));
        assert_eq!(SYSTEM_SCHEMA_LAYOUT.keyspace_of(0, &r).unwrap(), "system_auth");
        assert!(SYSTEM_SCHEMA_LAYOUT.describe(0, &r).is_err());
    }
}
