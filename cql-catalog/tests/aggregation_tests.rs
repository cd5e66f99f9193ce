// Copyright 2025 The cqlweb Authors
// Licensed under the Apache License, Version 2.0

//! Aggregation properties over both catalog representations

use cql_catalog::{aggregate, normalize, ColumnDescriptor, ColumnInfo, ColumnKind, SchemaTree};
use cql_common::CatalogVersion;
use serde_json::json;

const MARSHAL: &str = "org.apache.cassandra.db.marshal.";

fn row(ks: &str, table: &str, column: &str, ty: &str, role: &str) -> ColumnDescriptor {
    ColumnDescriptor::new(ks, table, column, ty, role)
}

fn mixed_rows() -> Vec<ColumnDescriptor> {
    vec![
        row("app", "users", "email", "text", "regular"),
        row("system", "local", "key", "text", "partition_key"),
        row("app", "users", "id", "uuid", "partition_key"),
        row("system_auth", "roles", "role", "text", "partition_key"),
        row("shop", "orders", "note", "text", "mystery"),
        row("shop", "orders", "order_id", "timeuuid", "clustering"),
        row("dse_security", "digest_tokens", "id", "blob", "partition_key"),
        row("shop", "orders", "customer", "uuid", "partition_key"),
    ]
}

#[test]
fn test_system_keyspaces_never_appear() {
    for version in [CatalogVersion::V3, CatalogVersion::V4] {
        let tree = aggregate(mixed_rows(), version);
        for name in tree.keyspace_names() {
            assert!(!name.starts_with("system"), "{} leaked under {}", name, version);
        }
    }
}

#[test]
fn test_dse_keyspaces_only_excluded_for_legacy_catalog() {
    let legacy = aggregate(mixed_rows(), CatalogVersion::V3);
    assert!(legacy.get_keyspace("dse_security").is_none());

    let modern = aggregate(mixed_rows(), CatalogVersion::V4);
    assert!(modern.get_keyspace("dse_security").is_some());
}

#[test]
fn test_legacy_uuid_validator() {
    let rows = vec![row(
        "app",
        "users",
        "id",
        &format!("{}UUIDType", MARSHAL),
        "partition_key",
    )];

    let tree = aggregate(rows, CatalogVersion::V3);

    assert_eq!(tree.keyspace_names(), vec!["app"]);
    assert_eq!(
        tree.get_column("app", "users", "id"),
        Some(&ColumnInfo::new("UUID", ColumnKind::PartitionKey))
    );
    assert_eq!(
        serde_json::to_value(&tree).unwrap(),
        json!({"app": {"users": {"id": {"type": "UUID", "kind": "partition_key"}}}})
    );
}

#[test]
fn test_same_column_under_both_catalogs() {
    let legacy = aggregate(
        vec![row("app", "users", "id", &format!("{}UUIDType", MARSHAL), "partition_key")],
        CatalogVersion::V3,
    );
    let modern = aggregate(
        vec![row("app", "users", "id", "uuid", "partition_key")],
        CatalogVersion::V4,
    );

    let a = legacy.get_column("app", "users", "id").unwrap();
    let b = modern.get_column("app", "users", "id").unwrap();
    assert_eq!(a.kind, b.kind);
    assert_eq!(a.data_type.to_lowercase(), b.data_type);
    assert_eq!(legacy.keyspace_names(), modern.keyspace_names());
}

#[test]
fn test_normalize_is_deterministic() {
    let cases = [
        ("int", "partition_key"),
        ("frozen<list<text>>", "regular"),
        ("timestamp", "clustering"),
        ("text", "static"),
        ("blob", ""),
    ];
    for (ty, role) in cases {
        assert_eq!(
            normalize(ty, role, CatalogVersion::V4),
            normalize(ty, role, CatalogVersion::V4)
        );
    }
}

#[test]
fn test_aggregation_is_idempotent() {
    let first = aggregate(mixed_rows(), CatalogVersion::V4);
    let second = aggregate(mixed_rows(), CatalogVersion::V4);

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn test_known_roles_before_unknown() {
    let tree = aggregate(mixed_rows(), CatalogVersion::V4);
    let orders = tree.get_table("shop", "orders").unwrap();

    // encounter order among known roles is kept
    assert_eq!(orders.column_names(), vec!["order_id", "customer", "note"]);

    let kinds: Vec<bool> = orders.columns().map(|(_, c)| c.kind.is_known()).collect();
    let first_unknown = kinds.iter().position(|known| !known).unwrap_or(kinds.len());
    assert!(kinds[first_unknown..].iter().all(|known| !known));
}

#[test]
fn test_empty_input_is_empty_tree() {
    let tree: SchemaTree = aggregate(Vec::new(), CatalogVersion::V3);
    assert!(tree.is_empty());
    assert_eq!(serde_json::to_value(&tree).unwrap(), json!({}));
}

#[test]
fn test_only_internal_rows_is_empty_tree() {
    let rows = vec![
        row("system", "peers", "peer", "inet", "partition_key"),
        row("system_distributed", "repair_history", "id", "timeuuid", "clustering"),
    ];
    assert!(aggregate(rows, CatalogVersion::V4).is_empty());
}

#[test]
fn test_json_shape() {
    let tree = aggregate(mixed_rows(), CatalogVersion::V4);

    assert_eq!(
        serde_json::to_value(&tree).unwrap(),
        json!({
            "app": {
                "users": {
                    "email": {"type": "text", "kind": "regular"},
                    "id": {"type": "uuid", "kind": "partition_key"}
                }
            },
            "dse_security": {
                "digest_tokens": {
                    "id": {"type": "blob", "kind": "partition_key"}
                }
            },
            "shop": {
                "orders": {
                    "order_id": {"type": "timeuuid", "kind": "clustering"},
                    "customer": {"type": "uuid", "kind": "partition_key"},
                    "note": {"type": "text", "kind": ""}
                }
            }
        })
    );
}
