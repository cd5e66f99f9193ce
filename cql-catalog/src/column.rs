// Copyright 2025 The cqlweb Authors
// Licensed under the Apache License, Version 2.0

//! Column metadata and type/role normalization
//!
//! The two catalog representations encode the same information differently:
//!
//! | catalog | type column                                   | role column          |
//! |---------|-----------------------------------------------|----------------------|
//! | V3      | `org.apache.cassandra.db.marshal.UUIDType`    | `partition_key`, `clustering_key`, ... |
//! | V4      | `uuid`                                        | `partition_key`, `clustering`, ...     |
//!
//! Normalization is total: unrecognised input degrades to `ColumnKind::Unknown`
//! or a best-effort type string, never to an error.

use cql_common::constants::{REVERSED_VALIDATOR, VALIDATOR_SUFFIX};
use cql_common::CatalogVersion;
use serde::{Serialize, Serializer};

/// Structural role of a column within its table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnKind {
    PartitionKey,
    ClusteringKey,
    Static,
    Regular,
    Unknown,
}

impl ColumnKind {
    /// Map a catalog role literal. Both catalogs share this domain; the
    /// legacy catalog spells clustering columns `clustering_key`.
    pub fn from_role(role: &str) -> Self {
        match role {
            "partition_key" => ColumnKind::PartitionKey,
            "clustering" | "clustering_key" => ColumnKind::ClusteringKey,
            "static" => ColumnKind::Static,
            "regular" => ColumnKind::Regular,
            _ => ColumnKind::Unknown,
        }
    }

    /// Wire spelling; `Unknown` is the empty string.
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnKind::PartitionKey => "partition_key",
            ColumnKind::ClusteringKey => "clustering",
            ColumnKind::Static => "static",
            ColumnKind::Regular => "regular",
            ColumnKind::Unknown => "",
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, ColumnKind::Unknown)
    }
}

impl Serialize for ColumnKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Normalized column leaf
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnInfo {
    /// Canonical type name
    #[serde(rename = "type")]
    pub data_type: String,

    /// Structural role
    pub kind: ColumnKind,
}

impl ColumnInfo {
    pub fn new(data_type: impl Into<String>, kind: ColumnKind) -> Self {
        Self {
            data_type: data_type.into(),
            kind,
        }
    }
}

/// Normalize a raw catalog type and role for the given catalog version.
pub fn normalize(raw_type: &str, raw_role: &str, version: CatalogVersion) -> ColumnInfo {
    let data_type = match version {
        CatalogVersion::V4 => raw_type.to_string(),
        CatalogVersion::V3 => normalize_validator(raw_type),
    };

    ColumnInfo {
        data_type,
        kind: ColumnKind::from_role(raw_role),
    }
}

/// Turn a legacy validator class into a type name.
///
/// Each class component loses its dotted namespace and its `Type` suffix.
/// Parameterized validators keep their structure (`Map(UTF8,Int32)`) and a
/// single-argument `ReversedType(...)` wrapper is dropped in favour of the
/// wrapped type. Unclosed parentheses are closed at the end.
///
/// Runs in one left-to-right pass with an explicit stack, so arbitrarily
/// deep nesting costs linear time and no recursion.
pub fn normalize_validator(validator: &str) -> String {
    let validator = validator.trim();
    let mut out = String::with_capacity(validator.len());
    // One frame per open parenthesis. `Some(pos)` is an elided ReversedType
    // wrapper whose argument starts at `out[pos..]`.
    let mut frames: Vec<Option<usize>> = Vec::new();
    let mut token_start = 0;

    for (i, c) in validator.char_indices() {
        if !matches!(c, '(' | ',' | ')') {
            continue;
        }
        let token = &validator[token_start..i];
        token_start = i + 1;

        match c {
            '(' => {
                if short_name(token) == REVERSED_VALIDATOR {
                    frames.push(Some(out.len()));
                } else {
                    out.push_str(&strip_class(token));
                    out.push('(');
                    frames.push(None);
                }
            }
            ',' => {
                out.push_str(&strip_class(token));
                // A second argument: the wrapper has to stay after all
                if let Some(pos) = frames.last_mut().and_then(Option::take) {
                    out.insert_str(pos, &format!("{}(", strip_class(REVERSED_VALIDATOR)));
                }
                out.push(',');
            }
            _ => {
                out.push_str(&strip_class(token));
                if !matches!(frames.pop(), Some(Some(_))) {
                    out.push(')');
                }
            }
        }
    }

    out.push_str(&strip_class(&validator[token_start..]));
    for frame in frames.into_iter().rev() {
        if frame.is_none() {
            out.push(')');
        }
    }
    out
}

/// Class name without its dotted namespace.
fn short_name(class: &str) -> &str {
    let class = class.trim();
    match class.rsplit('.').next() {
        Some(short) if !short.is_empty() => short,
        _ => class,
    }
}

fn strip_class(class: &str) -> String {
    let short = short_name(class);
    match short.strip_suffix(VALIDATOR_SUFFIX) {
        Some(stripped) if !stripped.is_empty() => stripped.to_string(),
        _ => short.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MARSHAL: &str = "org.apache.cassandra.db.marshal.";

    fn marshal(name: &str) -> String {
        format!("{}{}", MARSHAL, name)
    }

    #[test]
    fn test_role_literals() {
        assert_eq!(ColumnKind::from_role("partition_key"), ColumnKind::PartitionKey);
        assert_eq!(ColumnKind::from_role("clustering"), ColumnKind::ClusteringKey);
        assert_eq!(ColumnKind::from_role("clustering_key"), ColumnKind::ClusteringKey);
        assert_eq!(ColumnKind::from_role("static"), ColumnKind::Static);
        assert_eq!(ColumnKind::from_role("regular"), ColumnKind::Regular);
        assert_eq!(ColumnKind::from_role("compact_value"), ColumnKind::Unknown);
        assert_eq!(ColumnKind::from_role(""), ColumnKind::Unknown);
        assert_eq!(ColumnKind::from_role("REGULAR"), ColumnKind::Unknown);
    }

    #[test]
    fn test_kind_wire_spelling() {
        assert_eq!(ColumnKind::ClusteringKey.as_str(), "clustering");
        assert_eq!(ColumnKind::Unknown.as_str(), "");
        assert!(!ColumnKind::Unknown.is_known());
        assert!(ColumnKind::Static.is_known());
    }

    #[test]
    fn test_simple_validators() {
        assert_eq!(normalize_validator(&marshal("UUIDType")), "UUID");
        assert_eq!(normalize_validator(&marshal("Int32Type")), "Int32");
        assert_eq!(normalize_validator(&marshal("UTF8Type")), "UTF8");
        assert_eq!(normalize_validator("TimestampType"), "Timestamp");
    }

    #[test]
    fn test_parameterized_validators() {
        let map = format!("{}({},{})", marshal("MapType"), marshal("UTF8Type"), marshal("Int32Type"));
        assert_eq!(normalize_validator(&map), "Map(UTF8,Int32)");

        let nested = format!(
            "{}({}({}))",
            marshal("ListType"),
            marshal("FrozenType"),
            marshal("SetType") + "(" + &marshal("LongType") + ")"
        );
        assert_eq!(normalize_validator(&nested), "List(Frozen(Set(Long)))");
    }

    #[test]
    fn test_reversed_validator_is_unwrapped() {
        let reversed = format!("{}({})", marshal("ReversedType"), marshal("TimeUUIDType"));
        assert_eq!(normalize_validator(&reversed), "TimeUUID");
    }

    #[test]
    fn test_best_effort_on_odd_input() {
        assert_eq!(normalize_validator(""), "");
        assert_eq!(normalize_validator("Type"), "Type");
        assert_eq!(normalize_validator("org.example."), "org.example.");
        assert_eq!(normalize_validator("com.example.Custom"), "Custom");
        // Unbalanced parenthesis still yields something readable
        assert_eq!(
            normalize_validator(&format!("{}({}", marshal("ListType"), marshal("UTF8Type"))),
            "List(UTF8)"
        );
    }

    #[test]
    fn test_reversed_with_several_arguments_is_kept() {
        let odd = format!("{}({},{})", marshal("ReversedType"), marshal("UTF8Type"), marshal("LongType"));
        assert_eq!(normalize_validator(&odd), "Reversed(UTF8,Long)");

        let inner = format!(
            "{}({}({}))",
            marshal("MapType"),
            marshal("ReversedType"),
            marshal("Int32Type")
        );
        assert_eq!(normalize_validator(&inner), "Map(Int32)");
    }

    #[test]
    fn test_deeply_nested_validator() {
        let depth = 20_000;
        let raw = marshal("ListType(").repeat(depth) + &marshal("UTF8Type");

        let expected = "List(".repeat(depth) + "UTF8" + &")".repeat(depth);
        assert_eq!(normalize_validator(&raw), expected);

        // Same input on a small stack: nothing recurses per nesting level
        let handle = std::thread::Builder::new()
            .stack_size(64 * 1024)
            .spawn(move || normalize_validator(&raw))
            .unwrap();
        assert_eq!(handle.join().unwrap(), expected);
    }

    #[test]
    fn test_normalize_v4_passes_type_through() {
        let info = normalize("frozen<list<text>>", "regular", CatalogVersion::V4);
        assert_eq!(info.data_type, "frozen<list<text>>");
        assert_eq!(info.kind, ColumnKind::Regular);
    }

    #[test]
    fn test_normalize_v3() {
        let info = normalize(&marshal("UUIDType"), "partition_key", CatalogVersion::V3);
        assert_eq!(info, ColumnInfo::new("UUID", ColumnKind::PartitionKey));
    }

    #[test]
    fn test_column_info_json() {
        let info = ColumnInfo::new("text", ColumnKind::Unknown);
        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json, serde_json::json!({"type": "text", "kind": ""}));
    }
}
