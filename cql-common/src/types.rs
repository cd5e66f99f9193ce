// Copyright 2025 The cqlweb Authors
// Licensed under the Apache License, Version 2.0

//! Common type definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CqlError;

/// A result row: column name -> JSON value
pub type Row = serde_json::Map<String, serde_json::Value>;

/// Schema catalog representation exposed by the cluster
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogVersion {
    /// Legacy `system.schema_columns` (Cassandra 2.x, DSE 4.x)
    V3,
    /// Modern `system_schema.columns` (Cassandra 3.0+, ScyllaDB)
    V4,
}

impl CatalogVersion {
    pub fn as_str(&self) -> &'static str {
        match self {
            CatalogVersion::V3 => "v3",
            CatalogVersion::V4 => "v4",
        }
    }
}

impl Default for CatalogVersion {
    fn default() -> Self {
        CatalogVersion::V4
    }
}

impl fmt::Display for CatalogVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CatalogVersion {
    type Err = CqlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "v3" | "3" => Ok(CatalogVersion::V3),
            "v4" | "4" => Ok(CatalogVersion::V4),
            other => Err(CqlError::InvalidArgument(format!(
                "unknown catalog version '{}', expected v3 or v4",
                other
            ))),
        }
    }
}

/// Read consistency applied to every statement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Consistency {
    Any,
    One,
    Two,
    Three,
    Quorum,
    All,
    LocalQuorum,
    EachQuorum,
    LocalOne,
}

impl Default for Consistency {
    fn default() -> Self {
        Consistency::One
    }
}

impl FromStr for Consistency {
    type Err = CqlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let level = match s.trim().to_ascii_lowercase().as_str() {
            "any" => Consistency::Any,
            "one" => Consistency::One,
            "two" => Consistency::Two,
            "three" => Consistency::Three,
            "quorum" => Consistency::Quorum,
            "all" => Consistency::All,
            "local_quorum" => Consistency::LocalQuorum,
            "each_quorum" => Consistency::EachQuorum,
            "local_one" => Consistency::LocalOne,
            other => {
                return Err(CqlError::InvalidArgument(format!(
                    "unknown consistency level '{}'",
                    other
                )))
            }
        };
        Ok(level)
    }
}
