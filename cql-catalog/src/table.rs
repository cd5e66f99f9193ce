// Copyright 2025 The cqlweb Authors
// Licensed under the Apache License, Version 2.0

//! Table definitions

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;

use crate::column::ColumnInfo;

/// A table and its columns, in display order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableInfo {
    /// Table name
    pub name: String,

    /// Columns (name, info); names are unique
    columns: Vec<(String, ColumnInfo)>,

    /// Column name -> position in `columns`
    index: HashMap<String, usize>,
}

impl TableInfo {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            columns: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Set or overwrite a column. An overwritten column keeps its position.
    pub fn upsert_column(&mut self, name: impl Into<String>, info: ColumnInfo) {
        let name = name.into();
        match self.index.get(&name) {
            Some(&idx) => self.columns[idx].1 = info,
            None => {
                self.index.insert(name.clone(), self.columns.len());
                self.columns.push((name, info));
            }
        }
    }

    /// Get column by name
    pub fn get_column(&self, name: &str) -> Option<&ColumnInfo> {
        self.get_column_index(name).map(|idx| &self.columns[idx].1)
    }

    pub fn get_column_index(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Columns in display order
    pub fn columns(&self) -> impl Iterator<Item = (&str, &ColumnInfo)> {
        self.columns.iter().map(|(name, info)| (name.as_str(), info))
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns().map(|(name, _)| name).collect()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Move columns with an unknown role behind all others.
    ///
    /// The sort is stable and only looks at known/unknown, so known roles
    /// keep their encounter order relative to each other.
    pub fn sort_columns(&mut self) {
        self.columns.sort_by_key(|(_, info)| !info.kind.is_known());
        for (idx, (name, _)) in self.columns.iter().enumerate() {
            if let Some(slot) = self.index.get_mut(name) {
                *slot = idx;
            }
        }
    }
}

impl Serialize for TableInfo {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for (name, info) in &self.columns {
            map.serialize_entry(name, info)?;
        }
        map.end()
    }
}
