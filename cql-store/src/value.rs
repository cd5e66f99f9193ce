// Copyright 2025 The cqlweb Authors
// Licensed under the Apache License, Version 2.0

//! CQL value -> JSON conversion

use base64::engine::general_purpose::STANDARD as B64;
use base64::Engine;
use scylla_cql::frame::response::result::{CqlValue, Row as CqlRow};
use serde_json::{Map, Value};

/// Convert result rows into JSON objects keyed by column name
pub fn rows_to_json(names: &[String], rows: Vec<CqlRow>) -> Vec<Map<String, Value>> {
    rows.iter()
        .map(|row| {
            names
                .iter()
                .enumerate()
                .map(|(i, name)| {
                    let value = row
                        .columns
                        .get(i)
                        .and_then(|o| o.as_ref())
                        .map(cql_value_to_json)
                        .unwrap_or(Value::Null);
                    (name.clone(), value)
                })
                .collect()
        })
        .collect()
}

pub fn cql_value_to_json(v: &CqlValue) -> Value {
    match v {
        CqlValue::Boolean(b) => Value::Bool(*b),
        CqlValue::TinyInt(i) => Value::from(*i),
        CqlValue::SmallInt(i) => Value::from(*i),
        CqlValue::Int(i) => Value::from(*i),
        CqlValue::BigInt(i) => Value::from(*i),
        CqlValue::Counter(c) => Value::from(c.0),
        CqlValue::Float(f) => Value::from(*f),
        CqlValue::Double(f) => Value::from(*f),
        CqlValue::Ascii(s) | CqlValue::Text(s) => Value::from(s.clone()),
        CqlValue::Uuid(u) => Value::from(u.to_string()),
        CqlValue::Timeuuid(u) => Value::from(u.to_string()),
        CqlValue::Inet(addr) => Value::from(addr.to_string()),
        CqlValue::Timestamp(ts) => Value::from(ts.0),
        CqlValue::Blob(bytes) => Value::from(B64.encode(bytes)),
        CqlValue::Empty => Value::Null,
        CqlValue::List(items) | CqlValue::Set(items) => {
            Value::Array(items.iter().map(cql_value_to_json).collect())
        }
        CqlValue::Map(entries) => Value::Object(
            entries
                .iter()
                .map(|(k, v)| (cql_map_key_to_string(k), cql_value_to_json(v)))
                .collect(),
        ),
        CqlValue::Tuple(values) => Value::Array(
            values
                .iter()
                .map(|opt| opt.as_ref().map(cql_value_to_json).unwrap_or(Value::Null))
                .collect(),
        ),
        CqlValue::UserDefinedType { fields, .. } => Value::Object(
            fields
                .iter()
                .map(|(name, opt)| {
                    (
                        name.clone(),
                        opt.as_ref().map(cql_value_to_json).unwrap_or(Value::Null),
                    )
                })
                .collect(),
        ),
        _ => Value::from(format!("{:?}", v)),
    }
}

fn cql_map_key_to_string(k: &CqlValue) -> String {
    match k {
        CqlValue::Ascii(s) | CqlValue::Text(s) => s.clone(),
        CqlValue::Uuid(u) => u.to_string(),
        CqlValue::Int(i) => i.to_string(),
        CqlValue::BigInt(i) => i.to_string(),
        CqlValue::SmallInt(i) => i.to_string(),
        CqlValue::TinyInt(i) => i.to_string(),
        CqlValue::Boolean(b) => b.to_string(),
        _ => format!("{:?}", k),
    }
}
