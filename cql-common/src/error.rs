// Copyright 2025 The cqlweb Authors
// Licensed under the Apache License, Version 2.0

//! Error types for cqlweb

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CqlError {
    /// The schema catalog could not be read from the store.
    #[error("Catalog read error: {0}")]
    CatalogRead(String),

    /// A catalog row lacked a required text field.
    #[error("Malformed catalog row {index}: {reason}")]
    MalformedRow { index: usize, reason: String },

    #[error("Query error: {0}")]
    QueryError(String),

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CqlError>;
