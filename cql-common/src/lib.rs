// Copyright 2025 The cqlweb Authors
// Licensed under the Apache License, Version 2.0

//! Common foundation for the cqlweb console
//!
//! This crate provides:
//! - Error types and result handling
//! - Configuration management
//! - Shared types (catalog version, result rows)
//! - The `RowSource` seam between the store client and its consumers
//! - Constants and build information

pub mod error;
pub mod config;
pub mod types;
pub mod source;
pub mod constants;
pub mod version;

pub use error::{CqlError, Result};
pub use config::Config;
pub use source::RowSource;
pub use types::{CatalogVersion, Consistency, Row};
