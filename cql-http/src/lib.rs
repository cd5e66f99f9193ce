// Copyright 2025 The cqlweb Authors
// Licensed under the Apache License, Version 2.0

//! HTTP surface of the cqlweb console
//!
//! - `/api/cql`: run a statement and return its rows
//! - `/api/meta`: the schema tree
//! - `/api/health`
//! - `/static/*` and the embedded console page at `/`

pub mod handlers;
pub mod page;
pub mod relay;
pub mod server;

pub use handlers::AppState;
pub use relay::QueryRelay;
pub use server::{router, HttpServer};
