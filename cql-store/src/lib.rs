// Copyright 2025 The cqlweb Authors
// Licensed under the Apache License, Version 2.0

//! Store client for cqlweb
//!
//! This crate talks to the Cassandra/ScyllaDB cluster over the native
//! protocol and hands rows back as JSON objects through the `RowSource`
//! trait. A mock store is provided for running without a cluster.

pub mod session;
pub mod value;

// Mock store for testing without a cluster
pub mod mock;

pub use mock::MockStore;
pub use session::ScyllaStore;
