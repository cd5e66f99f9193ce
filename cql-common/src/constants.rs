// Copyright 2025 The cqlweb Authors
// Licensed under the Apache License, Version 2.0

//! Constants used throughout cqlweb

/// Service name reported by the health endpoint
pub const SERVICE_NAME: &str = "cqlweb";

/// Default HTTP port
pub const DEFAULT_HTTP_PORT: u16 = 8081;

/// Default HTTP bind address
pub const DEFAULT_HTTP_HOST: &str = "0.0.0.0";

/// Default native protocol contact point
pub const DEFAULT_CONTACT_POINT: &str = "127.0.0.1:9042";

/// Default configuration file path
pub const DEFAULT_CONFIG_PATH: &str = "conf/cqlweb.toml";

/// Default directory for static assets
pub const DEFAULT_STATIC_DIR: &str = "static";

/// Prefix shared by all internal keyspaces
pub const SYSTEM_KEYSPACE_PREFIX: &str = "system";

/// Prefix of DataStax Enterprise keyspaces (legacy catalogs only)
pub const DSE_KEYSPACE_PREFIX: &str = "dse_";

/// Suffix of legacy validator class names
pub const VALIDATOR_SUFFIX: &str = "Type";

/// Legacy wrapper marking descending clustering order
pub const REVERSED_VALIDATOR: &str = "ReversedType";
