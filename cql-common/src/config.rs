// Copyright 2025 The cqlweb Authors
// Licensed under the Apache License, Version 2.0

//! Configuration management for cqlweb

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::constants::{
    DEFAULT_CONTACT_POINT, DEFAULT_HTTP_HOST, DEFAULT_HTTP_PORT, DEFAULT_STATIC_DIR,
};
use crate::error::CqlError;
use crate::types::{CatalogVersion, Consistency};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP bind address
    pub http_host: String,

    /// HTTP server port
    pub http_port: u16,

    /// Cluster contact points (host:port)
    pub contact_points: Vec<String>,

    /// Authentication user
    pub username: Option<String>,

    /// Authentication password
    #[serde(skip_serializing)]
    pub password: Option<String>,

    /// Which schema catalog the cluster exposes
    pub catalog_version: CatalogVersion,

    /// Consistency level for every statement
    pub consistency: Consistency,

    /// Directory served under /static
    pub static_dir: PathBuf,

    /// Log level
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            http_host: DEFAULT_HTTP_HOST.to_string(),
            http_port: DEFAULT_HTTP_PORT,
            contact_points: vec![DEFAULT_CONTACT_POINT.to_string()],
            username: None,
            password: None,
            catalog_version: CatalogVersion::V4,
            consistency: Consistency::One,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_file(path: &Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> crate::Result<Self> {
        toml::from_str(content).map_err(|e| CqlError::InvalidArgument(e.to_string()))
    }

    /// Load from `path` if it exists, otherwise start from defaults, then
    /// apply environment overrides.
    pub fn load(path: &Path) -> crate::Result<Self> {
        let mut config = if path.exists() {
            Self::from_file(path)?
        } else {
            Self::default()
        };
        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Apply overrides from an environment-like lookup.
    ///
    /// Recognised keys: `CQLWEB_HTTP_PORT`, `CASSANDRA_HOSTS` (comma
    /// separated), `CASSANDRA_USER` together with `CASSANDRA_PASS`, and
    /// `CQLWEB_CATALOG_VERSION`. Values that do not parse are ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(port) = lookup("CQLWEB_HTTP_PORT") {
            if let Ok(port_num) = port.parse::<u16>() {
                self.http_port = port_num;
            }
        }

        if let Some(hosts) = lookup("CASSANDRA_HOSTS") {
            let points: Vec<String> = hosts
                .split(',')
                .map(|h| h.trim())
                .filter(|h| !h.is_empty())
                .map(|h| h.to_string())
                .collect();
            if !points.is_empty() {
                self.contact_points = points;
            }
        }

        if let (Some(user), Some(pass)) = (lookup("CASSANDRA_USER"), lookup("CASSANDRA_PASS")) {
            self.username = Some(user);
            self.password = Some(pass);
        }

        if let Some(version) = lookup("CQLWEB_CATALOG_VERSION") {
            if let Ok(version) = version.parse::<CatalogVersion>() {
                self.catalog_version = version;
            }
        }
    }

    pub fn validate(&self) -> crate::Result<()> {
        if self.http_port == 0 {
            return Err(CqlError::InvalidArgument(
                "http_port cannot be 0".to_string(),
            ));
        }
        if self.contact_points.is_empty() {
            return Err(CqlError::InvalidArgument(
                "at least one contact point is required".to_string(),
            ));
        }
        if self.username.is_some() != self.password.is_some() {
            return Err(CqlError::InvalidArgument(
                "username and password must be set together".to_string(),
            ));
        }
        Ok(())
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.http_host, self.http_port)
    }
}
