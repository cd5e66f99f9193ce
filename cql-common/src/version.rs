// Copyright 2025 The cqlweb Authors
// Licensed under the Apache License, Version 2.0

//! Build information, logged at startup and reported by `/api/health`

use serde::Serialize;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const GIT_COMMIT: &str = env!("CQLWEB_GIT_SHA");
pub const BUILD_TIME: &str = env!("CQLWEB_BUILD_TIMESTAMP");

/// What is running: crate version, source commit, build time and compiler
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildInfo {
    pub version: &'static str,
    pub git_commit: &'static str,
    pub build_time: &'static str,
    pub rust_version: String,
}

impl BuildInfo {
    pub fn current() -> Self {
        Self {
            version: VERSION,
            git_commit: GIT_COMMIT,
            build_time: BUILD_TIME,
            rust_version: rustc_version_runtime::version().to_string(),
        }
    }

    /// One-line summary for the startup log
    pub fn banner(&self) -> String {
        format!(
            "cqlweb {} (commit {}, built {}, rustc {})",
            self.version, self.git_commit, self.build_time, self.rust_version
        )
    }
}
