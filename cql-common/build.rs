// Copyright 2025 The cqlweb Authors
// Licensed under the Apache License, Version 2.0

//! Embeds the source commit and build time as CQLWEB_GIT_SHA and
//! CQLWEB_BUILD_TIMESTAMP.

use chrono::{DateTime, SecondsFormat, Utc};
use std::process::Command;

fn main() {
    println!("cargo:rustc-env=CQLWEB_GIT_SHA={}", git_commit());
    println!("cargo:rustc-env=CQLWEB_BUILD_TIMESTAMP={}", build_time());

    println!("cargo:rerun-if-changed=../.git/HEAD");
    println!("cargo:rerun-if-env-changed=SOURCE_DATE_EPOCH");
}

/// Short commit hash with a `-dirty` mark, or "unknown" outside a checkout
fn git_commit() -> String {
    Command::new("git")
        .args(["describe", "--always", "--dirty", "--abbrev=10"])
        .output()
        .ok()
        .filter(|out| out.status.success())
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .map(|sha| sha.trim().to_string())
        .filter(|sha| !sha.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}

/// RFC 3339 build time; SOURCE_DATE_EPOCH pins it for reproducible builds
fn build_time() -> String {
    let pinned = std::env::var("SOURCE_DATE_EPOCH")
        .ok()
        .and_then(|secs| secs.parse::<i64>().ok())
        .and_then(|secs| DateTime::<Utc>::from_timestamp(secs, 0));

    pinned
        .unwrap_or_else(Utc::now)
        .to_rfc3339_opts(SecondsFormat::Secs, true)
}
