// Copyright 2025 The cqlweb Authors
// Licensed under the Apache License, Version 2.0

//! cqlweb Main Entry Point

use clap::Parser;
use cql_common::constants::DEFAULT_CONFIG_PATH;
use cql_common::version::BuildInfo;
use cql_common::{CatalogVersion, Config};
use cql_http::{AppState, HttpServer};
use cql_store::ScyllaStore;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::signal;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Log level (overrides the config file; RUST_LOG wins over both)
    #[arg(short, long)]
    log_level: Option<String>,

    /// HTTP port (overrides the config file)
    #[arg(short, long)]
    port: Option<u16>,

    /// Schema catalog representation: v3 or v4
    #[arg(long)]
    catalog_version: Option<CatalogVersion>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Load configuration
    let mut config = load_config(&args.config)?;

    // Initialize logging
    init_logging(args.log_level.as_deref().unwrap_or(&config.log_level))?;

    info!("Starting {}", BuildInfo::current().banner());

    if args.config.exists() {
        info!("Configuration loaded from: {:?}", args.config);
    } else {
        warn!("Config file not found: {:?}, using defaults", args.config);
    }

    if let Some(port) = args.port {
        config.http_port = port;
    }
    if let Some(version) = args.catalog_version {
        config.catalog_version = version;
    }

    config.validate()?;

    info!("HTTP Address: {}", config.listen_addr());
    info!("Contact Points: {}", config.contact_points.join(","));
    info!("Catalog Version: {}", config.catalog_version);

    let store = ScyllaStore::connect(&config)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to connect to cluster: {}", e))?;
    info!("Store ready ({})", store.contact_points().join(","));

    let state = Arc::new(AppState::new(Arc::new(store), config.catalog_version));
    let server = HttpServer::new(config.listen_addr(), state, config.static_dir.clone());

    info!("cqlweb is ready to serve");

    server.serve(wait_for_shutdown()).await?;

    info!("cqlweb shut down complete");

    Ok(())
}

/// Initialize logging
fn init_logging(log_level: &str) -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .with_line_number(true)
        .with_ansi(true)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

/// Load configuration from file, then apply environment overrides
fn load_config(config_path: &PathBuf) -> anyhow::Result<Config> {
    Config::load(config_path).map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
}

/// Wait for shutdown signal (SIGINT or SIGTERM)
async fn wait_for_shutdown() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C signal");
        }
        _ = terminate => {
            info!("Received SIGTERM signal");
        }
    }
}
