// ABOUTME: Server binary for the exercise tracker REST API
// ABOUTME: Loads configuration, opens the storage backend and serves HTTP until shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Exercise Tracker Contributors

//! # Exercise Tracker Server Binary
//!
//! Starts the exercise tracker HTTP API over the configured storage backend.

use anyhow::{Context, Result};
use clap::Parser;
use exercise_tracker::{
    config::environment::{load_dotenv, DatabaseUrl, ServerConfig},
    database::Database,
    logging, server,
};
use std::sync::Arc;
use tracing::{error, info, warn};

#[derive(Parser)]
#[command(name = "exercise-tracker-server")]
#[command(about = "Exercise Tracker - REST API for recording workout exercises")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override bind host
    #[arg(long)]
    host: Option<String>,

    /// Override storage location (memory:, sqlite::memory:, sqlite:path)
    #[arg(long)]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let dotenv_error = load_dotenv();
    logging::init_from_env()?;
    if let Some(e) = dotenv_error {
        warn!("No .env file found or failed to load: {}", e);
    }

    info!("Loading configuration from environment variables");
    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(url) = args.database_url.as_deref() {
        config.database.url =
            DatabaseUrl::parse_url(url).context("Invalid --database-url value")?;
    }

    if let Some(warning) = config.storage_warning() {
        warn!("{}", warning);
    }

    info!("Starting Exercise Tracker");
    info!("{}", config.summary());

    let database = Database::new(&config.database.url)
        .await
        .context("Failed to open exercise storage")?;

    if let Err(e) = server::run(&config, Arc::new(database)).await {
        error!("Server error: {:#}", e);
        return Err(e);
    }

    Ok(())
}
