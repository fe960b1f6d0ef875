// ABOUTME: Server binary: loads configuration, wires resources, serves the HTTP API
// ABOUTME: Fails fast at startup when required environment variables are missing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Rexora Media

//! # Rexora Media Server Binary
//!
//! Starts the portfolio CMS backend: admin authentication, media uploads,
//! and the public content API.

use anyhow::Result;
use clap::Parser;
use rexora_media_server::{
    config::environment::ServerConfig,
    logging,
    server::{self, ServerResources},
    store,
};
use std::sync::Arc;
use tracing::info;

/// Command-line arguments
#[derive(Parser)]
#[command(name = "rexora-media-server")]
#[command(about = "Rexora Media - portfolio CMS backend")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Configuration first: a missing variable must abort before anything
    // else starts, with every missing name in the error.
    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }

    logging::init_from_env()?;

    info!("Starting Rexora Media API");
    config.log_summary();

    let store = store::connect(&config.store)?;

    let resources = Arc::new(ServerResources::new(config, store));
    server::serve(resources).await
}
