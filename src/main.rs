//! WordPress abilities MCP bridge.
//!
//! Serves the abilities of one WordPress site as MCP tools over stdio.
//!
//! ```bash
//! WORDPRESS_URL=https://example.com \
//! WORDPRESS_USERNAME=admin \
//! WORDPRESS_APPLICATION_PASSWORD="xxxx xxxx xxxx xxxx" \
//! wp-mcp-bridge
//! ```

mod cli;
mod logging;

use anyhow::Context;
use clap::Parser;
use rmcp::{transport::stdio, ServiceExt};
use tracing::{error, info};
use wp_abilities_mcp::AbilitiesServer;

use crate::cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(&cli.log_level, cli.log_json);

    info!("Starting wp-mcp-bridge v{}", env!("CARGO_PKG_VERSION"));

    let config = cli.to_config().context("failed to load configuration")?;
    let server = AbilitiesServer::from_config(&config).map_err(|e| {
        error!(error = %e, "Invalid configuration");
        e
    })?;
    info!(
        site = ?config.site,
        cache_ttl_secs = config.directory.cache_ttl_secs,
        request_timeout_secs = ?config.request_timeout_secs,
        proxy = ?config.proxy,
        "Configuration loaded"
    );

    let service = server
        .serve(stdio())
        .await
        .context("failed to start MCP stdio server")?;
    info!("MCP server ready, listening on stdio");

    let reason = service.waiting().await?;
    info!(reason = ?reason, "MCP server stopped");
    Ok(())
}
