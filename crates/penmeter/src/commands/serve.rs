//! Serve command — MCP server on stdio.

use anyhow::Context;
use clap::Args;
use rmcp::ServiceExt;
use tracing::{info, instrument};

use penmeter_core::config::Config;

use crate::server::PenmeterServer;

/// Arguments for the `serve` subcommand.
#[derive(Args, Debug, Default)]
pub struct ServeArgs {
    // No subcommand-specific arguments; stdio is the only transport
}

/// Run the MCP server until the client disconnects.
///
/// Stdout carries the protocol, so all logging must go to stderr or the
/// log file.
#[instrument(name = "cmd_serve", skip_all)]
pub async fn cmd_serve(_args: ServeArgs, config: Config) -> anyhow::Result<()> {
    let server = PenmeterServer::new(config.analyzer(), config.input_limit());

    info!("starting MCP server on stdio");
    let service = server
        .serve(rmcp::transport::stdio())
        .await
        .context("failed to start MCP server")?;

    let reason = service.waiting().await.context("MCP server task failed")?;
    info!(?reason, "MCP server stopped");
    Ok(())
}
