//! Serve command: MCP server on stdio.

use anyhow::Context;
use clap::Args;
use rmcp::ServiceExt;
use tracing::{info, instrument};

use prosaic_core::Config;

use crate::server::ProjectServer;

/// Arguments for the `serve` subcommand.
#[derive(Args, Debug, Default)]
pub struct ServeArgs {}

/// Run the MCP server over stdin/stdout until the client disconnects.
///
/// Logging must stay off stdout here; the console layer writes to stderr.
#[instrument(name = "cmd_serve", skip_all)]
pub async fn cmd_serve(
    _args: ServeArgs,
    max_input_bytes: Option<usize>,
    config: Config,
) -> anyhow::Result<()> {
    info!(max_input_bytes = ?max_input_bytes, "starting MCP server on stdio");

    let server = ProjectServer::with_config(config, max_input_bytes);
    let service = server
        .serve(rmcp::transport::stdio())
        .await
        .context("failed to start MCP server")?;

    let reason = service.waiting().await.context("MCP server task failed")?;
    info!(reason = ?reason, "MCP server stopped");
    Ok(())
}
