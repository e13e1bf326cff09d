//! ADO Instructions MCP Server
//! Turns meeting transcripts, requirement text, and collaborator feature
//! records into Epic/Task work-item hierarchies ready for Azure DevOps
//! import, exposed as MCP tools over stdio.

mod params;
mod server;
mod summary;
mod tools;

use anyhow::Result;
use rmcp::ServiceExt;
use server::AdoServer;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let project_root = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| std::env::current_dir().expect("failed to get current directory"));

    tracing::info!(root = %project_root.display(), "ADO instructions MCP server starting");

    let server = AdoServer::new(&project_root);
    let service = server
        .serve(rmcp::transport::io::stdio())
        .await
        .inspect_err(|e| tracing::error!("serve error: {e}"))
        .map_err(|e| anyhow::anyhow!("{e}"))?;
    service.waiting().await?;

    Ok(())
}
