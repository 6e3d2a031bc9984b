//! devops-graph server.
//!
//! Usage:
//!   PAT=<token> devops-graph                      # serve on 0.0.0.0:4000/graphql
//!   devops-graph --token <token> --listen 127.0.0.1:8080
//!   RUST_LOG=devops_graph=debug devops-graph      # log every upstream GET

use anyhow::Result;
use clap::Parser;
use devops_graph::{server, Config};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::parse();
    tracing::debug!(?config, "configuration loaded");

    server::serve(config).await
}
