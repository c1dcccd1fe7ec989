//! FoodScan
//!
//! An MCP server for packaged food ingredient and nutrition analysis.

use rmcp::ServiceExt;
use tokio::io::{stdin, stdout};
use tracing_subscriber::EnvFilter;

mod analysis;
mod build_info;
mod config;
mod lookup;
mod mcp;
mod models;
mod nutrition;
mod tools;

use config::Config;
use lookup::ProductClient;
use mcp::FoodScanService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr; stdout carries the MCP transport
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("foodscan=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    build_info::print_startup_banner();
    eprintln!("Starting MCP server on stdio...");

    let config = Config::from_env();
    eprintln!("Product API: {}", config.api_base_url);
    tracing::debug!("HTTP timeout {:?}, user agent {}", config.http_timeout, config.user_agent);

    let client = ProductClient::new(&config)?;
    let service = FoodScanService::new(client);

    let transport = (stdin(), stdout());
    let server = service.serve(transport).await?;
    server.waiting().await?;

    Ok(())
}
