//! Regex utility server entrypoint.

use utility_mcp_servers::core::bootstrap;
use utility_mcp_servers::domains::regex;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    bootstrap::run(regex::domain()).await
}
