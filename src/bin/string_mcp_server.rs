//! String utility server entrypoint.

use utility_mcp_servers::core::bootstrap;
use utility_mcp_servers::domains::string;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    bootstrap::run(string::domain()).await
}
