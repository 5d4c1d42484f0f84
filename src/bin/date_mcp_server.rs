//! Date utility server entrypoint.

use utility_mcp_servers::core::bootstrap;
use utility_mcp_servers::domains::date;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    bootstrap::run(date::domain()).await
}
