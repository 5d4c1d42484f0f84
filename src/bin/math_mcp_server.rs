//! Math utility server entrypoint.

use utility_mcp_servers::core::bootstrap;
use utility_mcp_servers::domains::math;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    bootstrap::run(math::domain()).await
}
