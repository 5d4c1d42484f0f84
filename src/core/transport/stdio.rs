//! STDIO transport implementation.
//!
//! Standard input/output transport for MCP - the default mode. Framing is
//! newline-delimited and strictly sequential: one request is answered
//! before the next is read. All diagnostics go to stderr so protocol
//! framing on stdout is never corrupted.

use rmcp::ServiceExt;
use tracing::info;

use super::{TransportError, TransportResult};
use crate::core::UtilityServer;

/// STDIO transport handler.
pub struct StdioTransport;

impl StdioTransport {
    /// Run the STDIO transport until the peer disconnects or an interrupt
    /// signal arrives.
    pub async fn run(server: UtilityServer) -> TransportResult<()> {
        info!("Ready - communicating via stdin/stdout");

        let service = server
            .serve(rmcp::transport::stdio())
            .await
            .map_err(|e| TransportError::init(e.to_string()))?;

        tokio::select! {
            result = service.waiting() => {
                result.map_err(|e| TransportError::ServiceError(e.to_string()))?;
            }
            _ = tokio::signal::ctrl_c() => {
                // Dropping the running service closes the session before
                // the process exits.
                info!("Interrupt received, closing stdio session");
            }
        }

        info!("STDIO transport finished");
        Ok(())
    }
}
