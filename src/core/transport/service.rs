//! Transport service - orchestrates the configured transports.
//!
//! Provides a unified interface for running the protocol session over
//! stdio, HTTP, or both channels concurrently.

use tracing::info;

use super::http::HttpTransport;
use super::stdio::StdioTransport;
use super::{TransportConfig, TransportResult};
use crate::core::UtilityServer;

/// Transport service - manages the transport layer for one server.
pub struct TransportService {
    config: TransportConfig,
}

impl TransportService {
    /// Create a new transport service with the given configuration.
    pub fn new(config: TransportConfig) -> Self {
        Self { config }
    }

    /// Create a transport service from environment variables.
    pub fn from_env() -> Self {
        Self::new(TransportConfig::from_env())
    }

    /// Get the transport configuration.
    pub fn config(&self) -> &TransportConfig {
        &self.config
    }

    /// Start the configured transports with the given protocol session.
    ///
    /// Blocks until every transport has shut down. In `Both` mode the two
    /// adapters run concurrently against clones of the same session; the
    /// first failure tears the service down.
    pub async fn run(self, server: UtilityServer) -> TransportResult<()> {
        info!("Starting transport: {}", self.config.description());

        match self.config {
            TransportConfig::Stdio => StdioTransport::run(server).await,
            TransportConfig::Http(cfg) => HttpTransport::new(cfg).run(server).await,
            TransportConfig::Both(cfg) => {
                let http = HttpTransport::new(cfg);
                tokio::try_join!(StdioTransport::run(server.clone()), http.run(server))?;
                Ok(())
            }
        }
    }
}
