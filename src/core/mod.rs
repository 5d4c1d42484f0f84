//! Core module containing the generic protocol infrastructure.
//!
//! This module provides everything that is shared by the four servers:
//! error handling, configuration, the tool registry, the result envelope,
//! the protocol session and the transport layer abstractions.

pub mod bootstrap;
pub mod config;
pub mod envelope;
pub mod error;
pub mod registry;
pub mod server;
pub mod transport;

pub use config::Config;
pub use envelope::ToolResult;
pub use error::{Error, Result};
pub use registry::{Handler, ToolRegistry};
pub use server::UtilityServer;
pub use transport::{TransportConfig, TransportService};
