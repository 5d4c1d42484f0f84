//! Utility MCP Servers
//!
//! This crate provides four Model Context Protocol (MCP) servers exposing
//! stateless utility tools (regular expressions, math, string and date
//! operations) over a shared dispatch and transport core.
//!
//! # Architecture
//!
//! - **core**: the generic protocol core: configuration, error handling,
//!   the tool registry, the result envelope, the protocol session and the
//!   transport layer (stdio and HTTP)
//! - **domains**: the four tool sets, one module per server domain
//!
//! Each binary under `src/bin/` instantiates the core with one
//! [`domains::Domain`] descriptor; there is exactly one dispatcher
//! implementation, parameterized by the tool set it serves.
//!
//! # Example
//!
//! ```rust,no_run
//! use utility_mcp_servers::{core::bootstrap, domains::math};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     bootstrap::run(math::domain()).await
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, Result, ToolRegistry, ToolResult, UtilityServer};
