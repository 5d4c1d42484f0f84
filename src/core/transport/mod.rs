//! Transport layer for the utility servers.
//!
//! Two physical channels carry the same protocol session:
//! - **STDIO**: newline-delimited messages over the process streams,
//!   handled by rmcp (diagnostics go to stderr, never stdout)
//! - **HTTP**: the streamable variant on a single configured path, with
//!   session-id issuance, host/origin allow-listing and a health check
//!
//! Either or both can be enabled at runtime; each adapter handles its
//! connection lifecycle and delegates message processing to the protocol
//! session.

mod config;
mod error;
mod service;

pub mod http;
pub mod stdio;

pub use config::{HttpConfig, TransportConfig};
pub use error::{TransportError, TransportResult};
pub use service::TransportService;
