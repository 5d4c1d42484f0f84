//! Error types and handling for the utility servers.
//!
//! This module defines a unified error type that can represent errors from
//! the protocol core and the tool domains, providing consistent error
//! handling across the entire application.

use thiserror::Error;

/// A specialized Result type for server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the utility servers.
#[derive(Debug, Error)]
pub enum Error {
    /// Error originating from a tool handler.
    #[error("Tool error: {0}")]
    Tool(#[from] ToolError),

    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

/// Errors a tool handler can report to the protocol session.
///
/// These never escape the session: every variant is converted into an
/// `isError` call-tool response (see [`crate::core::server`]).
#[derive(Debug, Error)]
pub enum ToolError {
    /// Invalid arguments were provided to the tool.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// The tool execution failed unexpectedly.
    #[error("Execution failed: {0}")]
    ExecutionFailed(String),
}

impl ToolError {
    /// Create a new "invalid arguments" error.
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }

    /// Create a new "execution failed" error.
    pub fn execution_failed(msg: impl Into<String>) -> Self {
        Self::ExecutionFailed(msg.into())
    }
}
