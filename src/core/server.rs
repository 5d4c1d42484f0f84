//! The protocol session, i.e. the transport-agnostic dispatcher.
//!
//! [`UtilityServer`] is the single authority turning an inbound protocol
//! message into an outbound one, regardless of which transport delivered
//! it. The stdio transport reaches it through the rmcp `ServerHandler`
//! implementation; the HTTP transport calls [`UtilityServer::dispatch_call`]
//! and [`UtilityServer::list_tools`] directly. Construction performs no
//! I/O.

use std::sync::Arc;

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler,
    model::{
        CallToolRequestParam, CallToolResult, Implementation, JsonObject, ListToolsResult,
        PaginatedRequestParam, ServerCapabilities, ServerInfo, Tool,
    },
    service::RequestContext,
};
use tracing::{info, instrument, warn};

use super::envelope::{self, MissingArguments};
use super::error::Result;
use super::registry::ToolRegistry;
use crate::domains::Domain;

/// The protocol session shared by both transports.
///
/// Cheap to clone: the registry is built once and shared behind an `Arc`,
/// read-only for the process lifetime.
#[derive(Clone)]
pub struct UtilityServer {
    name: Arc<str>,
    version: Arc<str>,
    instructions: Arc<str>,
    registry: Arc<ToolRegistry>,
}

impl UtilityServer {
    /// Build the session for one domain.
    ///
    /// Fails fast when the domain registers a duplicate tool name; no
    /// partial service is ever exposed.
    pub fn new(domain: &Domain, server_name: &str) -> Result<Self> {
        let mut registry = ToolRegistry::new();
        (domain.register)(&mut registry)?;

        info!(
            "Registered {} tools for domain '{}'",
            registry.len(),
            domain.name
        );

        Ok(Self {
            name: server_name.into(),
            version: domain.version.into(),
            instructions: domain.instructions.into(),
            registry: Arc::new(registry),
        })
    }

    /// Get the server name as reported to clients.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Return all tool descriptors in registration order.
    pub fn list_tools(&self) -> Vec<Tool> {
        self.registry.list()
    }

    /// Dispatch a call-tool request to its handler.
    ///
    /// All four dispatch outcomes are encoded here and nowhere else:
    ///
    /// 1. absent `arguments` → `isError` "No arguments provided", checked
    ///    uniformly before resolution, even for tools without required
    ///    fields;
    /// 2. unresolved name → `isError` "Unknown tool: ...";
    /// 3. handler fault → `isError` "Tool execution failed: ...";
    /// 4. otherwise the handler's envelope, with `isError` unset even when
    ///    it reports `success: false`.
    ///
    /// No fault propagates past this boundary.
    #[instrument(skip(self, arguments), fields(tool = %name))]
    pub fn dispatch_call(&self, name: &str, arguments: Option<JsonObject>) -> CallToolResult {
        let arguments = match envelope::decode(arguments) {
            Ok(args) => args,
            Err(MissingArguments) => {
                warn!("Call without arguments");
                return envelope::encode_dispatch_error("No arguments provided");
            }
        };

        let handler = match self.registry.resolve(name) {
            Some(handler) => handler,
            None => {
                warn!("Unknown tool requested");
                return envelope::encode_dispatch_error(format!("Unknown tool: {name}"));
            }
        };

        match handler(&arguments) {
            Ok(result) => envelope::encode(&result),
            Err(e) => {
                warn!("Handler fault: {e}");
                envelope::encode_dispatch_error(format!("Tool execution failed: {e}"))
            }
        }
    }
}

impl ServerHandler for UtilityServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: Implementation {
                name: self.name.to_string().into(),
                version: self.version.to_string().into(),
                ..Default::default()
            },
            instructions: Some(self.instructions.to_string()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }

    #[instrument(skip_all)]
    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListToolsResult, McpError> {
        info!("Listing tools");
        Ok(ListToolsResult {
            tools: self.list_tools(),
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip_all, fields(tool = %request.name))]
    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<CallToolResult, McpError> {
        info!("Calling tool");
        Ok(self.dispatch_call(&request.name, request.arguments))
    }
}

// ============================================================================
// Tests
// ============================================================================
