//! Tool registry: the immutable catalog binding tool names to handlers.
//!
//! The registry is built once at startup, before any transport accepts
//! traffic, and is read-only for the process lifetime. Listing preserves
//! registration order; resolution is O(1).

use std::collections::HashMap;

use rmcp::model::{JsonObject, Tool};

use super::envelope::ToolResult;
use super::error::{Error, Result, ToolError};

/// The callable bound to a tool name.
///
/// Handlers are pure functions over the raw argument map: they apply
/// schema defaults, deserialize their parameter struct and run the domain
/// logic. Any `Err` is converted by the session into an `isError`
/// response; it never propagates further.
pub type Handler = Box<dyn Fn(&JsonObject) -> std::result::Result<ToolResult, ToolError> + Send + Sync>;

/// Ordered, immutable mapping from tool name to descriptor and handler.
pub struct ToolRegistry {
    order: Vec<String>,
    entries: HashMap<String, (Tool, Handler)>,
}

impl ToolRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            order: Vec::new(),
            entries: HashMap::new(),
        }
    }

    /// Register a tool descriptor and its handler.
    ///
    /// Called only during startup. A duplicate name is a configuration
    /// fault that aborts the process before any transport binds.
    pub fn register(&mut self, tool: Tool, handler: Handler) -> Result<()> {
        let name = tool.name.to_string();
        if self.entries.contains_key(&name) {
            return Err(Error::config(format!("duplicate tool name: {name}")));
        }
        self.order.push(name.clone());
        self.entries.insert(name, (tool, handler));
        Ok(())
    }

    /// Return all tool descriptors in registration order.
    pub fn list(&self) -> Vec<Tool> {
        self.order
            .iter()
            .map(|name| self.entries[name].0.clone())
            .collect()
    }

    /// Look up the handler for a tool name.
    ///
    /// `None` is a distinguished outcome, not an error: the session maps
    /// it to an `isError` response.
    pub fn resolve(&self, name: &str) -> Option<&Handler> {
        self.entries.get(name).map(|(_, handler)| handler)
    }

    /// Number of registered tools.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests
// ============================================================================
