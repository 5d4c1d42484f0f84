//! Tool domains: the four utility tool sets served by the binaries.
//!
//! Each domain module exposes a [`Domain`] descriptor binding its name,
//! version and tool registrar; the protocol core is instantiated once per
//! descriptor and never knows which domain it is serving.

pub mod date;
pub mod math;
pub mod regex;
pub mod string;

use rmcp::handler::server::tool::cached_schema_for_type;
use rmcp::model::Tool;
use schemars::JsonSchema;
use serde::de::DeserializeOwned;

use crate::core::error::ToolError;
use crate::core::{Result, ToolRegistry, ToolResult};

/// Descriptor for one tool domain.
///
/// `register` populates the registry at startup; it is the only
/// domain-specific code the core ever calls.
pub struct Domain {
    /// Default server name reported to clients.
    pub name: &'static str,

    /// Server version.
    pub version: &'static str,

    /// Usage instructions advertised on initialize.
    pub instructions: &'static str,

    /// Registers every tool of this domain.
    pub register: fn(&mut ToolRegistry) -> Result<()>,
}

/// Register one tool: descriptor from the parameter type's schema, handler
/// deserializing that type and running `execute`.
///
/// Optional-field defaults are applied here through `#[serde(default)]` on
/// the parameter structs; there is no further per-field schema validation,
/// so type mismatches surface as handler faults.
pub(crate) fn register_tool<P>(
    registry: &mut ToolRegistry,
    name: &'static str,
    description: &'static str,
    execute: fn(&P) -> ToolResult,
) -> Result<()>
where
    P: DeserializeOwned + JsonSchema + 'static,
{
    let tool = Tool {
        name: name.into(),
        description: Some(description.into()),
        input_schema: cached_schema_for_type::<P>(),
        annotations: None,
        output_schema: None,
        icons: None,
        meta: None,
        title: None,
    };

    registry.register(
        tool,
        Box::new(move |args| {
            let params: P = serde_json::from_value(serde_json::Value::Object(args.clone()))
                .map_err(|e| ToolError::invalid_arguments(e.to_string()))?;
            Ok(execute(&params))
        }),
    )
}
