//! String tools.
//!
//! Comparison, case/shape transformations, text analysis and
//! base64/hex encoding. Everything operates on UTF-8 strings with no
//! locale awareness.

mod analyze;
mod compare;
mod encode;
mod transform;

pub use analyze::StringAnalyzeTool;
pub use compare::StringCompareTool;
pub use encode::StringEncodeTool;
pub use transform::StringTransformTool;

use super::Domain;
use crate::core::{Result, ToolRegistry};

/// The string domain descriptor.
pub fn domain() -> Domain {
    Domain {
        name: "string-mcp-server",
        version: env!("CARGO_PKG_VERSION"),
        instructions: "String utilities: compare two strings, transform case \
                       and shape, analyze text composition, and encode or \
                       decode base64/hex. All tools are stateless.",
        register,
    }
}

fn register(registry: &mut ToolRegistry) -> Result<()> {
    StringCompareTool::register(registry)?;
    StringTransformTool::register(registry)?;
    StringAnalyzeTool::register(registry)?;
    StringEncodeTool::register(registry)?;
    Ok(())
}
