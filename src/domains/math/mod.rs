//! Math tools.
//!
//! Arithmetic expression evaluation, descriptive statistics and rounding.
//! All computation is pure f64 arithmetic; non-finite outcomes are domain
//! errors, never panics.

mod calculate;
mod round;
mod statistics;

pub use calculate::MathCalculateTool;
pub use round::MathRoundTool;
pub use statistics::MathStatisticsTool;

use super::Domain;
use crate::core::{Result, ToolRegistry};

/// The math domain descriptor.
pub fn domain() -> Domain {
    Domain {
        name: "math-mcp-server",
        version: env!("CARGO_PKG_VERSION"),
        instructions: "Math utilities: evaluate arithmetic expressions, compute \
                       descriptive statistics over number lists, and round \
                       values. All tools are stateless.",
        register,
    }
}

fn register(registry: &mut ToolRegistry) -> Result<()> {
    MathCalculateTool::register(registry)?;
    MathStatisticsTool::register(registry)?;
    MathRoundTool::register(registry)?;
    Ok(())
}

/// Render a finite f64 as a JSON number, reporting whether it is integral.
///
/// Integral values serialize without a fractional part so clients see
/// `28`, not `28.0`.
pub(crate) fn number_value(value: f64) -> (serde_json::Value, &'static str) {
    if value.fract() == 0.0 && value.abs() < 9_007_199_254_740_992.0 {
        (serde_json::json!(value as i64), "integer")
    } else {
        (serde_json::json!(value), "float")
    }
}
