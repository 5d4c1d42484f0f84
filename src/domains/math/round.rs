//! Rounding tool.

use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::json;

use super::number_value;
use crate::core::{Result, ToolRegistry, ToolResult};
use crate::domains::register_tool;

/// Rounding strategy.
#[derive(Debug, Clone, Copy, Default, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum RoundMode {
    /// Round half away from zero.
    #[default]
    Round,
    /// Round toward negative infinity.
    Floor,
    /// Round toward positive infinity.
    Ceil,
    /// Round toward zero.
    Trunc,
}

/// Parameters for the round tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct MathRoundParams {
    /// Value to round.
    pub value: f64,

    /// Decimal places to keep. Defaults to 0.
    #[serde(default)]
    pub precision: u32,

    /// Rounding strategy. Defaults to "round".
    #[serde(default)]
    pub mode: RoundMode,
}

/// Round tool - rounds a value to a given precision.
pub struct MathRoundTool;

impl MathRoundTool {
    pub const NAME: &'static str = "math_round";

    pub const DESCRIPTION: &'static str =
        "Round a number to a given number of decimal places using round, \
         floor, ceil or trunc.";

    /// Execute the tool logic.
    pub fn execute(params: &MathRoundParams) -> ToolResult {
        if !params.value.is_finite() {
            return ToolResult::failure("Value must be a finite number");
        }
        if params.precision > 12 {
            return ToolResult::failure("Precision must be at most 12");
        }

        let factor = 10f64.powi(params.precision as i32);
        let scaled = params.value * factor;
        let rounded = match params.mode {
            RoundMode::Round => scaled.round(),
            RoundMode::Floor => scaled.floor(),
            RoundMode::Ceil => scaled.ceil(),
            RoundMode::Trunc => scaled.trunc(),
        } / factor;

        let (value, _) = number_value(rounded);
        let mode = format!("{:?}", params.mode).to_lowercase();
        ToolResult::success(json!({
            "value": value,
            "original": params.value,
            "precision": params.precision,
            "mode": mode,
        }))
    }

    /// Register this tool.
    pub fn register(registry: &mut ToolRegistry) -> Result<()> {
        register_tool(registry, Self::NAME, Self::DESCRIPTION, Self::execute)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(value: f64, precision: u32, mode: RoundMode) -> ToolResult {
        MathRoundTool::execute(&MathRoundParams {
            value,
            precision,
            mode,
        })
    }

    #[test]
    fn test_round_to_integer() {
        let result = run(2.6, 0, RoundMode::Round);
        assert_eq!(result.result.unwrap()["value"], 3);
    }

    #[test]
    fn test_round_to_precision() {
        let result = run(3.14159, 2, RoundMode::Round);
        assert_eq!(result.result.unwrap()["value"], 3.14);
    }

    #[test]
    fn test_floor_and_ceil() {
        assert_eq!(run(2.9, 0, RoundMode::Floor).result.unwrap()["value"], 2);
        assert_eq!(run(2.1, 0, RoundMode::Ceil).result.unwrap()["value"], 3);
    }

    #[test]
    fn test_trunc_negative() {
        assert_eq!(run(-2.7, 0, RoundMode::Trunc).result.unwrap()["value"], -2);
    }

    #[test]
    fn test_non_finite_is_domain_error() {
        assert!(!run(f64::NAN, 0, RoundMode::Round).success);
    }

    #[test]
    fn test_excessive_precision_is_domain_error() {
        assert!(!run(1.0, 13, RoundMode::Round).success);
    }
}
