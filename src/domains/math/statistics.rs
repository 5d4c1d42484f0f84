//! Descriptive statistics tool.

use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::json;

use crate::core::{Result, ToolRegistry, ToolResult};
use crate::domains::register_tool;

/// Parameters for the statistics tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct MathStatisticsParams {
    /// Numbers to describe.
    pub values: Vec<f64>,
}

/// Statistics tool - descriptive statistics over a list of numbers.
pub struct MathStatisticsTool;

impl MathStatisticsTool {
    pub const NAME: &'static str = "math_statistics";

    pub const DESCRIPTION: &'static str =
        "Compute descriptive statistics over a list of numbers: count, sum, \
         mean, median, min, max, population variance and standard deviation.";

    /// Execute the tool logic.
    pub fn execute(params: &MathStatisticsParams) -> ToolResult {
        if params.values.is_empty() {
            return ToolResult::failure("Cannot compute statistics of an empty list");
        }
        if params.values.iter().any(|v| !v.is_finite()) {
            return ToolResult::failure("All values must be finite numbers");
        }

        let count = params.values.len();
        let sum: f64 = params.values.iter().sum();
        let mean = sum / count as f64;

        let mut sorted = params.values.clone();
        sorted.sort_by(|a, b| a.total_cmp(b));
        let median = if count % 2 == 0 {
            (sorted[count / 2 - 1] + sorted[count / 2]) / 2.0
        } else {
            sorted[count / 2]
        };

        let variance =
            params.values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / count as f64;

        ToolResult::success(json!({
            "count": count,
            "sum": sum,
            "mean": mean,
            "median": median,
            "min": sorted[0],
            "max": sorted[count - 1],
            "variance": variance,
            "standardDeviation": variance.sqrt(),
        }))
    }

    /// Register this tool.
    pub fn register(registry: &mut ToolRegistry) -> Result<()> {
        register_tool(registry, Self::NAME, Self::DESCRIPTION, Self::execute)
    }
}
