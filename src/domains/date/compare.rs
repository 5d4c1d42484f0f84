//! Timestamp comparison tool.

use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::json;

use super::parse_date;
use crate::core::{Result, ToolRegistry, ToolResult};
use crate::domains::register_tool;

/// Parameters for the compare tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct DateCompareParams {
    /// First timestamp.
    pub date1: String,

    /// Second timestamp.
    pub date2: String,
}

/// Compare tool - relates two timestamps.
pub struct DateCompareTool;

impl DateCompareTool {
    pub const NAME: &'static str = "date_compare";

    pub const DESCRIPTION: &'static str =
        "Compare two timestamps. Reports whether the first is equal to, \
         before or after the second, plus their absolute difference in \
         several units.";

    /// Execute the tool logic.
    pub fn execute(params: &DateCompareParams) -> ToolResult {
        let date1 = match parse_date(&params.date1) {
            Ok(d) => d,
            Err(message) => return ToolResult::failure(message),
        };
        let date2 = match parse_date(&params.date2) {
            Ok(d) => d,
            Err(message) => return ToolResult::failure(message),
        };

        let delta = date1.signed_duration_since(date2);
        let milliseconds = delta.num_milliseconds().abs();

        ToolResult::success_with_metadata(
            json!({
                "comparison": {
                    "equal": date1 == date2,
                    "before": date1 < date2,
                    "after": date1 > date2,
                },
                "differences": {
                    "milliseconds": milliseconds,
                    "seconds": milliseconds / 1_000,
                    "minutes": milliseconds / 60_000,
                    "hours": milliseconds / 3_600_000,
                    "days": milliseconds / 86_400_000,
                },
            }),
            json!({ "date1": params.date1, "date2": params.date2 }),
        )
    }

    /// Register this tool.
    pub fn register(registry: &mut ToolRegistry) -> Result<()> {
        register_tool(registry, Self::NAME, Self::DESCRIPTION, Self::execute)
    }
}
