//! Timestamp formatting tool.

use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::json;

use super::parse_date;
use crate::core::{Result, ToolRegistry, ToolResult};
use crate::domains::register_tool;

fn default_format() -> String {
    "%Y-%m-%d %H:%M:%S".to_string()
}

/// Parameters for the format tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct DateFormatParams {
    /// Timestamp to format.
    pub date: String,

    /// strftime pattern. Defaults to "%Y-%m-%d %H:%M:%S".
    #[serde(default = "default_format")]
    pub format: String,
}

/// Format tool - renders a timestamp with a strftime pattern.
pub struct DateFormatTool;

impl DateFormatTool {
    pub const NAME: &'static str = "date_format";

    pub const DESCRIPTION: &'static str =
        "Format a timestamp with a strftime pattern such as \"%Y-%m-%d\" or \
         \"%A, %B %d %Y\". Output is rendered in UTC.";

    /// Execute the tool logic.
    pub fn execute(params: &DateFormatParams) -> ToolResult {
        let date = match parse_date(&params.date) {
            Ok(d) => d,
            Err(message) => return ToolResult::failure(message),
        };

        // format() panics on bad specifiers only when written to; going
        // through DelayedFormat + write keeps the error recoverable.
        let mut formatted = String::new();
        if std::fmt::write(
            &mut formatted,
            format_args!("{}", date.format(&params.format)),
        )
        .is_err()
        {
            return ToolResult::failure(format!(
                "Invalid format pattern: '{}'",
                params.format
            ));
        }

        ToolResult::success(json!({
            "formatted": formatted,
            "source": params.date,
        }))
    }

    /// Register this tool.
    pub fn register(registry: &mut ToolRegistry) -> Result<()> {
        register_tool(registry, Self::NAME, Self::DESCRIPTION, Self::execute)
    }
}
