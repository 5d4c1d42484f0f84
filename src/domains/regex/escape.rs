//! Literal escaping tool.

use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::json;

use crate::core::{Result, ToolRegistry, ToolResult};
use crate::domains::register_tool;

/// Parameters for the escape tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct RegexEscapeParams {
    /// Text to escape for literal use inside a pattern.
    pub text: String,
}

/// Escape tool - escapes regex metacharacters in a text.
pub struct RegexEscapeTool;

impl RegexEscapeTool {
    pub const NAME: &'static str = "regex_escape";

    pub const DESCRIPTION: &'static str =
        "Escape regular expression metacharacters so a text matches literally.";

    /// Execute the tool logic.
    pub fn execute(params: &RegexEscapeParams) -> ToolResult {
        ToolResult::success(json!({ "escaped": regex::escape(&params.text) }))
    }

    /// Register this tool.
    pub fn register(registry: &mut ToolRegistry) -> Result<()> {
        register_tool(registry, Self::NAME, Self::DESCRIPTION, Self::execute)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metacharacters_escaped() {
        let result = RegexEscapeTool::execute(&RegexEscapeParams {
            text: "1+1=2?".to_string(),
        });
        assert_eq!(result.result.unwrap()["escaped"], r"1\+1=2\?");
    }

    #[test]
    fn test_plain_text_unchanged() {
        let result = RegexEscapeTool::execute(&RegexEscapeParams {
            text: "plain".to_string(),
        });
        assert_eq!(result.result.unwrap()["escaped"], "plain");
    }
}
