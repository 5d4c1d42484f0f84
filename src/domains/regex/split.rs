//! Pattern split tool.

use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::json;

use super::compile;
use crate::core::{Result, ToolRegistry, ToolResult};
use crate::domains::register_tool;

/// Parameters for the split tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct RegexSplitParams {
    /// Separator pattern.
    pub pattern: String,

    /// Text to split.
    pub text: String,

    /// Flags string (the g flag has no extra effect here).
    #[serde(default)]
    pub flags: String,

    /// Maximum number of parts; unlimited when omitted or zero.
    #[serde(default)]
    pub limit: usize,
}

/// Split tool - splits a text on a separator pattern.
pub struct RegexSplitTool;

impl RegexSplitTool {
    pub const NAME: &'static str = "regex_split";

    pub const DESCRIPTION: &'static str =
        "Split a text on a separator pattern. Returns the parts in order; an \
         optional limit caps the number of parts, with the remainder kept in \
         the last one.";

    /// Execute the tool logic.
    pub fn execute(params: &RegexSplitParams) -> ToolResult {
        let compiled = match compile(&params.pattern, &params.flags) {
            Ok(c) => c,
            Err(message) => return ToolResult::failure(message),
        };

        let parts: Vec<&str> = if params.limit > 0 {
            compiled.regex.splitn(&params.text, params.limit).collect()
        } else {
            compiled.regex.split(&params.text).collect()
        };

        let count = parts.len();
        ToolResult::success_with_metadata(
            json!({ "parts": parts, "count": count }),
            json!({ "pattern": params.pattern, "flags": params.flags }),
        )
    }

    /// Register this tool.
    pub fn register(registry: &mut ToolRegistry) -> Result<()> {
        register_tool(registry, Self::NAME, Self::DESCRIPTION, Self::execute)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(pattern: &str, text: &str, limit: usize) -> ToolResult {
        RegexSplitTool::execute(&RegexSplitParams {
            pattern: pattern.to_string(),
            text: text.to_string(),
            flags: String::new(),
            limit,
        })
    }

    #[test]
    fn test_split_unlimited() {
        let result = run(r",\s*", "a, b,c", 0);
        let body = result.result.unwrap();
        assert_eq!(body["parts"], json!(["a", "b", "c"]));
        assert_eq!(body["count"], 3);
    }

    #[test]
    fn test_split_with_limit_keeps_remainder() {
        let result = run(",", "a,b,c,d", 2);
        let body = result.result.unwrap();
        assert_eq!(body["parts"], json!(["a", "b,c,d"]));
    }

    #[test]
    fn test_split_without_separator_returns_whole_text() {
        let result = run(";", "abc", 0);
        let body = result.result.unwrap();
        assert_eq!(body["parts"], json!(["abc"]));
        assert_eq!(body["count"], 1);
    }

    #[test]
    fn test_bad_pattern_is_domain_error() {
        let result = run("(unclosed", "text", 0);
        assert!(!result.success);
    }
}
