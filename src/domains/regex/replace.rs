//! Pattern replacement tool.

use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::json;

use super::compile;
use crate::core::{Result, ToolRegistry, ToolResult};
use crate::domains::register_tool;

/// Parameters for the replace tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct RegexReplaceParams {
    /// Pattern to replace.
    pub pattern: String,

    /// Text to operate on.
    pub text: String,

    /// Replacement string; `$1`-style group references are expanded.
    pub replacement: String,

    /// Flags string; add "g" to replace every occurrence.
    #[serde(default)]
    pub flags: String,
}

/// Replace tool - substitutes pattern occurrences in a text.
pub struct RegexReplaceTool;

impl RegexReplaceTool {
    pub const NAME: &'static str = "regex_replace";

    pub const DESCRIPTION: &'static str =
        "Replace occurrences of a pattern in a text. Replaces the first \
         occurrence, or every occurrence with the g flag; $1-style group \
         references are expanded in the replacement.";

    /// Execute the tool logic.
    pub fn execute(params: &RegexReplaceParams) -> ToolResult {
        let compiled = match compile(&params.pattern, &params.flags) {
            Ok(c) => c,
            Err(message) => return ToolResult::failure(message),
        };

        let replacements = if compiled.global {
            compiled.regex.find_iter(&params.text).count()
        } else {
            usize::from(compiled.regex.is_match(&params.text))
        };

        let result = if compiled.global {
            compiled
                .regex
                .replace_all(&params.text, params.replacement.as_str())
        } else {
            compiled
                .regex
                .replace(&params.text, params.replacement.as_str())
        };

        ToolResult::success_with_metadata(
            json!({ "result": result, "replacements": replacements }),
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

    fn run(pattern: &str, text: &str, replacement: &str, flags: &str) -> ToolResult {
        RegexReplaceTool::execute(&RegexReplaceParams {
            pattern: pattern.to_string(),
            text: text.to_string(),
            replacement: replacement.to_string(),
            flags: flags.to_string(),
        })
    }

    #[test]
    fn test_replace_first_without_global() {
        let result = run(r"\d+", "a 1 b 2", "N", "");
        let body = result.result.unwrap();
        assert_eq!(body["result"], "a N b 2");
        assert_eq!(body["replacements"], 1);
    }

    #[test]
    fn test_replace_all_with_global() {
        let result = run(r"\d+", "a 1 b 2", "N", "g");
        let body = result.result.unwrap();
        assert_eq!(body["result"], "a N b N");
        assert_eq!(body["replacements"], 2);
    }

    #[test]
    fn test_group_references_expand() {
        let result = run(r"(\w+)=(\w+)", "key=value", "$2=$1", "");
        assert_eq!(result.result.unwrap()["result"], "value=key");
    }

    #[test]
    fn test_no_match_leaves_text_untouched() {
        let result = run(r"\d+", "letters", "N", "g");
        let body = result.result.unwrap();
        assert_eq!(body["result"], "letters");
        assert_eq!(body["replacements"], 0);
    }

    #[test]
    fn test_bad_pattern_is_domain_error() {
        let result = run("(unclosed", "text", "x", "");
        assert!(!result.success);
    }
}
