//! Pattern matching tool.

use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Value, json};

use super::compile;
use crate::core::{Result, ToolRegistry, ToolResult};
use crate::domains::register_tool;

/// Parameters for the match tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct RegexMatchParams {
    /// Pattern to search with.
    pub pattern: String,

    /// Text to search in.
    pub text: String,

    /// Flags string; add "g" to collect every match.
    #[serde(default)]
    pub flags: String,
}

/// Match tool - finds pattern occurrences in a text.
pub struct RegexMatchTool;

impl RegexMatchTool {
    pub const NAME: &'static str = "regex_match";

    pub const DESCRIPTION: &'static str =
        "Find occurrences of a pattern in a text. Returns each match with its \
         byte index and capture groups; only the first match without the g flag.";

    /// Execute the tool logic.
    pub fn execute(params: &RegexMatchParams) -> ToolResult {
        let compiled = match compile(&params.pattern, &params.flags) {
            Ok(c) => c,
            Err(message) => return ToolResult::failure(message),
        };

        let mut matches: Vec<Value> = Vec::new();
        for captures in compiled.regex.captures_iter(&params.text) {
            // Group 0 is the whole match and always present.
            let Some(whole) = captures.get(0) else {
                continue;
            };
            let groups: Vec<Value> = (1..captures.len())
                .map(|i| match captures.get(i) {
                    Some(group) => Value::String(group.as_str().to_string()),
                    None => Value::Null,
                })
                .collect();
            matches.push(json!({
                "match": whole.as_str(),
                "index": whole.start(),
                "groups": groups,
            }));
            if !compiled.global {
                break;
            }
        }

        let count = matches.len();
        ToolResult::success_with_metadata(
            json!({ "matches": matches, "count": count }),
            json!({ "pattern": params.pattern, "flags": params.flags }),
        )
    }

    /// Register this tool.
    pub fn register(registry: &mut ToolRegistry) -> Result<()> {
        register_tool(registry, Self::NAME, Self::DESCRIPTION, Self::execute)
    }
}
