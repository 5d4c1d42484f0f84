//! Pattern validation tool.

use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::json;

use super::compile;
use crate::core::{Result, ToolRegistry, ToolResult};
use crate::domains::register_tool;

/// Parameters for the validate tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct RegexValidateParams {
    /// Pattern to check.
    pub pattern: String,

    /// Flags string, e.g. "im". Defaults to none.
    #[serde(default)]
    pub flags: String,
}

/// Validate tool - checks whether a pattern compiles.
pub struct RegexValidateTool;

impl RegexValidateTool {
    pub const NAME: &'static str = "regex_validate";

    pub const DESCRIPTION: &'static str =
        "Check whether a regular expression pattern compiles. Returns validity, \
         the pattern source and the flags that were applied.";

    /// Execute the tool logic.
    ///
    /// An uncompilable pattern is a successful validation with
    /// `isValid: false`; answering the question is this tool's domain.
    /// Only a malformed flags string is a domain error.
    pub fn execute(params: &RegexValidateParams) -> ToolResult {
        match compile(&params.pattern, &params.flags) {
            Ok(_) => ToolResult::success(json!({
                "isValid": true,
                "source": params.pattern,
                "compiledFlags": params.flags,
            })),
            Err(message) if message.starts_with("Unknown regex flag") => {
                ToolResult::failure(message)
            }
            Err(message) => ToolResult::success(json!({
                "isValid": false,
                "source": params.pattern,
                "compiledFlags": params.flags,
                "error": message,
            })),
        }
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
    fn test_valid_pattern_without_flags() {
        let params = RegexValidateParams {
            pattern: r"\d+".to_string(),
            flags: String::new(),
        };
        let result = RegexValidateTool::execute(&params);
        assert!(result.success);
        let body = result.result.unwrap();
        assert_eq!(body["isValid"], true);
        assert_eq!(body["source"], r"\d+");
        assert_eq!(body["compiledFlags"], "");
    }

    #[test]
    fn test_invalid_pattern_is_still_a_successful_validation() {
        let params = RegexValidateParams {
            pattern: "(unclosed".to_string(),
            flags: String::new(),
        };
        let result = RegexValidateTool::execute(&params);
        assert!(result.success);
        let body = result.result.unwrap();
        assert_eq!(body["isValid"], false);
        assert!(body["error"].as_str().unwrap().contains("Invalid pattern"));
    }

    #[test]
    fn test_unknown_flag_is_domain_error() {
        let params = RegexValidateParams {
            pattern: "abc".to_string(),
            flags: "q".to_string(),
        };
        let result = RegexValidateTool::execute(&params);
        assert!(!result.success);
        assert!(result.error.unwrap().contains("Unknown regex flag"));
    }

    #[test]
    fn test_validation_is_deterministic() {
        let params = RegexValidateParams {
            pattern: r"\d+".to_string(),
            flags: String::new(),
        };
        let first = serde_json::to_string(&RegexValidateTool::execute(&params)).unwrap();
        let second = serde_json::to_string(&RegexValidateTool::execute(&params)).unwrap();
        assert_eq!(first, second);
    }
}
