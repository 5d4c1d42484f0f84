//! Text analysis tool.

use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::json;

use crate::core::{Result, ToolRegistry, ToolResult};
use crate::domains::register_tool;

/// Parameters for the analyze tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct StringAnalyzeParams {
    /// Text to analyze.
    pub text: String,
}

/// Analyze tool - reports text composition.
pub struct StringAnalyzeTool;

impl StringAnalyzeTool {
    pub const NAME: &'static str = "string_analyze";

    pub const DESCRIPTION: &'static str =
        "Analyze a text: character length, word and line counts, and a \
         breakdown into letters, digits and whitespace.";

    /// Execute the tool logic.
    pub fn execute(params: &StringAnalyzeParams) -> ToolResult {
        let text = &params.text;

        let mut letters = 0usize;
        let mut digits = 0usize;
        let mut whitespace = 0usize;
        for c in text.chars() {
            if c.is_alphabetic() {
                letters += 1;
            } else if c.is_numeric() {
                digits += 1;
            } else if c.is_whitespace() {
                whitespace += 1;
            }
        }

        let lines = if text.is_empty() { 0 } else { text.lines().count() };

        ToolResult::success(json!({
            "length": text.chars().count(),
            "words": text.split_whitespace().count(),
            "lines": lines,
            "letters": letters,
            "digits": digits,
            "whitespace": whitespace,
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

    fn run(text: &str) -> serde_json::Value {
        StringAnalyzeTool::execute(&StringAnalyzeParams {
            text: text.to_string(),
        })
        .result
        .unwrap()
    }

    #[test]
    fn test_basic_analysis() {
        let body = run("Hello world 42\nsecond line");
        assert_eq!(body["words"], 5);
        assert_eq!(body["lines"], 2);
        assert_eq!(body["digits"], 2);
        assert_eq!(body["letters"], 20);
    }

    #[test]
    fn test_empty_text() {
        let body = run("");
        assert_eq!(body["length"], 0);
        assert_eq!(body["words"], 0);
        assert_eq!(body["lines"], 0);
    }

    #[test]
    fn test_length_counts_chars_not_bytes() {
        let body = run("déjà");
        assert_eq!(body["length"], 4);
        assert_eq!(body["letters"], 4);
    }
}
