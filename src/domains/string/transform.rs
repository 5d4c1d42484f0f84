//! String transformation tool.

use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::json;

use crate::core::{Result, ToolRegistry, ToolResult};
use crate::domains::register_tool;

/// Transformation to apply.
#[derive(Debug, Clone, Copy, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum TransformOperation {
    Uppercase,
    Lowercase,
    /// Capitalize the first letter of every whitespace-separated word.
    Title,
    /// Reverse by character.
    Reverse,
    Trim,
}

/// Parameters for the transform tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct StringTransformParams {
    /// Text to transform.
    pub text: String,

    /// Transformation to apply.
    pub operation: TransformOperation,
}

/// Transform tool - applies a case or shape transformation.
pub struct StringTransformTool;

impl StringTransformTool {
    pub const NAME: &'static str = "string_transform";

    pub const DESCRIPTION: &'static str =
        "Transform a text: uppercase, lowercase, title case, reverse, or trim.";

    /// Execute the tool logic.
    pub fn execute(params: &StringTransformParams) -> ToolResult {
        let transformed = match params.operation {
            TransformOperation::Uppercase => params.text.to_uppercase(),
            TransformOperation::Lowercase => params.text.to_lowercase(),
            TransformOperation::Title => title_case(&params.text),
            TransformOperation::Reverse => params.text.chars().rev().collect(),
            TransformOperation::Trim => params.text.trim().to_string(),
        };

        let operation = format!("{:?}", params.operation).to_lowercase();
        ToolResult::success(json!({
            "result": transformed,
            "operation": operation,
        }))
    }

    /// Register this tool.
    pub fn register(registry: &mut ToolRegistry) -> Result<()> {
        register_tool(registry, Self::NAME, Self::DESCRIPTION, Self::execute)
    }
}

/// Uppercase the first character of each whitespace-separated word,
/// lowercasing the rest.
fn title_case(text: &str) -> String {
    let mut output = String::with_capacity(text.len());
    let mut at_word_start = true;
    for c in text.chars() {
        if c.is_whitespace() {
            at_word_start = true;
            output.push(c);
        } else if at_word_start {
            output.extend(c.to_uppercase());
            at_word_start = false;
        } else {
            output.extend(c.to_lowercase());
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(text: &str, operation: TransformOperation) -> String {
        let result = StringTransformTool::execute(&StringTransformParams {
            text: text.to_string(),
            operation,
        });
        result.result.unwrap()["result"].as_str().unwrap().to_string()
    }

    #[test]
    fn test_uppercase() {
        assert_eq!(run("hello", TransformOperation::Uppercase), "HELLO");
    }

    #[test]
    fn test_lowercase() {
        assert_eq!(run("HeLLo", TransformOperation::Lowercase), "hello");
    }

    #[test]
    fn test_title_case() {
        assert_eq!(
            run("hello WORLD again", TransformOperation::Title),
            "Hello World Again"
        );
    }

    #[test]
    fn test_reverse_multibyte() {
        assert_eq!(run("abc déf", TransformOperation::Reverse), "féd cba");
    }

    #[test]
    fn test_trim() {
        assert_eq!(run("  padded \n", TransformOperation::Trim), "padded");
    }
}
