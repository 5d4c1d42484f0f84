//! String comparison tool.

use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::json;

use crate::core::{Result, ToolRegistry, ToolResult};
use crate::domains::register_tool;

/// Comparison method.
#[derive(Debug, Clone, Copy, Default, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum CompareMethod {
    /// Byte-for-byte equality.
    #[default]
    Exact,
    /// ASCII case-insensitive equality.
    CaseInsensitive,
    /// Levenshtein edit distance with a similarity ratio.
    Levenshtein,
}

/// Parameters for the compare tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct StringCompareParams {
    /// First string.
    pub str1: String,

    /// Second string.
    pub str2: String,

    /// Comparison method. Defaults to "exact".
    #[serde(default)]
    pub method: CompareMethod,
}

/// Compare tool - compares two strings.
pub struct StringCompareTool;

impl StringCompareTool {
    pub const NAME: &'static str = "string_compare";

    pub const DESCRIPTION: &'static str =
        "Compare two strings: exact, case-insensitive, or levenshtein (edit \
         distance plus a 0..1 similarity ratio).";

    /// Execute the tool logic.
    pub fn execute(params: &StringCompareParams) -> ToolResult {
        let result = match params.method {
            CompareMethod::Exact => json!({
                "comparison": params.str1 == params.str2,
                "method": "exact",
            }),
            CompareMethod::CaseInsensitive => json!({
                "comparison": params.str1.eq_ignore_ascii_case(&params.str2),
                "method": "case_insensitive",
            }),
            CompareMethod::Levenshtein => {
                let distance = levenshtein(&params.str1, &params.str2);
                let longest = params.str1.chars().count().max(params.str2.chars().count());
                let similarity = if longest == 0 {
                    1.0
                } else {
                    1.0 - distance as f64 / longest as f64
                };
                json!({
                    "comparison": distance == 0,
                    "method": "levenshtein",
                    "distance": distance,
                    "similarity": similarity,
                })
            }
        };

        ToolResult::success_with_metadata(
            result,
            json!({ "str1": params.str1, "str2": params.str2 }),
        )
    }

    /// Register this tool.
    pub fn register(registry: &mut ToolRegistry) -> Result<()> {
        register_tool(registry, Self::NAME, Self::DESCRIPTION, Self::execute)
    }
}

/// Levenshtein edit distance over chars, single-row dynamic programming.
fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut row: Vec<usize> = (0..=b.len()).collect();
    for (i, &ca) in a.iter().enumerate() {
        let mut previous_diagonal = row[0];
        row[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let substitution = previous_diagonal + usize::from(ca != cb);
            previous_diagonal = row[j + 1];
            row[j + 1] = substitution.min(row[j] + 1).min(row[j + 1] + 1);
        }
    }
    row[b.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(str1: &str, str2: &str, method: CompareMethod) -> ToolResult {
        StringCompareTool::execute(&StringCompareParams {
            str1: str1.to_string(),
            str2: str2.to_string(),
            method,
        })
    }

    #[test]
    fn test_exact_match() {
        let result = run("hello", "hello", CompareMethod::Exact);
        assert!(result.success);
        let body = result.result.unwrap();
        assert_eq!(body["comparison"], true);
        assert_eq!(body["method"], "exact");
    }

    #[test]
    fn test_exact_mismatch() {
        let result = run("hello", "Hello", CompareMethod::Exact);
        assert_eq!(result.result.unwrap()["comparison"], false);
    }

    #[test]
    fn test_case_insensitive() {
        let result = run("Hello", "hELLO", CompareMethod::CaseInsensitive);
        assert_eq!(result.result.unwrap()["comparison"], true);
    }

    #[test]
    fn test_levenshtein_distance() {
        let result = run("kitten", "sitting", CompareMethod::Levenshtein);
        let body = result.result.unwrap();
        assert_eq!(body["distance"], 3);
        assert_eq!(body["comparison"], false);
    }

    #[test]
    fn test_levenshtein_identical() {
        let result = run("same", "same", CompareMethod::Levenshtein);
        let body = result.result.unwrap();
        assert_eq!(body["distance"], 0);
        assert_eq!(body["similarity"], 1.0);
        assert_eq!(body["comparison"], true);
    }

    #[test]
    fn test_levenshtein_empty_strings() {
        assert_eq!(levenshtein("", ""), 0);
        assert_eq!(levenshtein("abc", ""), 3);
        assert_eq!(levenshtein("", "ab"), 2);
    }
}
