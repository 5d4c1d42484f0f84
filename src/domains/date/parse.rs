//! Timestamp decomposition tool.

use chrono::{Datelike, Timelike};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::json;

use super::parse_date;
use crate::core::{Result, ToolRegistry, ToolResult};
use crate::domains::register_tool;

/// Parameters for the parse tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct DateParseParams {
    /// Timestamp to parse.
    pub input: String,
}

/// Parse tool - breaks a timestamp into components.
pub struct DateParseTool;

impl DateParseTool {
    pub const NAME: &'static str = "date_parse";

    pub const DESCRIPTION: &'static str =
        "Parse a timestamp and return its UTC components: ISO form, epoch \
         milliseconds, calendar fields and weekday name.";

    /// Execute the tool logic.
    pub fn execute(params: &DateParseParams) -> ToolResult {
        let date = match parse_date(&params.input) {
            Ok(d) => d,
            Err(message) => return ToolResult::failure(message),
        };

        ToolResult::success(json!({
            "iso": date.to_rfc3339(),
            "timestampMs": date.timestamp_millis(),
            "year": date.year(),
            "month": date.month(),
            "day": date.day(),
            "hour": date.hour(),
            "minute": date.minute(),
            "second": date.second(),
            "weekday": date.weekday().to_string(),
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

    fn run(input: &str) -> ToolResult {
        DateParseTool::execute(&DateParseParams {
            input: input.to_string(),
        })
    }

    #[test]
    fn test_parse_components() {
        let result = run("2023-06-15T10:30:45Z");
        assert!(result.success);
        let body = result.result.unwrap();
        assert_eq!(body["year"], 2023);
        assert_eq!(body["month"], 6);
        assert_eq!(body["day"], 15);
        assert_eq!(body["hour"], 10);
        assert_eq!(body["minute"], 30);
        assert_eq!(body["second"], 45);
        assert_eq!(body["weekday"], "Thu");
        assert_eq!(body["timestampMs"], 1686825045000i64);
    }

    #[test]
    fn test_offset_normalized_to_utc() {
        let result = run("2023-06-15T12:00:00+02:00");
        let body = result.result.unwrap();
        assert_eq!(body["hour"], 10);
        assert_eq!(body["iso"], "2023-06-15T10:00:00+00:00");
    }

    #[test]
    fn test_bare_date_defaults_to_midnight() {
        let result = run("2023-06-15");
        let body = result.result.unwrap();
        assert_eq!(body["hour"], 0);
        assert_eq!(body["minute"], 0);
    }

    #[test]
    fn test_parameter_deserializes_from_input_key() {
        let params: DateParseParams =
            serde_json::from_value(serde_json::json!({ "input": "2023-06-15" })).unwrap();
        assert_eq!(params.input, "2023-06-15");
    }

    #[test]
    fn test_invalid_input_is_domain_error() {
        let result = run("not a date");
        assert!(!result.success);
        assert!(result.error.unwrap().contains("Invalid date"));
    }
}
