//! Duration arithmetic tool.

use chrono::{DateTime, Duration, Months, Utc};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::json;

use super::parse_date;
use crate::core::{Result, ToolRegistry, ToolResult};
use crate::domains::register_tool;

/// Supported units.
#[derive(Debug, Clone, Copy, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum DateUnit {
    Seconds,
    Minutes,
    Hours,
    Days,
    Weeks,
    Months,
    Years,
}

/// Parameters for the add tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct DateAddParams {
    /// Base timestamp.
    pub date: String,

    /// Amount to add; negative values subtract.
    pub amount: i64,

    /// Unit of the amount.
    pub unit: DateUnit,
}

/// Add tool - offsets a timestamp by a duration.
pub struct DateAddTool;

impl DateAddTool {
    pub const NAME: &'static str = "date_add";

    pub const DESCRIPTION: &'static str =
        "Add an amount of seconds, minutes, hours, days, weeks, months or \
         years to a timestamp. Negative amounts subtract; month arithmetic \
         clamps to the end of shorter months.";

    /// Execute the tool logic.
    pub fn execute(params: &DateAddParams) -> ToolResult {
        let date = match parse_date(&params.date) {
            Ok(d) => d,
            Err(message) => return ToolResult::failure(message),
        };

        let shifted = match apply_offset(date, params.amount, params.unit) {
            Some(d) => d,
            None => return ToolResult::failure("Resulting date is out of range"),
        };

        let unit = format!("{:?}", params.unit).to_lowercase();
        ToolResult::success(json!({
            "result": shifted.to_rfc3339(),
            "original": params.date,
            "amount": params.amount,
            "unit": unit,
        }))
    }

    /// Register this tool.
    pub fn register(registry: &mut ToolRegistry) -> Result<()> {
        register_tool(registry, Self::NAME, Self::DESCRIPTION, Self::execute)
    }
}

fn apply_offset(date: DateTime<Utc>, amount: i64, unit: DateUnit) -> Option<DateTime<Utc>> {
    match unit {
        DateUnit::Seconds => date.checked_add_signed(Duration::seconds(amount)),
        DateUnit::Minutes => date.checked_add_signed(Duration::minutes(amount)),
        DateUnit::Hours => date.checked_add_signed(Duration::hours(amount)),
        DateUnit::Days => date.checked_add_signed(Duration::days(amount)),
        DateUnit::Weeks => date.checked_add_signed(Duration::weeks(amount)),
        DateUnit::Months => add_months(date, amount),
        DateUnit::Years => add_months(date, amount.checked_mul(12)?),
    }
}

/// Calendar-aware month arithmetic in either direction.
fn add_months(date: DateTime<Utc>, amount: i64) -> Option<DateTime<Utc>> {
    let magnitude = u32::try_from(amount.unsigned_abs()).ok()?;
    if amount >= 0 {
        date.checked_add_months(Months::new(magnitude))
    } else {
        date.checked_sub_months(Months::new(magnitude))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(date: &str, amount: i64, unit: DateUnit) -> ToolResult {
        DateAddTool::execute(&DateAddParams {
            date: date.to_string(),
            amount,
            unit,
        })
    }

    fn result_of(result: ToolResult) -> String {
        result.result.unwrap()["result"].as_str().unwrap().to_string()
    }

    #[test]
    fn test_add_days() {
        let result = run("2023-06-15T10:00:00Z", 10, DateUnit::Days);
        assert_eq!(result_of(result), "2023-06-25T10:00:00+00:00");
    }

    #[test]
    fn test_subtract_hours() {
        let result = run("2023-06-15T10:00:00Z", -12, DateUnit::Hours);
        assert_eq!(result_of(result), "2023-06-14T22:00:00+00:00");
    }

    #[test]
    fn test_add_months_clamps_to_month_end() {
        let result = run("2023-01-31T00:00:00Z", 1, DateUnit::Months);
        assert_eq!(result_of(result), "2023-02-28T00:00:00+00:00");
    }

    #[test]
    fn test_subtract_months() {
        let result = run("2023-03-15T00:00:00Z", -2, DateUnit::Months);
        assert_eq!(result_of(result), "2023-01-15T00:00:00+00:00");
    }

    #[test]
    fn test_add_years() {
        let result = run("2020-02-29T00:00:00Z", 1, DateUnit::Years);
        assert_eq!(result_of(result), "2021-02-28T00:00:00+00:00");
    }

    #[test]
    fn test_weeks() {
        let result = run("2023-06-01T00:00:00Z", 2, DateUnit::Weeks);
        assert_eq!(result_of(result), "2023-06-15T00:00:00+00:00");
    }

    #[test]
    fn test_invalid_date_is_domain_error() {
        assert!(!run("bad", 1, DateUnit::Days).success);
    }
}
