//! Date and time tools.
//!
//! Built on chrono. Inputs are RFC 3339 timestamps (`2023-06-15T10:00:00Z`);
//! the parser also accepts `YYYY-MM-DD HH:MM:SS` and bare `YYYY-MM-DD`,
//! interpreted as UTC. Unparseable input is a domain error.

mod add;
mod compare;
mod format;
mod parse;

pub use add::DateAddTool;
pub use compare::DateCompareTool;
pub use format::DateFormatTool;
pub use parse::DateParseTool;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use super::Domain;
use crate::core::{Result, ToolRegistry};

/// The date domain descriptor.
pub fn domain() -> Domain {
    Domain {
        name: "date-mcp-server",
        version: env!("CARGO_PKG_VERSION"),
        instructions: "Date utilities: compare timestamps, add durations, \
                       format with strftime patterns and parse into \
                       components. Inputs are RFC 3339; all tools are \
                       stateless.",
        register,
    }
}

fn register(registry: &mut ToolRegistry) -> Result<()> {
    DateCompareTool::register(registry)?;
    DateAddTool::register(registry)?;
    DateFormatTool::register(registry)?;
    DateParseTool::register(registry)?;
    Ok(())
}

/// Parse a timestamp into UTC.
///
/// Tries RFC 3339 first, then the two naive fallbacks (assumed UTC).
pub(crate) fn parse_date(input: &str) -> std::result::Result<DateTime<Utc>, String> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(input) {
        return Ok(parsed.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(input, "%Y-%m-%d %H:%M:%S") {
        return Ok(naive.and_utc());
    }
    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        if let Some(naive) = date.and_hms_opt(0, 0, 0) {
            return Ok(naive.and_utc());
        }
    }
    Err(format!("Invalid date: '{input}'"))
}
