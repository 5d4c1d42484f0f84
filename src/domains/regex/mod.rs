//! Regular expression tools.
//!
//! Patterns compile with the `regex` crate; the flags string accepts a
//! subset of the familiar single-letter flags: `i` (case-insensitive),
//! `m` (multi-line), `s` (dot matches newline), `x` (ignore whitespace),
//! `U` (swap greed) and `g` (global: all matches, replace-all,
//! unlimited split).

mod escape;
mod matcher;
mod replace;
mod split;
mod validate;

pub use escape::RegexEscapeTool;
pub use matcher::RegexMatchTool;
pub use replace::RegexReplaceTool;
pub use split::RegexSplitTool;
pub use validate::RegexValidateTool;

use regex::{Regex, RegexBuilder};

use super::Domain;
use crate::core::{Result, ToolRegistry};

/// The regex domain descriptor.
pub fn domain() -> Domain {
    Domain {
        name: "regex-mcp-server",
        version: env!("CARGO_PKG_VERSION"),
        instructions: "Regular expression utilities: validate, match, replace, \
                       split and escape. All tools are stateless; patterns use \
                       Rust regex syntax with i/m/s/x/U/g flags.",
        register,
    }
}

fn register(registry: &mut ToolRegistry) -> Result<()> {
    RegexValidateTool::register(registry)?;
    RegexMatchTool::register(registry)?;
    RegexReplaceTool::register(registry)?;
    RegexSplitTool::register(registry)?;
    RegexEscapeTool::register(registry)?;
    Ok(())
}

/// A compiled pattern plus the behavioral `g` flag.
#[derive(Debug)]
pub(crate) struct CompiledPattern {
    pub regex: Regex,
    pub global: bool,
}

/// Compile `pattern` with the given flags string.
///
/// Unknown flag characters and uncompilable patterns are domain errors,
/// returned as messages for the caller to wrap.
pub(crate) fn compile(pattern: &str, flags: &str) -> std::result::Result<CompiledPattern, String> {
    let mut builder = RegexBuilder::new(pattern);
    let mut global = false;

    for flag in flags.chars() {
        match flag {
            'i' => {
                builder.case_insensitive(true);
            }
            'm' => {
                builder.multi_line(true);
            }
            's' => {
                builder.dot_matches_new_line(true);
            }
            'x' => {
                builder.ignore_whitespace(true);
            }
            'U' => {
                builder.swap_greed(true);
            }
            'g' => global = true,
            other => return Err(format!("Unknown regex flag: '{other}'")),
        }
    }

    let regex = builder
        .build()
        .map_err(|e| format!("Invalid pattern: {e}"))?;

    Ok(CompiledPattern { regex, global })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compile_plain_pattern() {
        let compiled = compile(r"\d+", "").unwrap();
        assert!(!compiled.global);
        assert!(compiled.regex.is_match("42"));
    }

    #[test]
    fn test_compile_flags() {
        let compiled = compile("abc", "ig").unwrap();
        assert!(compiled.global);
        assert!(compiled.regex.is_match("ABC"));
    }

    #[test]
    fn test_compile_unknown_flag() {
        let err = compile("abc", "z").unwrap_err();
        assert!(err.contains("Unknown regex flag"));
    }

    #[test]
    fn test_compile_invalid_pattern() {
        let err = compile("(unclosed", "").unwrap_err();
        assert!(err.contains("Invalid pattern"));
    }
}
