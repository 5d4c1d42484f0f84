//! The uniform result envelope and its wire codec.
//!
//! Every tool function returns a [`ToolResult`] of the shape `{success,
//! result|error, metadata}`, serialized as pretty-printed JSON into the single
//! text content item of an MCP call-tool response.
//!
//! The codec keeps two failure modes visibly distinct on the wire:
//!
//! - a tool that *reports* failure (`success: false`) is delivered as a
//!   normal response via [`encode`], with the protocol-level `isError`
//!   flag unset;
//! - a *dispatch* failure (missing arguments, unknown tool, handler
//!   fault) is delivered via [`encode_dispatch_error`], with `isError`
//!   set.

use rmcp::model::{CallToolResult, Content, JsonObject};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The uniform payload every tool function returns.
///
/// Exactly one of `result` or `error` is populated, matching `success`.
/// `metadata` carries optional auxiliary context (input echoes, counts)
/// and never decides success or failure on its own.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolResult {
    /// Whether the domain operation succeeded.
    pub success: bool,

    /// Tool-specific result data, present on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,

    /// Human-readable error message, present on failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Optional auxiliary context.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
}

impl ToolResult {
    /// Create a successful result.
    pub fn success(result: Value) -> Self {
        Self {
            success: true,
            result: Some(result),
            error: None,
            metadata: None,
        }
    }

    /// Create a successful result with auxiliary metadata.
    pub fn success_with_metadata(result: Value, metadata: Value) -> Self {
        Self {
            success: true,
            result: Some(result),
            error: None,
            metadata: Some(metadata),
        }
    }

    /// Create a reported (domain-level) failure.
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            result: None,
            error: Some(error.into()),
            metadata: None,
        }
    }
}

/// Serialize a [`ToolResult`] into the text body of a call-tool response.
///
/// Pretty-printing cannot fail for this shape; the fallback exists only to
/// keep the signature infallible.
fn to_pretty_text(result: &ToolResult) -> String {
    serde_json::to_string_pretty(result)
        .unwrap_or_else(|e| format!("{{\"success\":false,\"error\":\"serialization failed: {e}\"}}"))
}

/// Encode a tool-reported result as a normal call-tool response.
///
/// `isError` stays unset even when `result.success` is false: the
/// invocation itself worked, the domain operation reported its own
/// failure.
pub fn encode(result: &ToolResult) -> CallToolResult {
    CallToolResult::success(vec![Content::text(to_pretty_text(result))])
}

/// Encode a dispatch failure as an `isError` call-tool response.
///
/// The message is also wrapped in a well-formed failure envelope so that
/// clients can always parse `content[0].text` as a [`ToolResult`].
pub fn encode_dispatch_error(message: impl Into<String>) -> CallToolResult {
    let envelope = ToolResult::failure(message);
    CallToolResult::error(vec![Content::text(to_pretty_text(&envelope))])
}

/// Check presence of the `arguments` field on a call-tool request.
///
/// Presence only; no per-field schema validation happens here. Type
/// mismatches inside the map surface later as handler-level errors.
pub fn decode(arguments: Option<JsonObject>) -> Result<JsonObject, MissingArguments> {
    arguments.ok_or(MissingArguments)
}

/// Distinguished outcome for a call-tool request without arguments.
#[derive(Debug, PartialEq, Eq)]
pub struct MissingArguments;

// ============================================================================
// Tests
// ============================================================================
