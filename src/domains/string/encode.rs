//! Encoding/decoding tool.

use base64::Engine;
use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::json;

use crate::core::{Result, ToolRegistry, ToolResult};
use crate::domains::register_tool;

/// Supported encodings.
#[derive(Debug, Clone, Copy, Default, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    #[default]
    Base64,
    /// URL-safe base64 without padding.
    Base64url,
    Hex,
}

/// Direction of the operation.
#[derive(Debug, Clone, Copy, Default, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum EncodeMode {
    #[default]
    Encode,
    Decode,
}

/// Parameters for the encode tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct StringEncodeParams {
    /// Text to encode, or encoded input to decode.
    pub text: String,

    /// Encoding to use. Defaults to "base64".
    #[serde(default)]
    pub encoding: Encoding,

    /// Whether to encode or decode. Defaults to "encode".
    #[serde(default)]
    pub mode: EncodeMode,
}

/// Encode tool - base64/hex encoding and decoding.
pub struct StringEncodeTool;

impl StringEncodeTool {
    pub const NAME: &'static str = "string_encode";

    pub const DESCRIPTION: &'static str =
        "Encode a text to base64, URL-safe base64 or hex, or decode such an \
         encoding back to UTF-8 text.";

    /// Execute the tool logic.
    pub fn execute(params: &StringEncodeParams) -> ToolResult {
        let outcome = match params.mode {
            EncodeMode::Encode => Ok(match params.encoding {
                Encoding::Base64 => STANDARD.encode(&params.text),
                Encoding::Base64url => URL_SAFE_NO_PAD.encode(&params.text),
                Encoding::Hex => hex_encode(params.text.as_bytes()),
            }),
            EncodeMode::Decode => decode(&params.text, params.encoding),
        };

        let result = match outcome {
            Ok(s) => s,
            Err(message) => return ToolResult::failure(message),
        };

        let encoding = format!("{:?}", params.encoding).to_lowercase();
        let mode = format!("{:?}", params.mode).to_lowercase();
        ToolResult::success(json!({
            "result": result,
            "encoding": encoding,
            "mode": mode,
        }))
    }

    /// Register this tool.
    pub fn register(registry: &mut ToolRegistry) -> Result<()> {
        register_tool(registry, Self::NAME, Self::DESCRIPTION, Self::execute)
    }
}

fn decode(input: &str, encoding: Encoding) -> std::result::Result<String, String> {
    let bytes = match encoding {
        Encoding::Base64 => STANDARD
            .decode(input)
            .map_err(|e| format!("Invalid base64 input: {e}"))?,
        Encoding::Base64url => URL_SAFE_NO_PAD
            .decode(input)
            .map_err(|e| format!("Invalid base64url input: {e}"))?,
        Encoding::Hex => hex_decode(input)?,
    };
    String::from_utf8(bytes).map_err(|_| "Decoded bytes are not valid UTF-8".to_string())
}

fn hex_encode(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

fn hex_decode(input: &str) -> std::result::Result<Vec<u8>, String> {
    if input.len() % 2 != 0 {
        return Err("Invalid hex input: odd length".to_string());
    }
    (0..input.len())
        .step_by(2)
        .map(|i| {
            u8::from_str_radix(&input[i..i + 2], 16)
                .map_err(|_| format!("Invalid hex input at position {i}"))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(text: &str, encoding: Encoding, mode: EncodeMode) -> ToolResult {
        StringEncodeTool::execute(&StringEncodeParams {
            text: text.to_string(),
            encoding,
            mode,
        })
    }

    #[test]
    fn test_base64_round_trip() {
        let encoded = run("hello", Encoding::Base64, EncodeMode::Encode);
        let body = encoded.result.unwrap();
        assert_eq!(body["result"], "aGVsbG8=");

        let decoded = run("aGVsbG8=", Encoding::Base64, EncodeMode::Decode);
        assert_eq!(decoded.result.unwrap()["result"], "hello");
    }

    #[test]
    fn test_base64url_no_padding() {
        let encoded = run("hi?", Encoding::Base64url, EncodeMode::Encode);
        let value = encoded.result.unwrap()["result"].as_str().unwrap().to_string();
        assert!(!value.contains('='));
    }

    #[test]
    fn test_hex_encode_decode() {
        let encoded = run("AB", Encoding::Hex, EncodeMode::Encode);
        assert_eq!(encoded.result.unwrap()["result"], "4142");

        let decoded = run("4142", Encoding::Hex, EncodeMode::Decode);
        assert_eq!(decoded.result.unwrap()["result"], "AB");
    }

    #[test]
    fn test_invalid_base64_is_domain_error() {
        let result = run("!!!", Encoding::Base64, EncodeMode::Decode);
        assert!(!result.success);
        assert!(result.error.unwrap().contains("Invalid base64"));
    }

    #[test]
    fn test_odd_length_hex_is_domain_error() {
        let result = run("abc", Encoding::Hex, EncodeMode::Decode);
        assert!(!result.success);
    }

    #[test]
    fn test_non_utf8_decode_is_domain_error() {
        let result = run("ff", Encoding::Hex, EncodeMode::Decode);
        assert!(!result.success);
        assert!(result.error.unwrap().contains("UTF-8"));
    }
}
