//! Model response parsing
//!
//! 모델 응답 텍스트를 스키마 검증된 명령 목록으로 변환합니다.
//!
//! Each failure mode is distinct: no JSON object found, invalid JSON, and
//! schema mismatch all carry their own user-visible message.

use clio_foundation::{Error, Result};
use serde::Deserialize;

/// A command entry as proposed by the model, before validation
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawCommand {
    pub command: Option<String>,
    pub description: Option<String>,
    pub safety_level: Option<String>,
    pub confirm_required: Option<bool>,
}

/// Parsed and schema-checked model reply
#[derive(Debug)]
pub enum ModelReply {
    /// The model's own error field, passed through unchanged
    Error(String),
    /// Proposed command entries (not yet reconciled)
    Commands(Vec<RawCommand>),
}

/// Strip markdown code-fence wrapping, if present
fn strip_code_fences(text: &str) -> String {
    text.replace("```json", "").replace("```", "")
}

/// Extract the first top-level balanced `{...}` object
fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, ch) in text[start..].char_indices() {
        if in_string {
            match ch {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match ch {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..start + offset + ch.len_utf8()]);
                }
            }
            _ => {}
        }
    }

    None
}

/// Parse the model's raw text into a validated reply.
///
/// Failure modes, in order:
/// - no balanced JSON object -> "Invalid response format from API"
/// - invalid JSON -> "Failed to parse JSON response"
/// - missing `commands` -> "No commands found in response"
/// - `commands` not an array -> "Commands field is not an array"
pub fn parse_response(raw: &str) -> Result<ModelReply> {
    let cleaned = strip_code_fences(raw);

    let json_text = extract_json_object(&cleaned)
        .ok_or_else(|| Error::malformed("Invalid response format from API"))?;

    let value: serde_json::Value = serde_json::from_str(json_text)
        .map_err(|_| Error::malformed("Failed to parse JSON response"))?;

    // A reply carrying its own error field passes through unchanged
    if let Some(error) = value.get("error") {
        if !error.is_null() {
            let message = error
                .as_str()
                .map(String::from)
                .unwrap_or_else(|| error.to_string());
            return Ok(ModelReply::Error(message));
        }
    }

    let commands = value
        .get("commands")
        .ok_or_else(|| Error::schema("No commands found in response"))?;
    let entries = commands
        .as_array()
        .ok_or_else(|| Error::schema("Commands field is not an array"))?;

    // Non-object entries are dropped, matching the "silently drop invalid
    // entries" policy
    let raw_commands = entries
        .iter()
        .filter_map(|entry| serde_json::from_value::<RawCommand>(entry.clone()).ok())
        .collect();

    Ok(ModelReply::Commands(raw_commands))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_plain_object() {
        let reply = parse_response(r#"{"commands": []}"#).unwrap();
        match reply {
            ModelReply::Commands(commands) => assert!(commands.is_empty()),
            other => panic!("unexpected reply: {other:?}"),
        }
    }

    #[test]
    fn test_strips_code_fences() {
        let raw = "```json\n{\"commands\": [{\"command\": \"ls\"}]}\n```";
        let reply = parse_response(raw).unwrap();
        match reply {
            ModelReply::Commands(commands) => {
                assert_eq!(commands[0].command.as_deref(), Some("ls"));
            }
            other => panic!("unexpected reply: {other:?}"),
        }
    }

    #[test]
    fn test_extracts_object_from_surrounding_prose() {
        let raw = "Here is your command: {\"commands\": [{\"command\": \"pwd\"}]} hope it helps";
        let reply = parse_response(raw).unwrap();
        assert!(matches!(reply, ModelReply::Commands(c) if c.len() == 1));
    }

    #[test]
    fn test_balanced_extraction_ignores_braces_in_strings() {
        let raw = r#"{"commands": [{"command": "echo '}'", "description": "prints a brace"}]}"#;
        let reply = parse_response(raw).unwrap();
        match reply {
            ModelReply::Commands(commands) => {
                assert_eq!(commands[0].command.as_deref(), Some("echo '}'"));
            }
            other => panic!("unexpected reply: {other:?}"),
        }
    }

    #[test]
    fn test_no_object_is_invalid_format() {
        let err = parse_response("I cannot help with that.").unwrap_err();
        assert_eq!(err.to_string(), "Invalid response format from API");
    }

    #[test]
    fn test_unbalanced_object_is_invalid_format() {
        let err = parse_response(r#"{"commands": ["#).unwrap_err();
        assert_eq!(err.to_string(), "Invalid response format from API");
    }

    #[test]
    fn test_invalid_json_is_parse_failure() {
        let err = parse_response(r#"{"commands": [}]}"#).unwrap_err();
        assert_eq!(err.to_string(), "Failed to parse JSON response");
    }

    #[test]
    fn test_missing_commands_field() {
        let err = parse_response(r#"{"result": "ok"}"#).unwrap_err();
        assert_eq!(err.to_string(), "No commands found in response");
    }

    #[test]
    fn test_commands_not_an_array() {
        let err = parse_response(r#"{"commands": "ls"}"#).unwrap_err();
        assert_eq!(err.to_string(), "Commands field is not an array");
    }

    #[test]
    fn test_error_field_passes_through() {
        let reply = parse_response(r#"{"error": "No Command Found", "commands": []}"#).unwrap();
        match reply {
            ModelReply::Error(message) => assert_eq!(message, "No Command Found"),
            other => panic!("unexpected reply: {other:?}"),
        }
    }

    #[test]
    fn test_error_field_wins_over_commands() {
        // A reply claiming both an error and commands is treated as an
        // error; the commands are discarded rather than executed
        let raw = r#"{"error": "rate limited", "commands": [{"command": "rm -rf /"}]}"#;
        let reply = parse_response(raw).unwrap();
        match reply {
            ModelReply::Error(message) => assert_eq!(message, "rate limited"),
            other => panic!("unexpected reply: {other:?}"),
        }
    }

    #[test]
    fn test_non_object_entries_are_dropped() {
        let raw = r#"{"commands": ["ls", {"command": "pwd"}, 42]}"#;
        let reply = parse_response(raw).unwrap();
        match reply {
            ModelReply::Commands(commands) => {
                assert_eq!(commands.len(), 1);
                assert_eq!(commands[0].command.as_deref(), Some("pwd"));
            }
            other => panic!("unexpected reply: {other:?}"),
        }
    }
}
