//! Platform Formatter — wraps a `{role, content}` object in a platform's request envelope.
//!
//! Total: objects without a truthy `role` and `content`, and the `custom`
//! platform, pass through unchanged.

use serde_json::{json, Value};

use crate::models::platform::Platform;

pub const CHATGPT_MODEL: &str = "gpt-3.5-turbo";
pub const CLAUDE_MODEL: &str = "claude-3-sonnet-20240229";
const MAX_TOKENS: u32 = 1000;
const TEMPERATURE: f64 = 0.7;
const GEMINI_TOP_K: u32 = 40;
const GEMINI_TOP_P: f64 = 0.95;

pub fn format_for_platform(object: Value, platform: Platform) -> Value {
    if !has_message_shape(&object) {
        return object;
    }

    match platform {
        Platform::Chatgpt => json!({
            "messages": [object],
            "model": CHATGPT_MODEL,
            "temperature": TEMPERATURE,
            "max_tokens": MAX_TOKENS
        }),
        Platform::Claude => json!({
            "prompt": format!("Human: {}\n\nAssistant:", content_text(&object)),
            "model": CLAUDE_MODEL,
            "max_tokens": MAX_TOKENS
        }),
        Platform::Gemini => json!({
            "contents": [{
                "parts": [{ "text": content_text(&object) }]
            }],
            "generationConfig": {
                "temperature": TEMPERATURE,
                "topK": GEMINI_TOP_K,
                "topP": GEMINI_TOP_P
            }
        }),
        Platform::Custom => object,
    }
}

fn has_message_shape(object: &Value) -> bool {
    object.get("role").is_some_and(is_truthy) && object.get("content").is_some_and(is_truthy)
}

/// `content` as a string: strings verbatim, anything else as compact JSON.
fn content_text(object: &Value) -> String {
    match object.get("content") {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => String::new(),
    }
}

pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chatgpt_envelope() {
        let out = format_for_platform(json!({"role": "user", "content": "hi"}), Platform::Chatgpt);
        assert_eq!(
            out,
            json!({
                "messages": [{"role": "user", "content": "hi"}],
                "model": "gpt-3.5-turbo",
                "temperature": 0.7,
                "max_tokens": 1000
            })
        );
    }

    #[test]
    fn test_claude_stringifies_structured_content() {
        let out =
            format_for_platform(json!({"role": "user", "content": {"a": 1}}), Platform::Claude);
        assert_eq!(out["prompt"], json!("Human: {\"a\":1}\n\nAssistant:"));
        assert_eq!(out["model"], json!("claude-3-sonnet-20240229"));
        assert_eq!(out["max_tokens"], json!(1000));
    }

    #[test]
    fn test_claude_passes_string_content_verbatim() {
        let out =
            format_for_platform(json!({"role": "user", "content": "hello"}), Platform::Claude);
        assert_eq!(out["prompt"], json!("Human: hello\n\nAssistant:"));
    }

    #[test]
    fn test_claude_stringify_keeps_key_order() {
        let out = format_for_platform(
            json!({
                "role": "user",
                "content": {"type": "question", "question": "q", "context": ""}
            }),
            Platform::Claude,
        );
        let expected = r#"Human: {"type":"question","question":"q","context":""}"#;
        assert_eq!(out["prompt"], json!(format!("{expected}\n\nAssistant:")));
    }

    #[test]
    fn test_gemini_envelope() {
        let out = format_for_platform(json!({"role": "user", "content": "hi"}), Platform::Gemini);
        assert_eq!(
            out,
            json!({
                "contents": [{"parts": [{"text": "hi"}]}],
                "generationConfig": {"temperature": 0.7, "topK": 40, "topP": 0.95}
            })
        );
    }

    #[test]
    fn test_custom_is_identity() {
        let input = json!({"role": "user", "content": "x"});
        assert_eq!(format_for_platform(input.clone(), Platform::Custom), input);
    }

    #[test]
    fn test_missing_role_passes_through() {
        let input = json!({"content": "x"});
        assert_eq!(format_for_platform(input.clone(), Platform::Chatgpt), input);
    }

    #[test]
    fn test_empty_content_passes_through() {
        let input = json!({"role": "user", "content": ""});
        assert_eq!(format_for_platform(input.clone(), Platform::Gemini), input);
    }

    #[test]
    fn test_non_object_passes_through() {
        assert_eq!(format_for_platform(json!("plain"), Platform::Claude), json!("plain"));
    }

    #[test]
    fn test_truthiness() {
        assert!(!is_truthy(&json!(null)));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!("")));
        assert!(is_truthy(&json!([])));
        assert!(is_truthy(&json!({})));
        assert!(is_truthy(&json!(2)));
    }
}
