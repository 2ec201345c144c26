use std::fmt;

use serde::{Deserialize, Serialize};

/// Target LLM API family whose request envelope a transformation produces.
///
/// Any identifier outside the known families deserializes as `Custom`, which
/// formats as identity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    #[default]
    Chatgpt,
    Claude,
    Gemini,
    #[serde(other)]
    Custom,
}

impl Platform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Chatgpt => "chatgpt",
            Platform::Claude => "claude",
            Platform::Gemini => "gemini",
            Platform::Custom => "custom",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_platforms_deserialize_lowercase() {
        let p: Platform = serde_json::from_str(r#""claude""#).unwrap();
        assert_eq!(p, Platform::Claude);
        let p: Platform = serde_json::from_str(r#""gemini""#).unwrap();
        assert_eq!(p, Platform::Gemini);
    }

    #[test]
    fn test_unknown_platform_deserializes_as_custom() {
        let p: Platform = serde_json::from_str(r#""mistral""#).unwrap();
        assert_eq!(p, Platform::Custom);
    }

    #[test]
    fn test_platform_serializes_to_identifier() {
        assert_eq!(serde_json::to_string(&Platform::Gemini).unwrap(), r#""gemini""#);
    }
}
