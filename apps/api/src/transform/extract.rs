//! Slot extraction rules — deterministic regex and substring scans over the raw prompt.

use regex::Regex;

/// Genres in priority order; the first one found as a substring wins.
pub const GENRES: &[&str] = &["story", "poem", "song", "script", "novel", "essay"];

/// Languages in priority order. "javascript" precedes "java" so it is not shadowed.
pub const LANGUAGES: &[&str] = &[
    "python",
    "javascript",
    "java",
    "c++",
    "c#",
    "ruby",
    "go",
    "rust",
];

/// Compiled extraction patterns. Build once and share.
#[derive(Debug, Clone)]
pub struct SlotExtractor {
    theme: Regex,
    character: Regex,
}

impl SlotExtractor {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            theme: Regex::new(r"(?i)about\s+([^,.]+)")?,
            character: Regex::new(r"(?i)(?:act as|you are|pretend to be)\s+(?:a\s+)?([^,.]+)")?,
        })
    }

    /// Text after "about" up to the next comma or period.
    pub fn theme(&self, prompt: &str) -> String {
        first_capture(&self.theme, prompt)
    }

    /// Text after "act as" / "you are" / "pretend to be" (minus a leading "a").
    pub fn character(&self, prompt: &str) -> String {
        first_capture(&self.character, prompt)
    }

    pub fn genre(&self, prompt: &str) -> String {
        first_listed(GENRES, prompt)
    }

    pub fn language(&self, prompt: &str) -> String {
        first_listed(LANGUAGES, prompt)
    }
}

fn first_capture(pattern: &Regex, prompt: &str) -> String {
    pattern
        .captures(prompt)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default()
}

fn first_listed(candidates: &[&str], prompt: &str) -> String {
    let prompt_lower = prompt.to_lowercase();
    candidates
        .iter()
        .find(|c| prompt_lower.contains(*c))
        .map(|c| c.to_string())
        .unwrap_or_default()
}
