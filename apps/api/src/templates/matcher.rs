//! Matcher — picks the template whose keywords best overlap a raw prompt.
//!
//! Algorithm:
//! 1. Lower-case the prompt once.
//! 2. +1 for every template keyword present as a substring (membership, not count).
//! 3. Phrase bonuses: "act as"/"you are" → role-playing +3,
//!    "write code"/"create function" → code-generation +3.
//! 4. Strictly greater score replaces the best; ties keep the earlier template.
//! 5. Nothing above 0 → the registry's default template.

use tracing::debug;

use crate::models::platform::Platform;
use crate::templates::registry::{Template, TemplateRegistry};

struct PhraseBonus {
    phrases: &'static [&'static str],
    template_id: &'static str,
    bonus: u32,
}

const PHRASE_BONUSES: &[PhraseBonus] = &[
    PhraseBonus {
        phrases: &["act as", "you are"],
        template_id: "role-playing",
        bonus: 3,
    },
    PhraseBonus {
        phrases: &["write code", "create function"],
        template_id: "code-generation",
        bonus: 3,
    },
];

/// Result of a match: the winning template and the score it won with (0 for the default).
#[derive(Debug, Clone, Copy)]
pub struct TemplateMatch<'a> {
    pub template: &'a Template,
    pub score: u32,
}

pub struct Matcher<'a> {
    registry: &'a TemplateRegistry,
}

impl<'a> Matcher<'a> {
    pub fn new(registry: &'a TemplateRegistry) -> Self {
        Self { registry }
    }

    /// Best template for the prompt across the whole registry.
    pub fn match_template(&self, prompt: &str) -> &'a Template {
        self.match_for_platform(prompt, None).template
    }

    /// Best template among those listed for `platform` (all templates when `None`).
    /// Falls back to the default template when nothing scores, even if it is not
    /// listed for the platform.
    pub fn match_for_platform(
        &self,
        prompt: &str,
        platform: Option<Platform>,
    ) -> TemplateMatch<'a> {
        let prompt_lower = prompt.to_lowercase();

        let mut best_match: Option<&'a Template> = None;
        let mut highest_score = 0_u32;

        let candidates = self
            .registry
            .all()
            .iter()
            .filter(|t| platform.map_or(true, |p| t.supports(p)));

        for template in candidates {
            let score = score_template(template, &prompt_lower);
            if score > highest_score {
                highest_score = score;
                best_match = Some(template);
            }
        }

        let template = best_match.unwrap_or_else(|| self.registry.default_template());
        debug!(
            "Matched template '{}' with score {} (platform filter: {:?})",
            template.id, highest_score, platform
        );

        TemplateMatch {
            template,
            score: highest_score,
        }
    }
}

/// Keyword score plus phrase bonuses for one template. `prompt_lower` must already be lower-cased.
fn score_template(template: &Template, prompt_lower: &str) -> u32 {
    let keyword_score = template
        .keywords
        .iter()
        .filter(|k| prompt_lower.contains(k.as_str()))
        .count() as u32;

    let bonus: u32 = PHRASE_BONUSES
        .iter()
        .filter(|b| b.template_id == template.id)
        .filter(|b| b.phrases.iter().any(|p| prompt_lower.contains(p)))
        .map(|b| b.bonus)
        .sum();

    keyword_score + bonus
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> TemplateRegistry {
        TemplateRegistry::builtin().unwrap()
    }

    #[test]
    fn test_empty_prompt_returns_default() {
        let registry = registry();
        let matcher = Matcher::new(&registry);
        assert_eq!(matcher.match_template("").id, "question-answer");
    }

    #[test]
    fn test_no_keywords_returns_default() {
        let registry = registry();
        let matcher = Matcher::new(&registry);
        let m = matcher.match_for_platform("zzz qqq", None);
        assert_eq!(m.template.id, "question-answer");
        assert_eq!(m.score, 0);
    }

    #[test]
    fn test_matching_is_deterministic() {
        let registry = registry();
        let matcher = Matcher::new(&registry);
        let text = "Analyze the sales data and draw a chart of the trend";
        let first = matcher.match_template(text).id.clone();
        let second = matcher.match_template(text).id.clone();
        assert_eq!(first, second);
        assert_eq!(first, "data-analysis");
    }

    #[test]
    fn test_you_are_bonus_selects_role_playing() {
        let registry = registry();
        let matcher = Matcher::new(&registry);
        let m = matcher.match_for_platform("You are a pirate captain", None);
        assert_eq!(m.template.id, "role-playing");
        assert_eq!(m.score, 3);
    }

    #[test]
    fn test_write_code_bonus_beats_creative_writing() {
        let registry = registry();
        let matcher = Matcher::new(&registry);
        // creative-writing gets +1 for "write", code-generation +1 for "code" and +3 bonus
        let m = matcher.match_for_platform("Write code in python to sort a list", None);
        assert_eq!(m.template.id, "code-generation");
        assert_eq!(m.score, 4);
    }

    #[test]
    fn test_tie_keeps_first_registered_template() {
        let registry = registry();
        let matcher = Matcher::new(&registry);
        // "write" (creative-writing) and "function" (code-generation,
        // function-calling) each score 1
        assert_eq!(
            matcher.match_template("write a function").id,
            "creative-writing"
        );
    }

    #[test]
    fn test_repeated_keyword_counts_once() {
        let registry = registry();
        let matcher = Matcher::new(&registry);
        let m = matcher.match_for_platform("data data data", None);
        assert_eq!(m.template.id, "data-analysis");
        assert_eq!(m.score, 1);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let registry = registry();
        let matcher = Matcher::new(&registry);
        assert_eq!(
            matcher.match_template("EXPLAIN WHY THE SKY IS BLUE").id,
            "question-answer"
        );
    }

    #[test]
    fn test_platform_filter_excludes_unlisted_templates() {
        let registry = registry();
        let matcher = Matcher::new(&registry);
        let text = "invoke the api tool";
        assert_eq!(
            matcher.match_for_platform(text, Some(Platform::Chatgpt)).template.id,
            "function-calling"
        );
        assert_eq!(
            matcher.match_for_platform(text, Some(Platform::Claude)).template.id,
            "question-answer"
        );
    }

    #[test]
    fn test_score_template_adds_bonus_without_keywords() {
        let registry = registry();
        let role = registry.get("role-playing").unwrap();
        assert_eq!(score_template(role, "you are a wizard"), 3);
        assert_eq!(score_template(role, "act as a persona"), 5);
    }
}
