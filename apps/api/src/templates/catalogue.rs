//! Built-in template definitions.
//!
//! Registration order matters: the matcher keeps the first template seen on a tie.

use serde_json::json;

use crate::models::platform::Platform;
use crate::templates::registry::Template;

const ALL_CHAT_PLATFORMS: &[Platform] = &[Platform::Chatgpt, Platform::Claude, Platform::Gemini];

fn template(
    id: &str,
    name: &str,
    description: &str,
    platforms: &[Platform],
    schema: serde_json::Value,
    keywords: &[&str],
) -> Template {
    Template {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        platforms: platforms.to_vec(),
        schema,
        keywords: keywords.iter().map(|k| k.to_string()).collect(),
    }
}

pub fn builtin_templates() -> Vec<Template> {
    vec![
        template(
            "question-answer",
            "Question & Answer",
            "Format prompts for information retrieval and Q&A",
            ALL_CHAT_PLATFORMS,
            json!({
                "role": "user",
                "content": {
                    "type": "question",
                    "question": "",
                    "context": "",
                    "format": "detailed",
                    "constraints": []
                }
            }),
            &["what", "how", "why", "when", "where", "explain", "describe", "tell me"],
        ),
        template(
            "creative-writing",
            "Creative Writing",
            "Structure prompts for creative content generation",
            ALL_CHAT_PLATFORMS,
            json!({
                "role": "user",
                "content": {
                    "type": "creative_task",
                    "genre": "",
                    "style": "",
                    "length": "",
                    "characters": [],
                    "setting": "",
                    "theme": "",
                    "constraints": []
                }
            }),
            &["write", "story", "poem", "creative", "imagine", "character", "plot"],
        ),
        template(
            "code-generation",
            "Code Generation",
            "Format programming and code-related prompts",
            ALL_CHAT_PLATFORMS,
            json!({
                "role": "user",
                "content": {
                    "type": "code_request",
                    "language": "",
                    "framework": "",
                    "functionality": "",
                    "requirements": [],
                    "constraints": [],
                    "examples": []
                }
            }),
            &["code", "program", "function", "class", "algorithm", "debug", "implement"],
        ),
        template(
            "data-analysis",
            "Data Analysis",
            "Structure prompts for data processing and analysis",
            ALL_CHAT_PLATFORMS,
            json!({
                "role": "user",
                "content": {
                    "type": "analysis_request",
                    "data_type": "",
                    "analysis_goal": "",
                    "methods": [],
                    "output_format": "",
                    "visualizations": []
                }
            }),
            &["analyze", "data", "statistics", "chart", "graph", "trend", "pattern"],
        ),
        template(
            "role-playing",
            "Role Playing",
            "Create structured role-playing scenarios",
            ALL_CHAT_PLATFORMS,
            json!({
                "role": "system",
                "content": {
                    "type": "role_assignment",
                    "character": "",
                    "personality": "",
                    "background": "",
                    "scenario": "",
                    "objectives": [],
                    "constraints": []
                }
            }),
            &["act as", "pretend", "role", "character", "persona", "behave like"],
        ),
        template(
            "function-calling",
            "Function Calling",
            "Format prompts for OpenAI function calling",
            &[Platform::Chatgpt],
            json!({
                "role": "user",
                "content": "",
                "functions": [{
                    "name": "",
                    "description": "",
                    "parameters": {
                        "type": "object",
                        "properties": {},
                        "required": []
                    }
                }],
                "function_call": "auto"
            }),
            &["function", "call", "api", "tool", "execute", "invoke"],
        ),
    ]
}
