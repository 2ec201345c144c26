//! Transformer — resolves a template, fills its schema from the prompt, formats for a platform.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::models::platform::Platform;
use crate::templates::{Matcher, Template, TemplateRegistry};
use crate::transform::extract::SlotExtractor;
use crate::transform::options::TransformOptions;
use crate::transform::platform::format_for_platform;

pub const AUTO: &str = "auto";

#[derive(Debug, Error)]
pub enum TransformError {
    #[error("Template not found: {0}")]
    TemplateNotFound(String),

    #[error("Invalid option '{key}': expected {expected}")]
    InvalidOptions { key: String, expected: &'static str },
}

/// Explicit registry id, or `"auto"` to delegate to the matcher.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TemplateSelection {
    #[default]
    Auto,
    Explicit(String),
}

impl From<String> for TemplateSelection {
    fn from(id: String) -> Self {
        if id == AUTO {
            TemplateSelection::Auto
        } else {
            TemplateSelection::Explicit(id)
        }
    }
}

impl From<&str> for TemplateSelection {
    fn from(id: &str) -> Self {
        TemplateSelection::from(id.to_string())
    }
}

impl From<TemplateSelection> for String {
    fn from(selection: TemplateSelection) -> Self {
        match selection {
            TemplateSelection::Auto => AUTO.to_string(),
            TemplateSelection::Explicit(id) => id,
        }
    }
}

/// A finished transformation, detached from the registry.
#[derive(Debug, Clone, Serialize)]
pub struct Transformed {
    /// The template actually used (the matcher's pick in auto mode).
    pub template_id: String,
    pub payload: Value,
}

/// Which slot-filling rule a template uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SlotRule {
    QuestionAnswer,
    CreativeWriting,
    CodeGeneration,
    RolePlaying,
    Generic,
}

impl SlotRule {
    fn for_template(id: &str) -> Self {
        match id {
            "question-answer" => SlotRule::QuestionAnswer,
            "creative-writing" => SlotRule::CreativeWriting,
            "code-generation" => SlotRule::CodeGeneration,
            "role-playing" => SlotRule::RolePlaying,
            _ => SlotRule::Generic,
        }
    }
}

/// Holds the shared registry and the compiled extraction patterns. Cheap to share via `Arc`.
pub struct Transformer {
    registry: Arc<TemplateRegistry>,
    extractor: SlotExtractor,
}

impl Transformer {
    pub fn new(registry: Arc<TemplateRegistry>) -> Result<Self, regex::Error> {
        Ok(Self {
            registry,
            extractor: SlotExtractor::new()?,
        })
    }

    #[cfg(test)]
    pub fn registry(&self) -> &TemplateRegistry {
        &self.registry
    }

    /// Auto mode never fails; an unknown explicit id is `TemplateNotFound`.
    pub fn resolve(
        &self,
        prompt: &str,
        selection: &TemplateSelection,
    ) -> Result<&Template, TransformError> {
        match selection {
            TemplateSelection::Auto => Ok(Matcher::new(&self.registry).match_template(prompt)),
            TemplateSelection::Explicit(id) => self
                .registry
                .get(id)
                .ok_or_else(|| TransformError::TemplateNotFound(id.clone())),
        }
    }

    pub fn transform(
        &self,
        prompt: &str,
        selection: &TemplateSelection,
        platform: Platform,
        options: &TransformOptions,
    ) -> Result<Transformed, TransformError> {
        let template = self.resolve(prompt, selection)?;

        // Value::clone is a deep copy; the registry's skeleton is never touched.
        let mut object = template.schema.clone();
        self.fill_slots(SlotRule::for_template(&template.id), &mut object, prompt, options)?;

        debug!(
            "Transformed prompt ({} chars) with template '{}' for {}",
            prompt.chars().count(),
            template.id,
            platform
        );

        Ok(Transformed {
            template_id: template.id.clone(),
            payload: format_for_platform(object, platform),
        })
    }

    fn fill_slots(
        &self,
        rule: SlotRule,
        object: &mut Value,
        prompt: &str,
        options: &TransformOptions,
    ) -> Result<(), TransformError> {
        let Some(root) = object.as_object_mut() else {
            return Ok(());
        };

        // A template whose `content` is not an object gets the generic treatment.
        let Some(Value::Object(slots)) = root.get_mut("content") else {
            root.insert("content".into(), Value::String(prompt.to_string()));
            return Ok(());
        };

        match rule {
            SlotRule::QuestionAnswer => {
                slots.insert("question".into(), Value::String(prompt.to_string()));
                slots.insert("context".into(), options.text("context")?);
                slots.insert("constraints".into(), options.list("constraints")?);
            }
            SlotRule::CreativeWriting => {
                slots.insert("theme".into(), Value::String(self.extractor.theme(prompt)));
                slots.insert("genre".into(), Value::String(self.extractor.genre(prompt)));
                slots.insert("constraints".into(), options.list("constraints")?);
            }
            SlotRule::CodeGeneration => {
                slots.insert("functionality".into(), Value::String(prompt.to_string()));
                slots.insert("language".into(), Value::String(self.extractor.language(prompt)));
                slots.insert("requirements".into(), options.list("requirements")?);
            }
            SlotRule::RolePlaying => {
                slots.insert(
                    "character".into(),
                    Value::String(self.extractor.character(prompt)),
                );
                slots.insert("scenario".into(), Value::String(prompt.to_string()));
            }
            SlotRule::Generic => {
                slots.insert("prompt".into(), Value::String(prompt.to_string()));
            }
        }

        Ok(())
    }
}
