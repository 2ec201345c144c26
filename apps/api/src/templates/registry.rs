//! Template Registry — the immutable catalogue of intent templates.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::models::platform::Platform;
use crate::templates::catalogue::builtin_templates;

/// Template returned by the matcher when no keyword scores.
pub const DEFAULT_TEMPLATE_ID: &str = "question-answer";

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Duplicate template id: {0}")]
    DuplicateId(String),

    #[error("Default template '{0}' is not registered")]
    MissingDefault(String),
}

/// A named intent category with a keyword list and an output schema skeleton.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Template {
    pub id: String,
    pub name: String,
    pub description: String,
    pub platforms: Vec<Platform>,
    /// Prototype of the transformation output. Cloned before every fill.
    pub schema: Value,
    /// Lowercase substrings, one point each when present in the prompt.
    pub keywords: Vec<String>,
}

impl Template {
    pub fn supports(&self, platform: Platform) -> bool {
        self.platforms.contains(&platform)
    }
}

/// Ordered, read-only template catalogue. Iteration order is the matcher's tie-break.
#[derive(Debug, Clone)]
pub struct TemplateRegistry {
    templates: Vec<Template>,
    default_index: usize,
}

impl TemplateRegistry {
    /// Builds a registry, rejecting duplicate ids and a missing default template.
    pub fn new(templates: Vec<Template>, default_id: &str) -> Result<Self, RegistryError> {
        let mut seen = HashSet::new();
        for template in &templates {
            if !seen.insert(template.id.as_str()) {
                return Err(RegistryError::DuplicateId(template.id.clone()));
            }
        }

        let default_index = templates
            .iter()
            .position(|t| t.id == default_id)
            .ok_or_else(|| RegistryError::MissingDefault(default_id.to_string()))?;

        Ok(Self {
            templates,
            default_index,
        })
    }

    /// The built-in catalogue of six templates.
    pub fn builtin() -> Result<Self, RegistryError> {
        Self::new(builtin_templates(), DEFAULT_TEMPLATE_ID)
    }

    /// All templates in registration order.
    pub fn all(&self) -> &[Template] {
        &self.templates
    }

    /// Looks up a template by id. `None` when the id is unknown.
    pub fn get(&self, id: &str) -> Option<&Template> {
        self.templates.iter().find(|t| t.id == id)
    }

    /// Templates whose platform list contains `platform`.
    pub fn for_platform(&self, platform: Platform) -> Vec<&Template> {
        self.templates
            .iter()
            .filter(|t| t.supports(platform))
            .collect()
    }

    pub fn default_template(&self) -> &Template {
        &self.templates[self.default_index]
    }
}
