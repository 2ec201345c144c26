//! Free-text prompt generation — asks the hosted model to write a prompt for a goal.
//! Independent of the template transformer.

pub mod handlers;

use crate::errors::AppError;
use crate::llm_client::prompts::{GOAL_PROMPT_TEMPLATE, PROMPT_ENGINEER_SYSTEM};
use crate::llm_client::LlmClient;

/// Fills the user turn sent to the model.
pub fn build_goal_prompt(goal: &str, category: &str) -> String {
    GOAL_PROMPT_TEMPLATE
        .replace("{goal}", goal.trim())
        .replace("{category}", category.trim())
}

pub async fn generate_prompt(
    llm: &LlmClient,
    goal: &str,
    category: &str,
) -> Result<String, AppError> {
    if goal.trim().is_empty() {
        return Err(AppError::Validation("goal cannot be empty".to_string()));
    }

    llm.complete(PROMPT_ENGINEER_SYSTEM, &build_goal_prompt(goal, category))
        .await
        .map_err(|e| AppError::Llm(format!("Prompt generation failed: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goal_prompt_layout() {
        assert_eq!(
            build_goal_prompt(" Launch a newsletter ", "Copywriting Prompt"),
            "Goal: Launch a newsletter\nCategory: Copywriting Prompt"
        );
    }

    #[tokio::test]
    async fn test_blank_goal_rejected_before_network() {
        let llm = LlmClient::new("http://127.0.0.1:9".to_string(), "key".to_string()).unwrap();
        let err = generate_prompt(&llm, "   ", "Image Prompt").await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
