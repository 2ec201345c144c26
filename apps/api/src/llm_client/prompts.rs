// Prompt fragments for the free-text generation feature.

/// System message framing the model as a prompt engineer.
pub const PROMPT_ENGINEER_SYSTEM: &str = "You are a prompt engineer. \
    Given a user's goal and category, generate a high-quality prompt they can use with an AI tool.";

/// User turn template. Placeholders: `{goal}`, `{category}`.
pub const GOAL_PROMPT_TEMPLATE: &str = "Goal: {goal}\nCategory: {category}";
