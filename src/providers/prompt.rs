/// The system instruction sent with every generation request.
///
/// It restricts the model to food recipes and tells it to answer any other
/// question with [`REFUSAL_SENTENCE`]. Loaded from `prompt.txt` at compile
/// time so the wording can be edited without touching Rust string syntax.
pub const CHEF_SYSTEM_PROMPT: &str = include_str!("prompt.txt");

/// The exact sentence the model is told to answer non-food queries with.
pub const REFUSAL_SENTENCE: &str =
    "I can only help with food-related questions. Please ask me for a recipe.";

/// Phrase used to recognise a refusal, even when the model pads it.
pub const REFUSAL_MARKER: &str = "I can only help with food-related questions";

/// The user-facing half of the prompt, naming the requested dish.
pub fn build_recipe_request(query: &str) -> String {
    format!(
        "Otherwise, provide a complete recipe for: {}. Include title, ingredients, instructions, prep/cook time, and serving size.",
        query
    )
}

/// System instruction and recipe request combined into one prompt, for
/// providers without a separate system role.
pub fn build_chef_prompt(query: &str) -> String {
    format!(
        "{} {}",
        CHEF_SYSTEM_PROMPT.trim(),
        build_recipe_request(query)
    )
}

/// Whether a generated text is the model declining a non-food query.
pub fn is_refusal(text: &str) -> bool {
    text.contains(REFUSAL_MARKER)
}
