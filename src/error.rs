use thiserror::Error;

/// Errors that can occur while generating or managing recipes
#[derive(Error, Debug)]
pub enum AssistantError {
    /// The food name entered was empty or whitespace only
    #[error("Please enter a food name.")]
    EmptyQuery,

    /// The text-generation service failed or returned an unusable body
    #[error("Recipe generation failed: {0}")]
    GenerationError(String),

    /// Builder configuration error
    #[error("Builder error: {0}")]
    BuilderError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}
