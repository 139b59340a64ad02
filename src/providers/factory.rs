use crate::config::GenerationConfig;
use crate::providers::{GoogleProvider, OpenAIProvider, RecipeProvider};
use std::error::Error;
use std::time::Duration;

pub struct ProviderFactory;

impl ProviderFactory {
    /// Create a provider instance from configuration
    pub fn create(
        provider_name: &str,
        config: &GenerationConfig,
        timeout: Option<Duration>,
    ) -> Result<Box<dyn RecipeProvider>, Box<dyn Error + Send + Sync>> {
        match provider_name {
            "google" => Ok(Box::new(GoogleProvider::new(config, timeout)?)),
            "openai" => Ok(Box::new(OpenAIProvider::new(config, timeout)?)),
            _ => Err(format!(
                "Unknown provider: {} (available: {})",
                provider_name,
                Self::available_providers().join(", ")
            )
            .into()),
        }
    }

    /// List all available provider names
    pub fn available_providers() -> Vec<&'static str> {
        vec!["google", "openai"]
    }
}
