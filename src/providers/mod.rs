mod factory;
mod google;
mod open_ai;
mod prompt;

pub use factory::ProviderFactory;
pub use google::GoogleProvider;
pub use open_ai::OpenAIProvider;
pub use prompt::{
    build_chef_prompt, build_recipe_request, is_refusal, CHEF_SYSTEM_PROMPT, REFUSAL_MARKER,
    REFUSAL_SENTENCE,
};

use async_trait::async_trait;
use reqwest::Client;
use std::error::Error;
use std::time::Duration;

/// Unified trait for all text-generation providers
#[async_trait]
pub trait RecipeProvider: Send + Sync {
    /// Get the provider name (e.g., "google", "openai")
    fn provider_name(&self) -> &str;

    /// Ask the model for a recipe for `query` and return its raw text answer
    async fn generate(&self, query: &str) -> Result<String, Box<dyn Error + Send + Sync>>;
}

/// Build an HTTP client, applying the request timeout when one is given.
pub(crate) fn http_client(timeout: Option<Duration>) -> Result<Client, reqwest::Error> {
    let mut builder = Client::builder();
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    builder.build()
}
