use std::time::Duration;

use log::warn;

use crate::config::AppConfig;
use crate::images::{ImageSearch, UnsplashClient};
use crate::notification::Notifier;
use crate::providers::ProviderFactory;
use crate::session::Session;
use crate::workflow::RecipeWorkflow;
use crate::AssistantError;

/// Text-generation backend selection
#[derive(Debug, Clone, Copy)]
pub enum GenerationProvider {
    Google,
    OpenAI,
}

impl GenerationProvider {
    /// Convert to provider name string used by the factory
    fn as_str(&self) -> &str {
        match self {
            GenerationProvider::Google => "google",
            GenerationProvider::OpenAI => "openai",
        }
    }
}

/// Builder for configuring a recipe assistant session
#[derive(Debug, Default)]
pub struct RecipeAssistantBuilder {
    config: Option<AppConfig>,
    provider: Option<GenerationProvider>,
    api_key: Option<String>,
    model: Option<String>,
    base_url: Option<String>,
    image_access_key: Option<String>,
    image_base_url: Option<String>,
    images_enabled: Option<bool>,
    timeout: Option<Duration>,
    notice_ttl: Option<Duration>,
}

impl RecipeAssistantBuilder {
    /// Use an explicit configuration instead of loading `config.toml` and
    /// `RECIPE_ASSISTANT__*` environment variables
    pub fn config(mut self, config: AppConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the text-generation provider
    ///
    /// # Example
    /// ```
    /// use recipe_assistant::{GenerationProvider, RecipeAssistant};
    ///
    /// let builder = RecipeAssistant::builder()
    ///     .provider(GenerationProvider::OpenAI);
    /// ```
    pub fn provider(mut self, provider: GenerationProvider) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Set the API key for the text-generation provider
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the model name for the text-generation provider
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Point the text-generation provider at a custom or proxy endpoint
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the Unsplash access key used for recipe photos
    pub fn image_access_key(mut self, key: impl Into<String>) -> Self {
        self.image_access_key = Some(key.into());
        self
    }

    /// Point the image search at a custom endpoint
    pub fn image_base_url(mut self, url: impl Into<String>) -> Self {
        self.image_base_url = Some(url.into());
        self
    }

    /// Skip the photo lookup for generated recipes
    pub fn without_images(mut self) -> Self {
        self.images_enabled = Some(false);
        self
    }

    /// Set a timeout for HTTP requests
    ///
    /// # Example
    /// ```
    /// use recipe_assistant::RecipeAssistant;
    /// use std::time::Duration;
    ///
    /// let builder = RecipeAssistant::builder()
    ///     .timeout(Duration::from_secs(30));
    /// ```
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    /// How long save notices stay visible
    pub fn notice_ttl(mut self, duration: Duration) -> Self {
        self.notice_ttl = Some(duration);
        self
    }

    /// Assemble the configuration the session will be built from
    fn resolve_config(self) -> Result<(AppConfig, Duration, Duration), AssistantError> {
        let mut config = match self.config {
            Some(config) => config,
            None => AppConfig::load()?,
        };

        if let Some(provider) = self.provider {
            config.provider = provider.as_str().to_string();
        }
        if let Some(api_key) = self.api_key {
            config.generation.api_key = Some(api_key);
        }
        if let Some(model) = self.model {
            config.generation.model = model;
        }
        if let Some(base_url) = self.base_url {
            config.generation.base_url = Some(base_url);
        }
        if let Some(key) = self.image_access_key {
            config.images.access_key = Some(key);
        }
        if let Some(url) = self.image_base_url {
            config.images.base_url = Some(url);
        }
        if let Some(enabled) = self.images_enabled {
            config.images.enabled = enabled;
        }

        let timeout = self
            .timeout
            .unwrap_or_else(|| Duration::from_secs(config.timeout));
        let notice_ttl = self
            .notice_ttl
            .unwrap_or_else(|| Duration::from_millis(config.notification_ms));

        Ok((config, timeout, notice_ttl))
    }

    /// Build a fresh session with an empty recipe book
    ///
    /// # Errors
    /// Returns `AssistantError` if the configuration cannot be loaded or the
    /// text-generation provider cannot be created (unknown name, missing
    /// API key). A missing image-search key only disables photos.
    pub fn build(self) -> Result<Session, AssistantError> {
        let (config, timeout, notice_ttl) = self.resolve_config()?;

        let provider = ProviderFactory::create(&config.provider, &config.generation, Some(timeout))
            .map_err(|e| AssistantError::BuilderError(e.to_string()))?;

        let images: Option<Box<dyn ImageSearch>> = if config.images.enabled {
            match UnsplashClient::new(&config.images, Some(timeout)) {
                Ok(client) => Some(Box::new(client)),
                Err(e) => {
                    warn!("Recipe photos disabled: {}", e);
                    None
                }
            }
        } else {
            None
        };

        Ok(Session::new(
            RecipeWorkflow::new(provider, images),
            Notifier::new(notice_ttl),
        ))
    }
}

/// Main entry point for the builder API
pub struct RecipeAssistant;

impl RecipeAssistant {
    /// Creates a new builder for a recipe assistant session
    ///
    /// # Example
    /// ```
    /// use recipe_assistant::RecipeAssistant;
    ///
    /// let builder = RecipeAssistant::builder();
    /// ```
    pub fn builder() -> RecipeAssistantBuilder {
        RecipeAssistantBuilder::default()
    }
}
