use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Top-level assistant configuration
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// Text-generation provider to use ("google" or "openai")
    #[serde(default = "default_provider")]
    pub provider: String,
    /// Text-generation settings
    #[serde(default)]
    pub generation: GenerationConfig,
    /// Image-search settings
    #[serde(default)]
    pub images: ImageSearchConfig,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// How long a notice stays visible, in milliseconds
    #[serde(default = "default_notification_ms")]
    pub notification_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            generation: GenerationConfig::default(),
            images: ImageSearchConfig::default(),
            timeout: default_timeout(),
            notification_ms: default_notification_ms(),
        }
    }
}

/// Configuration for the text-generation provider
#[derive(Debug, Deserialize, Clone)]
pub struct GenerationConfig {
    /// Model identifier (e.g., "gemini-2.0-flash")
    #[serde(default = "default_model")]
    pub model: String,
    /// Temperature for generation (0.0-1.0)
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    /// Maximum tokens to generate
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    /// API key for authentication (can also be set via environment variable)
    pub api_key: Option<String>,
    /// Base URL for API endpoint (for custom or proxy endpoints)
    pub base_url: Option<String>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            api_key: None,
            base_url: None,
        }
    }
}

/// Configuration for the image-search service
#[derive(Debug, Deserialize, Clone)]
pub struct ImageSearchConfig {
    /// Whether generated recipes are enriched with a photo
    #[serde(default = "default_images_enabled")]
    pub enabled: bool,
    /// Unsplash access key (can also be set via UNSPLASH_ACCESS_KEY)
    pub access_key: Option<String>,
    /// Base URL for API endpoint
    pub base_url: Option<String>,
    /// Photo orientation filter
    #[serde(default = "default_orientation")]
    pub orientation: String,
}

impl Default for ImageSearchConfig {
    fn default() -> Self {
        Self {
            enabled: default_images_enabled(),
            access_key: None,
            base_url: None,
            orientation: default_orientation(),
        }
    }
}

// Default value functions
fn default_provider() -> String {
    "google".to_string()
}

fn default_model() -> String {
    "gemini-2.0-flash".to_string()
}

fn default_temperature() -> f32 {
    0.7
}

fn default_max_tokens() -> u32 {
    2000
}

fn default_images_enabled() -> bool {
    true
}

fn default_orientation() -> String {
    "landscape".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_notification_ms() -> u64 {
    3000
}

impl AppConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE_ASSISTANT__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPE_ASSISTANT__GENERATION__API_KEY
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }
}

/// Load configuration from file and environment variables
///
/// See [`AppConfig::load`] for the priority order.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("config").required(false))
        // Use double underscore for nested: RECIPE_ASSISTANT__IMAGES__ACCESS_KEY
        .add_source(
            Environment::with_prefix("RECIPE_ASSISTANT")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
