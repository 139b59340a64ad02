//! Photo lookup for generated recipes.

use crate::config::ImageSearchConfig;
use crate::providers::http_client;
use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde_json::Value;
use std::error::Error;
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://api.unsplash.com";

/// A service that finds a representative photo for a search term
#[async_trait]
pub trait ImageSearch: Send + Sync {
    fn service_name(&self) -> &str;

    /// URL of the first matching photo, or `None` when nothing matched
    async fn find_image(&self, query: &str)
        -> Result<Option<String>, Box<dyn Error + Send + Sync>>;
}

pub struct UnsplashClient {
    client: Client,
    access_key: String,
    base_url: String,
    orientation: String,
}

impl UnsplashClient {
    /// Create a new Unsplash client from configuration
    pub fn new(
        config: &ImageSearchConfig,
        timeout: Option<Duration>,
    ) -> Result<Self, Box<dyn Error + Send + Sync>> {
        let access_key = config
            .access_key
            .clone()
            .or_else(|| std::env::var("UNSPLASH_ACCESS_KEY").ok())
            .ok_or("UNSPLASH_ACCESS_KEY not found in config or environment")?;

        Ok(UnsplashClient {
            client: http_client(timeout)?,
            access_key,
            base_url: config
                .base_url
                .clone()
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            orientation: config.orientation.clone(),
        })
    }

    #[doc(hidden)]
    pub fn with_base_url(access_key: String, base_url: String) -> Self {
        UnsplashClient {
            client: Client::new(),
            access_key,
            base_url,
            orientation: "landscape".to_string(),
        }
    }
}

#[async_trait]
impl ImageSearch for UnsplashClient {
    fn service_name(&self) -> &str {
        "unsplash"
    }

    async fn find_image(
        &self,
        query: &str,
    ) -> Result<Option<String>, Box<dyn Error + Send + Sync>> {
        let response_body: Value = self
            .client
            .get(format!("{}/search/photos", self.base_url))
            .query(&[
                ("query", query),
                ("client_id", self.access_key.as_str()),
                ("orientation", self.orientation.as_str()),
                ("per_page", "1"),
            ])
            .send()
            .await?
            .json()
            .await?;
        debug!("Unsplash response: {:?}", response_body);

        if let Some(errors) = response_body.get("errors") {
            return Err(format!("Unsplash API error: {}", errors).into());
        }

        Ok(response_body["results"][0]["urls"]["regular"]
            .as_str()
            .map(|url| url.to_string()))
    }
}
