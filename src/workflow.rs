//! Recipe generation: one text-generation call, title extraction, and an
//! optional photo lookup, normalised into a [`Recipe`].

use std::sync::LazyLock;

use log::{debug, info, warn};
use regex::Regex;

use crate::formatter::strip_emphasis;
use crate::images::ImageSearch;
use crate::model::Recipe;
use crate::providers::{is_refusal, RecipeProvider};
use crate::AssistantError;

static TITLE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Title:\s*(.*)").expect("title pattern is valid"));

/// Pull the recipe title out of a `Title: ...` line.
///
/// Only the first match counts. Emphasis markers are removed and an empty
/// title is treated as no match.
pub fn extract_title(text: &str) -> Option<String> {
    let captures = TITLE_PATTERN.captures(text)?;
    let title = strip_emphasis(&captures[1]);
    let title = title.trim();
    if title.is_empty() {
        None
    } else {
        Some(title.to_string())
    }
}

/// Generates recipes from a food name.
pub struct RecipeWorkflow {
    provider: Box<dyn RecipeProvider>,
    images: Option<Box<dyn ImageSearch>>,
}

impl RecipeWorkflow {
    pub fn new(provider: Box<dyn RecipeProvider>, images: Option<Box<dyn ImageSearch>>) -> Self {
        RecipeWorkflow { provider, images }
    }

    pub fn provider_name(&self) -> &str {
        self.provider.provider_name()
    }

    pub fn has_image_search(&self) -> bool {
        self.images.is_some()
    }

    /// Generate a recipe for `query`.
    ///
    /// A non-food query yields the "Not a food query!" pseudo-recipe rather
    /// than an error. Image search failures only leave `image` empty.
    ///
    /// # Errors
    /// [`AssistantError::EmptyQuery`] for blank input, and
    /// [`AssistantError::GenerationError`] if the text-generation call fails.
    pub async fn generate(&self, query: &str) -> Result<Recipe, AssistantError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(AssistantError::EmptyQuery);
        }

        debug!(
            "Requesting recipe for '{}' from {}",
            query,
            self.provider.provider_name()
        );
        let text = self
            .provider
            .generate(query)
            .await
            .map_err(|e| AssistantError::GenerationError(e.to_string()))?;

        if is_refusal(&text) {
            info!("Query '{}' was declined as not food related", query);
            return Ok(Recipe::not_a_food_query(text));
        }

        let title = extract_title(&text).unwrap_or_else(|| format!("Recipe for {}", query));
        let image = self.find_image(query).await;

        info!("Generated recipe '{}'", title);
        Ok(Recipe::generated(title, text, image))
    }

    async fn find_image(&self, query: &str) -> Option<String> {
        let images = self.images.as_ref()?;
        match images.find_image(query).await {
            Ok(Some(url)) => Some(url),
            Ok(None) => {
                debug!("No image found for '{}' on {}", query, images.service_name());
                None
            }
            Err(e) => {
                warn!("Image fetch from {} failed: {}", images.service_name(), e);
                None
            }
        }
    }
}

/// Identifies one generation request.
///
/// Tokens are handed out in increasing order, so a later request always
/// carries a larger token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestToken(u64);

/// The single "last generated recipe" slot.
///
/// Each request takes a token from [`begin`](Self::begin); only the result
/// for the most recent token is kept, whatever order responses arrive in.
#[derive(Debug, Default)]
pub struct GenerationSlot {
    latest: u64,
    loading: bool,
    recipe: Option<Recipe>,
}

impl GenerationSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a request: clears the current recipe and sets the loading flag.
    pub fn begin(&mut self) -> RequestToken {
        self.latest += 1;
        self.loading = true;
        self.recipe = None;
        RequestToken(self.latest)
    }

    /// Record the result of a request.
    ///
    /// Returns `false` and leaves the slot untouched when `token` has been
    /// superseded by a newer request.
    pub fn complete(&mut self, token: RequestToken, recipe: Option<Recipe>) -> bool {
        if token.0 != self.latest {
            debug!(
                "Discarding stale generation result (request {} < {})",
                token.0, self.latest
            );
            return false;
        }
        self.loading = false;
        self.recipe = recipe;
        true
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn recipe(&self) -> Option<&Recipe> {
        self.recipe.as_ref()
    }
}
