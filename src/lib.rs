//! # recipe-assistant
//!
//! Generate recipes from a food name with an LLM, decorate them with a photo,
//! and keep the ones you like in a session recipe book.
//!
//! ## Quick Start
//!
//! ```no_run
//! use recipe_assistant::{format_content, RecipeAssistant};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut session = RecipeAssistant::builder().build()?;
//!
//! if let Some(recipe) = session.generate("Chicken Alfredo").await?.cloned() {
//!     println!("{}", recipe.title);
//!     for block in format_content(Some(&recipe.content)) {
//!         println!("{:?}", block);
//!     }
//!     session.save(recipe);
//! }
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod collection;
pub mod config;
pub mod error;
pub mod formatter;
pub mod images;
pub mod model;
pub mod notification;
pub mod providers;
pub mod session;
pub mod workflow;

pub use builder::{GenerationProvider, RecipeAssistant, RecipeAssistantBuilder};
pub use collection::{SaveOutcome, SavedCollection};
pub use config::AppConfig;
pub use error::AssistantError;
pub use formatter::{format_content, render_plain, Block};
pub use model::Recipe;
pub use notification::Notifier;
pub use session::{Session, Tab};
pub use workflow::{extract_title, GenerationSlot, RecipeWorkflow, RequestToken};

/// Generate one recipe using configuration from `config.toml` and the
/// environment.
///
/// # Example
/// ```no_run
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let recipe = recipe_assistant::generate_recipe("pad thai").await?;
/// println!("{}", recipe.title);
/// # Ok(())
/// # }
/// ```
pub async fn generate_recipe(query: &str) -> Result<Recipe, AssistantError> {
    let session = RecipeAssistant::builder().build()?;
    session.workflow().generate(query).await
}
