use serde::{Deserialize, Serialize};

/// Title given to the pseudo-recipe produced when the query is not about food.
pub const NOT_A_FOOD_TITLE: &str = "Not a food query!";

/// Category attached to every generated recipe.
pub const GENERATED_CATEGORY: &str = "Generated";

/// Content used when the generation service answers without any text.
pub const NO_RECIPE_FOUND: &str = "No recipe found.";

/// Cuisine filters offered next to the search field.
pub const CUISINE_CATEGORIES: [&str; 7] = [
    "All",
    "Italian",
    "Mexican",
    "Indian",
    "Japanese",
    "Thai",
    "Middle Eastern",
];

/// A generated or saved recipe.
///
/// `title` is the identity key of the saved collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub title: String,
    /// Raw multi-line text as returned by the generation service
    pub content: String,
    pub category: String,
    /// Photo URL, if the image search found one
    pub image: Option<String>,
}

impl Recipe {
    /// Build a generated recipe record.
    pub fn generated(
        title: impl Into<String>,
        content: impl Into<String>,
        image: Option<String>,
    ) -> Self {
        Recipe {
            title: title.into(),
            content: content.into(),
            category: GENERATED_CATEGORY.to_string(),
            image,
        }
    }

    /// The sentinel record for a declined, non-food query.
    pub fn not_a_food_query(content: impl Into<String>) -> Self {
        Self::generated(NOT_A_FOOD_TITLE, content, None)
    }

    /// Whether this is the food-refusal pseudo-recipe.
    pub fn is_food_refusal(&self) -> bool {
        self.title == NOT_A_FOOD_TITLE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_sets_category() {
        let recipe = Recipe::generated("Pancakes", "Title: Pancakes", None);
        assert_eq!(recipe.category, "Generated");
        assert!(!recipe.is_food_refusal());
    }

    #[test]
    fn test_not_a_food_query_has_no_image() {
        let recipe = Recipe::not_a_food_query("I can only help with food-related questions.");
        assert_eq!(recipe.title, NOT_A_FOOD_TITLE);
        assert!(recipe.image.is_none());
        assert!(recipe.is_food_refusal());
    }

    #[test]
    fn test_serializes_missing_image_as_null() {
        let recipe = Recipe::generated("Soup", "Hot soup", None);
        let json = serde_json::to_value(&recipe).unwrap();
        assert!(json["image"].is_null());
        assert_eq!(json["title"], "Soup");
    }
}
