//! The session's saved recipes.

use log::{info, warn};

use crate::model::Recipe;

/// Result of trying to save a recipe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Appended to the collection
    Saved(String),
    /// A recipe with this title is already saved; nothing changed
    AlreadySaved(String),
    /// The food-refusal pseudo-recipe, or nothing at all, was offered
    NotARecipe,
}

impl SaveOutcome {
    /// The notice shown to the user for this outcome.
    pub fn notice(&self) -> String {
        match self {
            SaveOutcome::Saved(title) => format!("{} has been saved!", title),
            SaveOutcome::AlreadySaved(title) => {
                format!("{} is already in your saved recipes.", title)
            }
            SaveOutcome::NotARecipe => "This is not a recipe and cannot be saved.".to_string(),
        }
    }

    pub fn is_saved(&self) -> bool {
        matches!(self, SaveOutcome::Saved(_))
    }
}

/// Insertion-ordered recipes, unique by exact title.
#[derive(Debug, Default, Clone)]
pub struct SavedCollection {
    recipes: Vec<Recipe>,
}

impl SavedCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `recipe` unless it is the food-refusal pseudo-recipe or its
    /// title is already present.
    pub fn save(&mut self, recipe: Recipe) -> SaveOutcome {
        if recipe.is_food_refusal() {
            warn!("Refusing to save a non-food answer");
            return SaveOutcome::NotARecipe;
        }

        if self.contains_title(&recipe.title) {
            info!("'{}' is already saved", recipe.title);
            return SaveOutcome::AlreadySaved(recipe.title);
        }

        info!("Saved '{}'", recipe.title);
        let title = recipe.title.clone();
        self.recipes.push(recipe);
        SaveOutcome::Saved(title)
    }

    /// Remove every recipe titled like `recipe`, returning how many went.
    pub fn delete(&mut self, recipe: &Recipe) -> usize {
        let before = self.recipes.len();
        self.recipes.retain(|r| r.title != recipe.title);
        let removed = before - self.recipes.len();
        if removed > 0 {
            info!("Deleted '{}'", recipe.title);
        }
        removed
    }

    /// Recipes whose title contains `query`, ignoring case.
    ///
    /// An empty query returns everything, in saved order.
    pub fn search(&self, query: &str) -> Vec<&Recipe> {
        if query.is_empty() {
            return self.recipes.iter().collect();
        }
        let needle = query.to_lowercase();
        self.recipes
            .iter()
            .filter(|r| r.title.to_lowercase().contains(&needle))
            .collect()
    }

    pub fn contains_title(&self, title: &str) -> bool {
        self.recipes.iter().any(|r| r.title == title)
    }

    pub fn get(&self, index: usize) -> Option<&Recipe> {
        self.recipes.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Recipe> {
        self.recipes.iter()
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe(title: &str) -> Recipe {
        Recipe::generated(title, format!("Title: {}", title), None)
    }

    fn titles(recipes: Vec<&Recipe>) -> Vec<&str> {
        recipes.into_iter().map(|r| r.title.as_str()).collect()
    }

    #[test]
    fn test_save_appends_in_order() {
        let mut collection = SavedCollection::new();
        assert!(collection.save(recipe("Pad Thai")).is_saved());
        assert!(collection.save(recipe("Biryani")).is_saved());
        assert_eq!(titles(collection.search("")), vec!["Pad Thai", "Biryani"]);
    }

    #[test]
    fn test_save_twice_keeps_one() {
        let mut collection = SavedCollection::new();
        collection.save(recipe("Ramen"));
        let outcome = collection.save(recipe("Ramen"));
        assert_eq!(outcome, SaveOutcome::AlreadySaved("Ramen".to_string()));
        assert_eq!(collection.len(), 1);
    }

    #[test]
    fn test_titles_differing_in_case_are_distinct() {
        let mut collection = SavedCollection::new();
        collection.save(recipe("ramen"));
        assert!(collection.save(recipe("Ramen")).is_saved());
        assert_eq!(collection.len(), 2);
    }

    #[test]
    fn test_refusal_is_never_saved() {
        let mut collection = SavedCollection::new();
        let outcome = collection.save(Recipe::not_a_food_query("no"));
        assert_eq!(outcome, SaveOutcome::NotARecipe);
        assert!(collection.is_empty());
    }

    #[test]
    fn test_delete_then_save_restores() {
        let mut collection = SavedCollection::new();
        collection.save(recipe("Tacos"));
        collection.save(recipe("Paella"));

        let tacos = recipe("Tacos");
        assert_eq!(collection.delete(&tacos), 1);
        assert!(!collection.contains_title("Tacos"));
        assert_eq!(collection.len(), 1);

        assert!(collection.save(tacos).is_saved());
        assert_eq!(collection.len(), 2);
        assert_eq!(titles(collection.search("")), vec!["Paella", "Tacos"]);
    }

    #[test]
    fn test_delete_missing_is_noop() {
        let mut collection = SavedCollection::new();
        collection.save(recipe("Tacos"));
        assert_eq!(collection.delete(&recipe("Sushi")), 0);
        assert_eq!(collection.len(), 1);
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let mut collection = SavedCollection::new();
        collection.save(recipe("Chicken Alfredo"));
        collection.save(recipe("Butter Chicken"));
        collection.save(recipe("Miso Soup"));

        assert_eq!(
            titles(collection.search("CHICKEN")),
            vec!["Chicken Alfredo", "Butter Chicken"]
        );
        assert_eq!(titles(collection.search("soup")), vec!["Miso Soup"]);
        assert!(collection.search("lasagna").is_empty());
    }

    #[test]
    fn test_notice_texts() {
        assert_eq!(
            SaveOutcome::Saved("Pho".to_string()).notice(),
            "Pho has been saved!"
        );
        assert_eq!(
            SaveOutcome::AlreadySaved("Pho".to_string()).notice(),
            "Pho is already in your saved recipes."
        );
        assert_eq!(
            SaveOutcome::NotARecipe.notice(),
            "This is not a recipe and cannot be saved."
        );
    }
}
