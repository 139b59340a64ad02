//! Per-session view state: the active tab, the last generated recipe, the
//! saved collection, the recipe open in the detail view, and notices.

use log::{error, warn};

use crate::collection::{SaveOutcome, SavedCollection};
use crate::model::{Recipe, CUISINE_CATEGORIES};
use crate::notification::Notifier;
use crate::workflow::{GenerationSlot, RecipeWorkflow, RequestToken};
use crate::AssistantError;

pub const LOADING_MESSAGE: &str = "Stirring up a recipe...";
pub const EMPTY_BOOK_MESSAGE: &str = "Your recipe book is empty. Go find some delicious ideas!";
pub const NO_MATCHES_MESSAGE: &str = "No saved recipes match your search.";

/// The two top-level views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    /// Generation and filters
    #[default]
    All,
    /// The saved recipe book
    Saved,
}

impl Tab {
    pub fn label(&self) -> &'static str {
        match self {
            Tab::All => "All Recipes",
            Tab::Saved => "Saved Recipes",
        }
    }
}

pub struct Session {
    workflow: RecipeWorkflow,
    notifier: Notifier,
    active_tab: Tab,
    category: &'static str,
    generation: GenerationSlot,
    saved: SavedCollection,
    saved_search: String,
    selected: Option<Recipe>,
}

impl Session {
    pub fn new(workflow: RecipeWorkflow, notifier: Notifier) -> Self {
        Session {
            workflow,
            notifier,
            active_tab: Tab::default(),
            category: CUISINE_CATEGORIES[0],
            generation: GenerationSlot::new(),
            saved: SavedCollection::new(),
            saved_search: String::new(),
            selected: None,
        }
    }

    pub fn workflow(&self) -> &RecipeWorkflow {
        &self.workflow
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn set_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
    }

    pub fn category(&self) -> &str {
        self.category
    }

    /// Select a cuisine filter by name, ignoring case.
    ///
    /// Returns `false` and keeps the current filter for unknown names.
    pub fn select_category(&mut self, name: &str) -> bool {
        match CUISINE_CATEGORIES
            .iter()
            .find(|c| c.eq_ignore_ascii_case(name.trim()))
        {
            Some(category) => {
                self.category = *category;
                true
            }
            None => false,
        }
    }

    /// Generate a recipe for `query` into the generated slot.
    ///
    /// Blank input is rejected before any state changes. A failed generation
    /// is logged and leaves the slot empty.
    pub async fn generate(&mut self, query: &str) -> Result<Option<&Recipe>, AssistantError> {
        if query.trim().is_empty() {
            warn!("Ignoring empty generation query");
            return Err(AssistantError::EmptyQuery);
        }

        let token = self.begin_generation();
        let result = self.workflow.generate(query).await;
        self.finish_generation(token, result);
        Ok(self.generation.recipe())
    }

    /// Start a generation request by hand; pair with
    /// [`finish_generation`](Self::finish_generation).
    pub fn begin_generation(&mut self) -> RequestToken {
        self.generation.begin()
    }

    /// Deliver a generation result. Results for superseded requests are
    /// dropped; returns whether this one was kept.
    pub fn finish_generation(
        &mut self,
        token: RequestToken,
        result: Result<Recipe, AssistantError>,
    ) -> bool {
        let recipe = match result {
            Ok(recipe) => Some(recipe),
            Err(e) => {
                error!("Failed to generate recipe: {}", e);
                None
            }
        };
        self.generation.complete(token, recipe)
    }

    pub fn generated(&self) -> Option<&Recipe> {
        self.generation.recipe()
    }

    pub fn is_loading(&self) -> bool {
        self.generation.is_loading()
    }

    /// Save the last generated recipe.
    pub fn save_generated(&mut self) -> SaveOutcome {
        match self.generation.recipe().cloned() {
            Some(recipe) => self.save(recipe),
            None => {
                let outcome = SaveOutcome::NotARecipe;
                self.notifier.show(outcome.notice());
                outcome
            }
        }
    }

    /// Save `recipe` and show the matching notice.
    pub fn save(&mut self, recipe: Recipe) -> SaveOutcome {
        let outcome = self.saved.save(recipe);
        self.notifier.show(outcome.notice());
        outcome
    }

    pub fn delete(&mut self, recipe: &Recipe) -> usize {
        self.saved.delete(recipe)
    }

    pub fn saved(&self) -> &SavedCollection {
        &self.saved
    }

    pub fn set_saved_search(&mut self, query: impl Into<String>) {
        self.saved_search = query.into();
    }

    pub fn saved_search(&self) -> &str {
        &self.saved_search
    }

    /// Saved recipes filtered by the current saved-tab search.
    pub fn visible_saved(&self) -> Vec<&Recipe> {
        self.saved.search(&self.saved_search)
    }

    /// What the saved tab shows when [`visible_saved`](Self::visible_saved)
    /// is empty.
    pub fn empty_saved_message(&self) -> &'static str {
        if self.saved_search.is_empty() {
            EMPTY_BOOK_MESSAGE
        } else {
            NO_MATCHES_MESSAGE
        }
    }

    /// Open `recipe` in the detail view, replacing any open one.
    pub fn view(&mut self, recipe: Recipe) {
        self.selected = Some(recipe);
    }

    pub fn close_detail(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&Recipe> {
        self.selected.as_ref()
    }

    pub fn notice(&self) -> Option<String> {
        self.notifier.current()
    }

    /// Drop the current notice before its timer fires.
    pub fn dismiss_notice(&self) {
        self.notifier.clear();
    }
}
