//! Wiring of the core services onto the configured storage.

use std::sync::Arc;

use meal_planner_core::{
    FavoritesStore, FileStore, KeyValueStore, MealPlanModel, PreferencesStore, RecentSearches,
    Recipe, RecipeCatalog, RecipeId, RecipeSource, ShoppingListStore,
};

use crate::config::Config;

/// Everything a command may need, sharing one storage backend.
pub struct App {
    pub plan: MealPlanModel,
    pub shopping: ShoppingListStore,
    pub favorites: FavoritesStore,
    pub searches: RecentSearches,
    pub preferences: PreferencesStore,
    pub catalog: RecipeCatalog,
}

impl App {
    pub fn open(config: &Config) -> Result<Self, Box<dyn std::error::Error>> {
        let store: Arc<dyn KeyValueStore> =
            Arc::new(FileStore::new(config.data_dir.value.clone()));
        let catalog = RecipeCatalog::load(&config.recipes_path.value)?;
        tracing::debug!(
            "Opened {} with {} catalog recipe(s)",
            config.data_dir.value.display(),
            catalog.recipes().len()
        );
        Ok(Self::with_store(store, catalog))
    }

    pub fn with_store(store: Arc<dyn KeyValueStore>, catalog: RecipeCatalog) -> Self {
        Self {
            plan: MealPlanModel::new(store.clone()),
            shopping: ShoppingListStore::new(store.clone()),
            favorites: FavoritesStore::new(store.clone()),
            searches: RecentSearches::new(store.clone()),
            preferences: PreferencesStore::new(store),
            catalog,
        }
    }

    /// Look up a recipe in the catalog, failing with a readable message.
    pub fn recipe(&self, id: RecipeId) -> Result<Recipe, Box<dyn std::error::Error>> {
        self.catalog
            .fetch_recipe_by_id(id)
            .ok_or_else(|| format!("Recipe not found: {}", id).into())
    }
}
