use std::sync::Arc;

use crate::error::PlannerResult;
use crate::models::{FavoriteRecipe, Recipe, RecipeId};
use crate::storage::{KeyValueStore, StorageKey};

use super::{load_or_default, save};

/// Service that owns the persisted favorites, unique by recipe id.
#[derive(Clone)]
pub struct FavoritesStore {
    store: Arc<dyn KeyValueStore>,
}

impl FavoritesStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Favorites in the order they were added.
    pub fn list(&self) -> Vec<FavoriteRecipe> {
        load_or_default(self.store.as_ref(), StorageKey::Favorites)
    }

    /// Store a copy of `recipe`. Returns false if it is already a favorite.
    pub fn add(&self, recipe: &Recipe) -> PlannerResult<bool> {
        let mut favorites = self.list();
        if favorites.iter().any(|f| f.recipe.id == recipe.id) {
            return Ok(false);
        }
        favorites.push(FavoriteRecipe::new(recipe));
        self.save(&favorites)?;

        tracing::debug!("Added recipe {} to favorites", recipe.id);
        Ok(true)
    }

    /// Returns false if the recipe was not a favorite.
    pub fn remove(&self, id: RecipeId) -> PlannerResult<bool> {
        let mut favorites = self.list();
        let len_before = favorites.len();
        favorites.retain(|f| f.recipe.id != id);
        if favorites.len() == len_before {
            return Ok(false);
        }
        self.save(&favorites)?;
        Ok(true)
    }

    pub fn contains(&self, id: RecipeId) -> bool {
        self.list().iter().any(|f| f.recipe.id == id)
    }

    pub fn clear(&self) -> PlannerResult<()> {
        self.save(&[])
    }

    fn save(&self, favorites: &[FavoriteRecipe]) -> PlannerResult<()> {
        save(self.store.as_ref(), StorageKey::Favorites, favorites)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn store() -> FavoritesStore {
        FavoritesStore::new(Arc::new(MemoryStore::new()))
    }

    #[test]
    fn test_add_and_contains() {
        let store = store();
        assert!(!store.contains(1));

        assert!(store.add(&Recipe::new(1, "Chili")).unwrap());
        assert!(store.contains(1));
        assert_eq!(store.list().len(), 1);
    }

    #[test]
    fn test_add_duplicate_id() {
        let store = store();
        store.add(&Recipe::new(1, "Chili")).unwrap();

        assert!(!store.add(&Recipe::new(1, "Chili v2")).unwrap());
        let favorites = store.list();
        assert_eq!(favorites.len(), 1);
        assert_eq!(favorites[0].recipe.title, "Chili");
    }

    #[test]
    fn test_remove() {
        let store = store();
        store.add(&Recipe::new(1, "Chili")).unwrap();
        store.add(&Recipe::new(2, "Curry")).unwrap();

        assert!(store.remove(1).unwrap());
        assert!(!store.remove(1).unwrap());
        assert!(!store.contains(1));
        assert!(store.contains(2));
    }

    #[test]
    fn test_clear() {
        let store = store();
        store.add(&Recipe::new(1, "Chili")).unwrap();
        store.clear().unwrap();
        assert!(store.list().is_empty());
    }

    #[test]
    fn test_favorite_is_a_snapshot() {
        let store = store();
        let mut recipe = Recipe::new(3, "Ramen");
        store.add(&recipe).unwrap();

        recipe.title = "Udon".to_string();
        assert_eq!(store.list()[0].recipe.title, "Ramen");
    }

    #[test]
    fn test_unreadable_store_reads_empty() {
        let store = FavoritesStore::new(Arc::new(MemoryStore::unavailable()));
        assert!(store.list().is_empty());
        assert!(!store.contains(1));
        assert!(store.add(&Recipe::new(1, "Chili")).is_err());
    }
}
