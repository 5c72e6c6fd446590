//! Where recipes come from.
//!
//! The planner never fetches recipes itself. Callers hand it fully
//! resolved [`Recipe`] values obtained from a [`RecipeSource`].

use std::fs;
use std::io;
use std::path::Path;

use crate::models::{Preferences, Recipe, RecipeId};
use crate::storage::StorageError;

/// Lookup of recipes by id.
pub trait RecipeSource {
    /// Returns `None` when the source has no such recipe.
    fn fetch_recipe_by_id(&self, id: RecipeId) -> Option<Recipe>;
}

/// A fixed set of recipes loaded from a JSON array.
#[derive(Debug, Clone, Default)]
pub struct RecipeCatalog {
    recipes: Vec<Recipe>,
}

impl RecipeCatalog {
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self { recipes }
    }

    /// Load a catalog file. A missing file yields an empty catalog.
    pub fn load(path: &Path) -> Result<Self, StorageError> {
        match fs::read(path) {
            Ok(bytes) => {
                let recipes = serde_json::from_slice(&bytes)
                    .map_err(|e| StorageError::Json(path.display().to_string(), e))?;
                Ok(Self { recipes })
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::warn!("Recipe catalog {} not found", path.display());
                Ok(Self::default())
            }
            Err(e) => Err(StorageError::IoError(path.to_path_buf(), e)),
        }
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Recipes whose title contains `query`, ignoring case, that also pass
    /// the filters in `preferences`. Catalog order is kept.
    pub fn search(&self, query: &str, preferences: &Preferences) -> Vec<&Recipe> {
        let query = query.trim().to_lowercase();
        self.recipes
            .iter()
            .filter(|r| r.title.to_lowercase().contains(&query))
            .filter(|r| preferences.allows(r))
            .collect()
    }
}

impl RecipeSource for RecipeCatalog {
    fn fetch_recipe_by_id(&self, id: RecipeId) -> Option<Recipe> {
        self.recipes.iter().find(|r| r.id == id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn catalog() -> RecipeCatalog {
        RecipeCatalog::new(vec![
            Recipe::new(1, "Tomato Soup").with_ready_in_minutes(20),
            Recipe::new(2, "Chicken Soup").with_ready_in_minutes(90),
            Recipe::new(3, "Pancakes"),
        ])
    }

    #[test]
    fn test_fetch_by_id() {
        let catalog = catalog();
        assert_eq!(catalog.fetch_recipe_by_id(3).unwrap().title, "Pancakes");
        assert!(catalog.fetch_recipe_by_id(42).is_none());
    }

    #[test]
    fn test_search_ignores_case() {
        let catalog = catalog();
        let found: Vec<_> = catalog
            .search("SOUP", &Preferences::default())
            .into_iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(found, vec![1, 2]);
    }

    #[test]
    fn test_search_respects_ready_time() {
        let catalog = catalog();
        let prefs = Preferences {
            max_ready_minutes: Some(30),
            ..Default::default()
        };
        let found: Vec<_> = catalog.search("soup", &prefs).into_iter().map(|r| r.id).collect();
        assert_eq!(found, vec![1]);
    }

    #[test]
    fn test_search_respects_intolerances_and_diet() {
        let catalog: RecipeCatalog = RecipeCatalog::new(
            serde_json::from_str(
                r#"[
                    {"id": 1, "title": "Peanut Noodles", "diets": ["vegan"],
                     "extendedIngredients": [{"name": "peanut"}]},
                    {"id": 2, "title": "Sesame Noodles", "diets": ["vegan"],
                     "extendedIngredients": [{"name": "sesame oil"}]},
                    {"id": 3, "title": "Chicken Noodles",
                     "extendedIngredients": [{"name": "chicken"}]}
                ]"#,
            )
            .unwrap(),
        );
        let prefs = Preferences {
            diet: Some("vegan".to_string()),
            intolerances: vec!["peanut".to_string()],
            ..Default::default()
        };

        let found: Vec<_> = catalog
            .search("noodles", &prefs)
            .into_iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(found, vec![2]);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("recipes.json");
        fs::write(
            &path,
            r#"[{"id": 10, "title": "Omelette", "extendedIngredients": [{"name": "eggs", "amount": 3}]}]"#,
        )
        .unwrap();

        let catalog = RecipeCatalog::load(&path).unwrap();
        assert_eq!(catalog.recipes().len(), 1);
        assert_eq!(catalog.fetch_recipe_by_id(10).unwrap().ingredients().len(), 1);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let catalog = RecipeCatalog::load(&dir.path().join("none.json")).unwrap();
        assert!(catalog.recipes().is_empty());
    }

    #[test]
    fn test_load_invalid_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("recipes.json");
        fs::write(&path, "not json").unwrap();
        assert!(RecipeCatalog::load(&path).is_err());
    }
}
