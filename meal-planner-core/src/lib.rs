//! Meal Planner Core Library
//!
//! Recipes, the weekly meal plan, favorites and the shopping list, plus
//! the logic that turns a plan into a categorized shopping list.

pub mod aggregate;
pub mod error;
pub mod models;
pub mod nutrition;
pub mod services;
pub mod source;
pub mod storage;

pub use aggregate::generate_from_plan;
pub use error::{PlannerError, PlannerResult};
pub use models::{
    categorize, format_amount, group_by_category, AggregatedIngredient, Category, Day, DayMeals,
    FavoriteRecipe, Ingredient, MealPlan, MealType, Nutrient, Nutrition, PlannedMeal, Preferences,
    Recipe, RecipeId, ShoppingItem,
};
pub use nutrition::{summarize_plan, PlanNutritionSummary};
pub use services::{
    CommitSummary, FavoritesStore, MealPlanModel, PreferencesStore, RecentSearches,
    ShoppingListStore,
};
pub use source::{RecipeCatalog, RecipeSource};
pub use storage::{FileStore, KeyValueStore, MemoryStore, StorageError, StorageKey};

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }

    #[test]
    fn test_plan_to_shopping_list() {
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        let plan_model = MealPlanModel::new(store.clone());
        let shopping = ShoppingListStore::new(store);

        let pancakes = Recipe::new(1, "Pancakes").with_ingredients(vec![
            Ingredient::new("flour", 200.0, "g").with_aisle("Baking"),
            Ingredient::new("milk", 1.0, "cup").with_aisle("Milk, Eggs, Other Dairy"),
        ]);
        let bread = Recipe::new(2, "Bread")
            .with_ingredients(vec![Ingredient::new("flour", 150.0, "g").with_aisle("Baking")]);

        plan_model.set_meal("monday", "breakfast", &pancakes).unwrap();
        plan_model.set_meal("tuesday", "breakfast", &bread).unwrap();

        let generated = generate_from_plan(&plan_model.get());
        shopping.clear().unwrap();
        let summary = shopping.commit_generated(&generated).unwrap();

        assert_eq!(summary.added, 2);
        let items = shopping.list();
        assert_eq!(items[0].name, "flour");
        assert_eq!(items[0].amount, Some(350.0));
        assert_eq!(items[0].category, Category::Other);
        assert_eq!(items[1].category, Category::Dairy);
    }
}
