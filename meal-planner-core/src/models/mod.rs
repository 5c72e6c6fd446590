mod category;
mod day;
mod favorite;
mod meal_plan;
mod meal_type;
mod nutrient;
mod preferences;
mod recipe;
mod shopping_list;

pub use category::{categorize, Category};
pub use day::Day;
pub use favorite::FavoriteRecipe;
pub use meal_plan::{DayMeals, MealPlan, PlannedMeal};
pub use meal_type::MealType;
pub use nutrient::{Nutrient, Nutrition};
pub use preferences::Preferences;
pub use recipe::{Ingredient, Recipe, RecipeId};
pub use shopping_list::{format_amount, group_by_category, AggregatedIngredient, ShoppingItem};
