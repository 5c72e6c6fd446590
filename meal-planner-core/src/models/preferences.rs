use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::recipe::Recipe;

/// Search preferences remembered between sessions.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Preferences {
    /// Diet a recipe must be labelled with (e.g. "vegetarian")
    pub diet: Option<String>,
    /// Ingredient names to exclude, matched as substrings
    pub intolerances: Vec<String>,
    pub max_ready_minutes: Option<u32>,
}

impl Preferences {
    /// True when `recipe` passes every saved filter.
    pub fn allows(&self, recipe: &Recipe) -> bool {
        self.allows_ready_time(recipe.ready_in_minutes)
            && self.allows_diet(recipe)
            && self.allows_ingredients(recipe)
    }

    /// A recipe fits the diet when its `diets` list names it or it carries
    /// a `true` flag of that name (`"vegan": true`). Recipes without diet
    /// information do not fit a set diet.
    pub fn allows_diet(&self, recipe: &Recipe) -> bool {
        let diet = match self.diet.as_deref().map(str::trim) {
            Some(diet) if !diet.is_empty() => diet.to_lowercase(),
            _ => return true,
        };

        recipe.diets().iter().any(|d| d.to_lowercase() == diet)
            || recipe.extra.get(&diet).and_then(Value::as_bool) == Some(true)
    }

    /// False when any ingredient name contains an intolerance, ignoring case.
    pub fn allows_ingredients(&self, recipe: &Recipe) -> bool {
        let excluded: Vec<String> = self
            .intolerances
            .iter()
            .map(|i| i.trim().to_lowercase())
            .filter(|i| !i.is_empty())
            .collect();
        if excluded.is_empty() {
            return true;
        }

        !recipe.ingredients().iter().any(|ingredient| {
            let name = ingredient.name.to_lowercase();
            excluded.iter().any(|i| name.contains(i.as_str()))
        })
    }

    /// True when the recipe's preparation time fits the limit.
    /// Recipes without a time always fit.
    pub fn allows_ready_time(&self, minutes: Option<u32>) -> bool {
        match (self.max_ready_minutes, minutes) {
            (Some(max), Some(actual)) => actual <= max,
            _ => true,
        }
    }
}
