use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

use super::nutrient::Nutrition;

/// Numeric identifier assigned to a recipe by the data source.
pub type RecipeId = u64;

/// An ingredient line as the recipe data source reports it.
///
/// Every field except `name` may be missing from the source; the
/// accessors supply the fallbacks the shopping list relies on.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Ingredient {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aisle: Option<String>,
}

impl Ingredient {
    pub fn new(name: impl Into<String>, amount: f64, unit: impl Into<String>) -> Self {
        let unit = unit.into();
        Self {
            name: name.into(),
            amount: Some(amount),
            unit: if unit.is_empty() { None } else { Some(unit) },
            aisle: None,
        }
    }

    pub fn with_aisle(mut self, aisle: impl Into<String>) -> Self {
        self.aisle = Some(aisle.into());
        self
    }

    /// Quantity, treating a missing amount as zero.
    pub fn amount_or_zero(&self) -> f64 {
        self.amount.unwrap_or(0.0)
    }

    /// Unit, treating a missing unit as the empty string.
    pub fn unit_or_empty(&self) -> &str {
        self.unit.as_deref().unwrap_or("")
    }

    /// Text used to pick a shopping category: the aisle when present,
    /// otherwise the ingredient name.
    pub fn category_hint(&self) -> &str {
        match self.aisle.as_deref() {
            Some(aisle) if !aisle.is_empty() => aisle,
            _ => &self.name,
        }
    }
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.amount, self.unit_or_empty()) {
            (Some(amount), "") => write!(f, "{} {}", amount, self.name),
            (Some(amount), unit) => write!(f, "{} {} {}", amount, unit, self.name),
            (None, _) => write!(f, "{}", self.name),
        }
    }
}

/// A recipe as delivered by the recipe data source.
///
/// Field names follow the source's camelCase JSON. Recipes are plain
/// values: the meal plan and favorites store their own copies. Fields the
/// planner does not use (summary, instructions, diets, ...) are kept in
/// `extra` so a stored copy holds the whole source record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: RecipeId,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ready_in_minutes: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub servings: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extended_ingredients: Option<Vec<Ingredient>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nutrition: Option<Nutrition>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Recipe {
    pub fn new(id: RecipeId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            image: None,
            ready_in_minutes: None,
            servings: None,
            extended_ingredients: None,
            nutrition: None,
            extra: Map::new(),
        }
    }

    pub fn with_ingredients(mut self, ingredients: Vec<Ingredient>) -> Self {
        self.extended_ingredients = Some(ingredients);
        self
    }

    pub fn with_nutrition(mut self, nutrition: Nutrition) -> Self {
        self.nutrition = Some(nutrition);
        self
    }

    pub fn with_ready_in_minutes(mut self, minutes: u32) -> Self {
        self.ready_in_minutes = Some(minutes);
        self
    }

    pub fn with_servings(mut self, servings: u32) -> Self {
        self.servings = Some(servings);
        self
    }

    /// Ingredient lines, empty when the source sent none.
    pub fn ingredients(&self) -> &[Ingredient] {
        self.extended_ingredients.as_deref().unwrap_or(&[])
    }

    /// Diet labels reported by the source, e.g. "vegan".
    pub fn diets(&self) -> Vec<&str> {
        self.extra
            .get("diets")
            .and_then(Value::as_array)
            .map(|diets| diets.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }

    /// Calories per serving, if known.
    pub fn calories(&self) -> Option<f64> {
        self.nutrition.as_ref().and_then(Nutrition::calories)
    }
}

impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} (#{})", self.title, self.id)?;
        writeln!(f, "{}", "=".repeat(self.title.len()))?;

        if let Some(servings) = self.servings {
            writeln!(f, "Servings: {}", servings)?;
        }
        if let Some(minutes) = self.ready_in_minutes {
            writeln!(f, "Ready in: {} min", minutes)?;
        }
        if let Some(calories) = self.calories() {
            writeln!(f, "Calories: {:.0} kcal", calories)?;
        }

        let ingredients = self.ingredients();
        if !ingredients.is_empty() {
            writeln!(f, "\nIngredients:")?;
            for ingredient in ingredients {
                writeln!(f, "  - {}", ingredient)?;
            }
        }

        Ok(())
    }
}
