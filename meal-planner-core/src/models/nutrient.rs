use serde::{Deserialize, Serialize};
use std::fmt;

/// A single named nutrient as reported by the recipe data source.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Nutrient {
    pub name: String,
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub unit: String,
}

impl Nutrient {
    pub fn new(name: impl Into<String>, amount: f64, unit: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            amount,
            unit: unit.into(),
        }
    }
}

impl fmt::Display for Nutrient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} {}", self.name, self.amount, self.unit)
    }
}

/// Nutrition block attached to a recipe.
///
/// Some sources put a top-level `calories` figure on the block, others only
/// list it among `nutrients`. [`Nutrition::calories`] reads either.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Nutrition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories: Option<f64>,
    #[serde(default)]
    pub nutrients: Vec<Nutrient>,
}

impl Nutrition {
    pub fn with_calories(calories: f64) -> Self {
        Self {
            calories: Some(calories),
            nutrients: Vec::new(),
        }
    }

    pub fn with_nutrients(nutrients: Vec<Nutrient>) -> Self {
        Self {
            calories: None,
            nutrients,
        }
    }

    /// Calories per serving, if the source reported any.
    pub fn calories(&self) -> Option<f64> {
        self.calories.or_else(|| {
            self.nutrients
                .iter()
                .find(|n| n.name.eq_ignore_ascii_case("calories"))
                .map(|n| n.amount)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nutrient_display() {
        let nutrient = Nutrient::new("Protein", 15.5, "g");
        assert_eq!(format!("{}", nutrient), "Protein: 15.5 g");
    }

    #[test]
    fn test_calories_prefers_top_level_field() {
        let mut nutrition = Nutrition::with_calories(420.0);
        nutrition.nutrients.push(Nutrient::new("Calories", 999.0, "kcal"));
        assert_eq!(nutrition.calories(), Some(420.0));
    }

    #[test]
    fn test_calories_falls_back_to_nutrient_list() {
        let nutrition = Nutrition::with_nutrients(vec![
            Nutrient::new("Fat", 12.0, "g"),
            Nutrient::new("Calories", 310.0, "kcal"),
        ]);
        assert_eq!(nutrition.calories(), Some(310.0));
    }

    #[test]
    fn test_calories_absent() {
        let nutrition = Nutrition::with_nutrients(vec![Nutrient::new("Fat", 12.0, "g")]);
        assert_eq!(nutrition.calories(), None);
    }

    #[test]
    fn test_nutrition_parses_source_shape() {
        let json = r#"{"nutrients":[{"name":"Calories","amount":250.5,"unit":"kcal"}]}"#;
        let parsed: Nutrition = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.calories(), Some(250.5));
    }
}
