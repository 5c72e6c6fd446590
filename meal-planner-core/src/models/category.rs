//! Shopping aisle categories and the heuristic that assigns them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Section of the store a shopping item belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Produce,
    Meat,
    Dairy,
    Grains,
    Pantry,
    Spices,
    #[default]
    Other,
}

/// Substring rules checked in order; the first rule with a matching
/// keyword decides the category.
const RULES: &[(&[&str], Category)] = &[
    (&["produce", "vegetable", "fruit"], Category::Produce),
    (&["meat", "seafood", "poultry"], Category::Meat),
    (&["dairy", "cheese", "milk"], Category::Dairy),
    (&["bread", "bakery", "grain"], Category::Grains),
    (&["spice", "condiment", "oil"], Category::Spices),
    (&["canned", "jar"], Category::Pantry),
];

impl Category {
    /// Every category, in display order.
    pub const ALL: [Category; 7] = [
        Category::Produce,
        Category::Meat,
        Category::Dairy,
        Category::Grains,
        Category::Pantry,
        Category::Spices,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Produce => "produce",
            Category::Meat => "meat",
            Category::Dairy => "dairy",
            Category::Grains => "grains",
            Category::Pantry => "pantry",
            Category::Spices => "spices",
            Category::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s.to_lowercase())
            .ok_or_else(|| {
                format!(
                    "Invalid category '{}'. Valid options: produce, meat, dairy, grains, pantry, spices, other",
                    s
                )
            })
    }
}

/// Map an aisle or ingredient name to a shopping category.
///
/// Matching is case-insensitive and never fails: anything unrecognised,
/// including a missing hint, lands in [`Category::Other`].
pub fn categorize(hint: Option<&str>) -> Category {
    let hint = hint.unwrap_or_default().to_lowercase();

    RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| hint.contains(k)))
        .map(|(_, category)| *category)
        .unwrap_or(Category::Other)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categorize_each_rule() {
        assert_eq!(categorize(Some("Fresh Produce")), Category::Produce);
        assert_eq!(categorize(Some("Frozen vegetables")), Category::Produce);
        assert_eq!(categorize(Some("Dried Fruits")), Category::Produce);
        assert_eq!(categorize(Some("Meat")), Category::Meat);
        assert_eq!(categorize(Some("Seafood")), Category::Meat);
        assert_eq!(categorize(Some("poultry")), Category::Meat);
        assert_eq!(categorize(Some("Milk, Eggs, Other Dairy")), Category::Dairy);
        assert_eq!(categorize(Some("Bakery/Bread")), Category::Grains);
        assert_eq!(categorize(Some("Pasta and Rice;Grains")), Category::Grains);
        assert_eq!(categorize(Some("Spices and Seasonings")), Category::Spices);
        assert_eq!(categorize(Some("Condiments")), Category::Spices);
        assert_eq!(categorize(Some("Canned and Jarred")), Category::Pantry);
    }

    #[test]
    fn test_categorize_first_rule_wins() {
        assert_eq!(categorize(Some("Seafood Oil")), Category::Meat);
        assert_eq!(categorize(Some("fruit cheese")), Category::Produce);
        assert_eq!(categorize(Some("Oil in a jar")), Category::Spices);
    }

    #[test]
    fn test_categorize_case_insensitive() {
        assert_eq!(categorize(Some("CHEESE")), Category::Dairy);
        assert_eq!(categorize(Some("PoUlTrY")), Category::Meat);
    }

    #[test]
    fn test_categorize_empty_and_missing() {
        assert_eq!(categorize(Some("")), Category::Other);
        assert_eq!(categorize(None), Category::Other);
        assert_eq!(categorize(Some("Beverages")), Category::Other);
    }

    #[test]
    fn test_category_from_str() {
        assert_eq!("Dairy".parse::<Category>().unwrap(), Category::Dairy);
        assert_eq!("other".parse::<Category>().unwrap(), Category::Other);
        assert!("frozen".parse::<Category>().is_err());
    }

    #[test]
    fn test_category_json() {
        let json = serde_json::to_string(&Category::Spices).unwrap();
        assert_eq!(json, "\"spices\"");
        let parsed: Category = serde_json::from_str("\"grains\"").unwrap();
        assert_eq!(parsed, Category::Grains);
    }
}
