//! Shopping list entries.
//!
//! The persisted list holds [`ShoppingItem`]s. Lists generated from the
//! meal plan are produced as [`AggregatedIngredient`]s and only become
//! items once the caller commits them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::category::Category;

/// An ingredient total computed from the meal plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AggregatedIngredient {
    pub name: String,
    pub category: Category,
    /// Sum of every occurrence's amount
    pub amount: f64,
    /// Unit of the first occurrence
    pub unit: String,
    pub checked: bool,
}

impl AggregatedIngredient {
    pub fn new(
        name: impl Into<String>,
        category: Category,
        amount: f64,
        unit: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            category,
            amount,
            unit: unit.into(),
            checked: false,
        }
    }
}

impl fmt::Display for AggregatedIngredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.unit.is_empty() {
            write!(
                f,
                "{} {} [{}]",
                format_amount(self.amount),
                self.name,
                self.category
            )
        } else {
            write!(
                f,
                "{} {} {} [{}]",
                format_amount(self.amount),
                self.unit,
                self.name,
                self.category
            )
        }
    }
}

/// An entry on the persisted shopping list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingItem {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub category: Category,
    #[serde(default)]
    pub checked: bool,
    /// Quantity carried over from a generated list
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    pub added_at: DateTime<Utc>,
}

impl ShoppingItem {
    pub fn new(name: impl Into<String>, category: Category) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            category,
            checked: false,
            amount: None,
            unit: None,
            added_at: Utc::now(),
        }
    }

    /// Build an unchecked item from a generated ingredient total.
    pub fn from_aggregated(ingredient: &AggregatedIngredient) -> Self {
        let mut item = Self::new(&ingredient.name, ingredient.category);
        item.amount = Some(ingredient.amount);
        if !ingredient.unit.is_empty() {
            item.unit = Some(ingredient.unit.clone());
        }
        item
    }

    /// Case-insensitive name comparison used for duplicate detection.
    pub fn has_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}

impl fmt::Display for ShoppingItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let check = if self.checked { "[x]" } else { "[ ]" };
        match (self.amount, &self.unit) {
            (Some(amount), Some(unit)) => write!(
                f,
                "{} {:<25} {} {}",
                check,
                self.name,
                format_amount(amount),
                unit
            ),
            (Some(amount), None) => {
                write!(f, "{} {:<25} {}", check, self.name, format_amount(amount))
            }
            (None, _) => write!(f, "{} {}", check, self.name),
        }
    }
}

/// Group items by category in the fixed category order.
///
/// Categories with no items are left out. Items keep their list order
/// within a group.
pub fn group_by_category(items: &[ShoppingItem]) -> Vec<(Category, Vec<&ShoppingItem>)> {
    Category::ALL
        .into_iter()
        .filter_map(|category| {
            let group: Vec<&ShoppingItem> =
                items.iter().filter(|i| i.category == category).collect();
            if group.is_empty() {
                None
            } else {
                Some((category, group))
            }
        })
        .collect()
}

/// Format an amount, dropping the fraction for whole numbers.
pub fn format_amount(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("{}", amount as i64)
    } else {
        format!("{:.2}", amount)
            .trim_end_matches('0')
            .to_string()
    }
}
