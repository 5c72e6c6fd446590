//! Shopping list generation from the meal plan.

use std::collections::HashMap;

use crate::models::{categorize, AggregatedIngredient, MealPlan};

/// Total up the ingredients of every planned meal.
///
/// Slots are walked Monday to Sunday, breakfast to dinner, and each
/// recipe's ingredients in their listed order. Ingredients are merged by
/// exact name: amounts add up while the unit and category of the first
/// occurrence are kept. Names differing only in case stay separate
/// entries. The result is in first-seen order.
pub fn generate_from_plan(plan: &MealPlan) -> Vec<AggregatedIngredient> {
    let mut totals: Vec<AggregatedIngredient> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for meal in plan.meals() {
        for ingredient in meal.recipe.ingredients() {
            match index.get(ingredient.name.as_str()) {
                Some(&position) => {
                    totals[position].amount += ingredient.amount_or_zero();
                }
                None => {
                    index.insert(&ingredient.name, totals.len());
                    totals.push(AggregatedIngredient::new(
                        &ingredient.name,
                        categorize(Some(ingredient.category_hint())),
                        ingredient.amount_or_zero(),
                        ingredient.unit_or_empty(),
                    ));
                }
            }
        }
    }

    totals
}
