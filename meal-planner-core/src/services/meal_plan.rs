//! The weekly meal plan: seven days of breakfast, lunch and dinner.

use std::sync::Arc;

use crate::error::{PlannerError, PlannerResult};
use crate::models::{Day, MealPlan, MealType, Recipe};
use crate::storage::{KeyValueStore, StorageKey};

use super::{load_or_default, save};

/// Service that owns the persisted weekly plan.
#[derive(Clone)]
pub struct MealPlanModel {
    store: Arc<dyn KeyValueStore>,
}

impl MealPlanModel {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Current plan; an all-empty plan if none has been saved yet.
    pub fn get(&self) -> MealPlan {
        load_or_default(self.store.as_ref(), StorageKey::MealPlan)
    }

    /// Plan `recipe` for a slot, replacing any recipe already there.
    ///
    /// The slot keeps its own copy, so later edits to `recipe` do not
    /// reach the plan.
    pub fn set_meal(&self, day: &str, meal_type: &str, recipe: &Recipe) -> PlannerResult<()> {
        let (day, meal_type) = parse_slot(day, meal_type)?;

        let mut plan = self.get();
        plan.set(day, meal_type, recipe);
        self.save(&plan)?;

        tracing::debug!("Planned recipe {} for {} {}", recipe.id, day, meal_type);
        Ok(())
    }

    /// Empty a slot.
    ///
    /// Returns `Ok(true)` if a recipe was removed. An unknown day or meal
    /// type, or a slot that was already empty, is a no-op returning
    /// `Ok(false)`.
    pub fn clear_meal(&self, day: &str, meal_type: &str) -> PlannerResult<bool> {
        let (day, meal_type) = match parse_slot(day, meal_type) {
            Ok(slot) => slot,
            Err(e) => {
                tracing::debug!("Ignoring clear: {}", e);
                return Ok(false);
            }
        };

        let mut plan = self.get();
        if plan.clear(day, meal_type).is_none() {
            return Ok(false);
        }
        self.save(&plan)?;
        Ok(true)
    }

    /// Reset every slot to empty.
    pub fn clear_all(&self) -> PlannerResult<()> {
        self.save(&MealPlan::new())
    }

    /// Filled slots as `(day, meal type, recipe)`, Monday breakfast first.
    pub fn list_meals(&self) -> Vec<(Day, MealType, Recipe)> {
        self.get()
            .meals()
            .map(|m| (m.day, m.meal_type, m.recipe.clone()))
            .collect()
    }

    /// Replace the whole plan with `recipes` laid out in slot order.
    ///
    /// The previous plan is discarded first. Extra recipes beyond 21 are
    /// ignored and slots beyond the last recipe stay empty. Returns the
    /// number of slots filled.
    pub fn auto_generate(&self, recipes: &[Recipe]) -> PlannerResult<usize> {
        let mut plan = MealPlan::new();
        let mut filled = 0;
        for ((day, meal_type), recipe) in MealPlan::slots().zip(recipes) {
            plan.set(day, meal_type, recipe);
            filled += 1;
        }
        self.save(&plan)?;

        tracing::debug!("Generated meal plan with {} meal(s)", filled);
        Ok(filled)
    }

    fn save(&self, plan: &MealPlan) -> PlannerResult<()> {
        save(self.store.as_ref(), StorageKey::MealPlan, plan)
    }
}

fn parse_slot(day: &str, meal_type: &str) -> PlannerResult<(Day, MealType)> {
    let day: Day = day
        .parse()
        .map_err(|_| PlannerError::InvalidDay(day.to_string()))?;
    let meal_type: MealType = meal_type
        .parse()
        .map_err(|_| PlannerError::InvalidMealType(meal_type.to_string()))?;
    Ok((day, meal_type))
}
