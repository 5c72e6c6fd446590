//! Calorie totals for the weekly plan.

use serde::Serialize;

use crate::models::{Day, MealPlan};

/// Calorie overview of a plan.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PlanNutritionSummary {
    pub planned_meals: usize,
    pub total_calories: f64,
    /// Calories per day, Monday first
    pub daily_calories: Vec<(Day, f64)>,
    /// Mean over days with at least one planned meal
    pub average_daily_calories: f64,
}

/// Sum calories across the plan. Recipes without nutrition count as zero.
pub fn summarize_plan(plan: &MealPlan) -> PlanNutritionSummary {
    let mut daily_calories = Vec::with_capacity(Day::ALL.len());
    let mut planned_days = 0;

    for day in Day::ALL {
        let meals = plan.day(day);
        if !meals.is_empty() {
            planned_days += 1;
        }
        let calories: f64 = [&meals.breakfast, &meals.lunch, &meals.dinner]
            .into_iter()
            .flatten()
            .filter_map(|recipe| recipe.calories())
            .sum();
        daily_calories.push((day, calories));
    }

    let total_calories: f64 = daily_calories.iter().map(|(_, c)| c).sum();
    let average_daily_calories = if planned_days > 0 {
        total_calories / planned_days as f64
    } else {
        0.0
    };

    PlanNutritionSummary {
        planned_meals: plan.meal_count(),
        total_calories,
        daily_calories,
        average_daily_calories,
    }
}
