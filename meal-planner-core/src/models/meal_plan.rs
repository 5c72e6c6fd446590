use serde::{Deserialize, Serialize};
use std::fmt;

use super::day::Day;
use super::meal_type::MealType;
use super::recipe::Recipe;

/// The three meal slots of one day.
///
/// A slot holds its own copy of the recipe taken when it was planned.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DayMeals {
    pub breakfast: Option<Recipe>,
    pub lunch: Option<Recipe>,
    pub dinner: Option<Recipe>,
}

impl DayMeals {
    pub fn slot(&self, meal_type: MealType) -> Option<&Recipe> {
        match meal_type {
            MealType::Breakfast => self.breakfast.as_ref(),
            MealType::Lunch => self.lunch.as_ref(),
            MealType::Dinner => self.dinner.as_ref(),
        }
    }

    pub fn slot_mut(&mut self, meal_type: MealType) -> &mut Option<Recipe> {
        match meal_type {
            MealType::Breakfast => &mut self.breakfast,
            MealType::Lunch => &mut self.lunch,
            MealType::Dinner => &mut self.dinner,
        }
    }

    pub fn is_empty(&self) -> bool {
        MealType::ALL.iter().all(|m| self.slot(*m).is_none())
    }
}

impl fmt::Display for DayMeals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for meal_type in MealType::ALL {
            match self.slot(meal_type) {
                Some(recipe) => writeln!(f, "  {:10} {} (#{})", meal_type, recipe.title, recipe.id)?,
                None => writeln!(f, "  {:10} -", meal_type)?,
            }
        }
        Ok(())
    }
}

/// A week of meals: seven days with breakfast, lunch and dinner each.
///
/// All 21 slots exist by construction. Records persisted with days or
/// slots missing load with those slots empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MealPlan {
    pub monday: DayMeals,
    pub tuesday: DayMeals,
    pub wednesday: DayMeals,
    pub thursday: DayMeals,
    pub friday: DayMeals,
    pub saturday: DayMeals,
    pub sunday: DayMeals,
}

/// A filled slot yielded while walking the plan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlannedMeal<'a> {
    pub day: Day,
    pub meal_type: MealType,
    pub recipe: &'a Recipe,
}

impl MealPlan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn day(&self, day: Day) -> &DayMeals {
        match day {
            Day::Monday => &self.monday,
            Day::Tuesday => &self.tuesday,
            Day::Wednesday => &self.wednesday,
            Day::Thursday => &self.thursday,
            Day::Friday => &self.friday,
            Day::Saturday => &self.saturday,
            Day::Sunday => &self.sunday,
        }
    }

    pub fn day_mut(&mut self, day: Day) -> &mut DayMeals {
        match day {
            Day::Monday => &mut self.monday,
            Day::Tuesday => &mut self.tuesday,
            Day::Wednesday => &mut self.wednesday,
            Day::Thursday => &mut self.thursday,
            Day::Friday => &mut self.friday,
            Day::Saturday => &mut self.saturday,
            Day::Sunday => &mut self.sunday,
        }
    }

    pub fn get(&self, day: Day, meal_type: MealType) -> Option<&Recipe> {
        self.day(day).slot(meal_type)
    }

    /// Put a copy of `recipe` in the slot, replacing whatever was there.
    pub fn set(&mut self, day: Day, meal_type: MealType, recipe: &Recipe) {
        *self.day_mut(day).slot_mut(meal_type) = Some(recipe.clone());
    }

    /// Empty the slot. Returns the recipe it held, if any.
    pub fn clear(&mut self, day: Day, meal_type: MealType) -> Option<Recipe> {
        self.day_mut(day).slot_mut(meal_type).take()
    }

    /// All 21 slots in walking order: Monday to Sunday, breakfast to dinner.
    pub fn slots() -> impl Iterator<Item = (Day, MealType)> {
        Day::ALL
            .into_iter()
            .flat_map(|day| MealType::ALL.into_iter().map(move |meal| (day, meal)))
    }

    /// Filled slots in walking order.
    pub fn meals(&self) -> impl Iterator<Item = PlannedMeal<'_>> {
        Self::slots().filter_map(move |(day, meal_type)| {
            self.get(day, meal_type).map(|recipe| PlannedMeal {
                day,
                meal_type,
                recipe,
            })
        })
    }

    pub fn meal_count(&self) -> usize {
        self.meals().count()
    }

    pub fn is_empty(&self) -> bool {
        Day::ALL.iter().all(|d| self.day(*d).is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_plan_has_21_empty_slots() {
        let plan = MealPlan::new();
        assert_eq!(MealPlan::slots().count(), 21);
        assert!(MealPlan::slots().all(|(d, m)| plan.get(d, m).is_none()));
        assert!(plan.is_empty());
    }

    #[test]
    fn test_slots_walk_day_major() {
        let slots: Vec<_> = MealPlan::slots().take(4).collect();
        assert_eq!(
            slots,
            vec![
                (Day::Monday, MealType::Breakfast),
                (Day::Monday, MealType::Lunch),
                (Day::Monday, MealType::Dinner),
                (Day::Tuesday, MealType::Breakfast),
            ]
        );
    }

    #[test]
    fn test_set_stores_a_copy() {
        let mut plan = MealPlan::new();
        let mut recipe = Recipe::new(1, "Pancakes");
        plan.set(Day::Monday, MealType::Breakfast, &recipe);

        recipe.title = "Waffles".to_string();
        assert_eq!(
            plan.get(Day::Monday, MealType::Breakfast).unwrap().title,
            "Pancakes"
        );
    }

    #[test]
    fn test_clear_returns_previous() {
        let mut plan = MealPlan::new();
        plan.set(Day::Friday, MealType::Dinner, &Recipe::new(9, "Pizza"));

        let removed = plan.clear(Day::Friday, MealType::Dinner);
        assert_eq!(removed.map(|r| r.id), Some(9));
        assert!(plan.clear(Day::Friday, MealType::Dinner).is_none());
    }

    #[test]
    fn test_meals_skips_empty_slots() {
        let mut plan = MealPlan::new();
        plan.set(Day::Sunday, MealType::Lunch, &Recipe::new(2, "Roast"));
        plan.set(Day::Monday, MealType::Dinner, &Recipe::new(1, "Stew"));

        let meals: Vec<_> = plan.meals().map(|m| (m.day, m.meal_type, m.recipe.id)).collect();
        assert_eq!(
            meals,
            vec![
                (Day::Monday, MealType::Dinner, 1),
                (Day::Sunday, MealType::Lunch, 2),
            ]
        );
        assert_eq!(plan.meal_count(), 2);
    }

    #[test]
    fn test_day_meals_display() {
        let mut plan = MealPlan::new();
        plan.set(Day::Monday, MealType::Lunch, &Recipe::new(3, "Wrap"));

        assert_eq!(
            plan.day(Day::Monday).to_string(),
            "  breakfast  -\n  lunch      Wrap (#3)\n  dinner     -\n"
        );
    }

    #[test]
    fn test_partial_record_fills_missing_slots() {
        let json = r#"{"tuesday": {"lunch": {"id": 5, "title": "Salad"}}}"#;
        let plan: MealPlan = serde_json::from_str(json).unwrap();

        assert_eq!(plan.get(Day::Tuesday, MealType::Lunch).unwrap().id, 5);
        assert_eq!(plan.meal_count(), 1);
    }

    #[test]
    fn test_serialized_shape() {
        let mut plan = MealPlan::new();
        plan.set(Day::Monday, MealType::Lunch, &Recipe::new(3, "Wrap"));
        let value = serde_json::to_value(&plan).unwrap();

        assert_eq!(value["monday"]["lunch"]["id"], 3);
        assert!(value["monday"]["breakfast"].is_null());
        assert!(value["sunday"]["dinner"].is_null());
    }
}
