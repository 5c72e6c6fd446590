use chrono::{Datelike, Local, Weekday};
use clap::{Args, Subcommand};
use rand::seq::SliceRandom;

use meal_planner_core::{summarize_plan, Day, MealPlan, MealType, Recipe};

use crate::app::App;
use crate::commands::OutputFormat;

#[derive(Args)]
pub struct PlanCommand {
    #[command(subcommand)]
    pub command: PlanSubcommand,
}

#[derive(Subcommand)]
pub enum PlanSubcommand {
    /// Show the weekly plan
    Show {
        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Put a recipe in a slot, replacing what is there
    Set {
        /// Day (monday .. sunday)
        day: String,

        /// Meal type (breakfast, lunch, dinner)
        meal_type: String,

        /// Recipe ID
        recipe_id: u64,
    },

    /// Empty a slot
    Clear {
        /// Day (monday .. sunday)
        day: String,

        /// Meal type (breakfast, lunch, dinner)
        meal_type: String,
    },

    /// Empty every slot
    ClearAll,

    /// Replace the plan by filling slots in order
    Auto {
        /// Recipe IDs to use, in order (defaults to the whole catalog)
        recipe_ids: Vec<u64>,

        /// Use favorites instead of the catalog when no IDs are given
        #[arg(long)]
        favorites: bool,

        /// Shuffle the recipes before filling
        #[arg(long)]
        shuffle: bool,
    },

    /// Show calorie totals for the plan
    Nutrition {
        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },
}

impl PlanCommand {
    pub fn run(&self, app: &App) -> Result<(), Box<dyn std::error::Error>> {
        match &self.command {
            PlanSubcommand::Show { format } => {
                let plan = app.plan.get();
                match format {
                    OutputFormat::Json => {
                        println!("{}", serde_json::to_string_pretty(&plan)?);
                    }
                    OutputFormat::Text => print_plan(&plan, today()),
                }
                Ok(())
            }

            PlanSubcommand::Set {
                day,
                meal_type,
                recipe_id,
            } => {
                let recipe = app.recipe(*recipe_id)?;
                app.plan.set_meal(day, meal_type, &recipe)?;
                println!("Planned '{}' for {} {}", recipe.title, day, meal_type);
                Ok(())
            }

            PlanSubcommand::Clear { day, meal_type } => {
                // The model ignores unknown names; report them here instead
                day.parse::<Day>()?;
                meal_type.parse::<MealType>()?;

                if app.plan.clear_meal(day, meal_type)? {
                    println!("Cleared {} {}", day, meal_type);
                } else {
                    println!("{} {} was already empty", day, meal_type);
                }
                Ok(())
            }

            PlanSubcommand::ClearAll => {
                app.plan.clear_all()?;
                println!("Cleared meal plan");
                Ok(())
            }

            PlanSubcommand::Auto {
                recipe_ids,
                favorites,
                shuffle,
            } => {
                let mut candidates = candidate_recipes(app, recipe_ids, *favorites)?;
                if *shuffle {
                    candidates.shuffle(&mut rand::rng());
                }

                let filled = app.plan.auto_generate(&candidates)?;
                println!("Generated meal plan with {} of 21 meal(s)", filled);
                Ok(())
            }

            PlanSubcommand::Nutrition { format } => {
                let summary = summarize_plan(&app.plan.get());
                match format {
                    OutputFormat::Json => {
                        println!("{}", serde_json::to_string_pretty(&summary)?);
                    }
                    OutputFormat::Text => {
                        println!("Weekly Nutrition");
                        println!("{}", "=".repeat(30));
                        for (day, calories) in &summary.daily_calories {
                            println!("  {:10} {:>8.0} kcal", day, calories);
                        }
                        println!("{}", "-".repeat(30));
                        println!("  {:10} {:>8.0} kcal", "total", summary.total_calories);
                        println!(
                            "  {:10} {:>8.0} kcal",
                            "daily avg", summary.average_daily_calories
                        );
                        println!("\n{} meal(s) planned", summary.planned_meals);
                    }
                }
                Ok(())
            }
        }
    }
}

fn print_plan(plan: &MealPlan, today: Day) {
    for day in Day::ALL {
        if day == today {
            println!("{} (today)", day);
        } else {
            println!("{}", day);
        }
        println!("{}", "-".repeat(10));
        print!("{}", plan.day(day));
    }
    println!("\nTotal: {} of 21 meal(s) planned", plan.meal_count());
}

fn today() -> Day {
    weekday_to_day(Local::now().weekday())
}

fn weekday_to_day(weekday: Weekday) -> Day {
    match weekday {
        Weekday::Mon => Day::Monday,
        Weekday::Tue => Day::Tuesday,
        Weekday::Wed => Day::Wednesday,
        Weekday::Thu => Day::Thursday,
        Weekday::Fri => Day::Friday,
        Weekday::Sat => Day::Saturday,
        Weekday::Sun => Day::Sunday,
    }
}

/// Recipes to fill the plan with, in the order they should be used.
fn candidate_recipes(
    app: &App,
    recipe_ids: &[u64],
    from_favorites: bool,
) -> Result<Vec<Recipe>, Box<dyn std::error::Error>> {
    if !recipe_ids.is_empty() {
        return recipe_ids.iter().map(|id| app.recipe(*id)).collect();
    }

    let preferences = app.preferences.get();
    let recipes: Vec<Recipe> = if from_favorites {
        app.favorites.list().into_iter().map(|f| f.recipe).collect()
    } else {
        app.catalog.recipes().to_vec()
    };

    Ok(recipes
        .into_iter()
        .filter(|r| preferences.allows(r))
        .collect())
}
