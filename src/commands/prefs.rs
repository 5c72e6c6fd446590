use clap::{Args, Subcommand};

use meal_planner_core::Preferences;

use crate::app::App;
use crate::commands::OutputFormat;

#[derive(Args)]
pub struct PrefsCommand {
    #[command(subcommand)]
    pub command: PrefsSubcommand,
}

#[derive(Subcommand)]
pub enum PrefsSubcommand {
    /// Show saved preferences
    Show {
        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Update preferences; options left out keep their saved value
    Set {
        /// Diet, e.g. "vegetarian"
        #[arg(long)]
        diet: Option<String>,

        /// Intolerance to exclude (repeatable, replaces the saved list)
        #[arg(long = "intolerance")]
        intolerances: Vec<String>,

        /// Maximum preparation time in minutes
        #[arg(long)]
        max_ready: Option<u32>,
    },

    /// Forget all preferences
    Reset,
}

impl PrefsCommand {
    pub fn run(&self, app: &App) -> Result<(), Box<dyn std::error::Error>> {
        match &self.command {
            PrefsSubcommand::Show { format } => {
                let prefs = app.preferences.get();
                match format {
                    OutputFormat::Json => {
                        println!("{}", serde_json::to_string_pretty(&prefs)?);
                    }
                    OutputFormat::Text => print_preferences(&prefs),
                }
                Ok(())
            }

            PrefsSubcommand::Set {
                diet,
                intolerances,
                max_ready,
            } => {
                let prefs = apply_changes(
                    app.preferences.get(),
                    diet.clone(),
                    intolerances,
                    *max_ready,
                );
                app.preferences.set(&prefs)?;
                print_preferences(&prefs);
                Ok(())
            }

            PrefsSubcommand::Reset => {
                app.preferences.reset()?;
                println!("Preferences reset");
                Ok(())
            }
        }
    }
}

fn apply_changes(
    mut prefs: Preferences,
    diet: Option<String>,
    intolerances: &[String],
    max_ready: Option<u32>,
) -> Preferences {
    if let Some(diet) = diet {
        prefs.diet = Some(diet).filter(|d| !d.trim().is_empty());
    }
    if !intolerances.is_empty() {
        prefs.intolerances = intolerances.to_vec();
    }
    if max_ready.is_some() {
        prefs.max_ready_minutes = max_ready;
    }
    prefs
}

fn print_preferences(prefs: &Preferences) {
    println!("diet: {}", prefs.diet.as_deref().unwrap_or("-"));
    if prefs.intolerances.is_empty() {
        println!("intolerances: -");
    } else {
        println!("intolerances: {}", prefs.intolerances.join(", "));
    }
    match prefs.max_ready_minutes {
        Some(minutes) => println!("max ready time: {} min", minutes),
        None => println!("max ready time: -"),
    }
}
