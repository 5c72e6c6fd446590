use clap::{Args, Subcommand};

use crate::app::App;
use crate::commands::OutputFormat;

#[derive(Args)]
pub struct RecipeCommand {
    #[command(subcommand)]
    pub command: RecipeSubcommand,
}

#[derive(Subcommand)]
pub enum RecipeSubcommand {
    /// Search recipes by title
    Search {
        /// Text to look for in recipe titles
        query: String,

        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Show a recipe's details
    Show {
        /// Recipe ID
        id: u64,

        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// List recent searches
    Recent {
        /// Forget all recent searches instead
        #[arg(long)]
        clear: bool,
    },
}

impl RecipeCommand {
    pub fn run(&self, app: &App) -> Result<(), Box<dyn std::error::Error>> {
        match &self.command {
            RecipeSubcommand::Search { query, format } => {
                let preferences = app.preferences.get();
                let results = app.catalog.search(query, &preferences);

                // Searches are remembered even when nothing matches
                app.searches.record(query)?;

                match format {
                    OutputFormat::Json => {
                        println!("{}", serde_json::to_string_pretty(&results)?);
                    }
                    OutputFormat::Text => {
                        if results.is_empty() {
                            println!("No recipes found for '{}'", query);
                            return Ok(());
                        }
                        for recipe in &results {
                            let star = if app.favorites.contains(recipe.id) {
                                "*"
                            } else {
                                " "
                            };
                            match recipe.ready_in_minutes {
                                Some(minutes) => println!(
                                    "{} {:>8}  {} ({} min)",
                                    star, recipe.id, recipe.title, minutes
                                ),
                                None => println!("{} {:>8}  {}", star, recipe.id, recipe.title),
                            }
                        }
                        println!("\nTotal: {} recipe(s)", results.len());
                    }
                }
                Ok(())
            }

            RecipeSubcommand::Show { id, format } => {
                let recipe = app.recipe(*id)?;
                match format {
                    OutputFormat::Json => {
                        println!("{}", serde_json::to_string_pretty(&recipe)?);
                    }
                    OutputFormat::Text => {
                        print!("{}", recipe);
                        if app.favorites.contains(recipe.id) {
                            println!("\n* In favorites");
                        }
                    }
                }
                Ok(())
            }

            RecipeSubcommand::Recent { clear } => {
                if *clear {
                    app.searches.clear()?;
                    println!("Cleared recent searches");
                    return Ok(());
                }

                let searches = app.searches.list();
                if searches.is_empty() {
                    println!("No recent searches");
                } else {
                    for query in searches {
                        println!("  {}", query);
                    }
                }
                Ok(())
            }
        }
    }
}
