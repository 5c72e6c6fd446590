use clap::{Args, Subcommand};

use crate::app::App;
use crate::commands::OutputFormat;

#[derive(Args)]
pub struct FavoriteCommand {
    #[command(subcommand)]
    pub command: FavoriteSubcommand,
}

#[derive(Subcommand)]
pub enum FavoriteSubcommand {
    /// List favorite recipes
    List {
        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Save a catalog recipe as a favorite
    Add {
        /// Recipe ID
        id: u64,
    },

    /// Remove a favorite
    Remove {
        /// Recipe ID
        id: u64,
    },

    /// Remove all favorites
    Clear,
}

impl FavoriteCommand {
    pub fn run(&self, app: &App) -> Result<(), Box<dyn std::error::Error>> {
        match &self.command {
            FavoriteSubcommand::List { format } => {
                let favorites = app.favorites.list();
                match format {
                    OutputFormat::Json => {
                        println!("{}", serde_json::to_string_pretty(&favorites)?);
                    }
                    OutputFormat::Text => {
                        if favorites.is_empty() {
                            println!("No favorites yet.");
                            return Ok(());
                        }
                        for favorite in &favorites {
                            println!(
                                "{:>8}  {:<40} added {}",
                                favorite.recipe.id,
                                favorite.recipe.title,
                                favorite.added_at.format("%Y-%m-%d")
                            );
                        }
                        println!("\nTotal: {} favorite(s)", favorites.len());
                    }
                }
                Ok(())
            }

            FavoriteSubcommand::Add { id } => {
                let recipe = app.recipe(*id)?;
                if app.favorites.add(&recipe)? {
                    println!("Added '{}' to favorites", recipe.title);
                } else {
                    println!("'{}' is already a favorite", recipe.title);
                }
                Ok(())
            }

            FavoriteSubcommand::Remove { id } => {
                if app.favorites.remove(*id)? {
                    println!("Removed recipe {} from favorites", id);
                    Ok(())
                } else {
                    Err(format!("Recipe {} is not a favorite", id).into())
                }
            }

            FavoriteSubcommand::Clear => {
                app.favorites.clear()?;
                println!("Cleared favorites");
                Ok(())
            }
        }
    }
}
